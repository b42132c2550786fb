//! Album records and the embedded default collection.
//!
//! Albums are loaded once at startup and never mutated afterwards. Image
//! references are opaque strings; nothing here fetches or validates them.

use crate::constants::THUMBNAIL_FALLBACK_URL;
use fnv::FnvHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static DEFAULT_ALBUMS_JSON: &str = include_str!("../data/albums.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Shoutout,
    Event,
    Classroom,
    Funny,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Shoutout => "shoutout",
            Category::Event => "event",
            Category::Classroom => "classroom",
            Category::Funny => "funny",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: String,
    pub author: String,
    pub avatar_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub timestamp: String,
    pub category: Category,
}

impl Album {
    /// Thumbnail shown on the globe: the first image, or the placeholder.
    pub fn cover(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(THUMBNAIL_FALLBACK_URL)
    }
}

#[derive(Debug, Error)]
pub enum AlbumError {
    #[error("malformed album data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate album id {0:?}")]
    DuplicateId(String),
}

/// Parse a JSON array of albums. Ids must be unique since the renderer keys
/// its elements by them.
pub fn parse_albums(json: &str) -> Result<Vec<Album>, AlbumError> {
    let albums: Vec<Album> = serde_json::from_str(json)?;
    let mut seen = FnvHashSet::default();
    for album in &albums {
        if !seen.insert(album.id.as_str()) {
            return Err(AlbumError::DuplicateId(album.id.clone()));
        }
    }
    Ok(albums)
}

/// The bundled staff collage.
pub fn default_albums() -> Result<Vec<Album>, AlbumError> {
    let albums = parse_albums(DEFAULT_ALBUMS_JSON)?;
    log::debug!("[albums] loaded {} default albums", albums.len());
    Ok(albums)
}
