//! State of the album detail overlay.
//!
//! The overlay is the selection sink: it opens on a tap, lets the user page
//! through the album's images and reports back once its exit transition has
//! run, at which point the app clears the selection and the globe resumes.

use crate::album::Album;
use crate::constants::{AVATAR_FALLBACK_URL, DETAIL_DEFAULT_IMAGE_URL, OVERLAY_EXIT_MS};
use instant::Instant;
use std::time::Duration;

pub const NO_MESSAGE_TEXT: &str = "No message attached, just pure joy!";
pub const ANONYMOUS_AUTHOR: &str = "Anonymous Joy";
pub const UNKNOWN_TIMESTAMP: &str = "Recently";

/// Image pager over an album. Never empty: albums without images show the
/// default picture.
#[derive(Clone, Debug, PartialEq)]
pub struct Carousel {
    images: Vec<String>,
    index: usize,
}

impl Carousel {
    pub fn for_album(album: &Album) -> Self {
        let images = if album.images.is_empty() {
            vec![DETAIL_DEFAULT_IMAGE_URL.to_string()]
        } else {
            album.images.clone()
        };
        Self { images, index: 0 }
    }

    pub fn current(&self) -> &str {
        &self.images[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Arrows and dots only make sense with more than one image.
    pub fn has_navigation(&self) -> bool {
        self.images.len() > 1
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.images.len();
    }

    pub fn prev(&mut self) {
        let n = self.images.len();
        self.index = (self.index + n - 1) % n;
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self {
            images: vec![DETAIL_DEFAULT_IMAGE_URL.to_string()],
            index: 0,
        }
    }
}

/// Text and images for the overlay card, with fallbacks applied.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailCard {
    pub author: String,
    pub avatar_url: String,
    pub timestamp: String,
    pub message: String,
    pub has_message: bool,
    pub category: &'static str,
}

impl DetailCard {
    pub fn for_album(album: &Album) -> Self {
        let non_empty = |s: &str, fallback: &str| {
            if s.is_empty() {
                fallback.to_string()
            } else {
                s.to_string()
            }
        };
        let (message, has_message) = match album.message.as_deref() {
            Some(m) if !m.is_empty() => (format!("\u{201c}{}\u{201d}", m), true),
            _ => (NO_MESSAGE_TEXT.to_string(), false),
        };
        Self {
            author: non_empty(&album.author, ANONYMOUS_AUTHOR),
            avatar_url: non_empty(&album.avatar_url, AVATAR_FALLBACK_URL),
            timestamp: non_empty(&album.timestamp, UNKNOWN_TIMESTAMP),
            message,
            has_message,
            category: album.category.label(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverlayPhase {
    Hidden,
    Open,
    Closing { since: Instant },
}

#[derive(Clone, Debug)]
pub struct DetailOverlay {
    album_index: Option<usize>,
    carousel: Carousel,
    phase: OverlayPhase,
}

impl Default for DetailOverlay {
    fn default() -> Self {
        Self {
            album_index: None,
            carousel: Carousel::default(),
            phase: OverlayPhase::Hidden,
        }
    }
}

impl DetailOverlay {
    pub fn open(&mut self, album_index: usize, album: &Album) {
        self.album_index = Some(album_index);
        self.carousel = Carousel::for_album(album);
        self.phase = OverlayPhase::Open;
        log::info!("[overlay] open album {} ({})", album.id, album.author);
    }

    pub fn album_index(&self) -> Option<usize> {
        self.album_index
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase == OverlayPhase::Open
    }

    /// Start the exit transition. Ignored unless the overlay is open.
    pub fn request_close(&mut self, now: Instant) -> bool {
        if self.phase != OverlayPhase::Open {
            return false;
        }
        self.phase = OverlayPhase::Closing { since: now };
        true
    }

    /// Returns true exactly once, when the exit transition has finished and
    /// the selection should be cleared.
    pub fn poll_closed(&mut self, now: Instant) -> bool {
        match self.phase {
            OverlayPhase::Closing { since }
                if now >= since
                    && now.duration_since(since) >= Duration::from_millis(OVERLAY_EXIT_MS) =>
            {
                self.phase = OverlayPhase::Hidden;
                self.album_index = None;
                log::info!("[overlay] closed");
                true
            }
            _ => false,
        }
    }
}
