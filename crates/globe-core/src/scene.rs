//! Presentation view-model: everything the renderer needs that is not the
//! per-album projection. Pure functions of album data and rotation.

use crate::album::{Album, Category};
use crate::constants::*;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeTier {
    Small,
    Medium,
    Large,
}

impl SizeTier {
    pub fn for_image_count(count: usize) -> Self {
        match count {
            n if n >= 3 => SizeTier::Large,
            2 => SizeTier::Medium,
            _ => SizeTier::Small,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            SizeTier::Small => "thumb-sm",
            SizeTier::Medium => "thumb-md",
            SizeTier::Large => "thumb-lg",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Blue,
    Gold,
}

impl Theme {
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Classroom | Category::Shoutout => Theme::Blue,
            Category::Event | Category::Funny => Theme::Gold,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Blue => "theme-blue",
            Theme::Gold => "theme-gold",
        }
    }

    pub fn tether_color(self) -> &'static str {
        match self {
            Theme::Blue => "rgba(59, 130, 246, 0.6)",
            Theme::Gold => "rgba(251, 191, 36, 0.6)",
        }
    }

    pub fn tether_glow(self) -> &'static str {
        match self {
            Theme::Blue => "0 0 8px rgba(59, 130, 246, 0.8)",
            Theme::Gold => "0 0 8px rgba(245, 158, 11, 0.8)",
        }
    }
}

/// Static per-album styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThumbnailStyle {
    pub size: SizeTier,
    pub theme: Theme,
}

impl ThumbnailStyle {
    pub fn for_album(album: &Album) -> Self {
        Self {
            size: SizeTier::for_image_count(album.images.len()),
            theme: Theme::for_category(album.category),
        }
    }
}

/// Rotation-driven offsets of the decorative layers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecorFrame {
    /// Background-position x of the sphere texture, percent.
    pub surface_pan_pct: f32,
    pub cloud_pan_pct: f32,
    pub cloud_spin_deg: f32,
    pub ring_spin_deg: f32,
}

impl DecorFrame {
    pub fn at(rotation: f32) -> Self {
        let deg = rotation.to_degrees();
        let turns = deg / 360.0;
        Self {
            surface_pan_pct: -turns * SURFACE_PAN_PERCENT,
            cloud_pan_pct: -turns * CLOUD_PAN_PERCENT,
            cloud_spin_deg: deg * CLOUD_SPIN_FACTOR,
            ring_spin_deg: deg,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingGlyph {
    pub ch: char,
    pub angle_deg: f32,
}

/// Characters of the text ring, evenly spaced around the sphere.
pub fn ring_glyphs(text: &str) -> Vec<RingGlyph> {
    let count = text.chars().count();
    if count == 0 {
        return Vec::new();
    }
    let step = 360.0 / count as f32;
    text.chars()
        .enumerate()
        .map(|(i, ch)| RingGlyph {
            ch,
            angle_deg: i as f32 * step,
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub left_pct: f32,
    pub top_pct: f32,
    pub width_px: f32,
    pub height_px: f32,
    pub delay_sec: f32,
    pub opacity: f32,
}

/// Twinkling background stars. Seeded so the sky is stable across reloads.
pub fn starfield(count: usize, seed: u64) -> Vec<Star> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Star {
            left_pct: rng.gen::<f32>() * 100.0,
            top_pct: rng.gen::<f32>() * 100.0,
            width_px: rng.gen::<f32>() * 3.0 + 1.0,
            height_px: rng.gen::<f32>() * 3.0 + 1.0,
            delay_sec: rng.gen::<f32>() * 5.0,
            opacity: rng.gen::<f32>() * 0.7 + 0.3,
        })
        .collect()
}
