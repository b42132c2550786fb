// Shared geometry and interaction tuning constants used by the web frontend.

// Globe geometry (CSS pixels)
pub const TILT_DEG: f32 = 12.0; // axial tilt of the globe, applied around the screen-depth axis
pub const ORBIT_RADIUS: f32 = 300.0; // radius at which thumbnails float
pub const SURFACE_RADIUS: f32 = 100.0; // visual radius of the sphere; half its CSS width
pub const PERSPECTIVE: f32 = 1000.0; // viewer distance used by the perspective divide

// Depth policy (post-tilt z on the unit sphere)
pub const BEHIND_Z: f32 = -0.1; // below this a thumbnail starts to fade
pub const HIDDEN_Z: f32 = -0.4; // below this a thumbnail is not rendered at all
pub const OPACITY_FADE_RATE: f32 = 2.0; // opacity = 1 + rate * z once behind
pub const Z_INDEX_BASE: i32 = 50; // stacking order of the sphere itself
pub const Z_INDEX_DEPTH_SPAN: f32 = 40.0; // stacking spread across the depth range

// Presentation thresholds
pub const TETHER_MIN_OPACITY: f32 = 0.05; // fainter tethers are skipped
pub const TETHER_OPACITY_FACTOR: f32 = 0.6; // tether opacity relative to its thumbnail
pub const LABEL_MIN_SCALE: f32 = 0.8; // author label only on near-enough thumbnails

// Motion
pub const AUTOPLAY_STEP_RAD: f32 = 0.008; // rotation per animation frame
pub const DRAG_SENSITIVITY: f32 = -0.005; // radians per horizontal pixel dragged
pub const TAP_MAX_TRAVEL_PX: f32 = 10.0; // per-axis travel below which a release is a tap

// Decorative ring and parallax
pub const RING_TEXT: &str = "UNCOMMON EXCELLENCE GIRLS  \u{2605}  ";
pub const RING_RADIUS_PX: f32 = 165.0;
pub const SURFACE_PAN_PERCENT: f32 = 100.0; // background pan per full turn
pub const CLOUD_PAN_PERCENT: f32 = 120.0;
pub const CLOUD_SPIN_FACTOR: f32 = 1.1;

// Starfield
pub const STAR_COUNT: usize = 100;
pub const STAR_SEED: u64 = 42;
pub const SHOOTING_STARS: [ShootingStar; 3] = [
    ShootingStar { top_pct: 20.0, left_pct: 10.0, delay_sec: 0.0 },
    ShootingStar { top_pct: 10.0, left_pct: 60.0, delay_sec: 5.0 },
    ShootingStar { top_pct: 70.0, left_pct: 20.0, delay_sec: 8.0 },
];

// Detail overlay
pub const OVERLAY_EXIT_MS: u64 = 300; // exit transition before the selection clears

// Fallback image references
pub const THUMBNAIL_FALLBACK_URL: &str = "https://via.placeholder.com/150/1e3a8a/FFFFFF?text=Joy";
pub const DETAIL_DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1529333166437-7750a6dd5a70?q=80&w=1000&auto=format&fit=crop";
pub const AVATAR_FALLBACK_URL: &str = "https://ui-avatars.com/api/?name=Joy";

/// Fixed placement of a shooting-star streak, in viewport percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShootingStar {
    pub top_pct: f32,
    pub left_pct: f32,
    pub delay_sec: f32,
}

#[inline]
pub fn tilt_rad() -> f32 {
    TILT_DEG.to_radians()
}
