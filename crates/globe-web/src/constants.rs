// DOM ids and copy used by the web frontend.

// Element ids
pub const ROOT_ID: &str = "joy-root";
pub const STAGE_ID: &str = "globe-stage";
pub const TAP_HINT_ID: &str = "tap-hint";

pub const OVERLAY_ID: &str = "album-overlay";
pub const OVERLAY_CARD_ID: &str = "album-card";
pub const OVERLAY_CLOSE_ID: &str = "album-close";
pub const OVERLAY_AVATAR_ID: &str = "album-avatar";
pub const OVERLAY_AUTHOR_ID: &str = "album-author";
pub const OVERLAY_TIMESTAMP_ID: &str = "album-timestamp";
pub const OVERLAY_IMAGE_ID: &str = "album-image";
pub const OVERLAY_PREV_ID: &str = "album-prev";
pub const OVERLAY_NEXT_ID: &str = "album-next";
pub const OVERLAY_DOTS_ID: &str = "album-dots";
pub const OVERLAY_MESSAGE_ID: &str = "album-message";
pub const OVERLAY_CATEGORY_ID: &str = "album-category";

// Header copy
pub const TITLE_ACCENT: &str = "Uncommon";
pub const TITLE_MAIN: &str = "Joy";
pub const SUBTITLE: &str = "Staff Collage 2024";
pub const TAP_HINT: &str = "Tap a moment to expand";
pub const FOOTER_BRAND: &str = "Uncommon Joy";
pub const LOGO_URL: &str = "https://cdn-icons-png.flaticon.com/512/2826/2826555.png";

// Sphere texture
pub const SURFACE_TEXTURE_URL: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/c/c3/Solarsystemscope_texture_8k_earth_daymap.jpg/600px-Solarsystemscope_texture_8k_earth_daymap.jpg";
pub const CLOUD_TEXTURE_URL: &str = "https://www.transparenttextures.com/patterns/stardust.png";
