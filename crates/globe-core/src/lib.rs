pub mod album;
pub mod constants;
pub mod globe;
pub mod interaction;
pub mod layout;
pub mod overlay;
pub mod projection;
pub mod scene;
pub mod summary;

pub use album::*;
pub use constants::*;
pub use globe::*;
pub use interaction::*;
pub use layout::*;
pub use overlay::*;
pub use projection::*;
pub use scene::*;
pub use summary::*;
