pub mod overlay;
pub mod pointer;

pub use overlay::wire_overlay_controls;
pub use pointer::{wire_input_handlers, InputWiring};
