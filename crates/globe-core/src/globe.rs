//! Rotation driver for the globe.
//!
//! Rotation is the only mutable scalar in the view. Autoplay advances it once
//! per animation frame, drags move it directly, and the dragging flag keeps
//! the two from applying on the same frame. The angle is never wrapped; the
//! projection is periodic in it.

use crate::constants::AUTOPLAY_STEP_RAD;
use crate::interaction::{InteractionState, PointerSample};

#[derive(Default, Clone, Copy, Debug)]
pub struct GlobeState {
    pub rotation: f32,
    pub interaction: InteractionState,
}

impl GlobeState {
    /// Animation-frame step. Returns whether autoplay moved the globe.
    pub fn tick(&mut self, paused: bool) -> bool {
        if paused || self.interaction.is_dragging() {
            return false;
        }
        self.rotation += AUTOPLAY_STEP_RAD;
        true
    }

    pub fn press_thumbnail(&mut self, album_index: usize) {
        self.interaction.press_target(album_index);
    }

    pub fn pointer_down(&mut self, sample: PointerSample) {
        self.interaction.pointer_down(sample);
    }

    /// Drags rotate the globe even while paused.
    pub fn pointer_move(&mut self, sample: PointerSample) {
        self.rotation += self.interaction.pointer_move(sample);
    }

    pub fn pointer_up(&mut self, sample: PointerSample) -> Option<usize> {
        let selected = self.interaction.pointer_up(sample);
        if let Some(i) = selected {
            log::info!("[globe] tap selects album {}", i);
        }
        selected
    }

    pub fn pointer_cancel(&mut self) {
        self.interaction.cancel();
    }
}
