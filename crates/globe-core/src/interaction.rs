use crate::constants::{DRAG_SENSITIVITY, TAP_MAX_TRAVEL_PX};
use glam::Vec2;

/// Pointer position as delivered by a down/move/up event, in client pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub pointer_id: i32,
    pub pos: Vec2,
}

impl PointerSample {
    pub fn new(pointer_id: i32, x: f32, y: f32) -> Self {
        Self {
            pointer_id,
            pos: Vec2::new(x, y),
        }
    }
}

/// Drag and tap bookkeeping for the globe container.
///
/// `captured` doubles as the dragging flag: while it is set autoplay stays
/// off and horizontal movement of that pointer turns the globe.
#[derive(Default, Clone, Copy, Debug)]
pub struct InteractionState {
    captured: Option<i32>,
    down_at: Vec2,
    last_x: f32,
    tap_target: Option<usize>,
}

impl InteractionState {
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn captured_pointer(&self) -> Option<i32> {
        self.captured
    }

    #[inline]
    pub fn tap_target(&self) -> Option<usize> {
        self.tap_target
    }

    /// Record the thumbnail under a pointer-down. Thumbnails see the event
    /// before the container does, so this runs ahead of [`Self::pointer_down`].
    pub fn press_target(&mut self, album_index: usize) {
        self.tap_target = Some(album_index);
    }

    pub fn pointer_down(&mut self, sample: PointerSample) {
        self.captured = Some(sample.pointer_id);
        self.down_at = sample.pos;
        self.last_x = sample.pos.x;
    }

    /// Rotation delta for a move of the captured pointer; zero otherwise.
    pub fn pointer_move(&mut self, sample: PointerSample) -> f32 {
        if self.captured != Some(sample.pointer_id) {
            return 0.0;
        }
        let dx = sample.pos.x - self.last_x;
        self.last_x = sample.pos.x;
        dx * DRAG_SENSITIVITY
    }

    /// Release the capture. Returns the album to select when the gesture was
    /// a tap on a thumbnail. The pending target is cleared either way.
    pub fn pointer_up(&mut self, sample: PointerSample) -> Option<usize> {
        let target = self.tap_target.take();
        if self.captured != Some(sample.pointer_id) {
            return None;
        }
        self.captured = None;
        let travel = (sample.pos - self.down_at).abs();
        let is_tap = travel.x < TAP_MAX_TRAVEL_PX && travel.y < TAP_MAX_TRAVEL_PX;
        if is_tap {
            target
        } else {
            None
        }
    }

    /// Drop any capture without treating it as a release (pointercancel).
    pub fn cancel(&mut self) {
        self.captured = None;
        self.tap_target = None;
    }
}
