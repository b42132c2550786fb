// Host-side tests for the drag/tap state machine and rotation driver.

use globe_core::*;

const PID: i32 = 1;

fn at(x: f32, y: f32) -> PointerSample {
    PointerSample::new(PID, x, y)
}

#[test]
fn autoplay_advances_each_tick() {
    let mut g = GlobeState::default();
    assert!(g.tick(false));
    assert!(g.tick(false));
    assert!((g.rotation - 2.0 * AUTOPLAY_STEP_RAD).abs() < 1e-7);
}

#[test]
fn pause_suppresses_autoplay() {
    let mut g = GlobeState::default();
    for _ in 0..10 {
        assert!(!g.tick(true));
    }
    assert_eq!(g.rotation, 0.0);
}

#[test]
fn dragging_suppresses_autoplay() {
    let mut g = GlobeState::default();
    g.pointer_down(at(100.0, 100.0));
    assert_eq!(g.interaction.captured_pointer(), Some(PID));
    assert!(!g.tick(false));
    assert_eq!(g.rotation, 0.0);
    g.pointer_up(at(100.0, 100.0));
    assert!(g.tick(false));
}

#[test]
fn drag_delta_maps_to_rotation() {
    let mut g = GlobeState::default();
    g.pointer_down(at(100.0, 50.0));
    g.pointer_move(at(140.0, 50.0));
    assert_eq!(g.rotation, 40.0 * DRAG_SENSITIVITY);
    assert!(g.rotation < 0.0, "dragging right turns the globe negatively");
}

#[test]
fn drag_rotates_while_paused() {
    let mut g = GlobeState::default();
    g.pointer_down(at(0.0, 0.0));
    g.pointer_move(at(-20.0, 0.0));
    assert!(!g.tick(true));
    assert!((g.rotation - 0.1).abs() < 1e-6);
}

#[test]
fn drag_moves_netting_to_zero_leave_rotation_unchanged() {
    let mut g = GlobeState::default();
    g.rotation = 1.5;
    g.pointer_down(at(200.0, 0.0));
    for x in [230.0, 260.0, 215.0, 180.0, 200.0] {
        g.pointer_move(at(x, 0.0));
    }
    assert!((g.rotation - 1.5).abs() < 1e-5);
}

#[test]
fn moves_without_capture_are_ignored() {
    let mut g = GlobeState::default();
    g.pointer_move(at(500.0, 0.0));
    assert_eq!(g.rotation, 0.0);

    g.pointer_down(at(0.0, 0.0));
    g.pointer_move(PointerSample::new(PID + 1, 300.0, 0.0));
    assert_eq!(g.rotation, 0.0);
}

#[test]
fn short_press_on_thumbnail_selects_once() {
    let mut g = GlobeState::default();
    g.press_thumbnail(4);
    g.pointer_down(at(10.0, 10.0));
    g.pointer_move(at(15.0, 12.0));
    assert_eq!(g.pointer_up(at(19.0, 19.0)), Some(4));

    // target consumed: a second bare tap selects nothing
    g.pointer_down(at(10.0, 10.0));
    assert_eq!(g.pointer_up(at(10.0, 10.0)), None);
}

#[test]
fn travel_at_threshold_is_a_drag() {
    let mut g = GlobeState::default();
    g.press_thumbnail(2);
    g.pointer_down(at(0.0, 0.0));
    assert_eq!(g.pointer_up(at(TAP_MAX_TRAVEL_PX, 0.0)), None);

    g.press_thumbnail(2);
    g.pointer_down(at(0.0, 0.0));
    assert_eq!(g.pointer_up(at(0.0, -TAP_MAX_TRAVEL_PX)), None);
}

#[test]
fn drag_clears_pending_target() {
    let mut g = GlobeState::default();
    g.press_thumbnail(7);
    g.pointer_down(at(0.0, 0.0));
    g.pointer_move(at(60.0, 0.0));
    assert_eq!(g.pointer_up(at(60.0, 0.0)), None);
    assert_eq!(g.interaction.tap_target(), None);
}

#[test]
fn tap_on_empty_space_selects_nothing() {
    let mut g = GlobeState::default();
    g.pointer_down(at(5.0, 5.0));
    assert_eq!(g.pointer_up(at(5.0, 5.0)), None);
}

#[test]
fn release_without_capture_selects_nothing() {
    let mut s = InteractionState::default();
    s.press_target(3);
    assert_eq!(s.pointer_up(at(0.0, 0.0)), None);
    assert_eq!(s.tap_target(), None);
}

#[test]
fn later_press_replaces_earlier_target() {
    let mut s = InteractionState::default();
    s.press_target(1);
    s.press_target(9);
    s.pointer_down(at(0.0, 0.0));
    assert_eq!(s.pointer_up(at(1.0, 1.0)), Some(9));
}

#[test]
fn cancel_releases_capture_without_selection() {
    let mut g = GlobeState::default();
    g.press_thumbnail(0);
    g.pointer_down(at(0.0, 0.0));
    g.pointer_cancel();
    assert!(!g.interaction.is_dragging());
    assert_eq!(g.pointer_up(at(0.0, 0.0)), None);
    assert!(g.tick(false));
}
