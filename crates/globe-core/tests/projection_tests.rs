// Host-side tests for sphere layout and screen projection.

use globe_core::*;
use glam::Vec3;
use std::f32::consts::PI;

fn flat() -> ProjectionParams {
    ProjectionParams {
        tilt_rad: 0.0,
        ..ProjectionParams::default()
    }
}

#[test]
fn sphere_positions_lie_on_unit_sphere() {
    for total in 1..=64 {
        for i in 0..total {
            let p = sphere_position(i, total);
            assert!(
                (p.length_squared() - 1.0).abs() < 1e-4,
                "index {i} of {total} off sphere: {p:?}"
            );
        }
    }
}

#[test]
fn sphere_positions_are_deterministic() {
    for i in 0..15 {
        assert_eq!(sphere_position(i, 15), sphere_position(i, 15));
    }
}

#[test]
fn sphere_positions_span_both_poles() {
    let total = 15;
    let zs: Vec<f32> = (0..total).map(|i| sphere_position(i, total).z).collect();
    // first item sits near the +z pole, last near -z, monotonically in between
    assert!(zs[0] > 0.9);
    assert!(zs[total - 1] < -0.9);
    assert!(zs.windows(2).all(|w| w[1] < w[0]));
}

#[test]
fn single_item_sits_on_equator() {
    let p = sphere_position(0, 1);
    assert!(p.z.abs() < 1e-6);
}

#[test]
fn front_facing_point_projects_to_centre() {
    let pt = project(Vec3::Z, 0.0, &flat());
    assert!(pt.satellite.x.abs() < 1e-4);
    assert!(pt.satellite.y.abs() < 1e-4);
    assert!((pt.scale - 1000.0 / 700.0).abs() < 1e-4);
    assert_eq!(pt.opacity, 1.0);
    assert_eq!(pt.z_index, 90);
    assert!(!pt.is_behind());
    assert!(!pt.is_hidden());
}

#[test]
fn rear_point_is_behind_hidden_and_transparent() {
    let pt = project(Vec3::new(0.0, 0.0, -1.0), 0.0, &ProjectionParams::default());
    assert!((pt.depth + 1.0).abs() < 1e-6);
    assert!(pt.is_behind());
    assert!(pt.is_hidden());
    assert_eq!(pt.opacity, 0.0);
    assert_eq!(pt.z_index, 10);
    assert!(!pt.tether_visible());
}

#[test]
fn hidden_before_fade_completes() {
    // between -0.5 and -0.4 the point is hidden although opacity is still positive
    let z = -0.45_f32;
    let base = Vec3::new((1.0 - z * z).sqrt(), 0.0, z);
    let pt = project(base, 0.0, &flat());
    assert!(pt.is_hidden());
    assert!(pt.opacity > 0.0 && pt.opacity < 0.2);
}

#[test]
fn opacity_fades_linearly_once_behind() {
    assert_eq!(opacity_for_depth(0.5), 1.0);
    assert_eq!(opacity_for_depth(-0.1), 1.0);
    assert!((opacity_for_depth(-0.2) - 0.6).abs() < 1e-6);
    assert!((opacity_for_depth(-0.3) - 0.4).abs() < 1e-6);
    assert_eq!(opacity_for_depth(-0.5), 0.0);
    assert_eq!(opacity_for_depth(-0.9), 0.0);
}

#[test]
fn nearer_points_stack_above_farther_and_sphere() {
    assert!(z_index_for_depth(0.5) > z_index_for_depth(0.0));
    assert!(z_index_for_depth(0.0) > z_index_for_depth(-0.5));
    assert_eq!(z_index_for_depth(0.0), Z_INDEX_BASE);
    assert!(z_index_for_depth(0.01) >= Z_INDEX_BASE);
    assert_eq!(z_index_for_depth(-0.01), Z_INDEX_BASE - 1);
}

#[test]
fn projection_is_pure() {
    let base = sphere_position(3, 15);
    let params = ProjectionParams::default();
    assert_eq!(project(base, 1.234, &params), project(base, 1.234, &params));
}

#[test]
fn full_turn_returns_to_start() {
    let params = ProjectionParams::default();
    for i in 0..15 {
        let base = sphere_position(i, 15);
        let a = project(base, 0.7, &params);
        let b = project(base, 0.7 + 2.0 * PI, &params);
        assert!((a.satellite - b.satellite).length() < 1e-2, "item {i}");
        assert!((a.anchor - b.anchor).length() < 1e-2, "item {i}");
        assert!((a.depth - b.depth).abs() < 1e-4, "item {i}");
        assert!((a.opacity - b.opacity).abs() < 1e-3, "item {i}");
    }
}

#[test]
fn quarter_turn_brings_right_side_to_front() {
    // spin maps +x to +z after a quarter turn: z1 = z cos + x sin
    let pt = project(Vec3::X, PI / 2.0, &flat());
    assert!((pt.depth - 1.0).abs() < 1e-5);
    assert!(pt.satellite.length() < 1e-3);
}

#[test]
fn tilt_leaves_depth_unchanged_and_rotates_screen_plane() {
    let tilted = ProjectionParams::default();
    let base = Vec3::X;
    let a = project(base, 0.0, &flat());
    let b = project(base, 0.0, &tilted);
    assert_eq!(a.depth, b.depth);
    assert!((a.satellite.length() - b.satellite.length()).abs() < 1e-3);
    let angle = b.satellite.y.atan2(b.satellite.x).to_degrees();
    assert!((angle - TILT_DEG).abs() < 1e-3);
}

#[test]
fn tether_joins_anchor_to_satellite() {
    let base = Vec3::new(1.0, 0.0, 0.0);
    let pt = project(base, 0.0, &flat());
    // equator point at z = 0: no perspective, straight line along +x
    assert!((pt.anchor.x - SURFACE_RADIUS).abs() < 1e-3);
    assert!((pt.satellite.x - ORBIT_RADIUS).abs() < 1e-3);
    assert!((pt.tether.length - (ORBIT_RADIUS - SURFACE_RADIUS)).abs() < 1e-3);
    assert!(pt.tether.angle_deg.abs() < 1e-3);

    let up = project(Vec3::Y, 0.0, &flat());
    assert!((up.tether.angle_deg - 90.0).abs() < 1e-3);
}

#[test]
fn label_only_on_near_front_points() {
    let front = project(Vec3::Z, 0.0, &flat());
    assert!(front.shows_label());
    let rear = project(Vec3::new(0.6, 0.0, -0.8), 0.0, &flat());
    assert!(!rear.shows_label());
}

#[test]
fn tether_styling_follows_satellite() {
    let pt = project(Vec3::Z, 0.0, &flat());
    assert_eq!(pt.tether_z_index(), pt.z_index - 1);
    assert!((pt.tether_opacity() - 0.6).abs() < 1e-6);
    assert!(pt.tether_visible());
}
