//! Screen-space projection of sphere points.
//!
//! Each frame every base position is spun by the current rotation, tilted by
//! the fixed axial tilt and perspective-divided twice: once at the orbit
//! radius for the floating thumbnail and once at the surface radius for the
//! point on the sphere it is tethered to. There is no retained 3D scene;
//! output depends only on the arguments.

use crate::constants::*;
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionParams {
    pub tilt_rad: f32,
    pub orbit_radius: f32,
    pub surface_radius: f32,
    pub perspective: f32,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            tilt_rad: tilt_rad(),
            orbit_radius: ORBIT_RADIUS,
            surface_radius: SURFACE_RADIUS,
            perspective: PERSPECTIVE,
        }
    }
}

/// Line from the surface anchor to the thumbnail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tether {
    pub length: f32,
    pub angle_deg: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    /// Thumbnail offset from the globe centre, CSS pixels.
    pub satellite: Vec2,
    /// Anchor offset on the sphere surface, CSS pixels.
    pub anchor: Vec2,
    /// Perspective scale at the orbit radius.
    pub scale: f32,
    /// Post-tilt z on the unit sphere; +1 faces the viewer.
    pub depth: f32,
    pub opacity: f32,
    pub z_index: i32,
    pub tether: Tether,
}

impl ProjectedPoint {
    #[inline]
    pub fn is_behind(&self) -> bool {
        self.depth < BEHIND_Z
    }

    /// Hidden points are not rendered even though their opacity may still be
    /// above zero (hiding starts at -0.4, the fade only ends at -0.5).
    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.depth < HIDDEN_Z
    }

    #[inline]
    pub fn tether_visible(&self) -> bool {
        self.opacity > TETHER_MIN_OPACITY && !self.is_hidden()
    }

    #[inline]
    pub fn tether_opacity(&self) -> f32 {
        self.opacity * TETHER_OPACITY_FACTOR
    }

    #[inline]
    pub fn tether_z_index(&self) -> i32 {
        self.z_index - 1
    }

    #[inline]
    pub fn shows_label(&self) -> bool {
        self.scale > LABEL_MIN_SCALE && !self.is_behind()
    }
}

/// Spin around the vertical axis, then tilt around the depth axis.
#[inline]
pub fn rotate(base: Vec3, rotation: f32, tilt_rad: f32) -> Vec3 {
    let (sin_r, cos_r) = rotation.sin_cos();
    let x1 = base.x * cos_r - base.z * sin_r;
    let y1 = base.y;
    let z1 = base.z * cos_r + base.x * sin_r;

    let (sin_t, cos_t) = tilt_rad.sin_cos();
    Vec3::new(x1 * cos_t - y1 * sin_t, x1 * sin_t + y1 * cos_t, z1)
}

/// Perspective-divide a unit-sphere point pushed out to `radius`.
/// Returns the screen offset and the scale factor.
#[inline]
pub fn perspective(p: Vec3, radius: f32, perspective: f32) -> (Vec2, f32) {
    let scale = perspective / (perspective - p.z * radius);
    (Vec2::new(p.x, p.y) * radius * scale, scale)
}

#[inline]
pub fn opacity_for_depth(z: f32) -> f32 {
    if z < BEHIND_Z {
        (1.0 + OPACITY_FADE_RATE * z).clamp(0.0, 1.0)
    } else {
        1.0
    }
}

#[inline]
pub fn z_index_for_depth(z: f32) -> i32 {
    (Z_INDEX_BASE as f32 + z * Z_INDEX_DEPTH_SPAN).floor() as i32
}

pub fn project(base: Vec3, rotation: f32, params: &ProjectionParams) -> ProjectedPoint {
    let p = rotate(base, rotation, params.tilt_rad);
    let (satellite, scale) = perspective(p, params.orbit_radius, params.perspective);
    let (anchor, _) = perspective(p, params.surface_radius, params.perspective);

    let d = satellite - anchor;
    let tether = Tether {
        length: d.length(),
        angle_deg: d.y.atan2(d.x).to_degrees(),
    };

    ProjectedPoint {
        satellite,
        anchor,
        scale,
        depth: p.z,
        opacity: opacity_for_depth(p.z),
        z_index: z_index_for_depth(p.z),
        tether,
    }
}
