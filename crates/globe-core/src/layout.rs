//! Fibonacci-sphere placement of albums.
//!
//! Base positions depend only on an album's index and the collection size, so
//! they are computed once per collection and reused by every frame.

use crate::album::Album;
use glam::Vec3;
use std::f32::consts::PI;
use std::rc::Rc;

/// Quasi-uniform point on the unit sphere for item `index` of `total`.
///
/// Polar angle from an even split of `cos(phi)`, azimuth stepped by the golden
/// angle. Callers must pass `total >= 1` and `index < total`.
#[inline]
pub fn sphere_position(index: usize, total: usize) -> Vec3 {
    let i = index as f32 + 0.5;
    let phi = (1.0 - 2.0 * i / total as f32).acos();
    let theta = PI * (1.0 + 5.0_f32.sqrt()) * i;
    Vec3::new(
        theta.cos() * phi.sin(),
        theta.sin() * phi.sin(),
        phi.cos(),
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutEntry {
    pub album_index: usize,
    pub base: Vec3,
}

/// Albums paired with their cached sphere positions.
#[derive(Clone, Debug)]
pub struct GlobeLayout {
    albums: Rc<[Album]>,
    entries: Vec<LayoutEntry>,
}

impl GlobeLayout {
    pub fn build(albums: Rc<[Album]>) -> Self {
        let total = albums.len();
        let entries = (0..total)
            .map(|i| LayoutEntry {
                album_index: i,
                base: sphere_position(i, total),
            })
            .collect::<Vec<_>>();
        log::debug!("[layout] placed {} albums", total);
        Self { albums, entries }
    }

    /// Rebuild only when handed a different collection. Returns whether a
    /// rebuild happened.
    pub fn refresh(&mut self, albums: &Rc<[Album]>) -> bool {
        if Rc::ptr_eq(&self.albums, albums) {
            return false;
        }
        *self = Self::build(albums.clone());
        true
    }

    pub fn albums(&self) -> &Rc<[Album]> {
        &self.albums
    }

    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Album, &LayoutEntry)> {
        self.entries
            .iter()
            .map(move |e| (&self.albums[e.album_index], e))
    }
}
