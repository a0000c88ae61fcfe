//! Parallel position/color buffers for one renderable point population.
//!
//! The origin buffer is the authoritative rest state written once at
//! generation time; animators rewrite `positions` and `colors` in place
//! every frame and never resize any of the three buffers.

use glam::Vec3;

pub struct PointCloud {
    origins: Vec<Vec3>,
    positions: Vec<Vec3>,
    colors: Vec<Vec3>,
}

impl PointCloud {
    /// Build a cloud from parallel origin/color vectors. The live position
    /// buffer starts as a copy of the origins. Length mismatch is a
    /// programming error; the invariant is checked here and nowhere else.
    pub fn new(origins: Vec<Vec3>, colors: Vec<Vec3>) -> Self {
        assert_eq!(
            origins.len(),
            colors.len(),
            "origin and color buffers must be the same length"
        );
        let positions = origins.clone();
        Self {
            origins,
            positions,
            colors,
        }
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    pub fn origins(&self) -> &[Vec3] {
        &self.origins
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    /// Flat `xyz` view of the live positions, suitable for uploading as a
    /// vertex attribute without copying.
    pub fn positions_f32(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Flat `rgb` view of the live colors.
    pub fn colors_f32(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Split borrow for animators: read-only origins, writable live buffers.
    pub(crate) fn animate_mut(&mut self) -> (&[Vec3], &mut [Vec3], &mut [Vec3]) {
        (&self.origins, &mut self.positions, &mut self.colors)
    }

    /// Writable colors for fields that never move their points.
    pub(crate) fn colors_mut(&mut self) -> &mut [Vec3] {
        &mut self.colors
    }
}
