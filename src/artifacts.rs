//! Sparse blinking artifacts hugging each building.
//!
//! Positions are scattered once through a padded bounding box and never
//! move; the per-frame work is a color pass where each point independently
//! wins a rare blink scaled by a slow per-point lifespan wave.

use glam::Vec3;

use crate::constants::*;
use crate::layout::Building;
use crate::point_cloud::PointCloud;
use crate::rng::RandomSource;

pub struct ArtifactField {
    cloud: PointCloud,
    time: f32,
}

impl ArtifactField {
    pub fn generate(building: &Building, rng: &mut impl RandomSource) -> Self {
        let mut origins = Vec::with_capacity(ARTIFACTS_PER_BUILDING);
        for _ in 0..ARTIFACTS_PER_BUILDING {
            origins.push(Vec3::new(
                building.x + rng.centered(building.width + ARTIFACT_SPREAD),
                rng.range(0.0, building.height + ARTIFACT_SPREAD),
                building.y + rng.centered(building.depth + ARTIFACT_SPREAD),
            ));
        }
        // Dark until a blink lands.
        let colors = vec![Vec3::ZERO; origins.len()];
        Self {
            cloud: PointCloud::new(origins, colors),
            time: 0.0,
        }
    }

    pub fn tick(&mut self, delta: f32, rng: &mut impl RandomSource) {
        self.time += delta;
        let t = self.time;
        for (i, color) in self.cloud.colors_mut().iter_mut().enumerate() {
            let phase = t + i as f32 * 0.05;
            let lifespan = ((phase * 0.5).sin() + 1.0) * 0.5;
            *color = if rng.chance(ARTIFACT_BLINK_PROBABILITY) {
                Vec3::new(0.2, 0.8 * lifespan, 0.7 * lifespan)
            } else {
                Vec3::ZERO
            };
        }
    }

    pub fn cloud(&self) -> &PointCloud {
        &self.cloud
    }
}
