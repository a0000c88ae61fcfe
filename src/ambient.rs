//! Citywide ambient fields: ground sparkles and the elevated network.
//!
//! Both populations survive a per-cell coin flip over a large grid at
//! generation time, then animate color only. The network's synchronized
//! firing is a closed-form wave of position and time, not a neighbor
//! graph; introducing real adjacency would change both the look and the
//! per-frame cost.

use glam::Vec3;

use crate::constants::*;
use crate::point_cloud::PointCloud;
use crate::rng::RandomSource;

/// Ground-level flicker field.
pub struct SparkleField {
    cloud: PointCloud,
    time: f32,
}

impl SparkleField {
    pub fn generate(rng: &mut impl RandomSource) -> Self {
        let mut origins = Vec::new();
        let half = SPARKLE_GRID_SIZE / 2.0;
        let mut x = -half;
        while x < half {
            let mut z = -half;
            while z < half {
                if rng.chance(SPARKLE_SURVIVAL_PROBABILITY) {
                    origins.push(Vec3::new(
                        x + rng.centered(1.0),
                        STREET_HEIGHT,
                        z + rng.centered(1.0),
                    ));
                }
                z += SPARKLE_SPACING;
            }
            x += SPARKLE_SPACING;
        }
        log::debug!("[ambient] sparkles={}", origins.len());
        let colors = vec![Vec3::new(0.3, 0.6, 0.5); origins.len()];
        Self {
            cloud: PointCloud::new(origins, colors),
            time: 0.0,
        }
    }

    pub fn tick(&mut self, delta: f32, rng: &mut impl RandomSource) {
        self.time += delta;
        let t = self.time;
        for (i, color) in self.cloud.colors_mut().iter_mut().enumerate() {
            let phase = t + i as f32 * 0.0001;
            let flicker = (phase * 5.0).sin() * 0.5 + 0.5;
            let blink = if rng.chance(SPARKLE_BLINK_PROBABILITY) {
                1.0
            } else {
                0.0
            };
            *color = Vec3::new(
                0.2 * flicker + blink * 0.3,
                0.4 * flicker + blink * 0.3,
                0.3 * flicker + blink * 0.3,
            );
        }
    }

    pub fn cloud(&self) -> &PointCloud {
        &self.cloud
    }
}

/// Elevated "neural network" field over the whole city.
pub struct NetworkField {
    cloud: PointCloud,
    time: f32,
}

impl NetworkField {
    pub fn generate(rng: &mut impl RandomSource) -> Self {
        let mut origins = Vec::new();
        let half = NETWORK_GRID_SIZE / 2.0;
        let mut x = -half;
        while x < half {
            let mut z = -half;
            while z < half {
                if rng.chance(NETWORK_SURVIVAL_PROBABILITY) {
                    origins.push(Vec3::new(
                        x + rng.centered(5.0),
                        rng.range(5.0, 45.0),
                        z + rng.centered(5.0),
                    ));
                }
                z += NETWORK_SPACING;
            }
            x += NETWORK_SPACING;
        }
        log::debug!("[ambient] network nodes={}", origins.len());
        let colors = vec![Vec3::ZERO; origins.len()];
        Self {
            cloud: PointCloud::new(origins, colors),
            time: 0.0,
        }
    }

    pub fn tick(&mut self, delta: f32, rng: &mut impl RandomSource) {
        self.time += delta;
        let t = self.time;
        // Network points never move; read the origin buffer for position.
        let (origins, _, colors) = self.cloud.animate_mut();
        for i in 0..origins.len() {
            let o = origins[i];
            let wave = (t * 2.0 + o.x * 0.05 + o.z * 0.05).sin();
            let neighbor = if wave > NEIGHBOR_ACTIVATION_THRESHOLD {
                NEIGHBOR_ACTIVATION_BOOST
            } else {
                0.0
            };
            let flash = if rng.chance(NETWORK_FLASH_PROBABILITY) {
                NETWORK_FLASH_BOOST
            } else {
                0.0
            };
            colors[i] = Vec3::new(
                (0.1 + flash).max(0.0),
                (0.4 + neighbor + flash).max(0.0),
                (0.3 + neighbor * 0.8 + flash).max(0.0),
            );
        }
    }

    pub fn cloud(&self) -> &PointCloud {
        &self.cloud
    }
}
