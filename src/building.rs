//! Point-cloud sampling and per-frame animation for one building.
//!
//! Geometry is sampled once into an immutable origin buffer: four vertical
//! corner lines, four horizontal rings, and a band of jittered face points.
//! Every frame the animator rewrites positions from the origins with a
//! breathing wave keyed on distance from the footprint center, and rewrites
//! colors from pulse/glow waves plus rare independent neural flashes.

use glam::Vec3;

use crate::constants::*;
use crate::layout::Building;
use crate::point_cloud::PointCloud;
use crate::rng::RandomSource;

pub struct BuildingCloud {
    building: Building,
    cloud: PointCloud,
    time: f32,
}

impl BuildingCloud {
    pub fn generate(building: Building, rng: &mut impl RandomSource) -> Self {
        // Per-building constants: a phase seed for the hue banding and a
        // lerp bias toward the top color. Both are baked into the rest
        // colors at generation time.
        let seed = rng.range(0.0, BUILDING_SEED_SPAN);
        let color_offset = rng.range(0.0, COLOR_OFFSET_SPAN);

        let Building {
            x,
            y,
            width,
            depth,
            height,
        } = building;
        let ppe = POINTS_PER_EDGE;

        let mut origins = Vec::new();
        let mut colors = Vec::new();
        // The jitter is drawn at each call site so the color pass stays a
        // pure function of the sampled point.
        let mut push = |p: Vec3, jitter: f32| {
            origins.push(p);
            colors.push(rest_color(p, height, seed, color_offset, jitter));
        };

        // Vertical corner lines, y in [0, height).
        let corners = [
            (-width / 2.0, -depth / 2.0),
            (width / 2.0, -depth / 2.0),
            (-width / 2.0, depth / 2.0),
            (width / 2.0, depth / 2.0),
        ];
        for (dx, dz) in corners {
            for i in 0..ppe {
                let h = height * i as f32 / ppe as f32;
                push(Vec3::new(x + dx, h, y + dz), rng.centered(POINT_COLOR_JITTER));
            }
        }

        // Horizontal rings at the base, thirds, and roofline; each edge is
        // sampled inclusively so rings close at the corners.
        let ring_heights = [0.0, height / 3.0, height * 2.0 / 3.0, height];
        for h in ring_heights {
            for i in 0..=ppe {
                let w = -width / 2.0 + width * i as f32 / ppe as f32;
                push(Vec3::new(x + w, h, y + depth / 2.0), rng.centered(POINT_COLOR_JITTER));
            }
            for i in 0..=ppe {
                let w = -width / 2.0 + width * i as f32 / ppe as f32;
                push(Vec3::new(x + w, h, y - depth / 2.0), rng.centered(POINT_COLOR_JITTER));
            }
            for i in 0..=ppe {
                let d = -depth / 2.0 + depth * i as f32 / ppe as f32;
                push(Vec3::new(x - width / 2.0, h, y + d), rng.centered(POINT_COLOR_JITTER));
            }
            for i in 0..=ppe {
                let d = -depth / 2.0 + depth * i as f32 / ppe as f32;
                push(Vec3::new(x + width / 2.0, h, y + d), rng.centered(POINT_COLOR_JITTER));
            }
        }

        // Loose points scattered on the faces, jittered off the face plane.
        for _ in 0..ppe * 2 {
            let face = (rng.next_f32() * 4.0) as u32;
            let p = match face {
                0 => Vec3::new(
                    x + rng.centered(width),
                    rng.range(0.0, height),
                    y + depth / 2.0 + rng.centered(EDGE_NOISE),
                ),
                1 => Vec3::new(
                    x + rng.centered(width),
                    rng.range(0.0, height),
                    y - depth / 2.0 + rng.centered(EDGE_NOISE),
                ),
                2 => Vec3::new(
                    x - width / 2.0 + rng.centered(EDGE_NOISE),
                    rng.range(0.0, height),
                    y + rng.centered(depth),
                ),
                _ => Vec3::new(
                    x + width / 2.0 + rng.centered(EDGE_NOISE),
                    rng.range(0.0, height),
                    y + rng.centered(depth),
                ),
            };
            push(p, rng.centered(POINT_COLOR_JITTER));
        }

        log::trace!(
            "[building] at=({x:.1},{y:.1}) h={height:.1} points={}",
            origins.len()
        );

        Self {
            building,
            cloud: PointCloud::new(origins, colors),
            time: 0.0,
        }
    }

    /// Advance this building's own clock and rewrite the live buffers.
    /// Positions are a pure function of origin and time; the only stateful
    /// input is the per-point flash draw.
    pub fn tick(&mut self, delta: f32, rng: &mut impl RandomSource) {
        self.time += delta * BUILDING_TIME_SCALE;
        let t = self.time;
        let b = self.building;
        let (origins, positions, colors) = self.cloud.animate_mut();

        for i in 0..origins.len() {
            let o = origins[i];
            let height_percent = o.y / b.height;
            let dist_from_center = ((o.x - b.x).powi(2) + (o.z - b.y).powi(2)).sqrt();

            let wave_phase = t * 2.0 + dist_from_center * 0.1;
            let vertical = wave_phase.sin() * VERTICAL_WAVE_AMPLITUDE;
            let horizontal = (wave_phase * 0.5).cos() * HORIZONTAL_WAVE_AMPLITUDE;
            positions[i] = Vec3::new(o.x + horizontal, o.y + vertical, o.z + horizontal);

            let pulse = (t + height_percent * 3.0).sin() * 0.2;
            let edge_glow = (t * 2.0 + dist_from_center).sin() * 0.3;
            let flash = if rng.chance(NEURAL_FLASH_PROBABILITY) {
                NEURAL_FLASH_BOOST
            } else {
                0.0
            };
            let base = 0.6 - height_percent * 0.4;

            // Floored at zero per channel; tops are left unclamped for the
            // backend's additive blending.
            colors[i] = Vec3::new(
                (0.1 + edge_glow * 0.2 + flash).max(0.0),
                (base + pulse + edge_glow + flash).max(0.0),
                (base * 0.8 + edge_glow * 0.5 + flash).max(0.0),
            );
        }
    }

    pub fn building(&self) -> &Building {
        &self.building
    }

    pub fn cloud(&self) -> &PointCloud {
        &self.cloud
    }
}

/// Rest-state color: cyan at street level shading to near-black at the
/// roofline, banded by per-building sine variation so towers read as
/// individuals rather than clones.
fn rest_color(p: Vec3, height: f32, seed: f32, color_offset: f32, jitter: f32) -> Vec3 {
    let height_percent = p.y / height;
    let variation_x = ((p.x + seed) * 0.2).sin() * 0.3;
    let variation_z = ((p.z + seed) * 0.15).cos() * 0.3;
    let lerp_factor =
        (height_percent + variation_x + variation_z + jitter + color_offset).clamp(0.0, 1.0);
    BASE_COLOR.lerp(TOP_COLOR, lerp_factor)
}
