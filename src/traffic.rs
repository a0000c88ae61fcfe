//! Target-seeking traffic particles with motion trails.
//!
//! Each particle forever chases a random waypoint; velocity is smoothed
//! toward the desired heading rather than snapped, which is what bends the
//! paths into curves. The trail is a fixed-size ring buffer written with a
//! cursor so a tick never shifts elements.

use glam::Vec3;

use crate::constants::*;
use crate::rng::RandomSource;

/// Fixed-capacity position history. `push` overwrites the oldest entry.
pub struct Trail {
    points: Vec<Vec3>,
    cursor: usize,
}

impl Trail {
    fn filled(len: usize, p: Vec3) -> Self {
        assert!(len > 0, "trail length must be nonzero");
        Self {
            points: vec![p; len],
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn push(&mut self, p: Vec3) {
        self.points[self.cursor] = p;
        self.cursor = (self.cursor + 1) % self.points.len();
    }

    /// Copy the history oldest-first into `out` for line rendering.
    /// `out` must match the trail length.
    pub fn write_ordered(&self, out: &mut [Vec3]) {
        assert_eq!(out.len(), self.points.len(), "trail output slice mismatch");
        for (k, slot) in out.iter_mut().enumerate() {
            *slot = self.points[(self.cursor + k) % self.points.len()];
        }
    }

    /// History oldest-first without copying.
    pub fn iter_ordered(&self) -> impl Iterator<Item = Vec3> + '_ {
        let n = self.points.len();
        (0..n).map(move |k| self.points[(self.cursor + k) % n])
    }
}

pub struct FlowingParticle {
    position: Vec3,
    velocity: Vec3,
    target: Vec3,
    trail: Trail,
    time: f32,
}

impl FlowingParticle {
    pub fn spawn(rng: &mut impl RandomSource) -> Self {
        let position = Vec3::new(
            rng.centered(PARTICLE_SPAWN_RANGE),
            rng.range(5.0, 45.0),
            rng.centered(PARTICLE_SPAWN_RANGE),
        );
        Self {
            position,
            velocity: Vec3::ZERO,
            target: random_target(rng),
            trail: Trail::filled(TRAIL_LENGTH, position),
            time: 0.0,
        }
    }

    pub fn tick(&mut self, delta: f32, rng: &mut impl RandomSource) {
        self.time += delta;

        let to_target = self.target - self.position;
        let distance = to_target.length();
        if distance < TARGET_REACHED_DISTANCE {
            // Steering this tick still follows the old heading; the new
            // waypoint takes over next tick.
            self.target = random_target(rng);
        }
        if distance <= f32::EPSILON {
            // Sitting exactly on the waypoint: the heading is undefined, so
            // hold still for this tick and chase the fresh target next one.
            return;
        }

        let direction = to_target / distance;
        self.velocity = self
            .velocity
            .lerp(direction * PARTICLE_SPEED, PARTICLE_STEERING);
        self.position += self.velocity * delta;
        self.trail.push(self.position);
    }

    /// Trail line opacity for the backend: fades out when the particle is
    /// slow so fresh spawns and hairpin turns do not draw dead streaks.
    pub fn trail_opacity(&self) -> f32 {
        (self.velocity.length() * 0.1).min(1.0) * 0.6
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }
}

fn random_target(rng: &mut impl RandomSource) -> Vec3 {
    Vec3::new(
        rng.centered(PARTICLE_TARGET_RANGE),
        rng.range(5.0, 65.0),
        rng.centered(PARTICLE_TARGET_RANGE),
    )
}
