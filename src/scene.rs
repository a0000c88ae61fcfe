//! Whole-city aggregate: one generate call at startup, one tick per frame.
//!
//! Every animated entity keeps its own accumulated clock; the scene only
//! fans the frame delta out. Nothing here allocates per frame — the render
//! loop calls `tick` and then reads the buffers back out.

use crate::ambient::{NetworkField, SparkleField};
use crate::artifacts::ArtifactField;
use crate::building::BuildingCloud;
use crate::constants::*;
use crate::layout::generate_layout;
use crate::rng::RandomSource;
use crate::streets::{street_grid, StreetSegment};
use crate::traffic::FlowingParticle;

#[derive(Clone, Copy, Debug)]
pub struct SceneParams {
    pub grid_radius: i32,
    pub block_size: f32,
    pub street_grid_size: i32,
    pub particle_count: usize,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            grid_radius: CITY_GRID_RADIUS,
            block_size: CITY_BLOCK_SIZE,
            street_grid_size: STREET_GRID_SIZE,
            particle_count: PARTICLE_COUNT,
        }
    }
}

pub struct CityScene {
    buildings: Vec<BuildingCloud>,
    artifacts: Vec<ArtifactField>,
    streets: Vec<StreetSegment>,
    sparkles: SparkleField,
    network: NetworkField,
    particles: Vec<FlowingParticle>,
}

impl CityScene {
    pub fn generate(params: SceneParams, rng: &mut impl RandomSource) -> Self {
        let layout = generate_layout(params.grid_radius, params.block_size, rng);
        let buildings: Vec<_> = layout
            .iter()
            .map(|b| BuildingCloud::generate(*b, rng))
            .collect();
        let artifacts: Vec<_> = layout
            .iter()
            .map(|b| ArtifactField::generate(b, rng))
            .collect();
        let streets = street_grid(params.street_grid_size, params.block_size);
        let sparkles = SparkleField::generate(rng);
        let network = NetworkField::generate(rng);
        let particles: Vec<_> = (0..params.particle_count)
            .map(|_| FlowingParticle::spawn(rng))
            .collect();

        let scene = Self {
            buildings,
            artifacts,
            streets,
            sparkles,
            network,
            particles,
        };
        log::info!(
            "[scene] buildings={} streets={} particles={} points={}",
            scene.buildings.len(),
            scene.streets.len(),
            scene.particles.len(),
            scene.total_point_count()
        );
        scene
    }

    /// Advance every animated entity by one frame. `delta` is the frame
    /// time in seconds from the render loop.
    pub fn tick(&mut self, delta: f32, rng: &mut impl RandomSource) {
        for b in &mut self.buildings {
            b.tick(delta, rng);
        }
        for a in &mut self.artifacts {
            a.tick(delta, rng);
        }
        self.sparkles.tick(delta, rng);
        self.network.tick(delta, rng);
        for p in &mut self.particles {
            p.tick(delta, rng);
        }
    }

    pub fn buildings(&self) -> &[BuildingCloud] {
        &self.buildings
    }

    pub fn artifacts(&self) -> &[ArtifactField] {
        &self.artifacts
    }

    pub fn streets(&self) -> &[StreetSegment] {
        &self.streets
    }

    pub fn sparkles(&self) -> &SparkleField {
        &self.sparkles
    }

    pub fn network(&self) -> &NetworkField {
        &self.network
    }

    pub fn particles(&self) -> &[FlowingParticle] {
        &self.particles
    }

    /// Total animated points across every cloud in the scene.
    pub fn total_point_count(&self) -> usize {
        let building_points: usize = self.buildings.iter().map(|b| b.cloud().len()).sum();
        let artifact_points: usize = self.artifacts.iter().map(|a| a.cloud().len()).sum();
        building_points + artifact_points + self.sparkles.cloud().len() + self.network.cloud().len()
    }
}
