//! City block scan producing the building list.
//!
//! Buildings are densest at the city center and thin out toward the edge,
//! with a floor so the outskirts never go fully dark. Footprints may
//! overlap; the point-cloud look absorbs collisions without artifacts.

use smallvec::SmallVec;

use crate::constants::*;
use crate::rng::RandomSource;

/// One building footprint. `x`/`y` are ground-plane coordinates (the second
/// axis maps to world `z`); `height` extends up from the ground.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Building {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
}

/// Scan integer blocks in `[-grid_radius, grid_radius]` on both axes and
/// place 1-3 buildings per surviving block. Output order is the grid scan
/// order, then per-block placement order; stable within one generation.
pub fn generate_layout(
    grid_radius: i32,
    block_size: f32,
    rng: &mut impl RandomSource,
) -> Vec<Building> {
    let mut buildings = Vec::new();
    for gx in -grid_radius..=grid_radius {
        for gz in -grid_radius..=grid_radius {
            let dist_from_center = ((gx * gx + gz * gz) as f32).sqrt();
            let building_chance = (1.0 - dist_from_center / (grid_radius as f32 * 0.8))
                .max(MIN_BUILDING_CHANCE);

            if !rng.chance(building_chance) {
                continue;
            }

            let count = (rng.next_f32() * MAX_BUILDINGS_PER_BLOCK as f32) as u32 + 1;
            let mut block: SmallVec<[Building; 3]> = SmallVec::new();
            for _ in 0..count {
                let offset_x = rng.centered(block_size * BLOCK_OFFSET_FRACTION);
                let offset_z = rng.centered(block_size * BLOCK_OFFSET_FRACTION);
                block.push(Building {
                    x: gx as f32 * block_size * 2.0 + offset_x,
                    y: gz as f32 * block_size * 2.0 + offset_z,
                    width: rng.range(BUILDING_FOOTPRINT_MIN, BUILDING_FOOTPRINT_MIN + BUILDING_FOOTPRINT_SPAN),
                    depth: rng.range(BUILDING_FOOTPRINT_MIN, BUILDING_FOOTPRINT_MIN + BUILDING_FOOTPRINT_SPAN),
                    height: rng.range(BUILDING_HEIGHT_MIN, BUILDING_HEIGHT_MIN + BUILDING_HEIGHT_SPAN),
                });
            }
            buildings.extend(block);
        }
    }
    log::debug!(
        "[layout] radius={} blocks={} buildings={}",
        grid_radius,
        (2 * grid_radius + 1) * (2 * grid_radius + 1),
        buildings.len()
    );
    buildings
}
