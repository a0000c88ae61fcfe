//! Static street grid: wide avenues on the block pitch, narrow streets
//! threaded between them on the odd half-pitch lines.

use glam::Vec3;

use crate::constants::{STREET_HEIGHT, STREET_WIDTH};

/// One renderable street line. Immutable after generation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StreetSegment {
    pub a: Vec3,
    pub b: Vec3,
    pub width: f32,
}

/// Generate the full grid. Deterministic; takes no randomness.
pub fn street_grid(grid_size: i32, block_size: f32) -> Vec<StreetSegment> {
    let extent = grid_size as f32 * block_size * 2.0;
    let mut lines = Vec::new();

    // Major avenues, both axes.
    for i in -grid_size..=grid_size {
        let at = i as f32 * block_size * 2.0;
        lines.push(StreetSegment {
            a: Vec3::new(at, STREET_HEIGHT, -extent),
            b: Vec3::new(at, STREET_HEIGHT, extent),
            width: STREET_WIDTH * 2.0,
        });
        lines.push(StreetSegment {
            a: Vec3::new(-extent, STREET_HEIGHT, at),
            b: Vec3::new(extent, STREET_HEIGHT, at),
            width: STREET_WIDTH * 2.0,
        });
    }

    // Minor streets on the odd half-pitch lines only; even lines coincide
    // with the avenues above.
    for i in -grid_size * 2..=grid_size * 2 {
        if i % 2 == 0 {
            continue;
        }
        let at = i as f32 * block_size;
        lines.push(StreetSegment {
            a: Vec3::new(at, STREET_HEIGHT, -extent),
            b: Vec3::new(at, STREET_HEIGHT, extent),
            width: STREET_WIDTH,
        });
        lines.push(StreetSegment {
            a: Vec3::new(-extent, STREET_HEIGHT, at),
            b: Vec3::new(extent, STREET_HEIGHT, at),
            width: STREET_WIDTH,
        });
    }

    lines
}
