use glam::Vec3;

// Visual tuning constants for the city. Probabilities and wave coefficients
// are tuned values; treat them as the source of truth for the look, not as
// quantities to re-derive.

// City layout
pub const CITY_GRID_RADIUS: i32 = 8; // blocks scanned in [-r, r] on each axis
pub const CITY_BLOCK_SIZE: f32 = 10.0; // half the world-space block pitch
pub const MIN_BUILDING_CHANCE: f32 = 0.4; // density floor at the city edge
pub const MAX_BUILDINGS_PER_BLOCK: u32 = 3;
pub const BLOCK_OFFSET_FRACTION: f32 = 0.7; // planar scatter within a block
pub const BUILDING_FOOTPRINT_MIN: f32 = 2.0;
pub const BUILDING_FOOTPRINT_SPAN: f32 = 4.0; // width/depth in [min, min+span)
pub const BUILDING_HEIGHT_MIN: f32 = 20.0;
pub const BUILDING_HEIGHT_SPAN: f32 = 60.0; // height in [min, min+span)

// Building point sampling
pub const POINTS_PER_EDGE: usize = 20;
pub const EDGE_NOISE: f32 = 0.2; // jitter perpendicular to a face
pub const BUILDING_SEED_SPAN: f32 = 1000.0; // per-building phase seed range
pub const COLOR_OFFSET_SPAN: f32 = 0.3; // per-building hue bias range
pub const POINT_COLOR_JITTER: f32 = 0.1; // per-point lerp jitter (centered)
pub const BASE_COLOR: Vec3 = Vec3::new(0.0, 1.0, 1.0); // cyan, 0x00ffff
pub const TOP_COLOR: Vec3 = Vec3::new(0.0, 0.0, 0.133); // near-black, 0x000022

// Building animation
pub const BUILDING_TIME_SCALE: f32 = 0.8; // building clocks run slightly slow
pub const VERTICAL_WAVE_AMPLITUDE: f32 = 0.15;
pub const HORIZONTAL_WAVE_AMPLITUDE: f32 = 0.05;
pub const NEURAL_FLASH_PROBABILITY: f32 = 0.003; // per point per frame
pub const NEURAL_FLASH_BOOST: f32 = 0.5;

// Neural artifacts
pub const ARTIFACTS_PER_BUILDING: usize = 200;
pub const ARTIFACT_SPREAD: f32 = 2.0; // bounding-box padding
pub const ARTIFACT_BLINK_PROBABILITY: f32 = 0.0003; // per point per frame

// Street grid
pub const STREET_GRID_SIZE: i32 = 5;
pub const STREET_WIDTH: f32 = 0.5;
pub const STREET_HEIGHT: f32 = 0.1; // lifted off the ground plane

// Street sparkles
pub const SPARKLE_GRID_SIZE: f32 = 200.0;
pub const SPARKLE_SPACING: f32 = 1.5;
pub const SPARKLE_SURVIVAL_PROBABILITY: f32 = 0.05; // per grid cell
pub const SPARKLE_BLINK_PROBABILITY: f32 = 0.01; // per point per frame

// Neural network field
pub const NETWORK_GRID_SIZE: f32 = 200.0;
pub const NETWORK_SPACING: f32 = 10.0;
pub const NETWORK_SURVIVAL_PROBABILITY: f32 = 0.3; // per grid cell
pub const NETWORK_FLASH_PROBABILITY: f32 = 0.0003; // per point per frame
pub const NETWORK_FLASH_BOOST: f32 = 0.8;
pub const NEIGHBOR_ACTIVATION_BOOST: f32 = 0.5; // applied while wave > 0.8
pub const NEIGHBOR_ACTIVATION_THRESHOLD: f32 = 0.8;

// Flowing traffic particles
pub const PARTICLE_COUNT: usize = 100;
pub const TRAIL_LENGTH: usize = 30;
pub const PARTICLE_SPAWN_RANGE: f32 = 200.0; // spawn volume edge, centered
pub const PARTICLE_TARGET_RANGE: f32 = 300.0; // target volume edge, centered
pub const PARTICLE_SPEED: f32 = 15.0; // desired cruise speed
pub const PARTICLE_STEERING: f32 = 0.05; // velocity lerp factor per tick
pub const TARGET_REACHED_DISTANCE: f32 = 2.0;
