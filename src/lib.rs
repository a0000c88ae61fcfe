//! Procedural neon-city point clouds with per-frame neural animation.
//!
//! The crate generates a synthetic city once (buildings, streets, ambient
//! fields, traffic particles) and then mutates position/color buffers in
//! place every frame. A rendering backend drives it with a frame delta and
//! reads the flat `f32` buffer views back; no GPU or windowing code lives
//! here.

pub mod ambient;
pub mod artifacts;
pub mod building;
pub mod constants;
pub mod layout;
pub mod point_cloud;
pub mod rng;
pub mod scene;
pub mod streets;
pub mod traffic;

pub use ambient::{NetworkField, SparkleField};
pub use artifacts::ArtifactField;
pub use building::BuildingCloud;
pub use layout::{generate_layout, Building};
pub use point_cloud::PointCloud;
pub use rng::{CityRng, RandomSource};
pub use scene::{CityScene, SceneParams};
pub use streets::{street_grid, StreetSegment};
pub use traffic::{FlowingParticle, Trail};
