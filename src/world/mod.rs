pub mod config;
pub mod physics_world;

pub use crate::collision::QuadTreeConfig;
pub use config::WorldConfig;
pub use physics_world::{BodySnapshot, StepStats, World};
