//! A small 2D rigid-body simulator for convex shapes.
//!
//! Each [`World::step`] rebuilds a quad-tree over the bodies' bounding boxes,
//! collects candidate pairs, confirms them with the separating axis test and
//! resolves penetration and velocity before integrating every body.

pub mod math;
pub mod objects;
pub mod integration;
pub mod collision;
pub mod shapes;
pub mod world;
pub mod common;
pub mod error;

// Re-export key types for easier use
pub use math::vec2::Vec2;
pub use math::transform::Transform;
pub use objects::rigid_body::RigidBody;
pub use shapes::{Circle, ConvexShape, Polygon, Projection, Shape};
pub use collision::{CollisionManifold, QuadTree, AABB};
pub use world::{BodySnapshot, QuadTreeConfig, StepStats, World, WorldConfig};
pub use common::Material;
pub use error::PhysicsError;
