pub mod aabb;
pub mod detection;
pub mod manifold;
pub mod quad_tree;
pub mod resolution;

// Re-export key types
pub use aabb::AABB;
pub use detection::{aabb_intersects, broad_phase, intersects};
pub use manifold::CollisionManifold;
pub use quad_tree::{QuadTree, QuadTreeConfig};
pub use resolution::{resolve, RESTITUTION};
