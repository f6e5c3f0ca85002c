use crate::collision::{QuadTreeConfig, AABB, RESTITUTION};
use crate::math::vec2::Vec2;

/// Half the side length of the default world square.
const DEFAULT_HALF_EXTENT: f64 = 12_500.0;

/// Settings a [`World`](super::World) is created with.
///
/// Every field has a default, so a partial document such as
/// `(restitution: 0.8)` describes a complete configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct WorldConfig {
    /// Region covered by the quad-tree root. Bodies outside it are still
    /// simulated, they just collect at the top of the tree.
    pub bounds: AABB,
    pub quad_tree: QuadTreeConfig,
    /// Coefficient of restitution for every contact.
    pub restitution: f64,
    /// When off, contacts are detected and counted but left unresolved.
    pub resolve_collisions: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        let half = Vec2::new(DEFAULT_HALF_EXTENT, DEFAULT_HALF_EXTENT);
        WorldConfig {
            bounds: AABB::from_center(Vec2::ZERO, half),
            quad_tree: QuadTreeConfig::default(),
            restitution: RESTITUTION,
            resolve_collisions: true,
        }
    }
}
