use crate::math::vec2::Vec2;

/// Result of the narrow-phase test for one pair of bodies.
///
/// `normal` lies along the axis of least penetration and points from body B
/// toward body A, so moving A along `+normal` reduces the overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionManifold {
    pub colliding: bool,
    pub depth: f64,
    pub normal: Vec2,
}

impl CollisionManifold {
    /// The manifold of a pair that does not touch.
    pub const SEPARATED: CollisionManifold = CollisionManifold {
        colliding: false,
        depth: 0.0,
        normal: Vec2::ZERO,
    };

    pub fn contact(depth: f64, normal: Vec2) -> Self {
        Self {
            colliding: true,
            depth,
            normal,
        }
    }
}
