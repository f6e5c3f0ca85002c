use crate::math::vec2::Vec2;

/// Errors raised while building shapes, bodies or worlds, or when addressing
/// a body that is not registered.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("a polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("polygon vertex {index} is not finite: {vertex:?}")]
    NonFiniteVertex { index: usize, vertex: Vec2 },
    #[error("circle radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
    #[error("dynamic body mass must be positive and finite, got {0}")]
    InvalidMass(f64),
    #[error("world bounds must have a positive, finite extent")]
    InvalidBounds,
    #[error("quad-tree node capacity must be at least 1")]
    InvalidCapacity,
    #[error("no rigid body registered under id {0:?}")]
    UnknownBody(String),
}
