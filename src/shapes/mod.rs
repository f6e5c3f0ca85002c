pub mod circle;
pub mod polygon;

pub use circle::Circle;
pub use polygon::Polygon;

use crate::collision::AABB;
use crate::math::{Transform, Vec2};

/// The interval a shape covers when projected onto an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub min: f64,
    pub max: f64,
}

impl Projection {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True when the open intervals overlap. Touching intervals do not.
    pub fn overlaps(&self, other: &Projection) -> bool {
        !(self.max <= other.min || other.max <= self.min)
    }

    /// Length of the shared part of both intervals.
    pub fn overlap_depth(&self, other: &Projection) -> f64 {
        (self.max.min(other.max) - self.min.max(other.min)).abs()
    }
}

/// Geometry queries the collision pipeline needs from a convex shape placed
/// at some pose.
pub trait ConvexShape {
    /// Shape vertices in world space, in construction order. Curved shapes
    /// have none.
    fn world_vertices(&self, pose: Transform) -> Vec<Vec2>;

    fn aabb(&self, pose: Transform) -> AABB;

    /// Candidate separating axes this shape contributes when tested against
    /// `other`. Axes are unit length.
    fn collision_axes(&self, pose: Transform, other: &Shape, other_pose: Transform) -> Vec<Vec2>;

    fn project_onto_axis(&self, pose: Transform, axis: Vec2) -> Projection;

    /// The feature of this shape nearest to `point`, in world space.
    fn closest_feature(&self, pose: Transform, point: Vec2) -> Vec2;

    /// Point-in-shape test in the shape's local frame, boundary inclusive.
    fn contains_local_point(&self, point: Vec2) -> bool;
}

/// The geometric shape carried by a rigid body.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Polygon(Polygon),
    Circle(Circle),
}

impl ConvexShape for Shape {
    fn world_vertices(&self, pose: Transform) -> Vec<Vec2> {
        match self {
            Shape::Polygon(p) => p.world_vertices(pose),
            Shape::Circle(c) => c.world_vertices(pose),
        }
    }

    fn aabb(&self, pose: Transform) -> AABB {
        match self {
            Shape::Polygon(p) => p.aabb(pose),
            Shape::Circle(c) => c.aabb(pose),
        }
    }

    fn collision_axes(&self, pose: Transform, other: &Shape, other_pose: Transform) -> Vec<Vec2> {
        match self {
            Shape::Polygon(p) => p.collision_axes(pose, other, other_pose),
            Shape::Circle(c) => c.collision_axes(pose, other, other_pose),
        }
    }

    fn project_onto_axis(&self, pose: Transform, axis: Vec2) -> Projection {
        match self {
            Shape::Polygon(p) => p.project_onto_axis(pose, axis),
            Shape::Circle(c) => c.project_onto_axis(pose, axis),
        }
    }

    fn closest_feature(&self, pose: Transform, point: Vec2) -> Vec2 {
        match self {
            Shape::Polygon(p) => p.closest_feature(pose, point),
            Shape::Circle(c) => c.closest_feature(pose, point),
        }
    }

    fn contains_local_point(&self, point: Vec2) -> bool {
        match self {
            Shape::Polygon(p) => p.contains_local_point(point),
            Shape::Circle(c) => c.contains_local_point(point),
        }
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}
