use super::{ConvexShape, Projection, Shape};
use crate::collision::AABB;
use crate::error::PhysicsError;
use crate::math::{Transform, Vec2};

/// A circle centered on the body center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self, PhysicsError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(PhysicsError::InvalidRadius(radius));
        }
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl ConvexShape for Circle {
    fn world_vertices(&self, _pose: Transform) -> Vec<Vec2> {
        Vec::new()
    }

    fn aabb(&self, pose: Transform) -> AABB {
        let extent = Vec2::new(self.radius, self.radius);
        AABB::new(pose.position - extent, pose.position + extent)
    }

    /// A single axis from the circle center toward the nearest feature of the
    /// other shape.
    fn collision_axes(&self, pose: Transform, other: &Shape, other_pose: Transform) -> Vec<Vec2> {
        let feature = other.closest_feature(other_pose, pose.position);
        let axis = (feature - pose.position).normalize();
        if axis == Vec2::ZERO {
            // concentric, any direction separates equally badly
            vec![Vec2::UP]
        } else {
            vec![axis]
        }
    }

    fn project_onto_axis(&self, pose: Transform, axis: Vec2) -> Projection {
        let center = pose.position.dot(axis);
        let reach = self.radius * axis.magnitude();
        Projection::new(center - reach, center + reach)
    }

    fn closest_feature(&self, pose: Transform, _point: Vec2) -> Vec2 {
        pose.position
    }

    fn contains_local_point(&self, point: Vec2) -> bool {
        point.magnitude_squared() <= self.radius * self.radius
    }
}
