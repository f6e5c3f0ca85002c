use super::{ConvexShape, Projection, Shape};
use crate::collision::AABB;
use crate::error::PhysicsError;
use crate::math::{Transform, Vec2};

/// A convex polygon given by its vertices relative to the body center.
///
/// The vertex list is fixed at construction. World coordinates are derived on
/// demand by rotating each vertex by the body orientation and translating it
/// by the body center.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    /// Creates a polygon from local vertices, ordered consistently around the
    /// outline. Convexity is assumed, not checked.
    pub fn new(vertices: Vec<Vec2>) -> Result<Self, PhysicsError> {
        if vertices.len() < 3 {
            return Err(PhysicsError::TooFewVertices(vertices.len()));
        }
        if let Some((index, &vertex)) = vertices.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(PhysicsError::NonFiniteVertex { index, vertex });
        }
        Ok(Polygon { vertices })
    }

    /// Axis-aligned rectangle centered on the local origin, counter-clockwise.
    pub fn rectangle(half_width: f64, half_height: f64) -> Result<Self, PhysicsError> {
        Self::new(vec![
            Vec2::new(-half_width, -half_height),
            Vec2::new(half_width, -half_height),
            Vec2::new(half_width, half_height),
            Vec2::new(-half_width, half_height),
        ])
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Area by the shoelace formula.
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        let twice_area: f64 = (0..n)
            .map(|i| self.vertices[i].cross(self.vertices[(i + 1) % n]))
            .sum();
        (twice_area / 2.0).abs()
    }

    /// Centroid of the enclosed area. Falls back to the vertex average for
    /// degenerate (collinear) outlines.
    pub fn centroid(&self) -> Vec2 {
        let origin = self.vertices[0];
        let mut weighted = Vec2::ZERO;
        let mut signed_area_sum = 0.0;

        for pair in self.vertices[1..].windows(2) {
            let (v2, v3) = (pair[0], pair[1]);
            let tri_area = (v2 - origin).cross(v3 - origin) / 2.0;
            signed_area_sum += tri_area;
            weighted += (origin + v2 + v3) / 3.0 * tri_area;
        }

        if signed_area_sum.abs() < 1e-10 {
            let sum = self.vertices.iter().fold(Vec2::ZERO, |acc, &v| acc + v);
            sum / self.vertices.len() as f64
        } else {
            weighted / signed_area_sum
        }
    }
}

impl ConvexShape for Polygon {
    fn world_vertices(&self, pose: Transform) -> Vec<Vec2> {
        self.vertices.iter().map(|&v| pose.apply(v)).collect()
    }

    fn aabb(&self, pose: Transform) -> AABB {
        let world = self.world_vertices(pose);
        AABB::from_points(&world).unwrap_or_else(|| AABB::new(pose.position, pose.position))
    }

    /// One axis per edge: the edge arriving at each vertex, turned by 90
    /// degrees and normalized.
    fn collision_axes(&self, pose: Transform, _other: &Shape, _other_pose: Transform) -> Vec<Vec2> {
        let world = self.world_vertices(pose);
        let n = world.len();
        (0..n)
            .map(|i| {
                let prev = world[(i + n - 1) % n];
                (world[i] - prev).perpendicular().normalize()
            })
            .collect()
    }

    fn project_onto_axis(&self, pose: Transform, axis: Vec2) -> Projection {
        let mut min_proj = f64::INFINITY;
        let mut max_proj = f64::NEG_INFINITY;
        for &local in &self.vertices {
            let projection = pose.apply(local).dot(axis);
            min_proj = min_proj.min(projection);
            max_proj = max_proj.max(projection);
        }
        Projection::new(min_proj, max_proj)
    }

    /// Nearest world vertex to `point`.
    fn closest_feature(&self, pose: Transform, point: Vec2) -> Vec2 {
        self.world_vertices(pose)
            .into_iter()
            .min_by(|a, b| a.distance_squared(point).total_cmp(&b.distance_squared(point)))
            .unwrap_or(pose.position)
    }

    fn contains_local_point(&self, point: Vec2) -> bool {
        let n = self.vertices.len();
        let mut sign = 0.0_f64;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let side = (b - a).cross(point - a);
            if side == 0.0 {
                continue;
            }
            if sign == 0.0 {
                sign = side.signum();
            } else if side.signum() != sign {
                return false;
            }
        }
        true
    }
}
