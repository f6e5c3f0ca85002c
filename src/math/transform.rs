use super::vec2::Vec2;

/// A body pose: rotation about the local origin followed by translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    /// Radians, not wrapped.
    pub rotation: f64,
}

impl Transform {
    pub fn new(position: Vec2, rotation: f64) -> Self {
        Self { position, rotation }
    }

    pub fn identity() -> Self {
        Self::new(Vec2::ZERO, 0.0)
    }

    /// Maps a local point into world space.
    pub fn apply(self, point: Vec2) -> Vec2 {
        point.rotate(self.rotation) + self.position
    }

    /// Maps a world point back into local space.
    pub fn apply_inverse(self, point: Vec2) -> Vec2 {
        (point - self.position).rotate(-self.rotation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_transform_apply_identity() {
        let p = Vec2::new(5.0, -3.0);
        let tp = Transform::identity().apply(p);
        assert!((tp.x - p.x).abs() < EPSILON);
        assert!((tp.y - p.y).abs() < EPSILON);
    }

    #[test]
    fn test_transform_apply_rotates_before_translating() {
        let t = Transform::new(Vec2::new(10.0, 5.0), PI / 2.0);
        // (1,0) rotates to (0,1), then shifts to (10,6)
        let tp = t.apply(Vec2::new(1.0, 0.0));
        assert!((tp.x - 10.0).abs() < EPSILON);
        assert!((tp.y - 6.0).abs() < EPSILON);
    }

    #[test]
    fn test_transform_inverse_round_trip() {
        let t = Transform::new(Vec2::new(10.0, 5.0), PI / 4.0);
        let local = Vec2::new(1.0, 1.0);
        let back = t.apply_inverse(t.apply(local));
        assert!((back.x - local.x).abs() < EPSILON);
        assert!((back.y - local.y).abs() < EPSILON);
    }

    #[test]
    fn test_transform_apply_inverse_rotation() {
        let t = Transform::new(Vec2::ZERO, PI / 2.0);
        let local = t.apply_inverse(Vec2::new(-1.0, 0.0));
        assert!(local.x.abs() < EPSILON);
        assert!((local.y - 1.0).abs() < EPSILON);
    }
}
