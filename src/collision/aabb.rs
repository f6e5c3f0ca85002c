use crate::math::vec2::Vec2;

/// An axis-aligned bounding box given by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub struct AABB {
    pub min: Vec2,
    pub max: Vec2,
}

impl AABB {
    /// Creates a box from two opposite corners in any order.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        AABB {
            min: Vec2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vec2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// A box of the given size centered on `center`.
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Smallest box enclosing every point, or `None` for an empty slice.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut aabb = AABB { min: *first, max: *first };
        for p in rest {
            aabb.min.x = aabb.min.x.min(p.x);
            aabb.min.y = aabb.min.y.min(p.y);
            aabb.max.x = aabb.max.x.max(p.x);
            aabb.max.y = aabb.max.y.max(p.y);
        }
        Some(aabb)
    }

    /// Overlap test on both axes with inclusive bounds: boxes that only
    /// touch along an edge or corner intersect.
    pub fn intersects(&self, other: &AABB) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// True when `other` lies entirely inside this box.
    pub fn contains(&self, other: &AABB) -> bool {
        self.min.x <= other.min.x
            && self.min.y <= other.min.y
            && other.max.x <= self.max.x
            && other.max.y <= self.max.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(cx: f64, cy: f64, half: f64) -> AABB {
        AABB::from_center(Vec2::new(cx, cy), Vec2::new(half, half))
    }

    #[test]
    fn test_new_orders_corners() {
        let aabb = AABB::new(Vec2::new(3.0, -1.0), Vec2::new(-2.0, 4.0));
        assert_eq!(aabb.min, Vec2::new(-2.0, -1.0));
        assert_eq!(aabb.max, Vec2::new(3.0, 4.0));
        assert_eq!(aabb.width(), 5.0);
        assert_eq!(aabb.height(), 5.0);
        assert_eq!(aabb.center(), Vec2::new(0.5, 1.5));
    }

    #[test]
    fn test_from_points() {
        assert!(AABB::from_points(&[]).is_none());
        let aabb = AABB::from_points(&[
            Vec2::new(1.0, 5.0),
            Vec2::new(-3.0, 2.0),
            Vec2::new(0.0, -1.0),
        ])
        .unwrap();
        assert_eq!(aabb.min, Vec2::new(-3.0, -1.0));
        assert_eq!(aabb.max, Vec2::new(1.0, 5.0));
    }

    #[test]
    fn test_intersects() {
        let a = square(0.0, 0.0, 10.0);
        assert!(a.intersects(&square(15.0, 0.0, 10.0)));
        assert!(!a.intersects(&square(25.0, 0.0, 10.0)));
        assert!(!a.intersects(&square(0.0, 25.0, 10.0)));
    }

    #[test]
    fn test_intersects_is_inclusive() {
        let a = square(0.0, 0.0, 10.0);
        let touching = square(20.0, 20.0, 10.0);
        assert!(a.intersects(&touching));
        assert!(touching.intersects(&a));
    }

    #[test]
    fn test_contains() {
        let outer = square(0.0, 0.0, 10.0);
        assert!(outer.contains(&square(2.0, 2.0, 3.0)));
        assert!(outer.contains(&outer));
        assert!(!outer.contains(&square(8.0, 0.0, 3.0)));
    }
}
