// Quad-tree broad phase over body bounding boxes.

use crate::collision::AABB;
use crate::error::PhysicsError;

/// Split policy of a [`QuadTree`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct QuadTreeConfig {
    /// A leaf splits once it holds more than this many objects.
    pub capacity: usize,
    /// Nodes at this depth never split; extra objects pile up there.
    pub max_depth: u32,
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            capacity: 10,
            max_depth: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quadrant {
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
}

impl Quadrant {
    const ALL: [Quadrant; 4] = [
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
        Quadrant::TopLeft,
        Quadrant::TopRight,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    handle: usize,
    aabb: AABB,
}

#[derive(Debug)]
struct Node {
    bounds: AABB,
    depth: u32,
    objects: Vec<Entry>,
    children: Option<Box<[Node; 4]>>,
}

impl Node {
    fn new(bounds: AABB, depth: u32) -> Self {
        Node {
            bounds,
            depth,
            objects: Vec::new(),
            children: None,
        }
    }

    /// The child quadrant that fully contains `aabb`, or `None` when the box
    /// straddles either midline.
    fn quadrant_of(&self, aabb: &AABB) -> Option<Quadrant> {
        let mid = self.bounds.center();
        let bottom = aabb.max.y < mid.y;
        let top = aabb.min.y > mid.y;
        let left = aabb.max.x < mid.x;
        let right = aabb.min.x > mid.x;

        match (bottom, top, left, right) {
            (true, _, true, _) => Some(Quadrant::BottomLeft),
            (true, _, _, true) => Some(Quadrant::BottomRight),
            (_, true, true, _) => Some(Quadrant::TopLeft),
            (_, true, _, true) => Some(Quadrant::TopRight),
            _ => None,
        }
    }

    fn split(&mut self) {
        let AABB { min, max } = self.bounds;
        let mid = self.bounds.center();
        let depth = self.depth + 1;
        let corner = |x0: f64, y0: f64, x1: f64, y1: f64| {
            Node::new(AABB::new([x0, y0].into(), [x1, y1].into()), depth)
        };
        // same order as Quadrant::ALL
        self.children = Some(Box::new([
            corner(min.x, min.y, mid.x, mid.y),
            corner(mid.x, min.y, max.x, mid.y),
            corner(min.x, mid.y, mid.x, max.y),
            corner(mid.x, mid.y, max.x, max.y),
        ]));
    }

    fn insert(&mut self, entry: Entry, config: &QuadTreeConfig) {
        if let Some(quadrant) = self.quadrant_of(&entry.aabb) {
            if let Some(children) = self.children.as_deref_mut() {
                children[quadrant.index()].insert(entry, config);
                return;
            }
        }

        self.objects.push(entry);

        // internal nodes only ever gain straddlers here, so only a leaf splits
        let overflowing = self.objects.len() > config.capacity && self.depth < config.max_depth;
        if self.children.is_none() && overflowing {
            self.split();
            for entry in std::mem::take(&mut self.objects) {
                let quadrant = self.quadrant_of(&entry.aabb);
                match (quadrant, self.children.as_deref_mut()) {
                    (Some(q), Some(children)) => children[q.index()].insert(entry, config),
                    _ => self.objects.push(entry),
                }
            }
        }
    }

    fn retrieve(&self, aabb: &AABB, out: &mut Vec<usize>) {
        out.extend(self.objects.iter().map(|e| e.handle));

        let Some(children) = self.children.as_deref() else {
            return;
        };
        // A child can only hold boxes strictly on its side of both midlines,
        // so visit each child whose side the query reaches into.
        let mid = self.bounds.center();
        let reaches_bottom = aabb.min.y < mid.y;
        let reaches_top = aabb.max.y > mid.y;
        let reaches_left = aabb.min.x < mid.x;
        let reaches_right = aabb.max.x > mid.x;

        for quadrant in Quadrant::ALL {
            let visit = match quadrant {
                Quadrant::BottomLeft => reaches_bottom && reaches_left,
                Quadrant::BottomRight => reaches_bottom && reaches_right,
                Quadrant::TopLeft => reaches_top && reaches_left,
                Quadrant::TopRight => reaches_top && reaches_right,
            };
            if visit {
                children[quadrant.index()].retrieve(aabb, out);
            }
        }
    }

    fn node_count(&self) -> usize {
        1 + self
            .children
            .as_deref()
            .map_or(0, |c| c.iter().map(Node::node_count).sum())
    }

    fn deepest(&self) -> u32 {
        self.children
            .as_deref()
            .map_or(self.depth, |c| c.iter().map(Node::deepest).max().unwrap_or(self.depth))
    }
}

/// A region quad-tree of body handles keyed by their bounding boxes.
///
/// The tree does not own bodies: it stores integer handles into the world's
/// body arena along with the box each was inserted with. It is meant to be
/// cleared and refilled every step.
#[derive(Debug)]
pub struct QuadTree {
    root: Node,
    config: QuadTreeConfig,
    len: usize,
}

impl QuadTree {
    pub fn new(bounds: AABB, config: QuadTreeConfig) -> Result<Self, PhysicsError> {
        let extent_ok = bounds.width().is_finite()
            && bounds.height().is_finite()
            && bounds.width() > 0.0
            && bounds.height() > 0.0;
        if !extent_ok {
            return Err(PhysicsError::InvalidBounds);
        }
        if config.capacity == 0 {
            return Err(PhysicsError::InvalidCapacity);
        }
        Ok(QuadTree {
            root: Node::new(bounds, 0),
            config,
            len: 0,
        })
    }

    pub fn bounds(&self) -> AABB {
        self.root.bounds
    }

    pub fn config(&self) -> QuadTreeConfig {
        self.config
    }

    /// Drops every stored handle and all child nodes.
    pub fn clear(&mut self) {
        self.root.objects.clear();
        self.root.children = None;
        self.len = 0;
    }

    /// Inserts a handle at the deepest node whose quadrant fully contains
    /// `aabb`. Boxes outside the tree bounds are still accepted.
    pub fn insert(&mut self, handle: usize, aabb: AABB) {
        self.root.insert(Entry { handle, aabb }, &self.config);
        self.len += 1;
    }

    /// Handles of every stored box that may overlap `aabb`. The result is a
    /// superset of the overlapping boxes and may include the query's own
    /// handle.
    pub fn retrieve(&self, aabb: &AABB) -> Vec<usize> {
        let mut out = Vec::new();
        self.retrieve_into(aabb, &mut out);
        out
    }

    /// Like [`QuadTree::retrieve`], appending into a reusable buffer.
    pub fn retrieve_into(&self, aabb: &AABB, out: &mut Vec<usize>) {
        self.root.retrieve(aabb, out);
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Depth of the deepest node currently allocated.
    pub fn depth(&self) -> u32 {
        self.root.deepest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn bounds() -> AABB {
        AABB::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0))
    }

    fn small_box(x: f64, y: f64) -> AABB {
        AABB::from_center(Vec2::new(x, y), Vec2::new(1.0, 1.0))
    }

    #[test]
    fn test_new_validates_bounds_and_capacity() {
        let flat = AABB::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        assert_eq!(
            QuadTree::new(flat, QuadTreeConfig::default()).unwrap_err(),
            PhysicsError::InvalidBounds
        );
        let config = QuadTreeConfig {
            capacity: 0,
            max_depth: 3,
        };
        assert_eq!(
            QuadTree::new(bounds(), config).unwrap_err(),
            PhysicsError::InvalidCapacity
        );
    }

    #[test]
    fn test_quadrant_classification() {
        let node = Node::new(bounds(), 0);
        assert_eq!(node.quadrant_of(&small_box(10.0, 10.0)), Some(Quadrant::BottomLeft));
        assert_eq!(node.quadrant_of(&small_box(90.0, 10.0)), Some(Quadrant::BottomRight));
        assert_eq!(node.quadrant_of(&small_box(10.0, 90.0)), Some(Quadrant::TopLeft));
        assert_eq!(node.quadrant_of(&small_box(90.0, 90.0)), Some(Quadrant::TopRight));
        // straddles the vertical midline
        assert_eq!(node.quadrant_of(&small_box(50.5, 10.0)), None);
        // straddles the horizontal midline
        assert_eq!(node.quadrant_of(&small_box(10.0, 49.5)), None);
        // touching the midline is not strictly inside
        let touching = AABB::new(Vec2::new(40.0, 10.0), Vec2::new(50.0, 20.0));
        assert_eq!(node.quadrant_of(&touching), None);
    }

    #[test]
    fn test_stays_leaf_until_capacity_exceeded() {
        let mut tree = QuadTree::new(bounds(), QuadTreeConfig::default()).unwrap();
        for i in 0..10 {
            tree.insert(i, small_box(5.0 + i as f64 * 9.0, 5.0));
        }
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.root.objects.len(), 10);

        tree.insert(10, small_box(5.0, 95.0));
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.len(), 11);
    }

    #[test]
    fn test_split_redistributes_and_keeps_straddlers() {
        let config = QuadTreeConfig {
            capacity: 2,
            max_depth: 5,
        };
        let mut tree = QuadTree::new(bounds(), config).unwrap();
        tree.insert(0, small_box(10.0, 10.0));
        tree.insert(1, small_box(50.0, 50.0)); // centered on the midpoint
        tree.insert(2, small_box(90.0, 90.0));

        let root_handles: Vec<usize> = tree.root.objects.iter().map(|e| e.handle).collect();
        assert_eq!(root_handles, vec![1]);
        let children = tree.root.children.as_deref().unwrap();
        assert_eq!(children[Quadrant::BottomLeft.index()].objects[0].handle, 0);
        assert_eq!(children[Quadrant::TopRight.index()].objects[0].handle, 2);
        assert!(children[Quadrant::TopLeft.index()].objects.is_empty());
    }

    #[test]
    fn test_straddlers_pile_up_on_split_node() {
        let config = QuadTreeConfig {
            capacity: 2,
            max_depth: 5,
        };
        let mut tree = QuadTree::new(bounds(), config).unwrap();
        tree.insert(0, small_box(10.0, 10.0));
        tree.insert(1, small_box(90.0, 90.0));
        tree.insert(2, small_box(90.0, 10.0));
        assert_eq!(tree.node_count(), 5);

        // all centered on the root midpoint, so none fit a child
        for i in 3..10 {
            tree.insert(i, small_box(50.0, 50.0));
        }
        assert_eq!(tree.node_count(), 5);
        let root_handles: Vec<usize> = tree.root.objects.iter().map(|e| e.handle).collect();
        assert_eq!(root_handles, (3..10).collect::<Vec<_>>());

        let mut found = tree.retrieve(&small_box(10.0, 10.0));
        found.sort_unstable();
        assert_eq!(found, vec![0, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_overflow_at_max_depth_accumulates() {
        let config = QuadTreeConfig {
            capacity: 1,
            max_depth: 2,
        };
        let mut tree = QuadTree::new(bounds(), config).unwrap();
        for i in 0..20 {
            tree.insert(i, small_box(3.0, 3.0));
        }
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.len(), 20);
        let mut found = tree.retrieve(&small_box(3.0, 3.0));
        found.sort_unstable();
        assert_eq!(found, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_clear_drops_children() {
        let config = QuadTreeConfig {
            capacity: 1,
            max_depth: 4,
        };
        let mut tree = QuadTree::new(bounds(), config).unwrap();
        tree.insert(0, small_box(10.0, 10.0));
        tree.insert(1, small_box(90.0, 90.0));
        assert!(tree.node_count() > 1);

        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.node_count(), 1);
        assert!(tree.retrieve(&bounds()).is_empty());
    }

    #[test]
    fn test_retrieve_prunes_far_quadrants() {
        let config = QuadTreeConfig {
            capacity: 1,
            max_depth: 3,
        };
        let mut tree = QuadTree::new(bounds(), config).unwrap();
        tree.insert(0, small_box(10.0, 10.0));
        tree.insert(1, small_box(90.0, 90.0));
        tree.insert(2, small_box(12.0, 12.0));

        let found = tree.retrieve(&small_box(11.0, 11.0));
        assert!(found.contains(&0));
        assert!(found.contains(&2));
        assert!(!found.contains(&1));
    }

    #[test]
    fn test_straddling_query_sees_boxes_stored_below_it() {
        let config = QuadTreeConfig {
            capacity: 1,
            max_depth: 3,
        };
        let mut tree = QuadTree::new(bounds(), config).unwrap();
        tree.insert(0, AABB::new(Vec2::new(45.0, 45.0), Vec2::new(49.0, 49.0)));
        tree.insert(1, small_box(90.0, 90.0));

        let straddler = AABB::new(Vec2::new(48.0, 48.0), Vec2::new(52.0, 52.0));
        assert!(tree.retrieve(&straddler).contains(&0));
    }

    #[test]
    fn test_retrieve_is_superset_of_overlaps() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = QuadTreeConfig {
            capacity: 3,
            max_depth: 5,
        };
        let mut tree = QuadTree::new(bounds(), config).unwrap();

        // some boxes fall partly outside the tree bounds
        let boxes: Vec<AABB> = (0..300)
            .map(|_| {
                let center = Vec2::new(rng.gen_range(-10.0..110.0), rng.gen_range(-10.0..110.0));
                let half = Vec2::new(rng.gen_range(0.1..6.0), rng.gen_range(0.1..6.0));
                AABB::from_center(center, half)
            })
            .collect();
        for (handle, aabb) in boxes.iter().enumerate() {
            tree.insert(handle, *aabb);
        }

        for (b, query) in boxes.iter().enumerate() {
            let found = tree.retrieve(query);
            assert!(found.contains(&b));
            for (c, other) in boxes.iter().enumerate() {
                if query.intersects(other) {
                    assert!(found.contains(&c), "box {c} overlaps {b} but was not retrieved");
                }
            }
        }
    }
}
