use std::collections::HashSet;

use super::manifold::CollisionManifold;
use super::quad_tree::QuadTree;
use super::AABB;
use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;

/// Collects candidate pairs for the narrow phase.
///
/// `aabbs[i]` must be the current box of `bodies[i]`, and `index` must hold
/// every body under its slice index. Each pair is reported once, as
/// `(lower, higher)` index, in discovery order. Pairs of two static bodies
/// and pairs whose boxes do not overlap are dropped.
pub fn broad_phase(
    bodies: &[RigidBody],
    aabbs: &[AABB],
    index: &QuadTree,
) -> Vec<(usize, usize)> {
    debug_assert_eq!(bodies.len(), aabbs.len());

    let mut pairs = Vec::new();
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for (i, body) in bodies.iter().enumerate() {
        candidates.clear();
        index.retrieve_into(&aabbs[i], &mut candidates);

        for &j in &candidates {
            if i == j {
                continue;
            }
            let pair = (i.min(j), i.max(j));
            if seen.contains(&pair) {
                continue;
            }
            if body.is_static() && bodies[j].is_static() {
                continue;
            }
            if !aabb_intersects(&aabbs[i], &aabbs[j]) {
                continue;
            }
            seen.insert(pair);
            pairs.push(pair);
        }
    }
    pairs
}

/// Inclusive overlap of two boxes on both axes.
pub fn aabb_intersects(a: &AABB, b: &AABB) -> bool {
    a.intersects(b)
}

/// Separating axis test between two convex bodies.
///
/// Tests every axis from `a` against `b` and from `b` against `a`. The first
/// axis on which the projections do not overlap ends the test. Otherwise the
/// axis with the smallest overlap becomes the normal, turned to point from
/// `b` toward `a`.
pub fn intersects(a: &RigidBody, b: &RigidBody) -> CollisionManifold {
    let axes = a.collision_axes(b).into_iter().chain(b.collision_axes(a));

    let mut min_depth = f64::MAX;
    let mut min_axis = None;

    for axis in axes {
        // zero axes come from degenerate edges
        if axis == Vec2::ZERO {
            continue;
        }
        let proj_a = a.project_onto_axis(axis);
        let proj_b = b.project_onto_axis(axis);

        if !proj_a.overlaps(&proj_b) {
            return CollisionManifold::SEPARATED;
        }

        let depth = proj_a.overlap_depth(&proj_b);
        if depth < min_depth {
            min_depth = depth;
            min_axis = Some(if proj_a.max < proj_b.max { -axis } else { axis });
        }
    }

    match min_axis {
        Some(normal) => CollisionManifold::contact(min_depth, normal),
        None => CollisionManifold::SEPARATED,
    }
}
