use std::collections::HashMap;

use crate::collision::{self, QuadTree, AABB};
use crate::error::PhysicsError;
use crate::integration::integrator;
use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;
use crate::world::config::WorldConfig;

/// Counters describing the most recent [`World::step`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    pub bodies: usize,
    /// Pairs that survived the broad phase.
    pub candidate_pairs: usize,
    pub narrow_phase_tests: usize,
    /// Pairs the narrow phase confirmed as colliding.
    pub contacts: usize,
}

/// Copy of a body's pose taken between steps, for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct BodySnapshot {
    pub id: String,
    pub center: Vec2,
    pub orientation: f64,
    pub aabb: AABB,
}

/// Owns every body by identifier and advances them together.
///
/// Bodies are stored in a dense arena; the quad-tree and the candidate
/// pairs refer to them by arena index. Removing a body moves the last body
/// into its slot, so indices are only meaningful inside a step.
#[derive(Debug)]
pub struct World {
    bodies: Vec<RigidBody>,
    ids: Vec<String>,
    handles: HashMap<String, usize>,
    index: QuadTree,
    // per-step scratch, parallel to `bodies`
    aabbs: Vec<AABB>,
    config: WorldConfig,
    last_stats: StepStats,
}

impl World {
    /// Creates an empty world. Fails if the bounds have no area or the
    /// quad-tree capacity is zero.
    pub fn new(config: WorldConfig) -> Result<Self, PhysicsError> {
        let index = QuadTree::new(config.bounds, config.quad_tree)?;
        Ok(World {
            bodies: Vec::new(),
            ids: Vec::new(),
            handles: HashMap::new(),
            index,
            aabbs: Vec::new(),
            config,
            last_stats: StepStats::default(),
        })
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Adds `body` under `id`. An existing body with the same id is
    /// replaced and returned.
    pub fn add_rigid_body(&mut self, id: impl Into<String>, body: RigidBody) -> Option<RigidBody> {
        let id = id.into();
        if let Some(&handle) = self.handles.get(&id) {
            log::warn!("replacing rigid body {id:?}");
            return Some(std::mem::replace(&mut self.bodies[handle], body));
        }

        self.handles.insert(id.clone(), self.bodies.len());
        self.ids.push(id);
        self.bodies.push(body);
        None
    }

    /// Removes and returns the body stored under `id`, if any.
    pub fn remove_rigid_body(&mut self, id: &str) -> Option<RigidBody> {
        let handle = self.handles.remove(id)?;
        let body = self.bodies.swap_remove(handle);
        self.ids.swap_remove(handle);

        // the former last body now lives at `handle`
        if let Some(moved) = self.ids.get(handle) {
            self.handles.insert(moved.clone(), handle);
        }
        Some(body)
    }

    pub fn body(&self, id: &str) -> Result<&RigidBody, PhysicsError> {
        self.handles
            .get(id)
            .map(|&h| &self.bodies[h])
            .ok_or_else(|| PhysicsError::UnknownBody(id.to_owned()))
    }

    pub fn body_mut(&mut self, id: &str) -> Result<&mut RigidBody, PhysicsError> {
        match self.handles.get(id) {
            Some(&h) => Ok(&mut self.bodies[h]),
            None => Err(PhysicsError::UnknownBody(id.to_owned())),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.handles.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// All bodies in arena order. The order changes when bodies are removed.
    pub fn rigid_body_list(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub fn rigid_body_map(&self) -> HashMap<&str, &RigidBody> {
        self.iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RigidBody)> + '_ {
        self.ids.iter().map(String::as_str).zip(self.bodies.iter())
    }

    /// Poses of every body, copied out so they can outlive the next step.
    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.iter()
            .map(|(id, body)| BodySnapshot {
                id: id.to_owned(),
                center: body.center(),
                orientation: body.orientation_angle(),
                aabb: body.aabb(),
            })
            .collect()
    }

    pub fn last_step_stats(&self) -> StepStats {
        self.last_stats
    }

    /// Advances the simulation by `dt`.
    ///
    /// Rebuilds the quad-tree, collects candidate pairs, confirms each with
    /// the separating axis test and resolves the contacts, then integrates
    /// every body. `dt` is used as given.
    pub fn step(&mut self, dt: f64) {
        self.rebuild_index();

        let pairs = collision::broad_phase(&self.bodies, &self.aabbs, &self.index);
        let mut stats = StepStats {
            bodies: self.bodies.len(),
            candidate_pairs: pairs.len(),
            ..StepStats::default()
        };

        for (i, j) in pairs {
            let (a, b) = body_pair_mut(&mut self.bodies, i, j);
            stats.narrow_phase_tests += 1;

            let manifold = collision::intersects(a, b);
            if !manifold.colliding {
                continue;
            }
            stats.contacts += 1;
            log::trace!(
                "contact {:?} / {:?}: depth {:.4}, normal {:?}",
                self.ids[i],
                self.ids[j],
                manifold.depth,
                manifold.normal
            );

            if self.config.resolve_collisions {
                collision::resolve(a, b, &manifold, self.config.restitution);
            }
        }

        for body in self.bodies.iter_mut() {
            integrator::integrate(body, dt);
        }

        log::debug!(
            "step dt={dt}: {} bodies, {} candidate pairs, {} contacts",
            stats.bodies,
            stats.candidate_pairs,
            stats.contacts
        );
        self.last_stats = stats;
    }

    fn rebuild_index(&mut self) {
        self.aabbs.clear();
        self.aabbs.extend(self.bodies.iter().map(RigidBody::aabb));

        self.index.clear();
        for (handle, aabb) in self.aabbs.iter().enumerate() {
            self.index.insert(handle, *aabb);
        }
        log::debug!(
            "quad-tree rebuilt: {} entries, {} nodes, depth {}",
            self.index.len(),
            self.index.node_count(),
            self.index.depth()
        );
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(WorldConfig::default())
            .unwrap_or_else(|_| unreachable!("default world config is valid"))
    }
}

/// Two distinct bodies of the arena borrowed mutably at once.
fn body_pair_mut(
    bodies: &mut [RigidBody],
    a: usize,
    b: usize,
) -> (&mut RigidBody, &mut RigidBody) {
    debug_assert_ne!(a, b, "a body cannot collide with itself");
    if a < b {
        let (head, tail) = bodies.split_at_mut(b);
        (&mut head[a], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(a);
        (&mut tail[0], &mut head[b])
    }
}
