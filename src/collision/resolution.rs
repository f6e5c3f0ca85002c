use super::manifold::CollisionManifold;
use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;

/// Restitution used when resolving every contact.
pub const RESTITUTION: f64 = 0.4;

/// Resolves one confirmed contact: first pushes the bodies apart, then
/// exchanges momentum along the contact normal.
pub fn resolve(
    a: &mut RigidBody,
    b: &mut RigidBody,
    manifold: &CollisionManifold,
    restitution: f64,
) {
    correct_positions(a, b, manifold);
    apply_impulse(a, b, manifold.normal, restitution);
}

/// Removes the penetration along the manifold normal. Two movable bodies
/// each take half of the depth; against a static body the movable one only
/// moves by half.
pub fn correct_positions(a: &mut RigidBody, b: &mut RigidBody, manifold: &CollisionManifold) {
    let half = manifold.normal * (manifold.depth / 2.0);

    match (a.is_static(), b.is_static()) {
        (false, false) => {
            a.translate(half);
            b.translate(-half);
        }
        (true, false) => b.translate(-half),
        (false, true) => a.translate(half),
        (true, true) => {
            debug_assert!(false, "static pair reached collision resolution");
            log::warn!("skipping positional correction of two static bodies");
        }
    }
}

/// Impulse along `normal` (pointing from `b` toward `a`) scaled by
/// `1 + restitution`. Bodies with zero inverse mass are unaffected; when
/// both have zero inverse mass nothing happens.
pub fn apply_impulse(a: &mut RigidBody, b: &mut RigidBody, normal: Vec2, restitution: f64) {
    let inv_mass_a = a.inverse_mass();
    let inv_mass_b = b.inverse_mass();
    let total_inv_mass = inv_mass_a + inv_mass_b;
    if total_inv_mass == 0.0 {
        log::trace!("both bodies have infinite mass, no impulse");
        return;
    }

    let relative_velocity = a.linear_velocity() - b.linear_velocity();
    let j = -(1.0 + restitution) * relative_velocity.dot(normal) / total_inv_mass;

    log::trace!("impulse j={j:.4} along {normal:?}");

    a.set_linear_velocity(a.linear_velocity() + normal * (j * inv_mass_a));
    b.set_linear_velocity(b.linear_velocity() - normal * (j * inv_mass_b));
}
