use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;

/// Gravitational acceleration used to turn friction coefficients into forces.
pub const GRAVITY: f64 = 9.81;

/// Advances one body by `dt` with semi-implicit Euler, then clears its
/// pending force.
///
/// With friction enabled a resting body stays put while the applied force is
/// below its static-friction threshold; a moving body gets a kinetic friction
/// force against its velocity. When a single step's velocity change is larger
/// than the current speed, the velocity is zeroed before the change is added.
/// Orientation is not integrated.
pub fn integrate(body: &mut RigidBody, dt: f64) {
    if body.is_static {
        body.clear_force();
        return;
    }

    let material = body.material;
    if material.friction_enabled {
        let weight = body.mass * GRAVITY;
        let at_rest = body.linear_velocity == Vec2::ZERO;
        if at_rest && body.force.magnitude() < material.static_friction * weight {
            body.clear_force();
            return;
        }
        let kinetic = -body.linear_velocity.normalize() * (material.dynamic_friction * weight);
        body.force += kinetic;
    }

    let delta_v = body.force * (dt / body.mass);
    if body.linear_velocity.magnitude() < delta_v.magnitude() {
        body.linear_velocity = Vec2::ZERO;
    }
    body.linear_velocity += delta_v;

    body.center += body.linear_velocity * dt;
    body.clear_force();
}
