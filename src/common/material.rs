//! Surface properties of a body.

/// Ground-friction settings used by the integrator.
///
/// Friction here models a body sliding on the plane of the simulation (a
/// top-down world): it acts against the body's own velocity, not between
/// colliding bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Material {
    pub friction_enabled: bool,
    /// Fraction of the body's weight a force must reach to move it from rest.
    pub static_friction: f64,
    /// Fraction of the body's weight that opposes motion while sliding.
    pub dynamic_friction: f64,
}

impl Material {
    pub fn new(static_friction: f64, dynamic_friction: f64) -> Self {
        Material {
            friction_enabled: true,
            static_friction: static_friction.max(0.0),
            dynamic_friction: dynamic_friction.max(0.0),
        }
    }

    /// A material with friction switched off.
    pub fn frictionless() -> Self {
        Material {
            friction_enabled: false,
            ..Material::default()
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Material {
            friction_enabled: true,
            static_friction: 0.3,
            dynamic_friction: 0.3,
        }
    }
}
