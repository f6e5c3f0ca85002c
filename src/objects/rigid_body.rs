use crate::collision::AABB;
use crate::common::Material;
use crate::error::PhysicsError;
use crate::math::{Transform, Vec2};
use crate::shapes::{ConvexShape, Projection, Shape};

/// A simulated object: pose, motion state, mass and shape.
///
/// Static bodies never move under forces or collisions and act as infinite
/// mass. Kinematic-static bodies also count as infinite mass in collision
/// response but keep integrating their own velocity, so scripted code can
/// drive them.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    pub(crate) shape: Shape,
    pub(crate) material: Material,

    pub(crate) center: Vec2,
    pub(crate) orientation: f64,
    pub(crate) linear_velocity: Vec2,
    pub(crate) angular_velocity: f64,

    // replaced, not summed, by apply_force
    pub(crate) force: Vec2,

    pub(crate) mass: f64,
    pub(crate) is_static: bool,
    pub(crate) kinematic_static: bool,
}

impl RigidBody {
    /// Mass used by the convenience constructors that take none.
    pub const DEFAULT_MASS: f64 = 50.0;

    /// Creates a dynamic body at rest. `mass` must be positive and finite.
    pub fn new(center: Vec2, shape: impl Into<Shape>, mass: f64) -> Result<Self, PhysicsError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(PhysicsError::InvalidMass(mass));
        }
        Ok(Self::build(center, shape.into(), mass, false))
    }

    /// Creates a static body. It has no usable mass and never moves on its own.
    pub fn new_static(center: Vec2, shape: impl Into<Shape>) -> Self {
        Self::build(center, shape.into(), 0.0, true)
    }

    /// Dynamic polygon body with [`RigidBody::DEFAULT_MASS`].
    pub fn polygon(center: Vec2, vertices: Vec<Vec2>) -> Result<Self, PhysicsError> {
        let polygon = crate::shapes::Polygon::new(vertices)?;
        Self::new(center, polygon, Self::DEFAULT_MASS)
    }

    fn build(center: Vec2, shape: Shape, mass: f64, is_static: bool) -> Self {
        RigidBody {
            shape,
            material: Material::default(),
            center,
            orientation: 0.0,
            linear_velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            force: Vec2::ZERO,
            mass,
            is_static,
            kinematic_static: false,
        }
    }

    pub fn with_orientation(mut self, angle: f64) -> Self {
        self.orientation = angle;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_kinematic_static(mut self, kinematic: bool) -> Self {
        self.kinematic_static = kinematic;
        self
    }

    pub fn with_linear_velocity(mut self, velocity: Vec2) -> Self {
        self.set_linear_velocity(velocity);
        self
    }

    // --- Read access ---

    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Orientation in radians. Accumulates without wrapping.
    pub fn orientation_angle(&self) -> f64 {
        self.orientation
    }

    pub fn linear_velocity(&self) -> Vec2 {
        self.linear_velocity
    }

    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    /// Mass as given at construction; zero for static bodies.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Zero for static and kinematic-static bodies, `1 / mass` otherwise.
    pub fn inverse_mass(&self) -> f64 {
        if self.is_static || self.kinematic_static {
            0.0
        } else {
            1.0 / self.mass
        }
    }

    /// The force waiting to be applied by the next integration.
    pub fn pending_force(&self) -> Vec2 {
        self.force
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_kinematic_static(&self) -> bool {
        self.kinematic_static
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn pose(&self) -> Transform {
        Transform::new(self.center, self.orientation)
    }

    /// Shape vertices in world space: each local vertex rotated by the
    /// orientation, then offset by the center. Empty for circles.
    pub fn world_vertices(&self) -> Vec<Vec2> {
        self.shape.world_vertices(self.pose())
    }

    pub fn aabb(&self) -> AABB {
        self.shape.aabb(self.pose())
    }

    /// Separating-axis candidates this body contributes against `other`.
    pub fn collision_axes(&self, other: &RigidBody) -> Vec<Vec2> {
        self.shape.collision_axes(self.pose(), &other.shape, other.pose())
    }

    pub fn project_onto_axis(&self, axis: Vec2) -> Projection {
        self.shape.project_onto_axis(self.pose(), axis)
    }

    /// Hit test against a world-space point, boundary inclusive.
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.shape.contains_local_point(self.pose().apply_inverse(point))
    }

    // --- Mutation ---

    /// Sets the force for the next integration, replacing any force set
    /// earlier in the same step. Callers combining several forces must sum
    /// them first.
    pub fn apply_force(&mut self, force: Vec2) {
        self.force = force;
    }

    /// Like [`RigidBody::apply_force`] with `force` given in the body frame.
    pub fn apply_force_in_orientation(&mut self, force: Vec2) {
        self.apply_force(force.rotate(self.orientation));
    }

    /// A force of `magnitude` along the body's local x axis.
    pub fn apply_thrust(&mut self, magnitude: f64) {
        self.apply_force_in_orientation(Vec2::new(magnitude, 0.0));
    }

    /// Advances this body alone by `dt`; see [`crate::integration::integrate`].
    pub fn integrate(&mut self, dt: f64) {
        crate::integration::integrate(self, dt);
    }

    /// Moves the center by `delta`. Static bodies ignore this.
    pub fn translate(&mut self, delta: Vec2) {
        if !self.is_static {
            self.center += delta;
        }
    }

    /// Turns the body by `angle`. Static bodies ignore this; use
    /// [`RigidBody::set_orientation_angle`] to place them.
    pub fn rotate_radians(&mut self, angle: f64) {
        if !self.is_static {
            self.orientation += angle;
        }
    }

    pub fn set_orientation_angle(&mut self, angle: f64) {
        self.orientation = angle;
    }

    /// Static bodies keep zero velocity; the call is ignored for them.
    pub fn set_linear_velocity(&mut self, velocity: Vec2) {
        if !self.is_static {
            self.linear_velocity = velocity;
        }
    }

    pub fn set_angular_velocity(&mut self, angular_velocity: f64) {
        if !self.is_static {
            self.angular_velocity = angular_velocity;
        }
    }

    pub fn set_kinematic_static(&mut self, kinematic: bool) {
        self.kinematic_static = kinematic;
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    pub(crate) fn clear_force(&mut self) {
        self.force = Vec2::ZERO;
    }
}
