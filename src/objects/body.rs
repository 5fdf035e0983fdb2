use crate::math::vec2::Vec2;
use crate::shapes::Hitbox;
use crate::world::config::DEFAULT_DAMPING;
use std::f64::consts::TAU;

/// A rigid body: the physical subject of simulation.
///
/// Created by gameplay code, mutated by the integrator and by collision
/// response callbacks, and removed from the simulation set at the end of
/// the substep in which `marked_for_removal` was set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Body {
    /// Logical world position.
    pub position: Vec2,
    /// Velocity in units per second.
    pub velocity: Vec2,
    /// Facing angle in radians, kept normalized to `[0, 2*pi)`.
    pub rotation: f64,
    /// Mass; `f64::INFINITY` for immovable bodies. Zero or negative mass is
    /// an input-contract violation and force/mass operations ignore it.
    pub mass: f64,
    /// Upper bound on `|angle|` per `rotate_by` call; negative means
    /// unconstrained.
    pub max_rotation_speed: f64,
    /// Per-second velocity retention factor in `[0, 1]`; 1 keeps velocity
    /// unchanged.
    pub damping: f64,
    pub hitbox: Option<Hitbox>,
    /// Bodies with this cleared skip the pairwise collision scan entirely.
    pub collides: bool,
    /// Deferred-removal flag, applied at the end of the current substep.
    pub marked_for_removal: bool,
}

impl Body {
    /// A unit-mass body at `position` with default motion parameters.
    pub fn new(position: Vec2, hitbox: Option<Hitbox>) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            mass: 1.0,
            max_rotation_speed: -1.0,
            damping: DEFAULT_DAMPING,
            hitbox,
            collides: true,
            marked_for_removal: false,
        }
    }

    /// An infinite-mass body: absorbs any finite force with zero velocity
    /// change.
    pub fn immovable(position: Vec2, hitbox: Option<Hitbox>) -> Self {
        Self {
            mass: f64::INFINITY,
            ..Self::new(position, hitbox)
        }
    }

    /// Applies an instantaneous force: `velocity += f / mass`. A
    /// non-positive mass makes this a no-op.
    pub fn apply_force(&mut self, force: Vec2) {
        if self.mass <= 0.0 {
            return;
        }
        self.velocity += force / self.mass;
    }

    /// Changes the mass while preserving momentum: velocity is rescaled by
    /// `mass / new_mass` when that ratio is finite. A non-positive
    /// `new_mass` is ignored.
    pub fn change_mass(&mut self, new_mass: f64) {
        if new_mass <= 0.0 {
            return;
        }
        let ratio = self.mass / new_mass;
        if ratio.is_finite() {
            self.velocity = self.velocity * ratio;
        }
        self.mass = new_mass;
    }

    /// Rotates by `angle`, clamped to `max_rotation_speed` when that field
    /// is non-negative. The stored rotation stays in `[0, 2*pi)`.
    pub fn rotate_by(&mut self, angle: f64) {
        let applied = if self.max_rotation_speed >= 0.0 {
            angle.clamp(-self.max_rotation_speed, self.max_rotation_speed)
        } else {
            angle
        };
        self.rotation = wrap_angle(self.rotation + applied);
    }

    /// Turns toward `target` by at most one clamped rotation step. Repeated
    /// calls converge gradually instead of snapping.
    pub fn rotate_to_point(&mut self, target: Vec2) {
        let to_target = target - self.position;
        if to_target == Vec2::ZERO {
            return;
        }
        self.rotate_by(self.facing().angle_to(to_target));
    }

    /// Unit vector pointing along the current rotation.
    pub fn facing(&self) -> Vec2 {
        Vec2::from_angle(self.rotation)
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    /// Flags this body for removal at the end of the current substep.
    pub fn mark_for_removal(&mut self) {
        self.marked_for_removal = true;
    }
}

/// Wraps an angle in radians to `[0, 2*pi)`.
fn wrap_angle(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}
