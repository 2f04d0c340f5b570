//! Agent motion state and its integration step.
//!
//! A [`Kinematic`] is advanced once per tick by the simulation loop that owns
//! it. Integration is a plain explicit Euler step followed by exponential drag.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::steering::SteeringOutput;
use crate::vector_math::clamp_magnitude;

/// Position, heading and their rates of change for a single agent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Kinematic {
    /// World-space position.
    pub position: Vec3,
    /// Heading in radians about the y axis, conventionally in `(-PI, PI]`.
    pub orientation: f32,
    /// Linear velocity.
    pub velocity: Vec3,
    /// Angular velocity in radians per second.
    pub rotation: f32,
}

impl Kinematic {
    /// A stationary kinematic at `position`.
    #[must_use]
    pub const fn at(position: Vec3) -> Self {
        Self {
            position,
            orientation: 0.0,
            velocity: Vec3::ZERO,
            rotation: 0.0,
        }
    }

    /// Copy of `self` moving with `velocity`.
    #[must_use]
    pub const fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Copy of `self` facing `orientation`.
    #[must_use]
    pub const fn with_orientation(mut self, orientation: f32) -> Self {
        self.orientation = orientation;
        self
    }

    /// Current linear speed.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Advances the state by `duration` seconds under `steering`.
    ///
    /// Position and orientation move with the velocities from the start of
    /// the step; the velocities then take the requested accelerations. Linear
    /// velocity is finally damped by `drag.powf(duration)`, so a drag in
    /// `(0, 1)` steadily bleeds speed. A zero `duration` changes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use glam::Vec3;
    /// use steering::{Kinematic, SteeringOutput};
    /// let mut agent = Kinematic::at(Vec3::ZERO).with_velocity(Vec3::new(2.0, 0.0, 0.0));
    /// agent.integrate(&SteeringOutput::ZERO, 0.95, 1.0);
    /// assert_eq!(agent.position, Vec3::new(2.0, 0.0, 0.0));
    /// assert!((agent.velocity.x - 1.9).abs() < 1e-6);
    /// ```
    pub fn integrate(&mut self, steering: &SteeringOutput, drag: f32, duration: f32) {
        if duration == 0.0 {
            return;
        }
        self.position += self.velocity * duration;
        self.orientation += self.rotation * duration;

        self.velocity += steering.linear * duration;
        self.velocity *= drag.powf(duration);
        self.rotation += steering.angular * duration;
    }

    /// Points the agent along its direction of travel.
    ///
    /// The orientation becomes `atan2(velocity.z, velocity.x)` whenever the
    /// agent moves at all, so a purely vertical velocity faces along +x. A
    /// stationary agent keeps its orientation.
    pub fn set_orientation_from_velocity(&mut self) {
        if self.velocity.length_squared() > 0.0 {
            self.orientation = self.velocity.z.atan2(self.velocity.x);
        }
    }

    /// Caps the speed at `max_speed` without changing direction.
    pub fn trim_max_speed(&mut self, max_speed: f32) {
        self.velocity = clamp_magnitude(self.velocity, max_speed);
    }
}
