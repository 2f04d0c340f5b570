//! Align: the angular counterpart of arrive.

use crate::constants::{ALIGN_MAX_ROTATION, ALIGN_TIME_TO_TARGET};
use crate::kinematic::Kinematic;
use crate::steering::SteeringOutput;
use crate::target::Target;
use crate::vector_math::wrap_angle;

use super::{resolve_target, SteeringBehaviour};

/// Turns the character to match the target's orientation.
#[derive(Clone, Debug, PartialEq)]
pub struct Align {
    /// Whose orientation to match.
    pub target: Target,
    /// Upper bound on the produced angular acceleration.
    pub max_angular_acceleration: f32,
    /// Angular speed aimed for outside `slow_radius`.
    pub max_rotation: f32,
    /// Angular gap, in radians, that counts as aligned.
    pub target_radius: f32,
    /// Angular gap at which turning starts to slow.
    pub slow_radius: f32,
    /// Seconds over which the rotation gap is closed.
    pub time_to_target: f32,
}

impl Align {
    /// Align with the default maximum rotation and response time.
    #[must_use]
    pub fn new(
        target: impl Into<Target>,
        max_angular_acceleration: f32,
        target_radius: f32,
        slow_radius: f32,
    ) -> Self {
        Self {
            target: target.into(),
            max_angular_acceleration,
            max_rotation: ALIGN_MAX_ROTATION,
            target_radius,
            slow_radius,
            time_to_target: ALIGN_TIME_TO_TARGET,
        }
    }

    /// Shortest signed turn from `from` to `to`, in `(-PI, PI]`.
    #[must_use]
    pub fn rotation_between(from: f32, to: f32) -> f32 {
        wrap_angle(to - from)
    }
}

impl SteeringBehaviour for Align {
    fn compute_steering(&mut self, character: &Kinematic, agents: &[Kinematic]) -> SteeringOutput {
        let Some(target) = resolve_target("align", &self.target, agents) else {
            return SteeringOutput::ZERO;
        };
        let rotation = Self::rotation_between(character.orientation, target.orientation);
        let rotation_size = rotation.abs();
        if rotation_size < self.target_radius || rotation_size <= 0.0 {
            return SteeringOutput::ZERO;
        }

        let speed = if rotation_size > self.slow_radius {
            self.max_rotation
        } else {
            self.max_rotation * rotation_size / self.slow_radius
        };
        let target_rotation = speed * rotation.signum();

        let angular = (target_rotation - character.rotation) / self.time_to_target;
        let limit = self.max_angular_acceleration;
        if angular.abs() > limit {
            SteeringOutput::angular(angular.signum() * limit)
        } else {
            SteeringOutput::angular(angular)
        }
    }

    fn name(&self) -> &'static str {
        "align"
    }
}
