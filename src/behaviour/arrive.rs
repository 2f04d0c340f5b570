//! Arrive: seek that slows down and stops at the target.

use crate::constants::{ARRIVE_MAX_SPEED, ARRIVE_TIME_TO_TARGET};
use crate::kinematic::Kinematic;
use crate::steering::SteeringOutput;
use crate::target::Target;
use crate::vector_math::{clamp_magnitude, direction_or_zero};

use super::{resolve_target, SteeringBehaviour};

/// Approaches the target and decelerates inside `slow_radius`.
///
/// The desired speed ramps linearly from `max_speed` at `slow_radius` down
/// to zero at the target; inside `target_radius` the behaviour considers
/// itself arrived and requests nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct Arrive {
    /// Where to stop.
    pub target: Target,
    /// Upper bound on the produced acceleration.
    pub max_acceleration: f32,
    /// Distance at which the character counts as arrived.
    pub target_radius: f32,
    /// Distance at which the character starts slowing down.
    pub slow_radius: f32,
    /// Cruising speed outside the slow radius.
    pub max_speed: f32,
    /// Seconds over which the velocity gap is closed.
    pub time_to_target: f32,
}

impl Arrive {
    /// Arrive with the default cruising speed and response time.
    #[must_use]
    pub fn new(
        target: impl Into<Target>,
        max_acceleration: f32,
        target_radius: f32,
        slow_radius: f32,
    ) -> Self {
        Self {
            target: target.into(),
            max_acceleration,
            target_radius,
            slow_radius,
            max_speed: ARRIVE_MAX_SPEED,
            time_to_target: ARRIVE_TIME_TO_TARGET,
        }
    }

    /// Speed the character should be travelling at `distance` from the target.
    #[must_use]
    pub fn desired_speed(&self, distance: f32) -> f32 {
        if distance > self.slow_radius {
            self.max_speed
        } else {
            self.max_speed * distance / self.slow_radius
        }
    }
}

impl SteeringBehaviour for Arrive {
    fn compute_steering(&mut self, character: &Kinematic, agents: &[Kinematic]) -> SteeringOutput {
        let Some(target) = resolve_target("arrive", &self.target, agents) else {
            return SteeringOutput::ZERO;
        };
        let direction = target.position - character.position;
        let distance = direction.length();
        if distance < self.target_radius || distance <= 0.0 {
            return SteeringOutput::ZERO;
        }

        let desired_velocity = direction_or_zero(direction) * self.desired_speed(distance);
        let linear = (desired_velocity - character.velocity) / self.time_to_target;
        SteeringOutput::linear(clamp_magnitude(linear, self.max_acceleration))
    }

    fn name(&self) -> &'static str {
        "arrive"
    }
}
