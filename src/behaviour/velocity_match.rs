//! Velocity matching.

use crate::constants::VELOCITY_MATCH_TIME_TO_TARGET;
use crate::kinematic::Kinematic;
use crate::steering::SteeringOutput;
use crate::target::Target;
use crate::vector_math::clamp_magnitude;

use super::{resolve_target, SteeringBehaviour};

/// Accelerates so the character's velocity converges on the target's.
///
/// The limit check compares the acceleration's magnitude with
/// `max_acceleration` directly (not its square), matching every other
/// behaviour's clamp.
#[derive(Clone, Debug, PartialEq)]
pub struct VelocityMatch {
    /// Whose velocity to match.
    pub target: Target,
    /// Upper bound on the produced acceleration.
    pub max_acceleration: f32,
    /// Seconds over which the velocity gap is closed.
    pub time_to_target: f32,
}

impl VelocityMatch {
    /// Velocity match with the default response time.
    #[must_use]
    pub fn new(target: impl Into<Target>, max_acceleration: f32) -> Self {
        Self {
            target: target.into(),
            max_acceleration,
            time_to_target: VELOCITY_MATCH_TIME_TO_TARGET,
        }
    }
}

impl SteeringBehaviour for VelocityMatch {
    fn compute_steering(&mut self, character: &Kinematic, agents: &[Kinematic]) -> SteeringOutput {
        let Some(target) = resolve_target("velocity_match", &self.target, agents) else {
            return SteeringOutput::ZERO;
        };
        let linear = (target.velocity - character.velocity) / self.time_to_target;
        SteeringOutput::linear(clamp_magnitude(linear, self.max_acceleration))
    }

    fn name(&self) -> &'static str {
        "velocity_match"
    }
}
