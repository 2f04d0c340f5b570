//! Pursue and evade: seek or flee where a moving target is heading.

use glam::Vec3;
use log::trace;

use crate::kinematic::Kinematic;
use crate::steering::SteeringOutput;
use crate::target::Target;

use super::{flee_point, resolve_target, seek_point, SteeringBehaviour};

/// Look-ahead time for intercepting `target`.
///
/// Both `distance` and `speed` are squared magnitudes. When the character is
/// too slow to close the gap within `max_prediction`, the full horizon is
/// used.
fn prediction_time(character: &Kinematic, target: &Kinematic, max_prediction: f32) -> f32 {
    if max_prediction <= 0.0 {
        return 0.0;
    }
    let distance = (target.position - character.position).length_squared();
    let speed = character.velocity.length_squared();
    if speed <= distance / max_prediction {
        max_prediction
    } else {
        distance / speed
    }
}

/// Where `target` will be after the prediction horizon.
fn predicted_position(character: &Kinematic, target: &Kinematic, max_prediction: f32) -> Vec3 {
    let prediction = prediction_time(character, target, max_prediction);
    target.position + target.velocity * prediction
}

/// Seeks the point a moving target is predicted to reach.
#[derive(Clone, Debug, PartialEq)]
pub struct Pursue {
    /// The quarry.
    pub target: Target,
    /// Magnitude of the produced acceleration.
    pub max_acceleration: f32,
    /// Longest look-ahead, in seconds.
    pub max_prediction: f32,
}

impl Pursue {
    /// Creates a pursuit of `target`.
    #[must_use]
    pub fn new(target: impl Into<Target>, max_acceleration: f32, max_prediction: f32) -> Self {
        Self {
            target: target.into(),
            max_acceleration,
            max_prediction,
        }
    }
}

impl SteeringBehaviour for Pursue {
    fn compute_steering(&mut self, character: &Kinematic, agents: &[Kinematic]) -> SteeringOutput {
        let Some(target) = resolve_target("pursue", &self.target, agents) else {
            return SteeringOutput::ZERO;
        };
        let point = predicted_position(character, &target, self.max_prediction);
        trace!("pursue aiming at {point}");
        seek_point(character, point, self.max_acceleration)
    }

    fn name(&self) -> &'static str {
        "pursue"
    }
}

/// Flees the point a moving threat is predicted to reach.
#[derive(Clone, Debug, PartialEq)]
pub struct Evade {
    /// The threat.
    pub target: Target,
    /// Magnitude of the produced acceleration.
    pub max_acceleration: f32,
    /// Longest look-ahead, in seconds.
    pub max_prediction: f32,
}

impl Evade {
    /// Creates an evasion of `target`.
    #[must_use]
    pub fn new(target: impl Into<Target>, max_acceleration: f32, max_prediction: f32) -> Self {
        Self {
            target: target.into(),
            max_acceleration,
            max_prediction,
        }
    }
}

impl SteeringBehaviour for Evade {
    fn compute_steering(&mut self, character: &Kinematic, agents: &[Kinematic]) -> SteeringOutput {
        let Some(target) = resolve_target("evade", &self.target, agents) else {
            return SteeringOutput::ZERO;
        };
        let point = predicted_position(character, &target, self.max_prediction);
        trace!("evade fleeing {point}");
        flee_point(character, point, self.max_acceleration)
    }

    fn name(&self) -> &'static str {
        "evade"
    }
}
