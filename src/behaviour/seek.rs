//! Seek and flee: full acceleration towards or away from a target.

use crate::kinematic::Kinematic;
use crate::steering::SteeringOutput;
use crate::target::Target;

use super::{flee_point, resolve_target, seek_point, SteeringBehaviour};

/// Accelerates flat out towards the target's position.
#[derive(Clone, Debug, PartialEq)]
pub struct Seek {
    /// Where to go.
    pub target: Target,
    /// Magnitude of the produced acceleration.
    pub max_acceleration: f32,
}

impl Seek {
    /// Creates a seek towards `target`.
    #[must_use]
    pub fn new(target: impl Into<Target>, max_acceleration: f32) -> Self {
        Self {
            target: target.into(),
            max_acceleration,
        }
    }
}

impl SteeringBehaviour for Seek {
    fn compute_steering(&mut self, character: &Kinematic, agents: &[Kinematic]) -> SteeringOutput {
        resolve_target("seek", &self.target, agents).map_or(SteeringOutput::ZERO, |target| {
            seek_point(character, target.position, self.max_acceleration)
        })
    }

    fn name(&self) -> &'static str {
        "seek"
    }
}

/// Accelerates flat out away from the target's position.
#[derive(Clone, Debug, PartialEq)]
pub struct Flee {
    /// What to run from.
    pub target: Target,
    /// Magnitude of the produced acceleration.
    pub max_acceleration: f32,
}

impl Flee {
    /// Creates a flee from `target`.
    #[must_use]
    pub fn new(target: impl Into<Target>, max_acceleration: f32) -> Self {
        Self {
            target: target.into(),
            max_acceleration,
        }
    }
}

impl SteeringBehaviour for Flee {
    fn compute_steering(&mut self, character: &Kinematic, agents: &[Kinematic]) -> SteeringOutput {
        resolve_target("flee", &self.target, agents).map_or(SteeringOutput::ZERO, |target| {
            flee_point(character, target.position, self.max_acceleration)
        })
    }

    fn name(&self) -> &'static str {
        "flee"
    }
}
