//! Weighted blending of several behaviours.

use log::trace;

use crate::behaviour::SteeringBehaviour;
use crate::kinematic::Kinematic;
use crate::steering::SteeringOutput;

/// A child behaviour and its share of the blend.
#[derive(Debug)]
pub struct BehaviourAndWeight {
    /// The child behaviour.
    pub behaviour: Box<dyn SteeringBehaviour>,
    /// Non-negative weight.
    pub weight: f32,
}

/// Weighted average of every child's output.
///
/// Scaling all weights by the same positive factor leaves the result
/// unchanged. With no children, or a total weight of zero, the output is
/// zero.
#[derive(Debug, Default)]
pub struct BlendedSteering {
    behaviours: Vec<BehaviourAndWeight>,
}

impl BlendedSteering {
    /// An empty blend.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            behaviours: Vec::new(),
        }
    }

    /// Appends `behaviour` with `weight`.
    #[must_use]
    pub fn with(mut self, behaviour: impl SteeringBehaviour + 'static, weight: f32) -> Self {
        self.push(Box::new(behaviour), weight);
        self
    }

    /// Appends an already boxed behaviour.
    pub fn push(&mut self, behaviour: Box<dyn SteeringBehaviour>, weight: f32) {
        debug_assert!(weight >= 0.0, "blend weights must be non-negative, got {weight}");
        self.behaviours.push(BehaviourAndWeight { behaviour, weight });
    }

    /// The children in blending order.
    #[must_use]
    pub fn behaviours(&self) -> &[BehaviourAndWeight] {
        &self.behaviours
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total_weight(&self) -> f32 {
        self.behaviours.iter().map(|child| child.weight).sum()
    }
}

impl SteeringBehaviour for BlendedSteering {
    fn compute_steering(&mut self, character: &Kinematic, agents: &[Kinematic]) -> SteeringOutput {
        let mut accumulated = SteeringOutput::ZERO;
        let mut total_weight = 0.0;
        for child in &mut self.behaviours {
            let output = child.behaviour.compute_steering(character, agents);
            trace!("blend child {} -> {output:?} x {}", child.behaviour.name(), child.weight);
            accumulated += output * child.weight;
            total_weight += child.weight;
        }

        if total_weight > 0.0 {
            accumulated * total_weight.recip()
        } else {
            SteeringOutput::ZERO
        }
    }

    fn name(&self) -> &'static str {
        "blended"
    }
}
