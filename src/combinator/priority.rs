//! Ordered fallback between behaviours.

use log::debug;

use crate::behaviour::SteeringBehaviour;
use crate::constants::DEFAULT_PRIORITY_EPSILON;
use crate::kinematic::Kinematic;
use crate::steering::SteeringOutput;

/// Uses the first child that asks for a meaningful acceleration.
///
/// Children are tried in order. The first whose output has a squared
/// magnitude above `epsilon²` wins and is remembered as
/// [`last_used`](Self::last_used). If none qualifies, the last child's output
/// is returned as-is and the remembered child does not change.
#[derive(Debug)]
pub struct PrioritySteering {
    behaviours: Vec<Box<dyn SteeringBehaviour>>,
    /// Threshold below which an output counts as "nothing to do".
    pub epsilon: f32,
    last_used: Option<usize>,
}

impl Default for PrioritySteering {
    fn default() -> Self {
        Self::new(DEFAULT_PRIORITY_EPSILON)
    }
}

impl PrioritySteering {
    /// An empty priority list.
    #[must_use]
    pub const fn new(epsilon: f32) -> Self {
        Self {
            behaviours: Vec::new(),
            epsilon,
            last_used: None,
        }
    }

    /// Appends `behaviour` at the lowest priority so far.
    #[must_use]
    pub fn with(mut self, behaviour: impl SteeringBehaviour + 'static) -> Self {
        self.push(Box::new(behaviour));
        self
    }

    /// Appends an already boxed behaviour.
    pub fn push(&mut self, behaviour: Box<dyn SteeringBehaviour>) {
        self.behaviours.push(behaviour);
    }

    /// Index of the child that last produced a significant output.
    #[must_use]
    pub const fn last_used(&self) -> Option<usize> {
        self.last_used
    }

    /// The child that last produced a significant output.
    #[must_use]
    pub fn last_used_behaviour(&self) -> Option<&dyn SteeringBehaviour> {
        self.last_used
            .and_then(|index| self.behaviours.get(index))
            .map(|behaviour| &**behaviour)
    }
}

impl SteeringBehaviour for PrioritySteering {
    fn compute_steering(&mut self, character: &Kinematic, agents: &[Kinematic]) -> SteeringOutput {
        let threshold = self.epsilon * self.epsilon;
        let mut output = SteeringOutput::ZERO;
        for (index, behaviour) in self.behaviours.iter_mut().enumerate() {
            output = behaviour.compute_steering(character, agents);
            if output.square_magnitude() > threshold {
                if self.last_used != Some(index) {
                    debug!("priority switched to {} (#{index})", behaviour.name());
                }
                self.last_used = Some(index);
                return output;
            }
        }
        output
    }

    fn name(&self) -> &'static str {
        "priority"
    }
}
