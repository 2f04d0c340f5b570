//! Wander: seek a target that drifts randomly around the character.

use std::fmt;

use glam::Vec3;

use crate::kinematic::Kinematic;
use crate::random::{RandomSource, RngSource};
use crate::steering::SteeringOutput;
use crate::vector_math::{heading, unit_from_heading};

use super::{seek_point, SteeringBehaviour};

/// Aimless motion driven by a bounded random walk.
///
/// The wander target lives on a circle of radius `volatility` around the
/// character. Every call it is pulled back onto that circle along its current
/// bearing, then nudged on x and z by up to `turn_speed`, and the character
/// seeks it.
pub struct Wander {
    /// Magnitude of the produced acceleration.
    pub max_acceleration: f32,
    /// Radius of the circle the wander target is kept on.
    pub volatility: f32,
    /// Largest random nudge applied to the target per call.
    pub turn_speed: f32,
    wander_target: Option<Vec3>,
    random: Box<dyn RandomSource>,
}

impl Wander {
    /// Wander driven by an entropy-seeded generator.
    #[must_use]
    pub fn new(max_acceleration: f32, volatility: f32, turn_speed: f32) -> Self {
        Self::with_random(
            max_acceleration,
            volatility,
            turn_speed,
            RngSource::from_entropy(),
        )
    }

    /// Wander drawing its perturbations from `random`.
    #[must_use]
    pub fn with_random(
        max_acceleration: f32,
        volatility: f32,
        turn_speed: f32,
        random: impl RandomSource + 'static,
    ) -> Self {
        Self {
            max_acceleration,
            volatility,
            turn_speed,
            wander_target: None,
            random: Box::new(random),
        }
    }

    /// The current wander target, once the first call has seeded it.
    #[must_use]
    pub const fn wander_target(&self) -> Option<Vec3> {
        self.wander_target
    }

    /// Forgets the wander target so the next call reseeds it.
    pub fn reset(&mut self) {
        self.wander_target = None;
    }

    fn next_target(&mut self, character: &Kinematic) -> Vec3 {
        let current = self
            .wander_target
            .unwrap_or_else(|| character.position + Vec3::new(self.volatility, 0.0, 0.0));

        let bearing = heading(current - character.position).unwrap_or(0.0);
        let on_circle = character.position + unit_from_heading(bearing) * self.volatility;

        let nudge = Vec3::new(
            self.random.binomial(self.turn_speed),
            0.0,
            self.random.binomial(self.turn_speed),
        );
        let next = on_circle + nudge;
        self.wander_target = Some(next);
        next
    }
}

impl fmt::Debug for Wander {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wander")
            .field("max_acceleration", &self.max_acceleration)
            .field("volatility", &self.volatility)
            .field("turn_speed", &self.turn_speed)
            .field("wander_target", &self.wander_target)
            .finish_non_exhaustive()
    }
}

impl SteeringBehaviour for Wander {
    fn compute_steering(&mut self, character: &Kinematic, _agents: &[Kinematic]) -> SteeringOutput {
        let target = self.next_target(character);
        seek_point(character, target, self.max_acceleration)
    }

    fn name(&self) -> &'static str {
        "wander"
    }
}
