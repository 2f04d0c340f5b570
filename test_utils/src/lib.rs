//! Utility helpers for tests.
//!
//! Builders for common agent states, behaviours with scripted output and a
//! replaying random source, shared by the integration tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use glam::Vec3;
use steering::{Kinematic, RandomSource, SteeringBehaviour, SteeringOutput};

/// A stationary agent at `(x, 0, z)`.
///
/// # Examples
/// ```
/// use test_utils::standing;
/// let agent = standing(1.0, 2.0);
/// assert_eq!(agent.position.z, 2.0);
/// ```
pub fn standing(x: f32, z: f32) -> Kinematic {
    Kinematic::at(Vec3::new(x, 0.0, z))
}

/// An agent at `(x, 0, z)` moving with `(vx, 0, vz)`.
pub fn moving(x: f32, z: f32, vx: f32, vz: f32) -> Kinematic {
    standing(x, z).with_velocity(Vec3::new(vx, 0.0, vz))
}

/// Behaviour that always returns the same output and counts its calls.
///
/// Clones share the call counter, so a test can keep a handle after boxing a
/// clone into a combinator.
#[derive(Clone, Debug, Default)]
pub struct ConstantSteering {
    /// Output returned on every call.
    pub output: SteeringOutput,
    calls: Arc<AtomicUsize>,
}

impl ConstantSteering {
    /// Creates a behaviour always producing `output`.
    pub fn new(output: SteeringOutput) -> Self {
        Self {
            output,
            calls: Arc::default(),
        }
    }

    /// Number of times this behaviour or any clone was asked to steer.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// A behaviour that never asks for anything.
    pub fn idle() -> Self {
        Self::new(SteeringOutput::ZERO)
    }
}

impl SteeringBehaviour for ConstantSteering {
    fn compute_steering(
        &mut self,
        _character: &Kinematic,
        _agents: &[Kinematic],
    ) -> SteeringOutput {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.output
    }

    fn name(&self) -> &'static str {
        "constant"
    }
}

/// Random source that replays fixed unit draws, scaled by the request.
///
/// Once the script runs out it keeps returning zero.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    draws: VecDeque<f32>,
}

impl ScriptedRandom {
    /// Replays `draws` in order. Each should lie in `[-1, 1]`.
    pub fn new(draws: impl IntoIterator<Item = f32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn binomial(&mut self, scale: f32) -> f32 {
        self.draws.pop_front().unwrap_or(0.0) * scale
    }
}

/// Assert that two vectors agree to within `tolerance` on every axis.
///
/// # Panics
/// Panics with both vectors in the message if they differ.
#[track_caller]
pub fn assert_vec3_near(actual: Vec3, expected: Vec3, tolerance: f32) {
    assert!(
        actual.abs_diff_eq(expected, tolerance),
        "expected {expected}, got {actual} (tolerance {tolerance})"
    );
}
