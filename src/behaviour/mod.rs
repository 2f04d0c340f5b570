//! Primitive steering behaviours.
//!
//! Each behaviour turns the character's current state, plus whatever it is
//! steering relative to, into a [`SteeringOutput`]. Behaviours that chase a
//! derived point (pursue, evade, wander, sphere avoidance) call the shared
//! [`seek_point`] and [`flee_point`] functions rather than building a nested
//! seek behaviour.

mod align;
mod arrive;
mod avoid_sphere;
mod pursue;
mod seek;
mod velocity_match;
mod wander;

use std::fmt;

use glam::Vec3;
use log::warn;

use crate::kinematic::Kinematic;
use crate::steering::SteeringOutput;
use crate::target::Target;
use crate::vector_math::direction_or_zero;

pub use align::Align;
pub use arrive::Arrive;
pub use avoid_sphere::{AvoidSphere, Obstacle};
pub use pursue::{Evade, Pursue};
pub use seek::{Flee, Seek};
pub use velocity_match::VelocityMatch;
pub use wander::Wander;

/// Capability shared by every behaviour and combinator.
pub trait SteeringBehaviour: fmt::Debug + Send {
    /// Computes this tick's steering for `character`.
    ///
    /// `agents` is the snapshot of every agent's state taken before anyone
    /// integrated this tick; agent targets are looked up in it.
    fn compute_steering(&mut self, character: &Kinematic, agents: &[Kinematic]) -> SteeringOutput;

    /// Short label used in logs.
    fn name(&self) -> &'static str;
}

impl<B: SteeringBehaviour + ?Sized> SteeringBehaviour for Box<B> {
    fn compute_steering(&mut self, character: &Kinematic, agents: &[Kinematic]) -> SteeringOutput {
        (**self).compute_steering(character, agents)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Full acceleration from `character` straight towards `point`.
///
/// A character already at `point` gets no acceleration.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use steering::behaviour::seek_point;
/// use steering::Kinematic;
/// let out = seek_point(&Kinematic::default(), Vec3::new(5.0, 0.0, 0.0), 20.0);
/// assert_eq!(out.linear, Vec3::new(20.0, 0.0, 0.0));
/// assert_eq!(out.angular, 0.0);
/// ```
#[must_use]
pub fn seek_point(character: &Kinematic, point: Vec3, max_acceleration: f32) -> SteeringOutput {
    SteeringOutput::linear(direction_or_zero(point - character.position) * max_acceleration)
}

/// Full acceleration from `character` straight away from `point`.
#[must_use]
pub fn flee_point(character: &Kinematic, point: Vec3, max_acceleration: f32) -> SteeringOutput {
    SteeringOutput::linear(direction_or_zero(character.position - point) * max_acceleration)
}

/// Resolves `target`, logging when it is missing from the snapshot.
fn resolve_target(behaviour: &str, target: &Target, agents: &[Kinematic]) -> Option<Kinematic> {
    let resolved = target.resolve(agents);
    if resolved.is_none() {
        warn!(
            "{behaviour} target {target:?} is not among {} agents; producing no steering",
            agents.len()
        );
    }
    resolved
}
