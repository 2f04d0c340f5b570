//! What a behaviour steers relative to.
//!
//! Behaviours never own the state of the agents they chase. An agent target is
//! an index into the snapshot of kinematics the host hands to every
//! `compute_steering` call, so all agents in a tick read the same
//! pre-integration state.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::kinematic::Kinematic;

/// Index of an agent within a tick's snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(pub usize);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent#{}", self.0)
    }
}

impl From<usize> for AgentId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// A behaviour's target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Target {
    /// Another agent, read from the snapshot on every call.
    Agent(AgentId),
    /// A fixed state that never moves unless the owner replaces it.
    Fixed(Kinematic),
}

impl Target {
    /// A fixed target at `position`, stationary and facing along +x.
    #[must_use]
    pub const fn point(position: Vec3) -> Self {
        Self::Fixed(Kinematic::at(position))
    }

    /// A fixed target only meaningful for its orientation.
    #[must_use]
    pub const fn orientation(orientation: f32) -> Self {
        Self::Fixed(Kinematic::at(Vec3::ZERO).with_orientation(orientation))
    }

    /// A fixed target only meaningful for its velocity.
    #[must_use]
    pub const fn velocity(velocity: Vec3) -> Self {
        Self::Fixed(Kinematic::at(Vec3::ZERO).with_velocity(velocity))
    }

    /// Resolves the target against the current snapshot.
    ///
    /// Returns `None` when an agent target is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use glam::Vec3;
    /// use steering::{AgentId, Kinematic, Target};
    /// let agents = [Kinematic::at(Vec3::X)];
    /// assert_eq!(Target::Agent(AgentId(0)).resolve(&agents), Some(agents[0]));
    /// assert_eq!(Target::Agent(AgentId(1)).resolve(&agents), None);
    /// ```
    #[must_use]
    pub fn resolve(&self, agents: &[Kinematic]) -> Option<Kinematic> {
        match self {
            Self::Agent(id) => agents.get(id.0).copied(),
            Self::Fixed(state) => Some(*state),
        }
    }

    /// The agent this target follows, if any.
    #[must_use]
    pub const fn agent(&self) -> Option<AgentId> {
        match self {
            Self::Agent(id) => Some(*id),
            Self::Fixed(_) => None,
        }
    }
}

impl From<AgentId> for Target {
    fn from(id: AgentId) -> Self {
        Self::Agent(id)
    }
}

impl From<Vec3> for Target {
    fn from(position: Vec3) -> Self {
        Self::point(position)
    }
}
