//! Steering behaviours for autonomous agents.
//!
//! Agents are described by a [`Kinematic`] (position, orientation and their
//! rates of change). Behaviours turn an agent's state into a
//! [`SteeringOutput`] of linear and angular acceleration, and
//! [`Kinematic::integrate`] applies it. The [`combinator`] module mixes
//! behaviours by weight or by priority, and [`Simulation`] is a small
//! headless host that ticks many agents in lockstep from a scenario file.
pub mod behaviour;
pub mod combinator;
pub mod config;
pub mod constants;
pub mod kinematic;
pub mod logging;
pub mod random;
pub mod simulation;
pub mod steering;
pub mod target;
pub mod vector_math;

pub use behaviour::{
    Align, Arrive, AvoidSphere, Evade, Flee, Obstacle, Pursue, Seek, SteeringBehaviour,
    VelocityMatch, Wander,
};
pub use combinator::{BehaviourAndWeight, BlendedSteering, PrioritySteering};
pub use config::{BehaviourConfig, ConfigError, ScenarioConfig};
pub use kinematic::Kinematic;
pub use logging::init as init_logging;
pub use random::{RandomSource, RngSource};
pub use simulation::{Agent, Simulation, SimulationSettings};
pub use steering::SteeringOutput;
pub use target::{AgentId, Target};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust
    //! use glam::Vec3;
    //! use steering::prelude::*;
    //!
    //! let mut agent = Kinematic::default();
    //! let mut seek = Seek::new(Vec3::new(3.0, 0.0, 4.0), 5.0);
    //! let out = seek.compute_steering(&agent, &[]);
    //! agent.integrate(&out, 1.0, 1.0);
    //! assert!((agent.velocity - Vec3::new(3.0, 0.0, 4.0)).length() < 1e-5);
    //! ```

    pub use crate::behaviour::*;
    pub use crate::combinator::*;
    pub use crate::{AgentId, Kinematic, SteeringOutput, Target};
}
