//! Scenario files: agents, their behaviours and the host's tick policy.
//!
//! Scenarios are JSON documents deserialised with `serde`. Building a
//! scenario validates every tunable up front, so the behaviours themselves
//! never have to deal with nonsensical parameters at tick time.
//!
//! ```
//! use steering::config::ScenarioConfig;
//! let scenario = ScenarioConfig::from_json(r#"{
//!     "agents": [
//!         { "kinematic": { "position": [10.0, 0.0, 10.0] },
//!           "behaviour": { "kind": "seek", "target": { "agent": 1 }, "max_acceleration": 20.0 } },
//!         { "kinematic": { "position": [-10.0, 0.0, -20.0] } }
//!     ]
//! }"#).unwrap();
//! let simulation = scenario.build().unwrap();
//! assert_eq!(simulation.agents().len(), 2);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec3;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::behaviour::{
    Align, Arrive, AvoidSphere, Evade, Flee, Obstacle, Pursue, Seek, SteeringBehaviour,
    VelocityMatch, Wander,
};
use crate::combinator::{BlendedSteering, PrioritySteering};
use crate::constants::{
    ALIGN_MAX_ROTATION, ALIGN_TIME_TO_TARGET, ARRIVE_MAX_SPEED, ARRIVE_TIME_TO_TARGET,
    DEFAULT_DRAG, DEFAULT_MAX_SPEED, DEFAULT_PRIORITY_EPSILON, DEFAULT_WORLD_SIZE,
    VELOCITY_MATCH_TIME_TO_TARGET,
};
use crate::kinematic::Kinematic;
use crate::random::RngSource;
use crate::simulation::{Simulation, SimulationSettings};
use crate::target::{AgentId, Target};

/// Failure to load or validate a scenario.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The scenario file could not be read.
    #[error("failed to read scenario {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The scenario is not valid JSON for this schema.
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),
    /// A tunable is outside its allowed range.
    #[error("{behaviour}: `{field}` must be {requirement}, got {value}")]
    InvalidParameter {
        /// Behaviour the parameter belongs to.
        behaviour: &'static str,
        /// Offending field.
        field: &'static str,
        /// Human readable constraint.
        requirement: &'static str,
        /// Value supplied.
        value: f32,
    },
    /// A behaviour targets an agent the scenario does not define.
    #[error("agent {agent} targets {target}, but only {count} agents exist")]
    UnknownAgent {
        /// Agent whose behaviour is at fault.
        agent: AgentId,
        /// The missing target.
        target: AgentId,
        /// Number of agents in the scenario.
        count: usize,
    },
}

/// Where a configured behaviour steers relative to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetConfig {
    /// Another agent in the scenario, by index.
    Agent(AgentId),
    /// A fixed point.
    Point(Vec3),
    /// A fixed orientation, for align.
    Orientation(f32),
    /// A fixed velocity, for velocity matching.
    Velocity(Vec3),
    /// A complete fixed state.
    Kinematic(Kinematic),
}

impl TargetConfig {
    fn build(&self, context: &BuildContext) -> Result<Target, ConfigError> {
        Ok(match self {
            Self::Agent(id) => {
                if id.0 >= context.agent_count {
                    return Err(ConfigError::UnknownAgent {
                        agent: context.agent,
                        target: *id,
                        count: context.agent_count,
                    });
                }
                Target::Agent(*id)
            }
            Self::Point(position) => Target::point(*position),
            Self::Orientation(orientation) => Target::orientation(*orientation),
            Self::Velocity(velocity) => Target::velocity(*velocity),
            Self::Kinematic(state) => Target::Fixed(*state),
        })
    }
}

/// A child of a blended behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightedConfig {
    /// Share of the blend.
    pub weight: f32,
    /// The child behaviour.
    pub behaviour: BehaviourConfig,
}

/// Serialisable description of a behaviour tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[expect(missing_docs, reason = "Variant fields mirror the behaviour structs' documented fields.")]
pub enum BehaviourConfig {
    /// See [`Seek`].
    Seek {
        target: TargetConfig,
        max_acceleration: f32,
    },
    /// See [`Flee`].
    Flee {
        target: TargetConfig,
        max_acceleration: f32,
    },
    /// See [`Arrive`].
    Arrive {
        target: TargetConfig,
        max_acceleration: f32,
        target_radius: f32,
        slow_radius: f32,
        #[serde(default = "default_arrive_max_speed")]
        max_speed: f32,
        #[serde(default = "default_arrive_time_to_target")]
        time_to_target: f32,
    },
    /// See [`Align`].
    Align {
        target: TargetConfig,
        max_angular_acceleration: f32,
        target_radius: f32,
        slow_radius: f32,
        #[serde(default = "default_align_max_rotation")]
        max_rotation: f32,
        #[serde(default = "default_align_time_to_target")]
        time_to_target: f32,
    },
    /// See [`VelocityMatch`].
    VelocityMatch {
        target: TargetConfig,
        max_acceleration: f32,
        #[serde(default = "default_velocity_match_time_to_target")]
        time_to_target: f32,
    },
    /// See [`Pursue`].
    Pursue {
        target: TargetConfig,
        max_acceleration: f32,
        max_prediction: f32,
    },
    /// See [`Evade`].
    Evade {
        target: TargetConfig,
        max_acceleration: f32,
        max_prediction: f32,
    },
    /// See [`Wander`]. Without a seed here or on the scenario the walk is
    /// seeded from entropy.
    Wander {
        max_acceleration: f32,
        volatility: f32,
        turn_speed: f32,
        #[serde(default)]
        seed: Option<u64>,
    },
    /// See [`AvoidSphere`].
    AvoidSphere {
        obstacle: Obstacle,
        max_acceleration: f32,
        avoid_margin: f32,
        max_lookahead: f32,
    },
    /// See [`BlendedSteering`].
    Blended { behaviours: Vec<WeightedConfig> },
    /// See [`PrioritySteering`].
    Priority {
        #[serde(default = "default_priority_epsilon")]
        epsilon: f32,
        behaviours: Vec<BehaviourConfig>,
    },
}

const fn default_arrive_max_speed() -> f32 {
    ARRIVE_MAX_SPEED
}
const fn default_arrive_time_to_target() -> f32 {
    ARRIVE_TIME_TO_TARGET
}
const fn default_align_max_rotation() -> f32 {
    ALIGN_MAX_ROTATION
}
const fn default_align_time_to_target() -> f32 {
    ALIGN_TIME_TO_TARGET
}
const fn default_velocity_match_time_to_target() -> f32 {
    VELOCITY_MATCH_TIME_TO_TARGET
}
const fn default_priority_epsilon() -> f32 {
    DEFAULT_PRIORITY_EPSILON
}

/// Scenario-wide facts needed while building one agent's behaviour.
struct BuildContext {
    agent: AgentId,
    agent_count: usize,
    seed: Option<u64>,
}

fn non_negative(
    behaviour: &'static str,
    field: &'static str,
    value: f32,
) -> Result<f32, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidParameter {
            behaviour,
            field,
            requirement: "finite and non-negative",
            value,
        })
    }
}

fn positive(behaviour: &'static str, field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidParameter {
            behaviour,
            field,
            requirement: "finite and positive",
            value,
        })
    }
}

impl BehaviourConfig {
    /// Builds the behaviour for agent `agent` of a scenario with
    /// `agent_count` agents.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] for an out-of-range tunable
    /// and [`ConfigError::UnknownAgent`] for a target index past the end.
    pub fn build(
        &self,
        agent: AgentId,
        agent_count: usize,
    ) -> Result<Box<dyn SteeringBehaviour>, ConfigError> {
        self.build_in(&BuildContext {
            agent,
            agent_count,
            seed: None,
        })
    }

    fn build_in(&self, context: &BuildContext) -> Result<Box<dyn SteeringBehaviour>, ConfigError> {
        let behaviour: Box<dyn SteeringBehaviour> = match self {
            Self::Seek {
                target,
                max_acceleration,
            } => Box::new(Seek::new(
                target.build(context)?,
                non_negative("seek", "max_acceleration", *max_acceleration)?,
            )),
            Self::Flee {
                target,
                max_acceleration,
            } => Box::new(Flee::new(
                target.build(context)?,
                non_negative("flee", "max_acceleration", *max_acceleration)?,
            )),
            Self::Arrive {
                target,
                max_acceleration,
                target_radius,
                slow_radius,
                max_speed,
                time_to_target,
            } => {
                let mut arrive = Arrive::new(
                    target.build(context)?,
                    non_negative("arrive", "max_acceleration", *max_acceleration)?,
                    non_negative("arrive", "target_radius", *target_radius)?,
                    positive("arrive", "slow_radius", *slow_radius)?,
                );
                arrive.max_speed = non_negative("arrive", "max_speed", *max_speed)?;
                arrive.time_to_target = positive("arrive", "time_to_target", *time_to_target)?;
                Box::new(arrive)
            }
            Self::Align {
                target,
                max_angular_acceleration,
                target_radius,
                slow_radius,
                max_rotation,
                time_to_target,
            } => {
                let mut align = Align::new(
                    target.build(context)?,
                    non_negative("align", "max_angular_acceleration", *max_angular_acceleration)?,
                    non_negative("align", "target_radius", *target_radius)?,
                    positive("align", "slow_radius", *slow_radius)?,
                );
                align.max_rotation = non_negative("align", "max_rotation", *max_rotation)?;
                align.time_to_target = positive("align", "time_to_target", *time_to_target)?;
                Box::new(align)
            }
            Self::VelocityMatch {
                target,
                max_acceleration,
                time_to_target,
            } => {
                let mut matcher = VelocityMatch::new(
                    target.build(context)?,
                    non_negative("velocity_match", "max_acceleration", *max_acceleration)?,
                );
                matcher.time_to_target =
                    positive("velocity_match", "time_to_target", *time_to_target)?;
                Box::new(matcher)
            }
            Self::Pursue {
                target,
                max_acceleration,
                max_prediction,
            } => Box::new(Pursue::new(
                target.build(context)?,
                non_negative("pursue", "max_acceleration", *max_acceleration)?,
                positive("pursue", "max_prediction", *max_prediction)?,
            )),
            Self::Evade {
                target,
                max_acceleration,
                max_prediction,
            } => Box::new(Evade::new(
                target.build(context)?,
                non_negative("evade", "max_acceleration", *max_acceleration)?,
                positive("evade", "max_prediction", *max_prediction)?,
            )),
            Self::Wander {
                max_acceleration,
                volatility,
                turn_speed,
                seed,
            } => {
                let acceleration = non_negative("wander", "max_acceleration", *max_acceleration)?;
                let spread = non_negative("wander", "volatility", *volatility)?;
                let turn = non_negative("wander", "turn_speed", *turn_speed)?;
                let random = match seed.or(context.seed) {
                    Some(value) => RngSource::seeded(value),
                    None => RngSource::from_entropy(),
                };
                Box::new(Wander::with_random(acceleration, spread, turn, random))
            }
            Self::AvoidSphere {
                obstacle,
                max_acceleration,
                avoid_margin,
                max_lookahead,
            } => {
                non_negative("avoid_sphere", "obstacle.radius", obstacle.radius)?;
                Box::new(AvoidSphere::new(
                    *obstacle,
                    non_negative("avoid_sphere", "max_acceleration", *max_acceleration)?,
                    non_negative("avoid_sphere", "avoid_margin", *avoid_margin)?,
                    non_negative("avoid_sphere", "max_lookahead", *max_lookahead)?,
                ))
            }
            Self::Blended { behaviours } => {
                let mut blended = BlendedSteering::new();
                for child in behaviours {
                    let weight = non_negative("blended", "weight", child.weight)?;
                    blended.push(child.behaviour.build_in(context)?, weight);
                }
                Box::new(blended)
            }
            Self::Priority {
                epsilon,
                behaviours,
            } => {
                let mut priority =
                    PrioritySteering::new(non_negative("priority", "epsilon", *epsilon)?);
                for child in behaviours {
                    priority.push(child.build_in(context)?);
                }
                Box::new(priority)
            }
        };
        Ok(behaviour)
    }
}

/// One agent in a scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Label used in logs; defaults to the agent's index.
    #[serde(default)]
    pub name: Option<String>,
    /// Starting state.
    #[serde(default)]
    pub kinematic: Kinematic,
    /// Active behaviour; the agent coasts without one.
    #[serde(default)]
    pub behaviour: Option<BehaviourConfig>,
    /// Turn the agent to face its direction of travel after each tick.
    #[serde(default = "face_velocity_by_default")]
    pub face_velocity: bool,
}

const fn face_velocity_by_default() -> bool {
    true
}

/// A complete simulation setup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Per-second velocity retention.
    #[serde(default = "default_drag")]
    pub drag: f32,
    /// Speed cap applied after integration; `null` disables it.
    #[serde(default = "default_max_speed")]
    pub max_speed: Option<f32>,
    /// Half extent of the wrapping world; `null` makes it unbounded.
    #[serde(default = "default_world_size")]
    pub world_size: Option<f32>,
    /// Base seed for wander behaviours without their own seed.
    #[serde(default)]
    pub seed: Option<u64>,
    /// The agents, indexed from zero in order.
    pub agents: Vec<AgentConfig>,
}

const fn default_drag() -> f32 {
    DEFAULT_DRAG
}
#[expect(clippy::unnecessary_wraps, reason = "serde default must match the field type.")]
const fn default_max_speed() -> Option<f32> {
    Some(DEFAULT_MAX_SPEED)
}
#[expect(clippy::unnecessary_wraps, reason = "serde default must match the field type.")]
const fn default_world_size() -> Option<f32> {
    Some(DEFAULT_WORLD_SIZE)
}

impl ScenarioConfig {
    /// Parses a scenario from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text does not match the schema.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a scenario file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded scenario from {}", path.display());
        Self::from_json(&text)
    }

    /// The host settings this scenario asks for.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] for a negative drag, speed
    /// cap or world size.
    pub fn settings(&self) -> Result<SimulationSettings, ConfigError> {
        Ok(SimulationSettings {
            drag: non_negative("scenario", "drag", self.drag)?,
            max_speed: self
                .max_speed
                .map(|speed| non_negative("scenario", "max_speed", speed))
                .transpose()?,
            world_size: self
                .world_size
                .map(|size| positive("scenario", "world_size", size))
                .transpose()?,
        })
    }

    /// Validates the scenario and builds a ready-to-run [`Simulation`].
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found in the settings or in any
    /// agent's behaviour.
    pub fn build(&self) -> Result<Simulation, ConfigError> {
        let mut simulation = Simulation::new(self.settings()?);
        let count = self.agents.len();
        for (index, agent) in self.agents.iter().enumerate() {
            let context = BuildContext {
                agent: AgentId(index),
                agent_count: count,
                seed: self.seed.map(|seed| seed.wrapping_add(index as u64)),
            };
            let behaviour = agent
                .behaviour
                .as_ref()
                .map(|config| config.build_in(&context))
                .transpose()?;
            let name = agent.name.clone().unwrap_or_else(|| context.agent.to_string());
            let id = simulation.add_agent(name, agent.kinematic);
            simulation.set_behaviour(id, behaviour);
            simulation.set_face_velocity(id, agent.face_velocity);
        }
        Ok(simulation)
    }
}
