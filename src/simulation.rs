//! Headless host that ticks a set of steered agents.
//!
//! Each [`Simulation::step`] works in two phases. First every agent's
//! behaviour sees the same snapshot of all kinematics taken at the start of
//! the tick. Only once every output is known are the agents integrated, so
//! the order agents are stored in never changes the result.

use log::{debug, trace};

use crate::behaviour::SteeringBehaviour;
use crate::constants::{DEFAULT_DRAG, DEFAULT_MAX_SPEED, DEFAULT_WORLD_SIZE};
use crate::kinematic::Kinematic;
use crate::steering::SteeringOutput;
use crate::target::AgentId;

/// Host policy applied around every integration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationSettings {
    /// Per-second velocity retention passed to [`Kinematic::integrate`].
    pub drag: f32,
    /// Speed cap applied after integration.
    pub max_speed: Option<f32>,
    /// Agents leaving `[-world_size, world_size]` on x or z reappear on the
    /// opposite edge.
    pub world_size: Option<f32>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            drag: DEFAULT_DRAG,
            max_speed: Some(DEFAULT_MAX_SPEED),
            world_size: Some(DEFAULT_WORLD_SIZE),
        }
    }
}

/// One simulated character.
#[derive(Debug)]
pub struct Agent {
    /// Label used in logs.
    pub name: String,
    /// Current state.
    pub kinematic: Kinematic,
    /// Turn to face the direction of travel after each tick.
    pub face_velocity: bool,
    behaviour: Option<Box<dyn SteeringBehaviour>>,
    last_output: SteeringOutput,
}

impl Agent {
    /// The agent's behaviour, if it has one.
    #[must_use]
    pub fn behaviour(&self) -> Option<&dyn SteeringBehaviour> {
        self.behaviour.as_deref()
    }

    /// Steering applied on the most recent tick.
    #[must_use]
    pub const fn last_output(&self) -> SteeringOutput {
        self.last_output
    }
}

/// Owns the agents and advances them in lockstep.
#[derive(Debug, Default)]
pub struct Simulation {
    settings: SimulationSettings,
    agents: Vec<Agent>,
    elapsed: f32,
    ticks: u64,
}

impl Simulation {
    /// An empty simulation.
    #[must_use]
    pub const fn new(settings: SimulationSettings) -> Self {
        Self {
            settings,
            agents: Vec::new(),
            elapsed: 0.0,
            ticks: 0,
        }
    }

    /// The host policy in force.
    #[must_use]
    pub const fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    /// Adds a coasting agent and returns its index.
    pub fn add_agent(&mut self, name: impl Into<String>, kinematic: Kinematic) -> AgentId {
        let id = AgentId(self.agents.len());
        self.agents.push(Agent {
            name: name.into(),
            kinematic,
            face_velocity: true,
            behaviour: None,
            last_output: SteeringOutput::ZERO,
        });
        id
    }

    /// Replaces the behaviour of agent `id`.
    ///
    /// Returns `false` when no such agent exists.
    pub fn set_behaviour(
        &mut self,
        id: AgentId,
        behaviour: Option<Box<dyn SteeringBehaviour>>,
    ) -> bool {
        let Some(agent) = self.agents.get_mut(id.0) else {
            return false;
        };
        debug!(
            "{} now runs {}",
            agent.name,
            behaviour.as_ref().map_or("nothing", |active| active.name())
        );
        agent.behaviour = behaviour;
        true
    }

    /// Sets whether agent `id` turns to face its velocity.
    ///
    /// Returns `false` when no such agent exists.
    pub fn set_face_velocity(&mut self, id: AgentId, face_velocity: bool) -> bool {
        self.agents.get_mut(id.0).is_some_and(|agent| {
            agent.face_velocity = face_velocity;
            true
        })
    }

    /// Every agent, indexed by [`AgentId`].
    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Agent `id`, if present.
    #[must_use]
    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.0)
    }

    /// Current state of every agent.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Kinematic> {
        self.agents.iter().map(|agent| agent.kinematic).collect()
    }

    /// Number of completed ticks.
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Simulated seconds so far.
    #[must_use]
    pub const fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Advances every agent by `duration` seconds.
    ///
    /// Agents without a behaviour integrate under zero steering and simply
    /// coast. The speed cap and the facing policy follow integration; world
    /// wrapping runs last.
    pub fn step(&mut self, duration: f32) {
        let snapshot = self.snapshot();
        for (agent, character) in self.agents.iter_mut().zip(&snapshot) {
            agent.last_output = agent
                .behaviour
                .as_mut()
                .map_or(SteeringOutput::ZERO, |behaviour| {
                    behaviour.compute_steering(character, &snapshot)
                });
        }

        for agent in &mut self.agents {
            let kinematic = &mut agent.kinematic;
            kinematic.integrate(&agent.last_output, self.settings.drag, duration);
            if agent.face_velocity {
                kinematic.set_orientation_from_velocity();
            }
            if let Some(max_speed) = self.settings.max_speed {
                kinematic.trim_max_speed(max_speed);
            }
            if let Some(size) = self.settings.world_size {
                wrap_position(kinematic, size);
            }
            trace!(
                "{}: pos={} vel={} ori={:.3} steer={:?}",
                agent.name,
                kinematic.position,
                kinematic.velocity,
                kinematic.orientation,
                agent.last_output
            );
        }

        self.ticks += 1;
        self.elapsed += duration;
        debug!("tick {} done at t={:.3}s", self.ticks, self.elapsed);
    }

    /// Runs `steps` ticks of `duration` seconds each.
    pub fn run(&mut self, steps: u64, duration: f32) {
        for _ in 0..steps {
            self.step(duration);
        }
    }
}

/// Moves an agent past either edge on x or z to the opposite edge.
fn wrap_position(kinematic: &mut Kinematic, size: f32) {
    for axis in [&mut kinematic.position.x, &mut kinematic.position.z] {
        if *axis < -size {
            *axis = size;
        } else if *axis > size {
            *axis = -size;
        }
    }
}
