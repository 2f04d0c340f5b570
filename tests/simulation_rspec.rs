//! Behaviour tests for the simulation host using rust-rspec.
//!
//! Verifies that a chaser closes on a fleeing quarry and that agents leaving
//! the world reappear on the far side.

use glam::Vec3;
use std::fmt;
use std::sync::{Arc, Mutex};
use steering::{AgentId, Flee, Kinematic, Pursue, Simulation, SimulationSettings, Target};

const DT: f32 = 1.0 / 60.0;

#[derive(Clone)]
struct ChaseWorld {
    sim: Arc<Mutex<Simulation>>,
    chaser: Option<AgentId>,
    quarry: Option<AgentId>,
}

impl fmt::Debug for ChaseWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChaseWorld")
            .field("chaser", &self.chaser)
            .field("quarry", &self.quarry)
            .finish()
    }
}

impl Default for ChaseWorld {
    fn default() -> Self {
        Self {
            sim: Arc::new(Mutex::new(Simulation::new(SimulationSettings {
                drag: 0.95,
                max_speed: Some(20.0),
                world_size: None,
            }))),
            chaser: None,
            quarry: None,
        }
    }
}

impl ChaseWorld {
    fn setup(&mut self) {
        let mut sim = self.sim.lock().expect("simulation lock");
        if !sim.agents().is_empty() {
            // Examples share one simulation; only the first spawns agents.
            self.chaser = Some(AgentId(0));
            self.quarry = Some(AgentId(1));
            return;
        }
        let chaser = sim.add_agent("chaser", Kinematic::at(Vec3::new(0.0, 0.0, 0.0)));
        let quarry = sim.add_agent("quarry", Kinematic::at(Vec3::new(20.0, 0.0, 0.0)));
        sim.set_behaviour(chaser, Some(Box::new(Pursue::new(Target::Agent(quarry), 40.0, 1.0))));
        sim.set_behaviour(quarry, Some(Box::new(Flee::new(Target::Agent(chaser), 10.0))));
        self.chaser = Some(chaser);
        self.quarry = Some(quarry);
    }

    fn run(&mut self, steps: u64) {
        let mut sim = self.sim.lock().expect("simulation lock");
        sim.run(steps, DT);
    }

    fn gap(&self) -> f32 {
        let sim = self.sim.lock().expect("simulation lock");
        let chaser = sim.agent(self.chaser.expect("chaser not spawned")).expect("chaser");
        let quarry = sim.agent(self.quarry.expect("quarry not spawned")).expect("quarry");
        chaser.kinematic.position.distance(quarry.kinematic.position)
    }

    fn assert_speeds_capped(&self, cap: f32) {
        let sim = self.sim.lock().expect("simulation lock");
        for agent in sim.agents() {
            assert!(
                agent.kinematic.speed() <= cap + 1e-4,
                "{} is moving at {}",
                agent.name,
                agent.kinematic.speed()
            );
        }
    }
}

#[test]
fn pursuer_closes_on_fleeing_quarry() {
    rspec::run(&rspec::given(
        "a fast pursuer twenty units behind a slower quarry",
        ChaseWorld::default(),
        |ctx| {
            ctx.before_each(|world| world.setup());
            ctx.when("the simulation runs for three seconds", |ctx| {
                ctx.before_each(|world| world.run(180));
                ctx.then("the gap has shrunk", |world| {
                    assert!(world.gap() < 20.0, "gap is {}", world.gap());
                });
                ctx.then("no agent exceeds the speed cap", |world| {
                    world.assert_speeds_capped(20.0);
                });
            });
        },
    ));
}

#[derive(Clone)]
struct WrapWorld {
    sim: Arc<Mutex<Simulation>>,
    walker: AgentId,
}

impl fmt::Debug for WrapWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrapWorld").field("walker", &self.walker).finish()
    }
}

impl Default for WrapWorld {
    fn default() -> Self {
        let mut sim = Simulation::new(SimulationSettings {
            drag: 1.0,
            max_speed: None,
            world_size: Some(50.0),
        });
        let walker = sim.add_agent(
            "walker",
            Kinematic::at(Vec3::new(49.0, 0.0, 0.0)).with_velocity(Vec3::new(2.0, 0.0, 0.0)),
        );
        Self {
            sim: Arc::new(Mutex::new(sim)),
            walker,
        }
    }
}

impl WrapWorld {
    fn step(&mut self) {
        let mut sim = self.sim.lock().expect("simulation lock");
        sim.step(1.0);
    }

    fn position(&self) -> Vec3 {
        let sim = self.sim.lock().expect("simulation lock");
        sim.agent(self.walker).expect("walker").kinematic.position
    }
}

#[test]
fn agents_wrap_at_the_world_edge() {
    rspec::run(&rspec::given(
        "a coasting agent one unit from the east edge",
        WrapWorld::default(),
        |ctx| {
            ctx.when("it moves two units east", |ctx| {
                ctx.before_each(|world| world.step());
                ctx.then("it reappears on the west edge", |world| {
                    assert_eq!(world.position(), Vec3::new(-50.0, 0.0, 0.0));
                });
            });
        },
    ));
}
