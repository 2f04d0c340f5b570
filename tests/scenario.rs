//! Loading scenario files and the validation applied while building them.

use std::path::Path;

use approx::assert_relative_eq;
use rstest::rstest;
use steering::{AgentId, ConfigError, ScenarioConfig};

fn demo(name: &str) -> ScenarioConfig {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name);
    ScenarioConfig::load(&path).expect("demo scenario loads")
}

#[rstest]
#[case::chase("chase.json")]
#[case::arrive_align("arrive_align.json")]
fn demo_scenarios_build_and_run(#[case] name: &str) {
    let mut sim = demo(name).build().expect("demo scenario is valid");
    assert_eq!(sim.agents().len(), 2);
    sim.run(120, 1.0 / 60.0);
    for agent in sim.agents() {
        let position = agent.kinematic.position;
        assert!(position.is_finite(), "{} ended at {position}", agent.name);
        assert!(position.x.abs() <= 50.0 && position.z.abs() <= 50.0);
        assert!(agent.kinematic.speed() <= 20.0 + 1e-4);
    }
}

#[test]
fn seeded_scenarios_are_reproducible() {
    let scenario = demo("chase.json");
    let mut first = scenario.build().expect("valid");
    let mut second = scenario.build().expect("valid");
    first.run(200, 0.05);
    second.run(200, 0.05);
    assert_eq!(first.snapshot(), second.snapshot());
}

#[test]
fn agent_names_default_to_their_index() {
    let scenario = ScenarioConfig::from_json(r#"{ "agents": [ {}, { "name": "bob" } ] }"#)
        .expect("scenario parses");
    let sim = scenario.build().expect("valid");
    let names: Vec<_> = sim.agents().iter().map(|agent| agent.name.as_str()).collect();
    assert_eq!(names, ["agent#0", "bob"]);
    assert_relative_eq!(sim.settings().drag, 0.95);
}

#[rstest]
#[case::unknown_kind(r#"{ "agents": [ { "behaviour": { "kind": "teleport" } } ] }"#)]
#[case::missing_agents(r#"{ "drag": 0.9 }"#)]
#[case::not_json("agents: []")]
fn malformed_scenarios_fail_to_parse(#[case] json: &str) {
    assert!(matches!(ScenarioConfig::from_json(json), Err(ConfigError::Parse(_))));
}

#[rstest]
#[case::negative_drag(r#"{ "drag": -0.5, "agents": [] }"#, "drag")]
#[case::zero_world(r#"{ "world_size": 0.0, "agents": [] }"#, "world_size")]
#[case::negative_acceleration(
    r#"{ "agents": [ { "behaviour": { "kind": "seek", "target": { "point": [1.0, 0.0, 0.0] }, "max_acceleration": -1.0 } } ] }"#,
    "max_acceleration"
)]
fn out_of_range_values_are_rejected(#[case] json: &str, #[case] expected: &str) {
    let scenario = ScenarioConfig::from_json(json).expect("scenario parses");
    match scenario.build() {
        Err(ConfigError::InvalidParameter { field, .. }) => assert_eq!(field, expected),
        other => panic!("expected invalid parameter, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn dangling_agent_targets_are_rejected() {
    let scenario = ScenarioConfig::from_json(
        r#"{ "agents": [ { "behaviour": { "kind": "flee", "target": { "agent": 1 }, "max_acceleration": 5.0 } } ] }"#,
    )
    .expect("scenario parses");
    assert!(matches!(
        scenario.build(),
        Err(ConfigError::UnknownAgent { agent: AgentId(0), target: AgentId(1), count: 1 })
    ));
}
