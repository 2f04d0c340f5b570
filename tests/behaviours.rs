//! Reference properties every behaviour and combinator must satisfy.

use std::f32::consts::PI;

use approx::assert_relative_eq;
use glam::Vec3;
use rstest::{fixture, rstest};
use steering::prelude::*;
use test_utils::{assert_vec3_near, moving, standing, ConstantSteering, ScriptedRandom};

#[fixture]
fn origin() -> Kinematic {
    standing(0.0, 0.0)
}

const TARGET: Vec3 = Vec3::new(5.0, 0.0, 0.0);

#[rstest]
fn seek_accelerates_at_full_strength(origin: Kinematic) {
    let out = Seek::new(TARGET, 20.0).compute_steering(&origin, &[]);
    assert_eq!(out.linear, Vec3::new(20.0, 0.0, 0.0));
    assert_eq!(out.linear.length(), 20.0);
    assert_eq!(out.angular, 0.0);
}

#[rstest]
fn flee_is_the_exact_negation_of_seek(origin: Kinematic) {
    let seek = Seek::new(TARGET, 20.0).compute_steering(&origin, &[]);
    let flee = Flee::new(TARGET, 20.0).compute_steering(&origin, &[]);
    assert_eq!(flee.linear, Vec3::new(-20.0, 0.0, 0.0));
    assert_eq!(flee.linear, -seek.linear);
}

#[rstest]
fn arrive_inside_target_radius_does_nothing(origin: Kinematic) {
    let mut arrive = Arrive::new(Vec3::new(3.0, 0.0, 0.0), 20.0, 5.0, 10.0);
    assert_eq!(arrive.compute_steering(&origin, &[]), SteeringOutput::ZERO);
}

#[rstest]
#[case::at_slow_radius(10.0)]
#[case::beyond_slow_radius(50.0)]
fn arrive_never_exceeds_max_speed(#[case] distance: f32) {
    let arrive = Arrive::new(Vec3::new(distance, 0.0, 0.0), 20.0, 5.0, 10.0);
    assert_eq!(arrive.desired_speed(distance), arrive.max_speed);
}

#[test]
fn align_takes_the_short_way_round() {
    assert_relative_eq!(Align::rotation_between(0.0, 1.5 * PI), -0.5 * PI, epsilon = 1e-5);
    let mut align = Align::new(Target::orientation(1.5 * PI), 10.0, 0.01, 0.1);
    let out = align.compute_steering(&Kinematic::default(), &[]);
    assert!(out.angular < 0.0);
    assert_eq!(out.linear, Vec3::ZERO);
}

#[rstest]
fn blended_equal_weights_average_children(origin: Kinematic) {
    let first = SteeringOutput {
        linear: Vec3::new(4.0, 0.0, -2.0),
        angular: 1.0,
    };
    let second = SteeringOutput {
        linear: Vec3::new(0.0, 0.0, 6.0),
        angular: -3.0,
    };
    let mut blended = BlendedSteering::new()
        .with(ConstantSteering::new(first), 1.0)
        .with(ConstantSteering::new(second), 1.0);

    let out = blended.compute_steering(&origin, &[]);
    assert_vec3_near(out.linear, (first.linear + second.linear) / 2.0, 1e-6);
    assert_relative_eq!(out.angular, (first.angular + second.angular) / 2.0);
}

#[rstest]
fn blended_with_zero_weights_is_exactly_zero(origin: Kinematic) {
    let busy = ConstantSteering::new(SteeringOutput::linear(Vec3::ONE));
    let mut blended = BlendedSteering::new()
        .with(busy.clone(), 0.0)
        .with(busy.clone(), 0.0);
    assert_eq!(blended.compute_steering(&origin, &[]), SteeringOutput::ZERO);
    assert_eq!(busy.calls(), 2);
}

#[rstest]
fn priority_skips_idle_children(origin: Kinematic) {
    let wanted = SteeringOutput {
        linear: Vec3::new(0.0, 0.0, 3.0),
        angular: 0.5,
    };
    let idle = ConstantSteering::idle();
    let mut priority = PrioritySteering::new(0.1)
        .with(idle.clone())
        .with(ConstantSteering::new(wanted));

    assert_eq!(priority.compute_steering(&origin, &[]), wanted);
    assert_eq!(priority.last_used(), Some(1));
    assert_eq!(idle.calls(), 1);
}

#[rstest]
fn priority_stops_at_the_first_significant_child(origin: Kinematic) {
    let first = ConstantSteering::new(SteeringOutput::angular(2.0));
    let second = ConstantSteering::new(SteeringOutput::linear(Vec3::X));
    let mut priority = PrioritySteering::new(0.1)
        .with(first.clone())
        .with(second.clone());

    assert_eq!(priority.compute_steering(&origin, &[]), first.output);
    assert_eq!(priority.last_used(), Some(0));
    assert_eq!((first.calls(), second.calls()), (1, 0));
}

#[test]
fn wander_follows_its_scripted_draws() {
    let character = standing(0.0, 0.0);
    let mut wander = Wander::with_random(20.0, 5.0, 2.0, ScriptedRandom::new([0.5, -0.25]));

    let out = wander.compute_steering(&character, &[]);
    // Seeded at (5, 0, 0), nudged by (0.5 * 2, -0.25 * 2) on x and z.
    let target = Vec3::new(6.0, 0.0, -0.5);
    assert_eq!(wander.wander_target(), Some(target));
    assert_vec3_near(out.linear, target.normalize() * 20.0, 1e-4);

    // With the script exhausted the target snaps back onto the circle.
    wander.compute_steering(&character, &[]);
    let settled = wander.wander_target().unwrap_or_default();
    assert_relative_eq!(settled.length(), 5.0, epsilon = 1e-4);
    assert!(settled.z < 0.0);
}

#[rstest]
#[case::towards(moving(20.0, 0.0, 0.0, 0.0))]
#[case::offset(moving(-3.0, 8.0, 0.0, 0.0))]
fn pursuing_a_stationary_target_is_seeking(origin: Kinematic, #[case] quarry: Kinematic) {
    let agents = [origin, quarry];
    let pursue = Pursue::new(AgentId(1), 15.0, 2.0).compute_steering(&origin, &agents);
    let seek = Seek::new(AgentId(1), 15.0).compute_steering(&origin, &agents);
    assert_eq!(pursue, seek);
}

#[test]
fn pursue_leads_a_moving_target() {
    let chaser = standing(0.0, 0.0);
    let quarry = moving(10.0, 0.0, 0.0, 5.0);
    let out = Pursue::new(AgentId(1), 10.0, 1.0).compute_steering(&chaser, &[chaser, quarry]);
    assert!(out.linear.z > 0.0, "pursuer should aim ahead, got {}", out.linear);
}

#[test]
fn evade_runs_from_where_the_target_will_be() {
    let runner = standing(0.0, 0.0);
    let hunter = moving(-10.0, 0.0, 5.0, 0.0);
    let out = Evade::new(AgentId(1), 10.0, 1.0).compute_steering(&runner, &[runner, hunter]);
    assert!(out.linear.x > 0.0);
    assert_relative_eq!(out.linear.length(), 10.0, epsilon = 1e-4);
}

#[test]
fn velocity_match_never_exceeds_max_acceleration() {
    let mut matcher = VelocityMatch::new(Target::velocity(Vec3::new(100.0, 0.0, 0.0)), 4.0);
    let out = matcher.compute_steering(&Kinematic::default(), &[]);
    assert_relative_eq!(out.linear.length(), 4.0, epsilon = 1e-5);
}

#[test]
fn integration_applies_drag_after_moving() {
    let mut agent = moving(0.0, 0.0, 2.0, 0.0);
    agent.integrate(&SteeringOutput::ZERO, 0.95, 1.0);
    assert_eq!(agent.position, Vec3::new(2.0, 0.0, 0.0));
    assert_eq!(agent.velocity, Vec3::new(2.0, 0.0, 0.0) * 0.95_f32.powf(1.0));
}

#[test]
fn missing_agent_target_yields_zero() {
    let mut seek = Seek::new(AgentId(4), 20.0);
    assert!(seek.compute_steering(&Kinematic::default(), &[]).is_zero());
}
