//! Local avoidance of a single spherical obstacle.

use glam::Vec3;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::kinematic::Kinematic;
use crate::steering::SteeringOutput;
use crate::vector_math::direction_or_zero;

use super::{seek_point, SteeringBehaviour};

/// A sphere agents should steer around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Centre of the sphere.
    pub position: Vec3,
    /// Radius of the sphere.
    pub radius: f32,
}

impl Obstacle {
    /// Creates an obstacle.
    #[must_use]
    pub const fn new(position: Vec3, radius: f32) -> Self {
        Self { position, radius }
    }
}

/// Steers around an obstacle lying across the character's path.
///
/// Produces nothing unless the character is moving, the obstacle's centre
/// passes within `radius + avoid_margin` of the heading ray, and the point of
/// closest approach is ahead of the character and nearer than
/// `max_lookahead`. It then seeks a point just outside the padded sphere on
/// the side the ray passes.
#[derive(Clone, Debug, PartialEq)]
pub struct AvoidSphere {
    /// The sphere to avoid.
    pub obstacle: Obstacle,
    /// Magnitude of the produced acceleration.
    pub max_acceleration: f32,
    /// Extra clearance added to the obstacle's radius.
    pub avoid_margin: f32,
    /// Furthest distance ahead that is checked.
    pub max_lookahead: f32,
}

impl AvoidSphere {
    /// Creates an avoidance behaviour for `obstacle`.
    #[must_use]
    pub const fn new(
        obstacle: Obstacle,
        max_acceleration: f32,
        avoid_margin: f32,
        max_lookahead: f32,
    ) -> Self {
        Self {
            obstacle,
            max_acceleration,
            avoid_margin,
            max_lookahead,
        }
    }

    /// The point to head for, if the obstacle is in the way.
    #[must_use]
    pub fn avoidance_point(&self, character: &Kinematic) -> Option<Vec3> {
        let movement = direction_or_zero(character.velocity);
        if movement == Vec3::ZERO {
            return None;
        }

        let to_obstacle = self.obstacle.position - character.position;
        let along = to_obstacle.dot(movement);
        let distance_squared = to_obstacle.length_squared() - along * along;
        let clearance = self.obstacle.radius + self.avoid_margin;
        if distance_squared >= clearance * clearance {
            return None;
        }
        if along <= 0.0 || along >= self.max_lookahead {
            return None;
        }

        let closest = character.position + movement * along;
        let mut away = direction_or_zero(closest - self.obstacle.position);
        if away == Vec3::ZERO {
            // Heading dead centre: pick the perpendicular in the xz plane.
            away = direction_or_zero(Vec3::new(movement.z, 0.0, -movement.x));
        }
        Some(self.obstacle.position + away * clearance)
    }
}

impl SteeringBehaviour for AvoidSphere {
    fn compute_steering(&mut self, character: &Kinematic, _agents: &[Kinematic]) -> SteeringOutput {
        match self.avoidance_point(character) {
            Some(point) => {
                debug!("avoiding obstacle at {} via {point}", self.obstacle.position);
                seek_point(character, point, self.max_acceleration)
            }
            None => SteeringOutput::ZERO,
        }
    }

    fn name(&self) -> &'static str {
        "avoid_sphere"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn avoid() -> AvoidSphere {
        AvoidSphere::new(
            Obstacle::new(Vec3::new(10.0, 0.0, 1.0), 2.0),
            20.0,
            1.0,
            30.0,
        )
    }

    fn heading_x(x: f32) -> Kinematic {
        Kinematic::at(Vec3::new(x, 0.0, 0.0)).with_velocity(Vec3::new(5.0, 0.0, 0.0))
    }

    #[test]
    fn steers_to_the_side_the_ray_passes() {
        let point = avoid().avoidance_point(&heading_x(0.0));
        // Closest approach (10, 0, 0) lies on the -z side of the centre.
        assert_eq!(point, Some(Vec3::new(10.0, 0.0, -2.0)));
        let out = avoid().compute_steering(&heading_x(0.0), &[]);
        assert_relative_eq!(out.linear.length(), 20.0, epsilon = 1e-4);
        assert!(out.linear.z < 0.0);
    }

    #[rstest]
    #[case::stationary(Kinematic::default())]
    #[case::behind(heading_x(15.0))]
    #[case::beyond_lookahead(heading_x(-40.0))]
    #[case::clear_path(Kinematic::at(Vec3::new(0.0, 0.0, 10.0)).with_velocity(Vec3::X))]
    fn no_avoidance_needed(#[case] character: Kinematic) {
        assert!(avoid().compute_steering(&character, &[]).is_zero());
    }

    #[test]
    fn dead_centre_picks_a_side() {
        let mut avoid = AvoidSphere::new(
            Obstacle::new(Vec3::new(10.0, 0.0, 0.0), 2.0),
            20.0,
            1.0,
            30.0,
        );
        let point = avoid.avoidance_point(&heading_x(0.0)).unwrap_or_default();
        assert_relative_eq!(point.z.abs(), 3.0, epsilon = 1e-5);
        assert!(!avoid.compute_steering(&heading_x(0.0), &[]).is_zero());
    }
}
