//! Tuning defaults shared by behaviours and the simulation host.
//!
//! Behaviours expose every tunable as a field; these constants are the values
//! used when a scenario leaves a field out.

use std::f32::consts::FRAC_PI_2;

/// Speed Arrive aims for outside its slow radius.
pub const ARRIVE_MAX_SPEED: f32 = 10.0;
/// Time, in seconds, over which Arrive tries to reach its desired velocity.
pub const ARRIVE_TIME_TO_TARGET: f32 = 0.1;
/// Time, in seconds, over which Align tries to reach its desired rotation.
pub const ALIGN_TIME_TO_TARGET: f32 = 0.1;
/// Angular speed Align aims for outside its slow radius.
pub const ALIGN_MAX_ROTATION: f32 = FRAC_PI_2;
/// Time, in seconds, over which VelocityMatch closes the velocity gap.
pub const VELOCITY_MATCH_TIME_TO_TARGET: f32 = 0.1;

/// Per-second velocity retention applied during integration.
pub const DEFAULT_DRAG: f32 = 0.95;
/// Speed cap the host applies to steered agents after integration.
pub const DEFAULT_MAX_SPEED: f32 = 20.0;
/// Half extent of the square world on the x and z axes.
pub const DEFAULT_WORLD_SIZE: f32 = 50.0;
/// Squared-magnitude threshold below which priority steering skips a child.
pub const DEFAULT_PRIORITY_EPSILON: f32 = 1e-3;
