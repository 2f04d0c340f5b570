//! Guarded vector and angle helpers.
//! Every normalisation here checks for a degenerate input first so callers get
//! a zero vector instead of NaNs.
use std::f32::consts::{PI, TAU};

use glam::Vec3;

/// Returns the unit vector of `vector`, or zero when it cannot be normalised.
///
/// Non-finite and zero-length inputs both yield [`Vec3::ZERO`].
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use steering::vector_math::direction_or_zero;
/// let dir = direction_or_zero(Vec3::new(3.0, 0.0, 4.0));
/// assert!(dir.abs_diff_eq(Vec3::new(0.6, 0.0, 0.8), 1e-6));
/// assert_eq!(direction_or_zero(Vec3::ZERO), Vec3::ZERO);
/// ```
#[must_use]
pub fn direction_or_zero(vector: Vec3) -> Vec3 {
    if !vector.is_finite() || vector.length_squared() <= 0.0 {
        return Vec3::ZERO;
    }
    vector.normalize()
}

/// Rescales `vector` to `max` when its magnitude exceeds it.
///
/// The comparison is magnitude against magnitude, so `max` is in the same
/// units as the vector itself.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use steering::vector_math::clamp_magnitude;
/// let clamped = clamp_magnitude(Vec3::new(30.0, 0.0, 40.0), 5.0);
/// assert!((clamped.length() - 5.0).abs() < 1e-5);
/// ```
#[must_use]
pub fn clamp_magnitude(vector: Vec3, max: f32) -> Vec3 {
    if vector.length() > max {
        direction_or_zero(vector) * max
    } else {
        vector
    }
}

/// Wraps an angle into `(-PI, PI]`.
///
/// # Examples
///
/// ```
/// use std::f32::consts::PI;
/// use steering::vector_math::wrap_angle;
/// assert!((wrap_angle(1.5 * PI) + 0.5 * PI).abs() < 1e-5);
/// assert!((wrap_angle(-PI) - PI).abs() < 1e-6);
/// ```
#[must_use]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        PI
    } else {
        wrapped
    }
}

/// Heading of `vector` in the xz plane, or `None` for a vertical or zero one.
#[must_use]
pub fn heading(vector: Vec3) -> Option<f32> {
    if vector.x * vector.x + vector.z * vector.z > 0.0 {
        Some(vector.z.atan2(vector.x))
    } else {
        None
    }
}

/// Unit vector in the xz plane pointing along `angle`.
#[must_use]
pub fn unit_from_heading(angle: f32) -> Vec3 {
    Vec3::new(angle.cos(), 0.0, angle.sin())
}
