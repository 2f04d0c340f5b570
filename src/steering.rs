//! The acceleration request produced by a behaviour for one tick.

use std::ops::{Add, AddAssign, Mul, MulAssign};

use glam::Vec3;

/// Desired linear and angular acceleration for a single tick.
///
/// Behaviours always return a fresh value, so nothing leaks between calls.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SteeringOutput {
    /// Linear acceleration.
    pub linear: Vec3,
    /// Angular acceleration in radians per second squared.
    pub angular: f32,
}

impl SteeringOutput {
    /// The output requesting no acceleration at all.
    pub const ZERO: Self = Self {
        linear: Vec3::ZERO,
        angular: 0.0,
    };

    /// Output with only a linear component.
    #[must_use]
    pub const fn linear(linear: Vec3) -> Self {
        Self {
            linear,
            angular: 0.0,
        }
    }

    /// Output with only an angular component.
    #[must_use]
    pub const fn angular(angular: f32) -> Self {
        Self {
            linear: Vec3::ZERO,
            angular,
        }
    }

    /// Resets both components to zero.
    pub fn clear(&mut self) {
        *self = Self::ZERO;
    }

    /// Combined squared magnitude of the linear and angular parts.
    ///
    /// ```
    /// use glam::Vec3;
    /// use steering::SteeringOutput;
    /// let out = SteeringOutput { linear: Vec3::new(3.0, 0.0, 0.0), angular: 4.0 };
    /// assert_eq!(out.square_magnitude(), 25.0);
    /// ```
    #[must_use]
    pub fn square_magnitude(&self) -> f32 {
        self.linear.length_squared() + self.angular * self.angular
    }

    /// Returns `true` when both components are exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.linear == Vec3::ZERO && self.angular == 0.0
    }
}

impl Add for SteeringOutput {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            linear: self.linear + rhs.linear,
            angular: self.angular + rhs.angular,
        }
    }
}

impl AddAssign for SteeringOutput {
    fn add_assign(&mut self, rhs: Self) {
        self.linear += rhs.linear;
        self.angular += rhs.angular;
    }
}

impl Mul<f32> for SteeringOutput {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self {
            linear: self.linear * rhs,
            angular: self.angular * rhs,
        }
    }
}

impl MulAssign<f32> for SteeringOutput {
    fn mul_assign(&mut self, rhs: f32) {
        self.linear *= rhs;
        self.angular *= rhs;
    }
}
