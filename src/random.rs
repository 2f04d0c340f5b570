//! Randomness consumed by the wander behaviour.
//!
//! Wander only needs one operation: a symmetric draw around zero. Keeping it
//! behind [`RandomSource`] lets tests replay fixed values.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of symmetric random perturbations.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send {
    /// Returns a value in `[-scale, scale]`, more likely near zero.
    fn binomial(&mut self, scale: f32) -> f32;
}

/// [`RandomSource`] backed by any [`rand::Rng`].
///
/// Draws the difference of two uniform samples, which gives a triangular
/// distribution centred on zero.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<SmallRng> {
    /// Small generator seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }

    /// Small generator with a fixed seed, for reproducible runs.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> RandomSource for RngSource<R> {
    fn binomial(&mut self, scale: f32) -> f32 {
        (self.rng.gen::<f32>() - self.rng.gen::<f32>()) * scale
    }
}
