//! Behaviours built out of other behaviours.
//!
//! Combinators pass their own character straight through to every child, so
//! a child never holds on to whichever agent it last steered.

mod blended;
mod priority;

pub use blended::{BehaviourAndWeight, BlendedSteering};
pub use priority::PrioritySteering;
