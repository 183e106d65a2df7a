//! Synthetic noisy sine series for recurrent-network experiments.
//!
//! [`signal`] produces a reproducible, rounded sample sequence from
//! [`GenerationParams`]; [`output`] persists it as a single-column CSV.

pub mod math;
pub mod output;
pub mod prelude;
pub mod signal;

pub use prelude::{GenerationParams, SignalError, SignalResult};
