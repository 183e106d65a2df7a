//! Noisy sine synthesis.
//!
//! The series is `sin(x / 180 * π) + x / 10000` sampled at `x = i * step`,
//! perturbed with zero-mean Gaussian noise and rounded to
//! [`DECIMAL_PLACES`] places. Noise comes from a ChaCha20 stream seeded once
//! per call, so a given parameter set always yields the same series.

pub mod generator;
pub mod rounding;

pub use generator::{clean_value, generate, generate_with_rng};
pub use rounding::round_to;

pub const DEFAULT_NOISE_STD: f64 = 0.01;
pub const DEFAULT_SEED: u64 = 42;
pub const DECIMAL_PLACES: i32 = 4;
