use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::PI;

use super::{round_to, DECIMAL_PLACES};
use crate::prelude::{GenerationParams, SignalError, SignalResult};

/// Noise-free signal at abscissa `x`.
pub fn clean_value(x: f64) -> f64 {
    (x / 180.0 * PI).sin() + x / 10000.0
}

/// Generates `params.count` noisy samples from a generator seeded with
/// `params.seed`.
///
/// Only the noise distribution is checked here; `count` and `step` are the
/// caller's to validate (see [`GenerationParams::validate`]).
pub fn generate(params: &GenerationParams) -> SignalResult<Vec<f64>> {
    let mut rng = ChaCha20Rng::seed_from_u64(params.seed);
    generate_with_rng(params, &mut rng)
}

/// Same as [`generate`] but draws noise from `rng`. One draw is consumed
/// per sample, including when `noise_std` is zero.
pub fn generate_with_rng<R: Rng + ?Sized>(
    params: &GenerationParams,
    rng: &mut R,
) -> SignalResult<Vec<f64>> {
    let noise = Normal::new(0.0, params.noise_std)
        .map_err(|err| SignalError::Distribution(err.to_string()))?;

    debug!(
        "generating {} samples (step {}, noise_std {}, seed {})",
        params.count, params.step, params.noise_std, params.seed
    );

    let mut samples = Vec::with_capacity(params.count);
    for index in 0..params.count {
        let x = index as f64 * params.step;
        let value = clean_value(x) + noise.sample(rng);
        samples.push(round_to(value, DECIMAL_PLACES));
    }

    Ok(samples)
}
