use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::signal::{DEFAULT_NOISE_STD, DEFAULT_SEED};

/// Inputs to a single generator call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    pub count: usize,
    pub step: f64,
    pub noise_std: f64,
    pub seed: u64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            count: 300,
            step: 1.0,
            noise_std: DEFAULT_NOISE_STD,
            seed: DEFAULT_SEED,
        }
    }
}

impl GenerationParams {
    pub fn new(count: usize, step: f64) -> Self {
        Self {
            count,
            step,
            ..Default::default()
        }
    }

    pub fn with_noise_std(mut self, noise_std: f64) -> Self {
        self.noise_std = noise_std;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Rejects parameters the generator is not defined for.
    pub fn validate(&self) -> SignalResult<()> {
        if self.count == 0 {
            return Err(SignalError::invalid("count", "must be a positive integer"));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(SignalError::invalid("step", "must be a positive number"));
        }
        if !self.noise_std.is_finite() || self.noise_std < 0.0 {
            return Err(SignalError::invalid(
                "noise_std",
                "must be a finite, non-negative number",
            ));
        }
        Ok(())
    }
}

/// Common error type for generation and serialization.
#[derive(thiserror::Error, Debug)]
pub enum SignalError {
    #[error("invalid {field}: {reason}")]
    InvalidParameter { field: &'static str, reason: String },
    #[error("noise distribution: {0}")]
    Distribution(String),
    #[error("writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SignalError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }
}

pub type SignalResult<T> = Result<T, SignalError>;
