use anyhow::Context;
use serde::{Deserialize, Serialize};
use sincore::output::DEFAULT_PREFIX;
use sincore::signal::{DEFAULT_NOISE_STD, DEFAULT_SEED};
use sincore::GenerationParams;
use std::fs;
use std::path::{Path, PathBuf};

/// Everything a run needs. `length` and `step` stay unset until supplied by
/// a config file, the command line, or the interactive prompt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub length: Option<usize>,
    pub step: Option<f64>,
    pub noise_std: f64,
    pub seed: u64,
    pub prefix: String,
    pub output_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            length: None,
            step: None,
            noise_std: DEFAULT_NOISE_STD,
            seed: DEFAULT_SEED,
            prefix: DEFAULT_PREFIX.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub length: Option<usize>,
    pub step: Option<f64>,
    pub noise_std: Option<f64>,
    pub seed: Option<u64>,
    pub prefix: Option<String>,
    pub output_dir: Option<PathBuf>,
}

impl RunConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading run config {}", path_ref.display()))?;
        let config: RunConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing run config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn merge(mut self, overrides: Overrides) -> Self {
        if overrides.length.is_some() {
            self.length = overrides.length;
        }
        if overrides.step.is_some() {
            self.step = overrides.step;
        }
        if let Some(noise_std) = overrides.noise_std {
            self.noise_std = noise_std;
        }
        if let Some(seed) = overrides.seed {
            self.seed = seed;
        }
        if let Some(prefix) = overrides.prefix {
            self.prefix = prefix;
        }
        if let Some(output_dir) = overrides.output_dir {
            self.output_dir = output_dir;
        }
        self
    }

    /// Validated generator parameters. Fails if `length` or `step` is still
    /// unresolved.
    pub fn to_params(&self) -> anyhow::Result<GenerationParams> {
        let count = self.length.context("length was not provided")?;
        let step = self.step.context("step was not provided")?;
        let params = GenerationParams::new(count, step)
            .with_noise_std(self.noise_std)
            .with_seed(self.seed);
        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_match_generator_defaults() {
        let cfg = RunConfig::default();
        assert_eq!(cfg.noise_std, 0.01);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.prefix, "sin_data_noisy");
        assert!(cfg.length.is_none() && cfg.step.is_none());
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"length: 300\nstep: 0.5\nseed: 7\n").unwrap();
        let path = temp.into_temp_path();
        let cfg = RunConfig::load(&path).unwrap();
        assert_eq!(cfg.length, Some(300));
        assert_eq!(cfg.step, Some(0.5));
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.noise_std, 0.01);
    }

    #[test]
    fn config_load_rejects_malformed_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"length: [not, a, number]\n").unwrap();
        let path = temp.into_temp_path();
        let err = RunConfig::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("parsing run config"));
    }

    #[test]
    fn overrides_win_over_file_values() {
        let file = RunConfig {
            length: Some(10),
            step: Some(1.0),
            seed: 9,
            ..Default::default()
        };
        let merged = file.merge(Overrides {
            length: Some(20),
            prefix: Some("wave".into()),
            ..Default::default()
        });
        assert_eq!(merged.length, Some(20));
        assert_eq!(merged.step, Some(1.0));
        assert_eq!(merged.seed, 9);
        assert_eq!(merged.prefix, "wave");
    }

    #[test]
    fn to_params_requires_length_and_step() {
        assert!(RunConfig::default().to_params().is_err());
        let cfg = RunConfig {
            length: Some(4),
            step: Some(0.25),
            ..Default::default()
        };
        let params = cfg.to_params().unwrap();
        assert_eq!(params.count, 4);
        assert_eq!(params.step, 0.25);
    }

    #[test]
    fn to_params_rejects_non_positive_step() {
        let cfg = RunConfig {
            length: Some(4),
            step: Some(0.0),
            ..Default::default()
        };
        assert!(cfg.to_params().is_err());
    }
}
