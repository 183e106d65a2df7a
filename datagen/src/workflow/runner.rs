use crate::workflow::config::RunConfig;
use anyhow::Context;
use log::info;
use sincore::math::{SeriesSummary, StatsHelper};
use sincore::output::save_to_csv;
use sincore::signal::generate;
use std::path::PathBuf;

pub struct RunResult {
    pub path: PathBuf,
    pub values: Vec<f64>,
    pub summary: Option<SeriesSummary>,
}

#[derive(Clone)]
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Validates, generates and writes one series.
    pub fn execute(&self) -> anyhow::Result<RunResult> {
        let params = self
            .config
            .to_params()
            .context("resolving generation parameters")?;

        let values = generate(&params).context("generating noisy sine series")?;
        let path = save_to_csv(
            &self.config.output_dir,
            &values,
            params.count,
            &self.config.prefix,
        )
        .context("saving series")?;

        info!("generated {} values into {}", values.len(), path.display());

        Ok(RunResult {
            summary: StatsHelper::summarize(&values),
            path,
            values,
        })
    }
}
