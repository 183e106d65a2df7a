use anyhow::Context;
use clap::Parser;
use log::info;
use sincore::output::format_value;
use std::io;
use std::path::PathBuf;
use workflow::config::{Overrides, RunConfig};
use workflow::prompt::{prompt_length, prompt_step};
use workflow::runner::Runner;

mod workflow;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Writes a noisy sin(x/180*pi) + x/10000 series to CSV"
)]
struct Args {
    /// Number of data points; prompted for when absent
    #[arg(long)]
    length: Option<usize>,
    /// Spacing between consecutive x values; prompted for when absent
    #[arg(long)]
    step: Option<f64>,
    /// Standard deviation of the Gaussian noise [default: 0.01]
    #[arg(long)]
    noise_std: Option<f64>,
    /// Noise generator seed [default: 42]
    #[arg(long)]
    seed: Option<u64>,
    /// Output file prefix [default: sin_data_noisy]
    #[arg(long)]
    prefix: Option<String>,
    /// Directory the CSV is written into [default: .]
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Load run settings from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// How many leading values to echo after writing
    #[arg(long, default_value_t = 10)]
    preview: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let base = if let Some(path) = &args.config {
        RunConfig::load(path)?
    } else {
        RunConfig::default()
    };
    let mut config = base.merge(Overrides {
        length: args.length,
        step: args.step,
        noise_std: args.noise_std,
        seed: args.seed,
        prefix: args.prefix,
        output_dir: args.output_dir,
    });

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    if config.length.is_none() {
        let length = prompt_length(&mut input, &mut output).context("reading length")?;
        config.length = Some(length);
    }
    if config.step.is_none() {
        let step = prompt_step(&mut input, &mut output).context("reading step")?;
        config.step = Some(step);
    }

    let params = config.to_params()?;
    println!(
        "Generating {} points with step {}, f(x) = sin(x/180*pi) + x/10000, noise std {}, seed {}...",
        params.count, params.step, params.noise_std, params.seed
    );

    let result = Runner::new(config).execute()?;
    println!("Saved to {}", result.path.display());
    if let Some(summary) = &result.summary {
        info!(
            "series len {} min {:.4} max {:.4} mean {:.4} rms {:.4}",
            summary.len, summary.min, summary.max, summary.mean, summary.rms
        );
    }

    let preview: Vec<String> = result
        .values
        .iter()
        .take(args.preview)
        .map(|v| format_value(*v))
        .collect();
    println!("First {} values: [{}]", preview.len(), preview.join(", "));

    Ok(())
}
