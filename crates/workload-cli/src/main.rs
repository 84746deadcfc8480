use anyhow::Context;
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use workload_pipeline::{
    artifacts, generate_workload, CropBounds, SourceConfig, WorkloadConfig,
};

const DEFAULT_UNIFORM_SIZE: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SourceKind {
    Csv,
    Uniform,
}

#[derive(Parser)]
#[command(author, version, about = "Generate benchmark datasets and selectivity-calibrated range queries", long_about = None)]
struct Cli {
    /// TOML workload config; generation flags are ignored when set
    #[arg(long)]
    config: Option<PathBuf>,

    /// Label used in artifact file names
    #[arg(long, default_value = "workload")]
    name: String,

    /// Dataset source kind
    #[arg(long, value_enum, default_value = "uniform")]
    source: SourceKind,

    /// CSV file to read values from (source = csv)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// CSV column holding the numeric values
    #[arg(long, default_value = "value")]
    column: String,

    /// Target dataset size; -1 keeps the source size. Also sets the draw
    /// count for the uniform source.
    #[arg(long, default_value_t = -1)]
    size: i64,

    /// Histogram bin count for resampling and endpoint placement
    #[arg(long, default_value_t = 100)]
    bins: usize,

    /// Min element for uniform generation and cropping
    #[arg(long, default_value_t = 0.0)]
    min: f64,

    /// Max element for uniform generation and cropping
    #[arg(long, default_value_t = 1_000_000.0)]
    max: f64,

    /// Crop the dataset to [min, max] before resizing
    #[arg(long)]
    crop: bool,

    /// Selectivities as percents of dataset cardinality
    #[arg(short, long, num_args = 1.., required_unless_present = "config")]
    selectivities: Vec<f64>,

    /// Queries per selectivity and placement mode
    #[arg(long, default_value_t = 100)]
    queries: usize,

    /// Seed to use for the PRG
    #[arg(long, default_value_t = 123_456)]
    seed: u64,

    /// Directory the artifact files are written to
    #[arg(long, default_value = "output")]
    output: PathBuf,

    /// Increase output verbosity
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn workload_config(&self) -> anyhow::Result<WorkloadConfig> {
        if let Some(path) = &self.config {
            let config = WorkloadConfig::from_path(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            return Ok(config);
        }

        let source = match self.source {
            SourceKind::Csv => SourceConfig::Csv {
                path: self
                    .csv
                    .clone()
                    .context("--csv is required when --source is csv")?,
                column: self.column.clone(),
            },
            SourceKind::Uniform => SourceConfig::Uniform {
                size: if self.size > 0 {
                    self.size as usize
                } else {
                    DEFAULT_UNIFORM_SIZE
                },
                low: self.min,
                high: self.max,
            },
        };

        let config = WorkloadConfig {
            name: self.name.clone(),
            source,
            size: self.size,
            bins: self.bins,
            crop: self.crop.then(|| CropBounds {
                min: self.min,
                max: self.max,
            }),
            selectivities: self.selectivities.clone(),
            queries_per_batch: self.queries,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.workload_config()?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let workload = generate_workload(&config, &mut rng)?;
    let paths = artifacts::write_workload(&cli.output, &config.name, &workload)?;

    info!(
        dataset = workload.dataset.len(),
        files = paths.len(),
        output = %cli.output.display(),
        "done"
    );
    Ok(())
}
