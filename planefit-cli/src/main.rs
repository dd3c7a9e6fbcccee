//! Estimate the dominant plane of a point cloud file
//!
//! Reads `input.txt` (or `--input`), runs RANSAC and prints `a b c d` on a
//! single line.

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use planefit_algorithms::{fit_plane, RansacConfig, RngSource, RANSAC_MAX_ITERATIONS};
use planefit_io::{read_input, write_plane, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_PRECISION};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "planefit", version, about = "Find the dominant plane in a 3D point cloud with RANSAC")]
struct Opts {
    /// Input file: tolerance, point count, then x y z triples
    #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
    input: PathBuf,

    /// Maximum number of RANSAC iterations
    #[arg(short = 'n', long, default_value_t = RANSAC_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Significant digits per printed coefficient
    #[arg(long, default_value_t = DEFAULT_OUTPUT_PRECISION)]
    precision: usize,

    /// Log progress at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if opts.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let input = read_input(&opts.input)
        .with_context(|| format!("failed to load {}", opts.input.display()))?;
    info!("loaded {} points from {}", input.cloud.len(), opts.input.display());

    let config = RansacConfig::new(input.tolerance).with_max_iterations(opts.max_iterations);
    let mut rng = RngSource::from_entropy();
    let fit = fit_plane(&input.cloud, &config, &mut rng).context("plane estimation failed")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_plane(&mut out, &fit.plane, opts.precision)?;
    out.flush()?;

    Ok(())
}
