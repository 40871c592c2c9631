//! Command-line driver for the loop-order benchmark.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use loopbench::config::{DEFAULT_RUNS, SuiteConfig};
use loopbench::matrix::Dims;
use loopbench::runner::{run_single, run_suite};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Time dense matrix multiplication under the ijk, jki and kji loop orders
#[derive(Parser)]
#[command(name = "loopbench")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Seed for operand generation (defaults to the current Unix time)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Multiply one A(m x k) by B(k x n) with each loop order and time it
    Run {
        /// Rows of A and C
        #[arg(allow_negative_numbers = true)]
        m: i64,
        /// Columns of A, rows of B
        #[arg(allow_negative_numbers = true)]
        k: i64,
        /// Columns of B and C
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },

    /// Repeated timings over a list of square sizes, with per-size reports
    Suite {
        /// Square sizes to benchmark
        #[arg(long, value_delimiter = ',', default_value = "128,256,512,1024,2048,4096")]
        sizes: Vec<usize>,

        /// Timed repetitions per kernel per size
        #[arg(short, long, default_value_t = DEFAULT_RUNS)]
        runs: usize,

        /// Directory for results_<dim>.csv files
        #[arg(long, env = "LOOPBENCH_OUT_DIR", default_value = ".")]
        out_dir: PathBuf,

        /// Print to the console only
        #[arg(long)]
        no_files: bool,
    },
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // stderr may already be gone; the exit code still reports the failure
            err.print().ok();
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    let seed = cli.seed.unwrap_or_else(time_seed);
    info!(seed, "random generator seeded");
    let mut rng = StdRng::seed_from_u64(seed);

    match cli.command {
        Commands::Run { m, k, n } => single(Dims::from_signed(m, k, n)?, &mut rng),
        Commands::Suite {
            sizes,
            runs,
            out_dir,
            no_files,
        } => {
            let config = SuiteConfig {
                sizes,
                runs,
                out_dir,
                write_files: !no_files,
            };
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let written = run_suite(&config, &mut rng, &mut out).context("benchmark suite failed")?;
            debug!(files = written.len(), "suite finished");
            Ok(())
        }
    }
}

fn single(dims: Dims, rng: &mut StdRng) -> Result<()> {
    let run = run_single(dims, rng).context("could not allocate matrices")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Dimensions: {}\n", dims)?;
    for (order, secs, c) in &run.results {
        writeln!(out, "Version {}: {:.3} seconds", order, secs)?;
        if dims.is_small() {
            writeln!(out, "Result C ({}):\n{}", order, c)?;
        }
    }
    if dims.is_small() {
        writeln!(out, "Matrix A:\n{}", run.a)?;
        writeln!(out, "Matrix B:\n{}", run.b)?;
    }
    writeln!(out, "Max difference between kernels: {:e}", run.max_disagreement())?;
    Ok(())
}

/// Low-resolution seed from the wall clock; not reproducible unless logged.
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
