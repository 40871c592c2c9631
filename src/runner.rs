//! Benchmark orchestration.
//!
//! Every timed repetition gets freshly allocated operands so one run cannot
//! warm the cache for the next. Allocation and initialization stay outside
//! the timed region; only the kernel call itself is measured.

use std::hint::black_box;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::SuiteConfig;
use crate::error::{BenchError, Result};
use crate::kernels::LoopOrder;
use crate::matrix::{Dims, Matrix};
use crate::report;
use crate::stats::{self, MIN_RESOLVABLE_SECS};

/// One timed kernel call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Wall-clock seconds spent in the kernel.
    pub secs: f64,
    /// Throughput derived from `secs`, floored when `secs` is unresolvable.
    pub gflops: f64,
}

impl Sample {
    pub fn new(secs: f64, dims: Dims) -> Self {
        Self {
            secs,
            gflops: stats::gflops(dims.flops(), secs),
        }
    }

    /// True when the throughput is the floor substitute, not a measurement.
    pub fn is_floored(&self) -> bool {
        self.secs <= MIN_RESOLVABLE_SECS
    }
}

/// Aggregates for one kernel at one size.
#[derive(Debug, Clone)]
pub struct KernelStats {
    pub order: LoopOrder,
    pub samples: Vec<Sample>,
    pub mean_secs: f64,
    pub std_secs: f64,
    pub mean_gflops: f64,
    pub std_gflops: f64,
    /// Percent of the best `mean_gflops` at this size.
    pub efficiency: f64,
}

impl KernelStats {
    /// Reduce raw samples. `efficiency` is left at 0 until the kernels at the
    /// same size are compared in [`SizeReport::new`].
    pub fn from_samples(order: LoopOrder, samples: Vec<Sample>) -> Self {
        let secs: Vec<f64> = samples.iter().map(|s| s.secs).collect();
        let gflops: Vec<f64> = samples.iter().map(|s| s.gflops).collect();
        let mean_secs = stats::mean(&secs);
        let mean_gflops = stats::mean(&gflops);
        Self {
            order,
            std_secs: stats::stddev(&secs, mean_secs),
            std_gflops: stats::stddev(&gflops, mean_gflops),
            mean_secs,
            mean_gflops,
            samples,
            efficiency: 0.0,
        }
    }
}

/// All three kernels at one size.
#[derive(Debug, Clone)]
pub struct SizeReport {
    pub dims: Dims,
    pub runs: usize,
    /// In [`LoopOrder::ALL`] order.
    pub kernels: Vec<KernelStats>,
}

impl SizeReport {
    /// Fill in relative efficiency across `kernels`.
    ///
    /// # Panics
    ///
    /// Panics if the kernels do not all carry `runs` samples.
    pub fn new(dims: Dims, mut kernels: Vec<KernelStats>) -> Self {
        let runs = kernels.first().map_or(0, |k| k.samples.len());
        assert!(
            kernels.iter().all(|k| k.samples.len() == runs),
            "every kernel needs the same number of runs"
        );
        let means: Vec<f64> = kernels.iter().map(|k| k.mean_gflops).collect();
        for (k, eff) in kernels.iter_mut().zip(stats::relative_efficiency(&means)) {
            k.efficiency = eff;
        }
        Self { dims, runs, kernels }
    }

    pub fn kernel(&self, order: LoopOrder) -> Option<&KernelStats> {
        self.kernels.iter().find(|k| k.order == order)
    }

    /// Kernel with the highest mean GFLOPS.
    pub fn best(&self) -> Option<&KernelStats> {
        self.kernels
            .iter()
            .max_by(|a, b| a.mean_gflops.total_cmp(&b.mean_gflops))
    }
}

/// Time one kernel call on prepared operands.
fn time_kernel(order: LoopOrder, a: &Matrix, b: &Matrix, c: &mut Matrix) -> f64 {
    let start = Instant::now();
    order.multiply(a, b, c);
    let secs = start.elapsed().as_secs_f64();
    black_box(c);
    secs
}

/// Run `order` `runs` times at `dims`, each on fresh random operands.
///
/// A, B and C are dropped at the end of every repetition, so peak memory stays
/// at one operand set.
pub fn run_benchmark<R: Rng + ?Sized>(
    order: LoopOrder,
    dims: Dims,
    runs: usize,
    rng: &mut R,
) -> Result<Vec<Sample>> {
    let mut samples = Vec::with_capacity(runs);
    for run in 0..runs {
        let a = Matrix::random(dims.m, dims.k, rng)?;
        let b = Matrix::random(dims.k, dims.n, rng)?;
        let mut c = Matrix::zeros(dims.m, dims.n)?;

        let sample = Sample::new(time_kernel(order, &a, &b, &mut c), dims);
        if sample.is_floored() {
            warn!(
                kernel = %order,
                run = run + 1,
                "timing below clock resolution, using throughput floor"
            );
        }
        debug!(
            kernel = %order,
            run = run + 1,
            secs = sample.secs,
            gflops = sample.gflops,
            "sample"
        );
        samples.push(sample);
    }
    Ok(samples)
}

/// Benchmark every loop order at `dims` and compare them.
pub fn benchmark_size<R: Rng + ?Sized>(dims: Dims, runs: usize, rng: &mut R) -> Result<SizeReport> {
    if runs == 0 {
        return Err(BenchError::InvalidConfig("runs must be > 0".into()));
    }
    let mut kernels = Vec::with_capacity(LoopOrder::ALL.len());
    for order in LoopOrder::ALL {
        info!(kernel = %order, m = dims.m, k = dims.k, n = dims.n, runs, "benchmarking");
        let samples = run_benchmark(order, dims, runs, rng)?;
        kernels.push(KernelStats::from_samples(order, samples));
    }
    Ok(SizeReport::new(dims, kernels))
}

/// Run the full suite: each configured size, console report to `out`, one
/// delimited file per size. Returns the files written.
pub fn run_suite<R, W>(config: &SuiteConfig, rng: &mut R, out: &mut W) -> Result<Vec<PathBuf>>
where
    R: Rng + ?Sized,
    W: Write,
{
    config.validate()?;
    let console = |e: std::io::Error| BenchError::io("<console>", e);

    writeln!(out, "Matrix multiplication loop-order benchmark").map_err(console)?;
    writeln!(out, "{}\n", "-".repeat(53)).map_err(console)?;

    let mut written = Vec::new();
    for &size in &config.sizes {
        let dims = Dims::square(size)?;
        writeln!(out, "Testing {} x {} matrices", size, size).map_err(console)?;

        let report = benchmark_size(dims, config.runs, rng)?;
        report::write_console(&report, out).map_err(console)?;

        if config.write_files {
            let path = report::save(&report, &config.out_dir)?;
            writeln!(out, "Report '{}' written.", path.display()).map_err(console)?;
            written.push(path);
        }
        writeln!(out, "{}\n", "=".repeat(54)).map_err(console)?;
    }
    Ok(written)
}

/// Outcome of the single-run variant: one operand set, every kernel once.
#[derive(Debug, Clone)]
pub struct SingleRun {
    pub dims: Dims,
    pub a: Matrix,
    pub b: Matrix,
    /// Elapsed seconds and product per kernel, in [`LoopOrder::ALL`] order.
    pub results: Vec<(LoopOrder, f64, Matrix)>,
}

impl SingleRun {
    /// Largest element-wise difference between any kernel's product and the
    /// first kernel's.
    pub fn max_disagreement(&self) -> f64 {
        let Some((_, _, first)) = self.results.first() else {
            return 0.0;
        };
        self.results
            .iter()
            .map(|(_, _, c)| first.max_abs_diff(c))
            .fold(0.0, f64::max)
    }
}

/// Multiply one random A and B with each loop order, re-zeroing C in between.
pub fn run_single<R: Rng + ?Sized>(dims: Dims, rng: &mut R) -> Result<SingleRun> {
    let a = Matrix::random(dims.m, dims.k, rng)?;
    let b = Matrix::random(dims.k, dims.n, rng)?;
    let mut c = Matrix::zeros(dims.m, dims.n)?;

    let mut results = Vec::with_capacity(LoopOrder::ALL.len());
    for order in LoopOrder::ALL {
        c.zero();
        let secs = time_kernel(order, &a, &b, &mut c);
        debug!(kernel = %order, secs, "single run");
        results.push((order, secs, c.clone()));
    }
    Ok(SingleRun { dims, a, b, results })
}
