//! Sample statistics and throughput.

/// Timings at or below this many seconds are treated as unresolved by the
/// clock.
pub const MIN_RESOLVABLE_SECS: f64 = 1e-6;

/// Arithmetic mean.
///
/// # Panics
///
/// Panics on an empty slice. Every benchmark has at least one run.
pub fn mean(samples: &[f64]) -> f64 {
    assert!(!samples.is_empty(), "need at least one sample");
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Population standard deviation (divisor `n`, not `n - 1`) around a mean the
/// caller already computed.
pub fn stddev(samples: &[f64], mean: f64) -> f64 {
    assert!(!samples.is_empty(), "need at least one sample");
    let var = samples.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / samples.len() as f64;
    var.sqrt()
}

/// GFLOPS for `ops` floating-point operations done in `secs` seconds.
///
/// When `secs <= MIN_RESOLVABLE_SECS` the result is `ops / 1e3`, i.e. the
/// throughput as if the call had taken exactly one microsecond. That is an
/// approximation standing in for a measurement the clock could not make,
/// not a real throughput.
pub fn gflops(ops: f64, secs: f64) -> f64 {
    if secs <= MIN_RESOLVABLE_SECS {
        ops / 1e3
    } else {
        ops / (secs * 1e9)
    }
}

/// Each value as a percentage of the largest one. The best entry is exactly
/// 100.0.
///
/// If nothing is positive every entry comes back as 0.0.
pub fn relative_efficiency(values: &[f64]) -> Vec<f64> {
    let best = values.iter().copied().fold(0.0, f64::max);
    if best <= 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|&v| v / best * 100.0).collect()
}
