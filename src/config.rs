//! Suite configuration.

use std::path::PathBuf;

use crate::error::{BenchError, Result};

/// Square sizes benchmarked when none are given.
pub const DEFAULT_SIZES: [usize; 6] = [128, 256, 512, 1024, 2048, 4096];

/// Repetitions per (kernel, size) when none are given.
pub const DEFAULT_RUNS: usize = 10;

/// Parameters for a full benchmark suite.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Square matrix sizes, benchmarked in order.
    pub sizes: Vec<usize>,
    /// Timed repetitions per kernel per size.
    pub runs: usize,
    /// Directory receiving the `results_<dim>.csv` files.
    pub out_dir: PathBuf,
    /// Whether to write report files at all.
    pub write_files: bool,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            runs: DEFAULT_RUNS,
            out_dir: PathBuf::from("."),
            write_files: true,
        }
    }
}

impl SuiteConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(BenchError::InvalidConfig("no sizes to benchmark".into()));
        }
        if let Some(&bad) = self.sizes.iter().find(|&&s| s == 0) {
            return Err(BenchError::InvalidConfig(format!(
                "sizes must be greater than 0, got {}",
                bad
            )));
        }
        if self.runs == 0 {
            return Err(BenchError::InvalidConfig("runs must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = SuiteConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.sizes, vec![128, 256, 512, 1024, 2048, 4096]);
        assert_eq!(cfg.runs, 10);
    }

    #[test]
    fn rejects_empty_and_zero() {
        let mut cfg = SuiteConfig {
            sizes: vec![],
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
        cfg.sizes = vec![16, 0];
        assert!(cfg.validate().is_err());
        cfg.sizes = vec![16];
        cfg.runs = 0;
        assert!(cfg.validate().is_err());
    }
}
