//! Loop-order matrix multiplication benchmark.
//!
//! The same triple loop, nested three ways (i-j-k, j-k-i, k-j-i), does the
//! same arithmetic but walks memory very differently. This crate times the
//! three orders on random square matrices and reports mean time, spread,
//! GFLOPS and efficiency relative to the fastest order.
//!
//! ## Usage
//!
//! ```
//! use loopbench::kernels::LoopOrder;
//! use loopbench::matrix::Matrix;
//!
//! let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
//! let mut c = Matrix::zeros(2, 2).unwrap();
//!
//! LoopOrder::Kji.multiply(&a, &b, &mut c);
//! assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
//! ```
//!
//! Benchmarking one size with a fixed seed:
//!
//! ```
//! use loopbench::matrix::Dims;
//! use loopbench::runner::benchmark_size;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let report = benchmark_size(Dims::square(16).unwrap(), 3, &mut rng).unwrap();
//! assert_eq!(report.best().unwrap().efficiency, 100.0);
//! ```
//!
//! ## What's inside
//!
//! - `matrix`: row-major `Matrix` and `Dims`
//! - `kernels`: the three loop orders behind `LoopOrder`
//! - `stats`: mean, population std-dev, GFLOPS with a clock-resolution floor
//! - `runner`: timed repetitions and per-size aggregation
//! - `report`: console text and `;`-delimited files

pub mod config;
pub mod error;
pub mod kernels;
pub mod matrix;
pub mod report;
pub mod runner;
pub mod stats;

pub use config::SuiteConfig;
pub use error::{BenchError, Result};
pub use kernels::{LoopOrder, matmul_ijk, matmul_jki, matmul_kji};
pub use matrix::{Dims, Matrix};
pub use runner::{
    KernelStats, Sample, SingleRun, SizeReport, benchmark_size, run_benchmark, run_single,
    run_suite,
};
