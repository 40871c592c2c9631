use std::fmt;

use crate::error::{BenchError, Result};

/// Largest m, k or n for which operands and products are printed.
pub const SMALL_PROBLEM_LIMIT: usize = 8;

/// Shape of one multiplication: A is m×k, B is k×n, C is m×n.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dims {
    pub m: usize,
    pub k: usize,
    pub n: usize,
}

impl Dims {
    pub fn new(m: usize, k: usize, n: usize) -> Result<Self> {
        if m == 0 || k == 0 || n == 0 {
            return Err(BenchError::InvalidDims(format!(
                "dimensions must be greater than 0, got m={} k={} n={}",
                m, k, n
            )));
        }
        Ok(Self { m, k, n })
    }

    /// Same as [`Dims::new`] but for signed input straight off the command line.
    pub fn from_signed(m: i64, k: i64, n: i64) -> Result<Self> {
        let conv = |v: i64| {
            usize::try_from(v).map_err(|_| {
                BenchError::InvalidDims(format!(
                    "dimensions must be greater than 0, got m={} k={} n={}",
                    m, k, n
                ))
            })
        };
        Self::new(conv(m)?, conv(k)?, conv(n)?)
    }

    pub fn square(dim: usize) -> Result<Self> {
        Self::new(dim, dim, dim)
    }

    pub fn is_square(&self) -> bool {
        self.m == self.k && self.k == self.n
    }

    /// Floating-point operations for one product: one multiply and one add per
    /// inner step.
    pub fn flops(&self) -> f64 {
        2.0 * self.m as f64 * self.k as f64 * self.n as f64
    }

    /// True when every dimension is at most [`SMALL_PROBLEM_LIMIT`]. This is a
    /// property of the whole problem, not of any one matrix.
    pub fn is_small(&self) -> bool {
        self.m <= SMALL_PROBLEM_LIMIT
            && self.k <= SMALL_PROBLEM_LIMIT
            && self.n <= SMALL_PROBLEM_LIMIT
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A({} x {}) * B({} x {}) = C({} x {})",
            self.m, self.k, self.k, self.n, self.m, self.n
        )
    }
}
