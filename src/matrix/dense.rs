use std::fmt;

use rand::Rng;

use crate::error::{BenchError, Result};

/// Dense row-major matrix of `f64`.
///
/// Element `(i, j)` lives at `data[i * cols + j]`. Dimensions are fixed at
/// construction and always at least 1×1.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// All-zero matrix.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if `rows` or `cols` is 0, `AllocationFailure` if the
    /// buffer cannot be reserved.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let mut data = alloc(rows, cols)?;
        data.resize(rows * cols, 0.0);
        Ok(Self { rows, cols, data })
    }

    /// Matrix filled from a uniform distribution over [0, 1).
    ///
    /// The generator is supplied by the caller, so a seeded `StdRng` gives a
    /// reproducible matrix.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        let mut data = alloc(rows, cols)?;
        data.extend((0..rows * cols).map(|_| rng.gen_range(0.0..1.0)));
        Ok(Self { rows, cols, data })
    }

    /// Wrap an existing row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        check_dims(rows, cols)?;
        if data.len() != rows * cols {
            return Err(BenchError::InvalidDims(format!(
                "expected {}x{}={} elements, got {}",
                rows,
                cols,
                rows * cols,
                data.len()
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Reset every cell to 0.0 in place.
    pub fn zero(&mut self) {
        self.data.fill(0.0);
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.cols + j]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Largest element-wise `|self - other|`.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    pub fn max_abs_diff(&self, other: &Matrix) -> f64 {
        assert_eq!(
            (self.rows, self.cols),
            (other.rows, other.cols),
            "shape mismatch"
        );
        self.data
            .iter()
            .zip(&other.data)
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max)
    }

    /// Fixed-width text rendering: `{:6.3}` per cell, space separated, one
    /// row per line.
    ///
    /// No size limit is applied here; callers gate on [`super::Dims::is_small`].
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols) {
            for v in row {
                write!(f, "{:6.3} ", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn check_dims(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(BenchError::InvalidDimension { rows, cols });
    }
    Ok(())
}

/// Empty buffer with room for `rows * cols` values, or an error instead of
/// the default abort-on-OOM.
fn alloc(rows: usize, cols: usize) -> Result<Vec<f64>> {
    check_dims(rows, cols)?;
    let elements = rows
        .checked_mul(cols)
        .ok_or(BenchError::AllocationFailure { elements: usize::MAX })?;
    let mut data = Vec::new();
    data.try_reserve_exact(elements)
        .map_err(|_| BenchError::AllocationFailure { elements })?;
    Ok(data)
}
