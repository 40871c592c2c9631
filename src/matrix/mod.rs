//! Matrix storage and problem shapes.
//!
//! `Matrix` owns a flat row-major buffer. `Dims` carries the (m, k, n) shape
//! of a multiplication and knows its flop count.

mod dense;
mod dims;

pub use dense::Matrix;
pub use dims::{Dims, SMALL_PROBLEM_LIMIT};
