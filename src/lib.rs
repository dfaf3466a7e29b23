//! Micro-benchmark comparing three implementations of the elementwise
//! fused multiply-add `v*v + v` over a large `f32` buffer: a scalar loop,
//! an AVX2/FMA intrinsic loop and a portable SIMD loop built on `wide`.
//!
//! Each strategy is timed with a monotonic clock and the three result
//! buffers are cross-checked for numerical agreement within a fixed
//! tolerance.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod benchmark;
pub mod compare;
pub mod config;
pub mod error;
pub mod fma;
pub mod vector;

pub use compare::{close_within, compare_outputs, MismatchSummary};
pub use config::Config;
pub use error::{Error, Result};
pub use fma::Strategy;
pub use vector::Vector;
