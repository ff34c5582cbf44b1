//! Core compute primitive (Matrix).
//!
//! A dense, row-major `f32` matrix with fixed dimensions.

mod matrix;

pub use matrix::Matrix;
