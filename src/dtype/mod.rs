//! Scalar element type for cxtensor
//!
//! The engine stores exactly one element type: [`Complex64`], a pair of
//! `f32` values in interleaved (re, im) layout.

mod complex;

pub use complex::Complex64;
