//! Tensor storage and layout
//!
//! This module provides the core [`Tensor`] type (an owned, contiguous,
//! row-major buffer of [`crate::Complex64`] values) and the [`Layout`]
//! shape/stride descriptor it is addressed through.

mod core;
mod layout;

pub use core::Tensor;
pub use layout::{Layout, Shape, Strides};
