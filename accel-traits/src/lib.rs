//! Shared element trait for the accel-math crates.
//!
//! This crate provides the [`Real`] bound that every vector and matrix
//! operation in `accel-math` is generic over. It is kept separate so that
//! downstream crates can name the bound without pulling in the BLAS/LAPACK
//! kernels.

pub mod scalar;

pub use scalar::Real;
