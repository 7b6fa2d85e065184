//! ARM64 matrix-vector kernels

pub mod neon;
