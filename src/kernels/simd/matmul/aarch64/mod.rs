//! ARM64 matmul kernels

pub mod neon;
