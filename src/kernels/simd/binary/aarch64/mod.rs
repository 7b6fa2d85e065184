//! ARM64 element-wise add kernels

pub mod neon;
