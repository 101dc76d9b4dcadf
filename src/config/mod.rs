// src/config/mod.rs

pub mod arith_config;

// Re-export main types for convenience
pub use arith_config::{ArithConfig, OverflowPolicy};
