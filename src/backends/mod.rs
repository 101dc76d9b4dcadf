// src/backends/mod.rs

pub mod native32;
pub mod native64;

pub use native32::Native32;
pub use native64::Native64;
