// src/service/mod.rs

pub mod arithmetic_service;

pub use arithmetic_service::ArithmeticService;
