// src/common/mod.rs

// Shared vocabulary of the crate: configuration value objects with their
// register packing rules, the error type, and the part's register map.

pub mod config;
pub mod error;
pub mod registers;

pub use config::{FilterConfig, GyroConfig, InterruptConfig};
pub use error::Error;
