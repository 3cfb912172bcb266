//! Infrastructure - configuration and run statistics
//!
//! This module contains infrastructure concerns:
//! - `config` - Application configuration (TOML loading, defaults)
//! - `summary` - Statistics logged at the end of a run

pub mod config;
pub mod summary;

// Re-export commonly used types
pub use config::Config;
pub use summary::RunSummary;
