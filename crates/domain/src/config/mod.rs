//! Configuration module for Digger
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `resolver`: External resolver binary and timeouts
//! - `orchestrator`: Concurrency bounds and adaptive tuning
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod orchestrator;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use orchestrator::OrchestratorConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
