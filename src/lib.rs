//! # GameCache BGG token setup
//!
//! Reads the flat GameCache config, resolves the BoardGameGeek API token
//! from the environment, a local `.env` file or the config itself, and
//! provisions one through the token-generator worker when none is present,
//! storing it in `.env` for later runs.
//!
//! Modules:
//! - `config`: flat config parsing, nested config, token resolution
//! - `sources`: token-generator worker client
//! - `sinks`: `.env` secret persistence
//! - `utils`: logging and shared constants

pub mod config;
pub mod error;
pub mod sinks;
pub mod sources;
pub mod tests;
pub mod utils;

pub use crate::config::parser::{parse_config_file, FlatConfig};
pub use crate::config::types::NestedConfig;
pub use crate::error::SetupError;
