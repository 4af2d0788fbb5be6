//! CLI command implementations for nagutils.
//!
//! This module provides implementations for all CLI subcommands:
//! - `report`: Status line from problems and perf data
//! - `evaluate`: Threshold check of a single value
//! - `basename`: Path shortening
//! - `round`: Half-up rounding
//! - `config`: Configuration file generation

pub mod basename;
pub mod config;
pub mod evaluate;
pub mod report;
pub mod round;

// Re-export command functions
pub use basename::command_basename;
pub use config::command_config;
pub use evaluate::command_evaluate;
pub use report::command_report;
pub use round::command_round;
