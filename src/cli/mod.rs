//! CLI command handlers
//!
//! This module contains all CLI-related functionality:
//! - Argument parsing structures
//! - Command implementations
//! - Routing from parsed arguments to commands

pub mod args;
pub mod commands;
pub mod router;

pub use args::{Cli, Commands, MeasureOp};
pub use router::execute_command;
