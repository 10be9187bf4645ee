//! Application module
//!
//! This module contains application-level functionality for the binary:
//! - Configuration handling
//! - Logging setup
//! - Fatal error reporting

pub mod config;
pub mod error_handling;
pub mod logging;

pub use config::AppConfig;
pub use error_handling::{exit_code_for, handle_fatal_error};
pub use logging::init_logging;
