use std::fmt::Display;
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// Result alias used throughout seqkit
pub type Result<T> = std::result::Result<T, SeqError>;

/// The error type for every seqkit operation
///
/// Sequence operations only ever fail with [`SeqError::InvalidArgument`],
/// and always before any work is done. `Config` is reserved for loading
/// and validating [`crate::config::SeqkitConfig`].
#[derive(Error, Debug)]
pub enum SeqError {
    #[error("[E{code:04}] Invalid argument: {message}")]
    InvalidArgument {
        code: u16,
        message: String,
        argument: Option<String>,
    },

    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl SeqError {
    /// Create an invalid-argument error with the generic code
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            code: ErrorCode::INVALID_ARGUMENT,
            message: message.into(),
            argument: None,
        }
    }

    /// Create an invalid-argument error naming the offending argument
    pub fn invalid_argument_with_code(
        code: u16,
        message: impl Into<String>,
        argument: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            code,
            message: message.into(),
            argument: Some(argument.into()),
        }
    }

    /// Argument was expected to be a sequence but was something else
    pub fn not_a_sequence(argument: &str) -> Self {
        Self::invalid_argument_with_code(
            ErrorCode::NOT_A_SEQUENCE,
            format!("'{}' must be an array", argument),
            argument,
        )
    }

    /// Argument was expected to be a positive integer
    pub fn not_a_positive_integer(argument: &str, found: impl Display) -> Self {
        Self::invalid_argument_with_code(
            ErrorCode::NOT_A_POSITIVE_INTEGER,
            format!("'{}' must be a positive integer, got {}", argument, found),
            argument,
        )
    }

    /// Create a configuration error with the generic code
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_GENERIC,
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with a specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach a source error. Only configuration errors carry sources.
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        if let Self::Config { source: src, .. } = &mut self {
            *src = Some(source.into());
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::InvalidArgument { message, .. } | Self::Config { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
        }
        self
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::InvalidArgument { code, .. } | Self::Config { code, .. } => *code,
        }
    }

    /// Process exit code the CLI uses for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. } => 1,
            Self::Config { .. } => 2,
        }
    }

    /// Name of the offending argument, when known
    pub fn argument(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { argument, .. } => argument.as_deref(),
            Self::Config { .. } => None,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidArgument {
                message, argument, ..
            } => match argument {
                Some(arg) => format!("Invalid value for '{}': {}", arg, message),
                None => format!("Invalid argument: {}", message),
            },
            Self::Config { message, .. } => format!("Configuration problem: {}", message),
        }
    }
}
