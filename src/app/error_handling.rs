//! Error handling utilities

use crate::error::SeqError;
use tracing::error;

/// Exit status for an error reaching the top of the binary
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<SeqError>()
        .map(SeqError::exit_code)
        .unwrap_or(1)
}

/// Report a fatal error on stderr and exit
///
/// - For `SeqError`: shows the user message, plus the full chain with `-v`
/// - For other errors: shows the message, plus the chain with `-v`
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {:#}", error);

    match error.downcast_ref::<SeqError>() {
        Some(seq_err) => eprintln!("Error: {}", seq_err.user_message()),
        None => eprintln!("Error: {error}"),
    }

    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    std::process::exit(exit_code_for(&error))
}
