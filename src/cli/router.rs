//! Command routing and execution

use crate::app::AppConfig;
use crate::cli::args::Commands;
use crate::cli::commands::*;
use anyhow::Result;

/// Execute a CLI command and return the text to print on stdout
pub fn execute_command(command: Commands, config: &AppConfig) -> Result<String> {
    let settings = &config.settings;

    match command {
        Commands::Unique { array, key } => run_unique(&array, &key),
        Commands::Chunk { array, size } => run_chunk(&array, size.as_deref(), settings),
        Commands::Shuffle { array, seed } => run_shuffle(&array, seed.or(settings.shuffle_seed)),
        Commands::Intersect { first, second } => run_intersect(&first, &second),
        Commands::Union { first, second } => run_union(&first, &second),
        Commands::Measure {
            op,
            size,
            chunk_size,
        } => run_measure(
            op,
            size.unwrap_or(settings.measure.sample_size),
            chunk_size.unwrap_or(settings.default_chunk_size),
        ),
    }
}
