//! CLI argument structures

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Sequence helpers from the command line
///
/// Sequences are passed as JSON arrays and results are printed as JSON.
#[derive(Parser)]
#[command(name = "seqkit")]
#[command(
    about = "seqkit - unique, chunk, shuffle, intersect, union and time JSON arrays",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Keep the first element for each distinct key
    Unique {
        /// JSON array of elements
        array: String,

        /// Dot-separated field path used as the key (e.g. "id" or "user.name")
        #[arg(short, long)]
        key: String,
    },

    /// Split an array into fixed-size chunks
    Chunk {
        /// JSON array of elements
        array: String,

        /// Chunk size, a positive integer (defaults to `default_chunk_size`)
        #[arg(short, long, allow_hyphen_values = true)]
        size: Option<String>,
    },

    /// Shuffle an array (Fisher-Yates)
    Shuffle {
        /// JSON array of elements
        array: String,

        /// Seed for a reproducible permutation (defaults to `shuffle_seed`)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Elements of SECOND that also appear in FIRST
    Intersect {
        /// First JSON array
        first: String,
        /// Second JSON array
        second: String,
    },

    /// Distinct elements of FIRST then SECOND
    Union {
        /// First JSON array
        first: String,
        /// Second JSON array
        second: String,
    },

    /// Time a built-in operation over the sequence 1..=N
    Measure {
        /// Operation to time
        #[arg(long, value_enum, default_value = "map-double")]
        op: MeasureOp,

        /// Sequence length (defaults to `measure.sample_size`)
        #[arg(short = 'n', long)]
        size: Option<usize>,

        /// Chunk size for `--op chunk` (defaults to `default_chunk_size`)
        #[arg(long)]
        chunk_size: Option<usize>,
    },
}

/// Operations the `measure` command can time
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MeasureOp {
    /// Double every element
    MapDouble,
    /// Chunk with `--chunk-size`
    Chunk,
    /// Unique by `x % 1000`
    Unique,
    /// Shuffle with the thread-local generator
    Shuffle,
}

impl MeasureOp {
    pub fn label(self) -> &'static str {
        match self {
            Self::MapDouble => "map-double",
            Self::Chunk => "chunk",
            Self::Unique => "unique",
            Self::Shuffle => "shuffle",
        }
    }
}
