//! The `measure` command

use crate::cli::args::MeasureOp;
use crate::core;
use crate::metrics::Stopwatch;
use anyhow::{Context, Result};
use tracing::info;

/// Time `op` over `1..=size` and render the report as JSON
pub fn run_measure(op: MeasureOp, size: usize, chunk_size: usize) -> Result<String> {
    // Reject a bad chunk size up front so the timed call cannot fail
    if op == MeasureOp::Chunk {
        core::chunk_count(size, chunk_size)?;
    }

    let items: Vec<u64> = (1..=size as u64).collect();
    let mut stopwatch = Stopwatch::new();

    let report = match op {
        MeasureOp::MapDouble => stopwatch.run(
            op.label(),
            |s: &[u64]| s.iter().map(|x| x * 2).collect::<Vec<_>>(),
            &items,
        ),
        MeasureOp::Chunk => {
            stopwatch.run(op.label(), |s: &[u64]| core::chunk(s, chunk_size), &items)
        }
        MeasureOp::Unique => stopwatch.run(
            op.label(),
            |s: &[u64]| core::filter_unique_by_key(s, |x| x % 1000),
            &items,
        ),
        MeasureOp::Shuffle => stopwatch.run(op.label(), |s: &[u64]| core::shuffle(s), &items),
    };

    info!(
        "{} over {} items took {:.3} ms",
        report.label, report.item_count, report.elapsed_ms
    );
    serde_json::to_string(report).context("Failed to render timing report")
}
