//! Timing a callable over a sequence

use crate::abstractions::{Clock, SystemClock};
use serde::{Deserialize, Serialize};
use std::hint::black_box;
use std::time::Duration;
use tracing::debug;

/// Time a single call of `f` over `items` with the system clock.
///
/// `f` receives the sequence as its only argument and runs exactly once.
/// Operations that need more parameters should capture them in a closure:
///
/// ```
/// use seqkit::core::chunk;
/// use seqkit::metrics::measure;
///
/// let items: Vec<u32> = (1..=10_000).collect();
/// let elapsed = measure(|s: &[u32]| chunk(s, 1000), &items);
/// println!("chunking took {:?}", elapsed);
/// ```
pub fn measure<T, F, R>(f: F, items: &[T]) -> Duration
where
    F: FnOnce(&[T]) -> R,
{
    measure_with(&SystemClock::new(), f, items)
}

/// Time a single call of `f` over `items` with the given clock.
pub fn measure_with<C, T, F, R>(clock: &C, f: F, items: &[T]) -> Duration
where
    C: Clock + ?Sized,
    F: FnOnce(&[T]) -> R,
{
    let (output, elapsed) = measure_returning(clock, f, items);
    black_box(output);
    elapsed
}

/// Like [`measure_with`] but hands back the callable's output as well.
pub fn measure_returning<C, T, F, R>(clock: &C, f: F, items: &[T]) -> (R, Duration)
where
    C: Clock + ?Sized,
    F: FnOnce(&[T]) -> R,
{
    let start = clock.now();
    let output = f(items);
    let end = clock.now();

    // A misbehaving clock must not produce a negative duration
    let elapsed = end.saturating_sub(start);
    debug!("Measured {} items in {:?}", items.len(), elapsed);
    (output, elapsed)
}

/// Fractional milliseconds, the unit reports are rendered in.
pub fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / 1_000_000.0
}

/// One labelled measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingReport {
    pub label: String,
    pub item_count: usize,
    pub elapsed_ms: f64,
}

/// Records labelled measurements against a single clock
pub struct Stopwatch<C: Clock = SystemClock> {
    clock: C,
    reports: Vec<TimingReport>,
}

impl Stopwatch<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

impl Default for Stopwatch<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Stopwatch<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            reports: Vec::new(),
        }
    }

    /// Time `f` over `items` and record the result under `label`
    ///
    /// Returns the report just recorded, which is always the newest entry
    /// in [`Stopwatch::reports`].
    pub fn run<T, F, R>(&mut self, label: impl Into<String>, f: F, items: &[T]) -> &TimingReport
    where
        F: FnOnce(&[T]) -> R,
    {
        let elapsed = measure_with(&self.clock, f, items);
        let report = TimingReport {
            label: label.into(),
            item_count: items.len(),
            elapsed_ms: as_millis_f64(elapsed),
        };
        debug!("{}: {:.3} ms", report.label, report.elapsed_ms);

        let index = self.reports.len();
        self.reports.push(report);
        &self.reports[index]
    }

    pub fn reports(&self) -> &[TimingReport] {
        &self.reports
    }

    pub fn into_reports(self) -> Vec<TimingReport> {
        self.reports
    }

    pub fn total_elapsed_ms(&self) -> f64 {
        self.reports.iter().map(|r| r.elapsed_ms).sum()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
