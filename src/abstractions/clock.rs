//! Clock abstraction
//!
//! Readings are monotonic offsets from the clock's own origin, which lets a
//! mock clock produce exact values without constructing `Instant`s.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Trait for monotonic time readings
pub trait Clock: Send + Sync {
    /// Time elapsed since this clock's origin
    fn now(&self) -> Duration;
}

/// Real clock backed by `std::time::Instant`
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Mock clock that advances by a fixed step on every reading
///
/// The first reading is zero, the second is one step, and so on.
#[derive(Debug)]
pub struct MockClock {
    step_nanos: u64,
    reads: AtomicU64,
}

impl MockClock {
    pub fn stepping(step: Duration) -> Self {
        Self {
            step_nanos: u64::try_from(step.as_nanos()).unwrap_or(u64::MAX),
            reads: AtomicU64::new(0),
        }
    }

    /// A clock that never advances
    pub fn frozen() -> Self {
        Self::stepping(Duration::ZERO)
    }

    /// Number of readings taken so far
    pub fn reads(&self) -> u64 {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Clock for MockClock {
    fn now(&self) -> Duration {
        let tick = self.reads.fetch_add(1, Ordering::SeqCst);
        Duration::from_nanos(tick.saturating_mul(self.step_nanos))
    }
}
