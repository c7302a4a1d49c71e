//! Run configuration and validation.
//!
//! [`SeriesConfig`] is the input to [`run()`](crate::run). Its defaults
//! reproduce the canonical run: 200 million iterations through the
//! four-way unrolled kernel.

use std::fmt;

use crate::error::ConfigError;

/// Iteration count of the canonical run.
pub const DEFAULT_ITERATIONS: u64 = 200_000_000;

/// Number of `k` values the unrolled kernel consumes per loop pass.
pub const UNROLL: u64 = 4;

/// Largest accepted iteration count.
///
/// Keeps `4k + 1 < 2^53` so every divisor converts to `f64` exactly and the
/// `u64` loop counter cannot overflow.
pub const MAX_ITERATIONS: u64 = (1 << 51) - 1;

// ── Strategy ──────────────────────────────────────────────────────

/// Which accumulation kernel to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Four consecutive `k` per loop pass. Any `N mod 4` tail is dropped.
    #[default]
    Unrolled,
    /// One `k` per loop pass over the full range. The in-order reference.
    Sequential,
}

impl Strategy {
    /// Short lowercase name, as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Unrolled => "unrolled",
            Self::Sequential => "sequential",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── SeriesConfig ──────────────────────────────────────────────────

/// Parameters of a single run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesConfig {
    /// Number of `k` values (`N`) to sum. Default: 200,000,000.
    pub iterations: u64,
    /// Kernel to time. Default: [`Strategy::Unrolled`].
    pub strategy: Strategy,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            strategy: Strategy::default(),
        }
    }
}

impl SeriesConfig {
    /// Check structural invariants before the timer starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if self.iterations > MAX_ITERATIONS {
            return Err(ConfigError::IterationsOutOfRange {
                value: self.iterations,
                max: MAX_ITERATIONS,
            });
        }
        Ok(())
    }

    /// Number of trailing `k` values the selected kernel will not sum.
    pub fn dropped_terms(&self) -> u64 {
        match self.strategy {
            Strategy::Unrolled => self.iterations % UNROLL,
            Strategy::Sequential => 0,
        }
    }

    /// Number of `k` values the selected kernel actually sums.
    pub fn effective_iterations(&self) -> u64 {
        self.iterations - self.dropped_terms()
    }
}
