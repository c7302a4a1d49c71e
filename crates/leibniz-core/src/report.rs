//! Timed runs and their reports.
//!
//! [`run`] validates a [`SeriesConfig`], times the selected kernel and
//! returns a [`RunReport`]. The report's `Display` impl renders the two
//! canonical output lines:
//!
//! ```text
//! Result: 3.141592656089
//! Execution Time: 0.412345 seconds
//! ```

use std::f64::consts::PI;
use std::fmt;
use std::time::Duration;

use crate::accumulator::{evaluate, leibniz_sequential};
use crate::config::{SeriesConfig, Strategy};
use crate::error::{ConfigError, VerifyError};
use crate::timer::timed;

/// Outcome of a single timed run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    /// π approximation (partial sum × 4).
    pub result: f64,
    /// Wall-clock time spent in the kernel.
    pub elapsed: Duration,
    /// Iteration count as configured (including any dropped tail).
    pub iterations: u64,
    /// Kernel that produced `result`.
    pub strategy: Strategy,
}

impl RunReport {
    /// Elapsed time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Absolute distance from `f64::consts::PI`.
    pub fn abs_error(&self) -> f64 {
        (self.result - PI).abs()
    }

    /// Number of `k` values actually summed.
    pub fn effective_iterations(&self) -> u64 {
        self.config().effective_iterations()
    }

    /// Number of individual series terms summed, counting the leading `1.0`.
    pub fn terms_summed(&self) -> u64 {
        2 * self.effective_iterations() + 1
    }

    fn config(&self) -> SeriesConfig {
        SeriesConfig {
            iterations: self.iterations,
            strategy: self.strategy,
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Result: {:.12}", self.result)?;
        write!(f, "Execution Time: {:.6} seconds", self.elapsed_secs())
    }
}

/// Validate `config`, then time the selected kernel.
pub fn run(config: &SeriesConfig) -> Result<RunReport, ConfigError> {
    config.validate()?;

    let dropped = config.dropped_terms();
    if dropped > 0 {
        log::warn!(
            "iterations {} is not a multiple of 4; {} trailing k value(s) will not be summed",
            config.iterations,
            dropped
        );
    }
    log::info!(
        "summing {} iterations with the {} kernel",
        config.iterations,
        config.strategy
    );

    let (result, elapsed) = timed(|| evaluate(config.strategy, config.iterations));

    let report = RunReport {
        result,
        elapsed,
        iterations: config.iterations,
        strategy: config.strategy,
    };
    log::info!("finished in {:?}", report.elapsed);
    log::debug!(
        "result bits 0x{:016x}, |result - pi| = {:e}",
        report.result.to_bits(),
        report.abs_error()
    );
    Ok(report)
}

/// Recompute `report` with the in-order reference over the same `k` range
/// and require bit-for-bit agreement.
pub fn verify(report: &RunReport) -> Result<(), VerifyError> {
    let iterations = report.effective_iterations();
    let reference = leibniz_sequential(iterations);
    if reference.to_bits() != report.result.to_bits() {
        return Err(VerifyError::Mismatch {
            strategy: report.strategy,
            iterations,
            reported: report.result,
            reference,
        });
    }
    log::info!(
        "{} kernel matches in-order reference over {} iterations",
        report.strategy,
        iterations
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(iterations: u64, strategy: Strategy) -> SeriesConfig {
        SeriesConfig {
            iterations,
            strategy,
        }
    }

    #[test]
    fn display_renders_two_canonical_lines() {
        let report = RunReport {
            result: PI,
            elapsed: Duration::from_micros(1_500_250),
            iterations: 4,
            strategy: Strategy::Unrolled,
        };
        assert_eq!(
            report.to_string(),
            "Result: 3.141592653590\nExecution Time: 1.500250 seconds"
        );
    }

    #[test]
    fn run_rejects_invalid_config() {
        assert_eq!(
            run(&config(0, Strategy::Unrolled)),
            Err(ConfigError::ZeroIterations)
        );
    }

    #[test]
    fn run_reports_metadata() {
        let report = run(&config(1_000, Strategy::Unrolled)).unwrap();
        assert_eq!(report.iterations, 1_000);
        assert_eq!(report.strategy, Strategy::Unrolled);
        assert_eq!(report.terms_summed(), 2_001);
        assert!(report.elapsed_secs().is_finite());
        assert!(report.abs_error() < 1e-3);
    }

    #[test]
    fn terms_summed_excludes_dropped_tail() {
        let report = run(&config(10, Strategy::Unrolled)).unwrap();
        assert_eq!(report.effective_iterations(), 8);
        assert_eq!(report.terms_summed(), 17);

        let report = run(&config(10, Strategy::Sequential)).unwrap();
        assert_eq!(report.effective_iterations(), 10);
        assert_eq!(report.terms_summed(), 21);
    }

    #[test]
    fn verify_accepts_both_kernels() {
        for strategy in [Strategy::Unrolled, Strategy::Sequential] {
            for n in [4, 7, 1_000] {
                let report = run(&config(n, strategy)).unwrap();
                verify(&report).unwrap();
            }
        }
    }

    #[test]
    fn verify_rejects_tampered_result() {
        let mut report = run(&config(8, Strategy::Unrolled)).unwrap();
        let honest = report.result;
        report.result = f64::from_bits(honest.to_bits() + 1);
        match verify(&report) {
            Err(VerifyError::Mismatch {
                iterations,
                reference,
                ..
            }) => {
                assert_eq!(iterations, 8);
                assert_eq!(reference.to_bits(), honest.to_bits());
            }
            other => panic!("expected mismatch, got {other:?}"),
        }
    }
}
