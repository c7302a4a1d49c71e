//! Error types for the Leibniz series workspace.
//!
//! Organised by concern: configuration validation happens before the
//! timer starts, verification happens after the timed run.

use std::error::Error;
use std::fmt;

use crate::config::Strategy;

/// Errors detected during [`SeriesConfig::validate()`](crate::SeriesConfig::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The iteration count is zero; at least one `k` must be summed.
    ZeroIterations,
    /// The iteration count would make `4k + 1` unrepresentable as an
    /// exact `f64`.
    IterationsOutOfRange {
        /// The configured iteration count.
        value: u64,
        /// The largest accepted iteration count.
        max: u64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroIterations => write!(f, "iterations must be at least 1"),
            Self::IterationsOutOfRange { value, max } => {
                write!(f, "iterations {value} exceeds maximum of {max}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors from [`verify()`](crate::verify).
#[derive(Clone, Debug, PartialEq)]
pub enum VerifyError {
    /// The timed kernel and the in-order reference disagree bit-for-bit.
    Mismatch {
        /// Kernel that produced the reported value.
        strategy: Strategy,
        /// Number of `k` values both kernels summed.
        iterations: u64,
        /// Value produced by the timed kernel.
        reported: f64,
        /// Value produced by the in-order reference.
        reference: f64,
    },
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mismatch {
                strategy,
                iterations,
                reported,
                reference,
            } => write!(
                f,
                "{strategy} kernel disagrees with in-order reference over {iterations} iterations: \
                 {reported:e} (0x{:016x}) != {reference:e} (0x{:016x})",
                reported.to_bits(),
                reference.to_bits(),
            ),
        }
    }
}

impl Error for VerifyError {}
