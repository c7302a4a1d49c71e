//! Leibniz: approximate π with a four-way unrolled Leibniz series.
//!
//! This is the front-end crate. It re-exports the numerical core from
//! `leibniz-core` and provides the `leibniz` command-line interface.
//!
//! ```text
//! $ leibniz
//! Result: 3.141592656089
//! Execution Time: 0.198311 seconds
//! ```

#![forbid(unsafe_code)]

pub mod cli;

/// Series accumulator, timer and run reports (`leibniz-core`).
pub use leibniz_core as series;
