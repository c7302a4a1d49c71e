//! Series accumulator, timer and run reports for the Leibniz π approximation.
//!
//! The crate computes
//!
//! ```text
//! π ≈ 4 · (1 + Σ_{k=1}^{N} [ -1/(4k-1) + 1/(4k+1) ])
//! ```
//!
//! in double precision, four values of `k` per loop pass, with the exact
//! left-to-right summation order of the plain series.
//!
//! # Quick start
//!
//! ```rust
//! use leibniz_core::{run, SeriesConfig, Strategy};
//!
//! let config = SeriesConfig {
//!     iterations: 1_000,
//!     strategy: Strategy::Unrolled,
//! };
//! let report = run(&config).unwrap();
//! assert_eq!(format!("{:.12}", report.result), "3.142092403684");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod accumulator;
pub mod config;
pub mod error;
pub mod report;
pub mod timer;

pub use accumulator::{evaluate, leibniz_sequential, leibniz_unrolled, Accumulator};
pub use config::{SeriesConfig, Strategy, DEFAULT_ITERATIONS, MAX_ITERATIONS, UNROLL};
pub use error::{ConfigError, VerifyError};
pub use report::{run, verify, RunReport};
pub use timer::{timed, Stopwatch};
