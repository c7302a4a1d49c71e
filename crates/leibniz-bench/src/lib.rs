//! Benchmark profiles for the Leibniz series kernels.
//!
//! - [`reference_profile`]: the canonical 200M-iteration run
//! - [`smoke_profile`]: 1M iterations, fast enough for per-sample timing
//! - [`profile_sweep`]: one profile per decade, for scaling curves

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use leibniz_core::{SeriesConfig, Strategy, DEFAULT_ITERATIONS, UNROLL};

/// The canonical run: [`DEFAULT_ITERATIONS`] through `strategy`.
pub fn reference_profile(strategy: Strategy) -> SeriesConfig {
    SeriesConfig {
        iterations: DEFAULT_ITERATIONS,
        strategy,
    }
}

/// A 1M-iteration run through `strategy`.
pub fn smoke_profile(strategy: Strategy) -> SeriesConfig {
    SeriesConfig {
        iterations: 1_000_000,
        strategy,
    }
}

/// Iteration counts `4, 40, 400, ...` up to and including `max`.
///
/// Every count is a multiple of [`UNROLL`], so both kernels sum the same
/// terms.
pub fn profile_sweep(max: u64, strategy: Strategy) -> Vec<SeriesConfig> {
    std::iter::successors(Some(UNROLL), |&n| n.checked_mul(10))
        .take_while(|&n| n <= max)
        .map(|iterations| SeriesConfig {
            iterations,
            strategy,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_validates() {
        let config = reference_profile(Strategy::Unrolled);
        config.validate().unwrap();
        assert_eq!(config, SeriesConfig::default());
    }

    #[test]
    fn smoke_profile_validates() {
        smoke_profile(Strategy::Sequential).validate().unwrap();
    }

    #[test]
    fn sweep_is_whole_blocks_by_decade() {
        let sweep = profile_sweep(1_000_000, Strategy::Unrolled);
        let counts: Vec<u64> = sweep.iter().map(|c| c.iterations).collect();
        assert_eq!(counts, vec![4, 40, 400, 4_000, 40_000, 400_000]);
        assert!(sweep.iter().all(|c| c.dropped_terms() == 0));
    }

    #[test]
    fn sweep_below_one_block_is_empty() {
        assert!(profile_sweep(3, Strategy::Unrolled).is_empty());
    }
}
