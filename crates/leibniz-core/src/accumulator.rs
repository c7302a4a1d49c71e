//! Leibniz series accumulator.
//!
//! Sums
//! ```text
//! 1 + Σ_{k=1}^{N} [ -1/(4k-1) + 1/(4k+1) ]
//! ```
//! and scales by 4 to approximate π. The leading `1.0` is the `k = 0` term.
//!
//! Both kernels apply terms strictly left to right: `-1/(4k-1)` before
//! `+1/(4k+1)`, `k` ascending. Floating-point addition is not associative,
//! so this order is what makes the unrolled kernel bit-identical to the
//! sequential one.

use crate::config::{Strategy, MAX_ITERATIONS, UNROLL};

/// Running state of a single series evaluation.
///
/// Holds one `f64` seeded with `1.0`. Call [`finish`](Accumulator::finish)
/// to apply the final ×4 scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Accumulator {
    result: f64,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    /// A fresh accumulator holding the `k = 0` term.
    pub fn new() -> Self {
        Self { result: 1.0 }
    }

    /// Current partial sum (before scaling).
    pub fn partial_sum(&self) -> f64 {
        self.result
    }

    /// Apply the pair of terms for a single `k >= 1`.
    #[inline(always)]
    fn pair(&mut self, k: u64) {
        let base = k << 2;
        self.result -= 1.0 / (base - 1) as f64;
        self.result += 1.0 / (base + 1) as f64;
    }

    /// Sum `k` in `1..=n`, four values of `k` per loop pass.
    ///
    /// If `n` is not a multiple of 4, the last `n % 4` values of `k` are
    /// not summed.
    pub fn accumulate_unrolled(&mut self, n: u64) {
        debug_assert!(n <= MAX_ITERATIONS, "iteration count {n} out of range");
        let mut k = 1;
        while k + (UNROLL - 1) <= n {
            self.pair(k);
            self.pair(k + 1);
            self.pair(k + 2);
            self.pair(k + 3);
            k += UNROLL;
        }
    }

    /// Sum every `k` in `1..=n`, one per loop pass.
    pub fn accumulate_sequential(&mut self, n: u64) {
        debug_assert!(n <= MAX_ITERATIONS, "iteration count {n} out of range");
        for k in 1..=n {
            self.pair(k);
        }
    }

    /// Scale the partial sum by 4, yielding the π approximation.
    pub fn finish(self) -> f64 {
        self.result * 4.0
    }
}

/// π approximation from the unrolled kernel over `k` in `1..=n`.
pub fn leibniz_unrolled(n: u64) -> f64 {
    let mut acc = Accumulator::new();
    acc.accumulate_unrolled(n);
    acc.finish()
}

/// π approximation from the in-order reference kernel over `k` in `1..=n`.
pub fn leibniz_sequential(n: u64) -> f64 {
    let mut acc = Accumulator::new();
    acc.accumulate_sequential(n);
    acc.finish()
}

/// Dispatch to the kernel named by `strategy`.
pub fn evaluate(strategy: Strategy, n: u64) -> f64 {
    match strategy {
        Strategy::Unrolled => leibniz_unrolled(n),
        Strategy::Sequential => leibniz_sequential(n),
    }
}
