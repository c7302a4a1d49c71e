//! Monotonic wall-clock timing.
//!
//! [`Stopwatch`] wraps [`Instant`], which is monotonic on every supported
//! platform. [`timed`] brackets a closure with a start and stop reading.

use std::time::{Duration, Instant};

/// A running monotonic timer.
#[derive(Clone, Copy, Debug)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    /// Take the start reading now.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Time elapsed since [`start`](Stopwatch::start).
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time elapsed since [`start`](Stopwatch::start), in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

/// Run `f`, returning its value and the wall-clock time it took.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let watch = Stopwatch::start();
    let value = f();
    (value, watch.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_monotonic() {
        let w = Stopwatch::start();
        let a = w.elapsed();
        let b = w.elapsed();
        assert!(b >= a);
    }

    #[test]
    fn timed_returns_value_and_covers_sleep() {
        let (v, d) = timed(|| {
            std::thread::sleep(Duration::from_millis(5));
            42
        });
        assert_eq!(v, 42);
        assert!(d >= Duration::from_millis(5));
    }

    #[test]
    fn elapsed_secs_is_finite_and_non_negative() {
        let w = Stopwatch::start();
        let s = w.elapsed_secs();
        assert!(s.is_finite());
        assert!(s >= 0.0);
    }
}
