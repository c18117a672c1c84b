//! Sliding-window accumulators.
//!
//! Each accumulator holds the last `window` samples and updates its
//! statistic in O(1) amortized time per push, so a full pass over a series
//! is O(n) regardless of the window size.

use std::collections::VecDeque;

/// Running sum over the trailing `window` samples.
///
/// Tracks how many non-zero samples are in the window so that a window of
/// exact zeros reports exactly `0.0`, free of floating-point residue left
/// behind by earlier add/subtract pairs.
#[derive(Debug, Clone)]
pub struct RollingSum {
    window: usize,
    values: VecDeque<f64>,
    sum: f64,
    nonzero: usize,
}

impl RollingSum {
    /// Create an accumulator for a window of `window` samples (must be >= 1).
    pub fn new(window: usize) -> Self {
        Self {
            window,
            values: VecDeque::with_capacity(window),
            sum: 0.0,
            nonzero: 0,
        }
    }

    /// Add a sample, evicting the oldest one if the window is full.
    pub fn push(&mut self, value: f64) {
        if self.values.len() == self.window {
            if let Some(old) = self.values.pop_front() {
                self.sum -= old;
                if old != 0.0 {
                    self.nonzero -= 1;
                }
            }
        }
        self.values.push_back(value);
        self.sum += value;
        if value != 0.0 {
            self.nonzero += 1;
        }
    }

    /// Whether the window holds `window` samples.
    pub fn is_full(&self) -> bool {
        self.values.len() == self.window
    }

    /// Sum of the samples currently in the window.
    pub fn sum(&self) -> f64 {
        if self.nonzero == 0 {
            0.0
        } else {
            self.sum
        }
    }

    /// Mean of the samples currently in the window.
    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.sum() / self.values.len() as f64)
        }
    }
}

/// Running mean and variance over the trailing `window` samples.
///
/// Sliding form of Welford's update: adding and evicting a sample adjusts
/// the mean and the sum of squared deviations directly, so a window of
/// identical values has a variance of exactly zero.
#[derive(Debug, Clone)]
pub struct RollingMoments {
    window: usize,
    values: VecDeque<f64>,
    mean: f64,
    m2: f64,
}

impl RollingMoments {
    /// Create an accumulator for a window of `window` samples (must be >= 1).
    pub fn new(window: usize) -> Self {
        Self {
            window,
            values: VecDeque::with_capacity(window),
            mean: 0.0,
            m2: 0.0,
        }
    }

    /// Add a sample, evicting the oldest one if the window is full.
    pub fn push(&mut self, value: f64) {
        if self.values.len() == self.window {
            let Some(old) = self.values.pop_front() else {
                return;
            };
            let n = self.window as f64;
            let old_mean = self.mean;
            self.mean += (value - old) / n;
            self.m2 += (value - old) * (value - self.mean + old - old_mean);
        } else {
            let n = (self.values.len() + 1) as f64;
            let delta = value - self.mean;
            self.mean += delta / n;
            self.m2 += delta * (value - self.mean);
        }
        self.values.push_back(value);
    }

    /// Whether the window holds `window` samples.
    pub fn is_full(&self) -> bool {
        self.values.len() == self.window
    }

    /// Sample variance (n - 1 divisor); `None` with fewer than two samples.
    pub fn sample_variance(&self) -> Option<f64> {
        let n = self.values.len();
        if n < 2 {
            return None;
        }
        Some((self.m2 / (n - 1) as f64).max(0.0))
    }

    /// Sample standard deviation.
    pub fn sample_std_dev(&self) -> Option<f64> {
        self.sample_variance().map(f64::sqrt)
    }
}

/// Running minimum and maximum over the trailing `window` samples.
///
/// Monotonic deques of `(index, value)`: the front of `mins` is always the
/// smallest value still inside the window, likewise for `maxs`.
#[derive(Debug, Clone)]
pub struct RollingExtrema {
    window: usize,
    count: usize,
    mins: VecDeque<(usize, f64)>,
    maxs: VecDeque<(usize, f64)>,
}

impl RollingExtrema {
    /// Create an accumulator for a window of `window` samples (must be >= 1).
    pub fn new(window: usize) -> Self {
        Self {
            window,
            count: 0,
            mins: VecDeque::new(),
            maxs: VecDeque::new(),
        }
    }

    /// Add a sample.
    pub fn push(&mut self, value: f64) {
        let index = self.count;
        self.count += 1;

        while matches!(self.mins.back(), Some(&(_, v)) if v >= value) {
            self.mins.pop_back();
        }
        self.mins.push_back((index, value));

        while matches!(self.maxs.back(), Some(&(_, v)) if v <= value) {
            self.maxs.pop_back();
        }
        self.maxs.push_back((index, value));

        // Drop entries that slid out of the window
        while matches!(self.mins.front(), Some(&(i, _)) if i + self.window <= index) {
            self.mins.pop_front();
        }
        while matches!(self.maxs.front(), Some(&(i, _)) if i + self.window <= index) {
            self.maxs.pop_front();
        }
    }

    /// Whether at least `window` samples have been pushed.
    pub fn is_full(&self) -> bool {
        self.count >= self.window
    }

    /// Smallest sample in the window.
    pub fn min(&self) -> Option<f64> {
        self.mins.front().map(|&(_, v)| v)
    }

    /// Largest sample in the window.
    pub fn max(&self) -> Option<f64> {
        self.maxs.front().map(|&(_, v)| v)
    }
}
