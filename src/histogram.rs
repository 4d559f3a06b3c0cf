//! The 10-bucket leading-digit histogram and run progress.

use std::fmt;

use serde::Serialize;

/// Counts of leading digits observed during one analysis run.
///
/// Bucket 0 holds tokens with no leading digit (zero values and
/// non-numeric noise); buckets 1 through 9 hold the corresponding
/// leading digits. The sum of all ten buckets always equals the number
/// of tokens recorded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct DigitHistogram {
    counts: [u64; 10],
}

impl DigitHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one extracted digit, with 0 for the excluded bucket.
    pub fn record(&mut self, digit: u8) {
        debug_assert!(digit <= 9, "digit out of range: {digit}");
        self.counts[usize::from(digit)] += 1;
    }

    /// Count for a single bucket.
    pub fn count(&self, digit: u8) -> u64 {
        self.counts[usize::from(digit)]
    }

    /// Tokens with no leading digit (bucket 0).
    pub fn excluded(&self) -> u64 {
        self.counts[0]
    }

    /// Total across the nine digit buckets, i.e. the valid sample size
    /// the chi-squared test runs on.
    pub fn valid_total(&self) -> u64 {
        self.counts[1..].iter().sum()
    }

    /// Total tokens recorded, excluded bucket included.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// All ten buckets in order, excluded bucket first.
    pub fn counts(&self) -> &[u64; 10] {
        &self.counts
    }

    /// Share of the valid sample carrying `digit`, as a percentage.
    /// Returns 0.0 while the valid sample is empty.
    pub fn percent(&self, digit: u8) -> f64 {
        let total = self.valid_total();
        if total == 0 {
            return 0.0;
        }
        self.count(digit) as f64 * 100.0 / total as f64
    }
}

/// Fraction of the input processed so far, as a percentage in [0, 100].
///
/// Non-decreasing within one run; the final batch always lands on 100.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Progress(f64);

impl Progress {
    /// Progress after `processed` of `total` tokens.
    ///
    /// An empty input is complete by definition and reports 100.
    pub fn from_counts(processed: usize, total: usize) -> Self {
        if total == 0 {
            return Progress(100.0);
        }
        Progress(processed as f64 / total as f64 * 100.0)
    }

    pub fn percent(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}
