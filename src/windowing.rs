//! Conversion between window-level and point-level scores.
//!
//! A profile over `n - m + 1` subsequences of length `m` scores windows, yet
//! callers want one score per time point. [`reverse_windowing`] maps every
//! point to a reduction over the scores of all windows that cover it.

use serde::{Deserialize, Serialize};

/// How window scores covering the same point are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reduction {
    /// Arithmetic mean.
    #[default]
    Mean,
    /// Median (mean of the two middle values for even counts).
    Median,
    /// Maximum.
    Max,
}

impl Reduction {
    /// Reduce `values`, skipping NaNs. All-NaN or empty input reduces to NaN.
    pub fn apply(self, values: &[f64]) -> f64 {
        let mut present = values.iter().copied().filter(|v| !v.is_nan()).peekable();
        if present.peek().is_none() {
            return f64::NAN;
        }
        match self {
            Reduction::Mean => {
                let (sum, count) = present.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
                sum / count as f64
            }
            Reduction::Max => present.fold(f64::NEG_INFINITY, f64::max),
            Reduction::Median => {
                let mut sorted: Vec<f64> = present.collect();
                sorted.sort_by(f64::total_cmp);
                let mid = sorted.len() / 2;
                if sorted.len() % 2 == 0 {
                    (sorted[mid - 1] + sorted[mid]) / 2.0
                } else {
                    sorted[mid]
                }
            }
        }
    }
}

/// Reverse a sliding-window transform with stride 1.
///
/// `y[w]` is the score of the window starting at point `w`. The result has
/// `y.len() + window_size - 1` entries; entry `t` reduces
/// `y[max(0, t - window_size + 1) ..= min(t, y.len() - 1)]`, the scores of
/// every window containing `t`. Empty `y` yields an empty vector.
pub fn reverse_windowing(y: &[f64], window_size: usize, reduction: Reduction) -> Vec<f64> {
    if y.is_empty() || window_size == 0 {
        return Vec::new();
    }

    let n = y.len() + window_size - 1;
    (0..n)
        .map(|t| {
            let lo = t.saturating_sub(window_size - 1);
            let hi = t.min(y.len() - 1);
            reduction.apply(&y[lo..=hi])
        })
        .collect()
}
