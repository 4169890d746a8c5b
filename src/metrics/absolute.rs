use crate::algorithms::common::sliding_dot_product;
use crate::core::distance_metric::DistanceMetric;

/// Precomputed context for non-normalized (absolute) Euclidean distance.
///
/// `d(i,j) = sqrt(sum_sq[i] + sum_sq[j] - 2*QT_ij)`
#[derive(Debug, Clone)]
pub struct AampContext {
    /// `sum_sq[i]` = sum of squares of `ts[i..i+m]`.
    pub sum_sq: Vec<f64>,
}

impl AampContext {
    /// Compute running sum-of-squares via cumulative sum.
    pub fn compute(ts: &[f64], m: usize) -> Self {
        debug_assert!(m > 0 && ts.len() >= m);

        let n = ts.len();
        let mut cumsum_sq = vec![0.0; n + 1];
        for i in 0..n {
            cumsum_sq[i + 1] = cumsum_sq[i] + ts[i] * ts[i];
        }

        let sum_sq = (0..n - m + 1)
            .map(|i| cumsum_sq[i + m] - cumsum_sq[i])
            .collect();

        Self { sum_sq }
    }

    /// Extend context by one new subsequence after appending a point.
    pub fn extend(&mut self, ts: &[f64], m: usize) {
        self.sum_sq
            .push(ts[ts.len() - m..].iter().map(|x| x * x).sum());
    }
}

/// Non-normalized Euclidean distance metric (AAMP).
///
/// Amplitude and offset matter: subsequences are compared as-is. This is the
/// `p == 2` case of the Minkowski distance, served through dot products so the
/// first row can use the FFT sliding dot product.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbsoluteEuclidean;

impl DistanceMetric for AbsoluteEuclidean {
    type Context = AampContext;

    fn precompute(&self, ts: &[f64], m: usize) -> Self::Context {
        AampContext::compute(ts, m)
    }

    fn update_context(&self, ctx: &mut Self::Context, ts: &[f64], m: usize) {
        ctx.extend(ts, m);
    }

    #[inline(always)]
    fn term(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    fn sum_to_distance(&self, qt: f64, i: usize, j: usize, _m: usize, ctx: &Self::Context) -> f64 {
        // Clamp tiny negatives from rounding
        (ctx.sum_sq[i] + ctx.sum_sq[j] - 2.0 * qt).max(0.0).sqrt()
    }

    fn sum_row(&self, ts: &[f64], idx: usize, m: usize) -> Vec<f64> {
        sliding_dot_product(&ts[idx..idx + m], ts)
    }
}
