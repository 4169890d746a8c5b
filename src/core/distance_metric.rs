/// Trait for distance metrics used in matrix profile computation.
///
/// Algorithms are generic over `M: DistanceMetric`, so each metric is
/// monomorphized into the inner loops. Metrics are values rather than bare
/// types so that runtime parameters (the Minkowski exponent) travel with them.
///
/// Every supported distance is built from a per-element term summed over the
/// window: `S(i, j) = sum_{t < m} term(T[i+t], T[j+t])`. The sum slides along a
/// diagonal of the distance matrix in O(1):
///
/// ```text
/// S(i, j) = S(i-1, j-1) - term(T[i-1], T[j-1]) + term(T[i+m-1], T[j+m-1])
/// ```
///
/// and is converted to a distance with the help of a precomputed `Context`
/// (rolling means/stds for z-normalized Euclidean, sums of squares for AAMP).
pub trait DistanceMetric: Clone + Send + Sync + std::fmt::Debug {
    /// Precomputed per-subsequence statistics.
    type Context: Clone + Send + Sync + std::fmt::Debug;

    /// Precompute context from a time series and subsequence length.
    fn precompute(&self, ts: &[f64], m: usize) -> Self::Context;

    /// Update context incrementally after appending a new point to the time series.
    fn update_context(&self, ctx: &mut Self::Context, ts: &[f64], m: usize);

    /// Per-element contribution of the pair `(a, b)` to the window sum.
    fn term(&self, a: f64, b: f64) -> f64;

    /// Convert a window sum for subsequences `i` and `j` into a distance.
    fn sum_to_distance(&self, sum: f64, i: usize, j: usize, m: usize, ctx: &Self::Context)
        -> f64;

    /// Window sum for subsequences starting at `i` and `j`, computed in O(m).
    #[inline]
    fn pair_sum(&self, ts: &[f64], i: usize, j: usize, m: usize) -> f64 {
        ts[i..i + m]
            .iter()
            .zip(&ts[j..j + m])
            .map(|(&a, &b)| self.term(a, b))
            .sum()
    }

    /// Slide the window sum of `(i-1, j-1)` to `(i, j)` in O(1). Requires `i, j >= 1`.
    #[inline]
    fn slide_sum(&self, sum: f64, ts: &[f64], i: usize, j: usize, m: usize) -> f64 {
        sum - self.term(ts[i - 1], ts[j - 1]) + self.term(ts[i + m - 1], ts[j + m - 1])
    }

    /// Window sums of subsequence `idx` against every subsequence of `ts`.
    ///
    /// The default loops over `pair_sum()`. Dot-product metrics override this
    /// with the (FFT-backed) sliding dot product.
    fn sum_row(&self, ts: &[f64], idx: usize, m: usize) -> Vec<f64> {
        let n_subs = ts.len() - m + 1;
        (0..n_subs).map(|j| self.pair_sum(ts, idx, j, m)).collect()
    }

    /// Distance between subsequences starting at indices `i` and `j`.
    fn distance(&self, ts: &[f64], i: usize, j: usize, m: usize, ctx: &Self::Context) -> f64 {
        self.sum_to_distance(self.pair_sum(ts, i, j, m), i, j, m, ctx)
    }
}
