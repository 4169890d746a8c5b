use crate::core::distance_metric::DistanceMetric;
use crate::core::matrix_profile::{LeftMatrixProfile, MatrixProfileConfig};

/// Compute the top-k and left matrix profile of `ts` with diagonal STOMP.
///
/// Each diagonal `d > exclusion_zone` of the distance matrix holds the pairs
/// `(i, i + d)`. The window sum of the first pair comes from one row of
/// `sum_row` (a single sliding dot product for the Euclidean metrics); the
/// rest of the diagonal follows the O(1) `slide_sum` recurrence. Every pair is
/// offered to both endpoints, so the later endpoint also receives its left
/// neighbour.
///
/// Diagonals inside the exclusion zone are never visited, which is how
/// trivial matches are kept out.
pub fn stomp_left_topk<M: DistanceMetric>(
    metric: &M,
    ts: &[f64],
    config: &MatrixProfileConfig,
    k: usize,
    ctx: &M::Context,
) -> LeftMatrixProfile {
    let m = config.m;
    debug_assert!(ts.len() >= m);

    let n_subs = ts.len() - m + 1;
    let exclusion_zone = config.exclusion_zone();
    let mut mp = LeftMatrixProfile::new(n_subs, k, m, exclusion_zone);

    let first_row = metric.sum_row(ts, 0, m);

    for diag in (exclusion_zone + 1)..n_subs {
        let mut sum = first_row[diag];
        let d = metric.sum_to_distance(sum, 0, diag, m, ctx);
        mp.update(0, d, diag);
        mp.update(diag, d, 0);

        for i in 1..n_subs - diag {
            let j = i + diag;
            sum = metric.slide_sum(sum, ts, i, j, m);
            let d = metric.sum_to_distance(sum, i, j, m, ctx);
            mp.update(i, d, j);
            mp.update(j, d, i);
        }
    }

    mp
}
