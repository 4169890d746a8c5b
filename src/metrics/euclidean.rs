use crate::algorithms::common::sliding_dot_product;
use crate::core::distance_metric::DistanceMetric;
use crate::core::matrix_profile::RollingStats;

/// Z-normalized Euclidean distance metric.
///
/// Distance formula: `d = sqrt(2 * m * (1 - r))` where
/// `r = (QT - m * mu_i * mu_j) / (m * sigma_i * sigma_j)`.
///
/// Edge cases:
/// - Both subsequences constant → d = 0
/// - One subsequence constant → d = sqrt(2*m)
/// - `r` is clamped to [-1, 1]
#[derive(Debug, Clone, Copy, Default)]
pub struct ZNormalizedEuclidean;

impl DistanceMetric for ZNormalizedEuclidean {
    type Context = RollingStats;

    fn precompute(&self, ts: &[f64], m: usize) -> Self::Context {
        RollingStats::compute(ts, m)
    }

    fn update_context(&self, ctx: &mut Self::Context, ts: &[f64], m: usize) {
        ctx.extend(ts, m);
    }

    #[inline(always)]
    fn term(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    fn sum_to_distance(&self, qt: f64, i: usize, j: usize, m: usize, ctx: &Self::Context) -> f64 {
        let msi = ctx.m_sigma_inv[i];
        let msj = ctx.m_sigma_inv[j];
        let m_f = m as f64;

        if msi == 0.0 && msj == 0.0 {
            return 0.0;
        }
        if msi == 0.0 || msj == 0.0 {
            return (2.0 * m_f).sqrt();
        }

        // m_sigma_inv = 1/(sqrt(m)*sigma), so msi*msj = 1/(m*sigma_i*sigma_j)
        let r = (qt - m_f * ctx.mean[i] * ctx.mean[j]) * msi * msj;
        (2.0 * m_f * (1.0 - r.clamp(-1.0, 1.0))).max(0.0).sqrt()
    }

    fn sum_row(&self, ts: &[f64], idx: usize, m: usize) -> Vec<f64> {
        sliding_dot_product(&ts[idx..idx + m], ts)
    }
}
