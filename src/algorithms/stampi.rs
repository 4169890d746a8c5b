use crate::algorithms::common::apply_exclusion_zone;
use crate::algorithms::stomp::stomp_left_topk;
use crate::core::distance_metric::DistanceMetric;
use crate::core::matrix_profile::{LeftMatrixProfile, MatrixProfileConfig};
use crate::error::{DetectorError, Result};

/// Incremental matrix profile (STAMPI) over a growing time series.
///
/// The initial segment is profiled in batch; each later point adds one
/// subsequence. The window sums of the newest subsequence against all others
/// are cached, so the next row follows from the previous one in O(n):
///
/// ```text
/// S(j, new) = S(j-1, new-1) - term(T[j-1], T[new-1]) + term(T[j+m-1], T[new+m-1])
/// ```
///
/// Left-profile entries are final once created, since later points only
/// ever add neighbours to the *right* of existing subsequences. Top-k lists
/// of existing entries keep absorbing the new subsequence.
#[derive(Debug, Clone)]
pub struct Stampi<M: DistanceMetric> {
    metric: M,
    ts: Vec<f64>,
    mp: LeftMatrixProfile,
    config: MatrixProfileConfig,
    ctx: M::Context,
    /// Window sums of the newest subsequence against every subsequence.
    last_row: Vec<f64>,
}

impl<M: DistanceMetric> Stampi<M> {
    /// Profile `initial_ts` in batch and prepare for incremental updates.
    pub fn new(
        metric: M,
        initial_ts: &[f64],
        config: MatrixProfileConfig,
        k: usize,
    ) -> Result<Self> {
        if initial_ts.len() < config.m {
            return Err(DetectorError::SeriesTooShort {
                len: initial_ts.len(),
                m: config.m,
            });
        }

        let m = config.m;
        let ctx = metric.precompute(initial_ts, m);
        let mp = stomp_left_topk(&metric, initial_ts, &config, k, &ctx);
        let last_row = metric.sum_row(initial_ts, initial_ts.len() - m, m);

        Ok(Self {
            metric,
            ts: initial_ts.to_vec(),
            mp,
            config,
            ctx,
            last_row,
        })
    }

    /// Append a new point and update the matrix profile.
    pub fn update(&mut self, new_val: f64) {
        let m = self.config.m;

        self.ts.push(new_val);
        self.metric.update_context(&mut self.ctx, &self.ts, m);

        let new_idx = self.ts.len() - m;

        let mut row = Vec::with_capacity(new_idx + 1);
        row.push(self.metric.pair_sum(&self.ts, 0, new_idx, m));
        for j in 1..=new_idx {
            let prev = self.last_row[j - 1];
            row.push(self.metric.slide_sum(prev, &self.ts, j, new_idx, m));
        }

        let mut dist_profile: Vec<f64> = row
            .iter()
            .enumerate()
            .map(|(j, &sum)| self.metric.sum_to_distance(sum, j, new_idx, m, &self.ctx))
            .collect();
        apply_exclusion_zone(&mut dist_profile, new_idx, self.config.exclusion_zone());

        self.mp.push();
        for (j, &d) in dist_profile.iter().enumerate().take(new_idx) {
            self.mp.update(new_idx, d, j);
            self.mp.update(j, d, new_idx);
        }

        self.last_row = row;
    }

    /// Append several points in order.
    pub fn update_many(&mut self, values: &[f64]) {
        for &v in values {
            self.update(v);
        }
    }

    /// Get a reference to the current matrix profile.
    pub fn profile(&self) -> &LeftMatrixProfile {
        &self.mp
    }

    /// Get a reference to the current time series.
    pub fn time_series(&self) -> &[f64] {
        &self.ts
    }

    pub fn config(&self) -> &MatrixProfileConfig {
        &self.config
    }
}
