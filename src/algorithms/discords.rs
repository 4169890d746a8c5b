use crate::algorithms::common::apply_exclusion_zone;

/// A discovered discord (anomaly).
///
/// A discord is a subsequence whose nearest neighbor is unusually far away,
/// indicating it is unlike any other pattern in the time series.
#[derive(Debug, Clone, PartialEq)]
pub struct Discord {
    /// Start index of the anomalous subsequence.
    pub idx: usize,
    /// Distance to its nearest neighbor (high = anomalous).
    pub distance: f64,
}

/// Find up to `n` discords in a window-level profile.
///
/// Greedy: take the largest finite positive entry, record it, blank out its
/// exclusion zone and repeat. Zero entries (unscored warm-up windows) and
/// infinite entries are never reported. Results come sorted by distance,
/// descending.
pub fn find_discords(profile: &[f64], exclusion_zone: usize, n: usize) -> Vec<Discord> {
    let mut profile: Vec<f64> = profile
        .iter()
        .map(|&d| if d.is_finite() && d > 0.0 { d } else { f64::NEG_INFINITY })
        .collect();
    let mut discords = Vec::with_capacity(n);

    for _ in 0..n {
        let Some((idx, distance)) = profile
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, d)| d.is_finite())
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
        else {
            break;
        };

        discords.push(Discord { idx, distance });

        apply_exclusion_zone(&mut profile, idx, exclusion_zone);
    }

    discords
}
