use crate::algorithms::topk::TopKProfile;

/// Configuration for matrix profile computation.
#[derive(Debug, Clone)]
pub struct MatrixProfileConfig {
    /// Subsequence length.
    pub m: usize,
    /// Whether to apply an exclusion zone around trivial matches.
    pub ignore_trivial: bool,
    /// Exclusion zone denominator: zone = ceil(m / exclusion_zone_denom).
    pub exclusion_zone_denom: usize,
}

impl MatrixProfileConfig {
    pub fn new(m: usize) -> Self {
        Self {
            m,
            ignore_trivial: true,
            exclusion_zone_denom: 4,
        }
    }

    /// Compute the exclusion zone radius.
    pub fn exclusion_zone(&self) -> usize {
        if self.ignore_trivial {
            self.m.div_ceil(self.exclusion_zone_denom)
        } else {
            0
        }
    }
}

/// Incrementally maintained matrix profile.
///
/// Holds, per subsequence, the `k` nearest neighbours found so far (on either
/// side) and the left nearest neighbour (smaller start index). Entries with no
/// admissible neighbour keep `f64::INFINITY` and index 0.
#[derive(Debug, Clone)]
pub struct LeftMatrixProfile {
    /// Sorted k-nearest distances and indices.
    pub top_k: TopKProfile,
    /// Distance to the nearest neighbour that starts earlier.
    pub left_profile: Vec<f64>,
    /// Index of the left nearest neighbour.
    pub left_profile_index: Vec<usize>,
    /// Subsequence length used.
    pub m: usize,
    /// Exclusion zone radius used.
    pub exclusion_zone: usize,
}

impl LeftMatrixProfile {
    /// Create a profile of `n_subs` entries initialized to infinity distances.
    pub fn new(n_subs: usize, k: usize, m: usize, exclusion_zone: usize) -> Self {
        Self {
            top_k: TopKProfile::new(n_subs, k),
            left_profile: vec![f64::INFINITY; n_subs],
            left_profile_index: vec![0; n_subs],
            m,
            exclusion_zone,
        }
    }

    /// Number of subsequences covered.
    pub fn len(&self) -> usize {
        self.left_profile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left_profile.is_empty()
    }

    /// Neighbours kept per subsequence.
    pub fn k(&self) -> usize {
        self.top_k.k()
    }

    /// Offer `neighbor_idx` at `distance` as a match for subsequence `idx`.
    #[inline]
    pub fn update(&mut self, idx: usize, distance: f64, neighbor_idx: usize) {
        self.top_k.update(idx, distance, neighbor_idx);
        if neighbor_idx < idx && distance < self.left_profile[idx] {
            self.left_profile[idx] = distance;
            self.left_profile_index[idx] = neighbor_idx;
        }
    }

    /// Append one entry with no neighbours yet.
    pub fn push(&mut self) {
        self.top_k.push();
        self.left_profile.push(f64::INFINITY);
        self.left_profile_index.push(0);
    }

    /// Nearest-neighbour distance for every subsequence (first top-k column).
    pub fn profile(&self) -> Vec<f64> {
        (0..self.len()).map(|i| self.top_k.distances(i)[0]).collect()
    }

    /// Nearest-neighbour index for every subsequence (first top-k column).
    pub fn profile_index(&self) -> Vec<usize> {
        (0..self.len()).map(|i| self.top_k.indices(i)[0]).collect()
    }
}

/// Rolling mean and standard deviation for all subsequences of length `m`.
///
/// Computed via a single pass over cumulative sums and sums of squares.
/// Constant subsequences are those whose values are all equal, not those
/// with a small sigma from the sums.
#[derive(Debug, Clone)]
pub struct RollingStats {
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
    /// `1 / (sqrt(m) * sigma)` per subsequence, zero for constant subsequences.
    pub m_sigma_inv: Vec<f64>,
}

fn is_constant(window: &[f64]) -> bool {
    window.iter().all(|&v| v == window[0])
}

impl RollingStats {
    /// Compute rolling statistics for subsequences of length `m`.
    pub fn compute(ts: &[f64], m: usize) -> Self {
        debug_assert!(m > 0 && ts.len() >= m);

        let n = ts.len();
        let n_subs = n - m + 1;

        let mut cumsum = vec![0.0; n + 1];
        let mut cumsum_sq = vec![0.0; n + 1];
        for i in 0..n {
            cumsum[i + 1] = cumsum[i] + ts[i];
            cumsum_sq[i + 1] = cumsum_sq[i] + ts[i] * ts[i];
        }

        let mut stats = Self {
            mean: Vec::with_capacity(n_subs),
            std: Vec::with_capacity(n_subs),
            m_sigma_inv: Vec::with_capacity(n_subs),
        };
        for i in 0..n_subs {
            stats.push_window(
                cumsum[i + m] - cumsum[i],
                cumsum_sq[i + m] - cumsum_sq[i],
                m,
                is_constant(&ts[i..i + m]),
            );
        }
        stats
    }

    /// Extend rolling statistics by one new subsequence after appending a point.
    pub fn extend(&mut self, ts: &[f64], m: usize) {
        let window = &ts[ts.len() - m..];
        let sum: f64 = window.iter().sum();
        let sum_sq: f64 = window.iter().map(|x| x * x).sum();
        self.push_window(sum, sum_sq, m, is_constant(window));
    }

    fn push_window(&mut self, sum: f64, sum_sq: f64, m: usize, constant: bool) {
        let m_f = m as f64;
        let mu = sum / m_f;
        // E[X^2] - E[X]^2 can dip below zero by rounding
        let sigma = if constant {
            0.0
        } else {
            (sum_sq / m_f - mu * mu).max(0.0).sqrt()
        };
        self.mean.push(mu);
        self.std.push(sigma);
        self.m_sigma_inv.push(if sigma == 0.0 {
            0.0
        } else {
            1.0 / (m_f.sqrt() * sigma)
        });
    }
}
