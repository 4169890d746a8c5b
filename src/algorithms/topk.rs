/// Flat storage for the top-k nearest neighbours of every subsequence.
///
/// Position `i`'s k neighbours live at `[i*k..(i+1)*k]`, sorted ascending by
/// distance. Unfilled slots hold `f64::INFINITY` and index 0.
#[derive(Debug, Clone)]
pub struct TopKProfile {
    distances: Vec<f64>,
    indices: Vec<usize>,
    k: usize,
}

impl TopKProfile {
    pub fn new(n: usize, k: usize) -> Self {
        debug_assert!(k >= 1);
        Self {
            distances: vec![f64::INFINITY; n * k],
            indices: vec![0; n * k],
            k,
        }
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.distances.len() / self.k
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Number of neighbours stored per position.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Sorted neighbour distances for position `idx`.
    pub fn distances(&self, idx: usize) -> &[f64] {
        &self.distances[idx * self.k..(idx + 1) * self.k]
    }

    /// Neighbour indices for position `idx`, aligned with `distances(idx)`.
    pub fn indices(&self, idx: usize) -> &[usize] {
        &self.indices[idx * self.k..(idx + 1) * self.k]
    }

    /// Append one position with no neighbours.
    pub fn push(&mut self) {
        let new_len = self.distances.len() + self.k;
        self.distances.resize(new_len, f64::INFINITY);
        self.indices.resize(new_len, 0);
    }

    /// Offer a candidate neighbour to position `idx`.
    ///
    /// Rejected unless strictly closer than the current k-th best. Ties with
    /// stored entries are inserted after them.
    #[inline(always)]
    pub fn update(&mut self, idx: usize, dist: f64, neighbor: usize) {
        let base = idx * self.k;
        let worst = base + self.k - 1;

        if dist >= self.distances[worst] {
            return;
        }

        // Linear insertion, k is small
        let mut pos = worst;
        while pos > base && dist < self.distances[pos - 1] {
            self.distances[pos] = self.distances[pos - 1];
            self.indices[pos] = self.indices[pos - 1];
            pos -= 1;
        }

        self.distances[pos] = dist;
        self.indices[pos] = neighbor;
    }
}
