use crate::core::distance_metric::DistanceMetric;

/// Non-normalized Minkowski p-norm distance.
///
/// `d(i,j) = (sum_t |T[i+t] - T[j+t]|^p)^(1/p)`, with `p >= 1`. The sum of
/// powered differences slides along diagonals like a dot product does:
///
/// ```text
/// D^p(i+1, j+1) = D^p(i,j) - |T[i]-T[j]|^p + |T[i+m]-T[j+m]|^p
/// ```
///
/// `p == 1.0` (Manhattan) uses `abs()` instead of `powf()`. For `p == 2.0`
/// prefer [`AbsoluteEuclidean`](crate::metrics::absolute::AbsoluteEuclidean),
/// which is the same distance computed through dot products.
#[derive(Debug, Clone, Copy)]
pub struct Minkowski {
    p: f64,
}

impl Minkowski {
    /// Callers validate `p` beforehand (see `Validator::validate_p_norm`).
    pub fn new(p: f64) -> Self {
        debug_assert!(p >= 1.0, "p-norm requires p >= 1.0");
        Self { p }
    }

    pub fn p(&self) -> f64 {
        self.p
    }
}

impl DistanceMetric for Minkowski {
    type Context = ();

    fn precompute(&self, _ts: &[f64], _m: usize) -> Self::Context {}

    fn update_context(&self, _ctx: &mut Self::Context, _ts: &[f64], _m: usize) {}

    #[inline]
    fn term(&self, a: f64, b: f64) -> f64 {
        if self.p == 1.0 {
            (a - b).abs()
        } else {
            (a - b).abs().powf(self.p)
        }
    }

    #[inline]
    fn sum_to_distance(&self, sum: f64, _i: usize, _j: usize, _m: usize, _ctx: &()) -> f64 {
        if self.p == 1.0 {
            sum.max(0.0)
        } else {
            sum.max(0.0).powf(1.0 / self.p)
        }
    }
}
