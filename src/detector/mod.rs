//! Left-STAMPI anomaly detector.
//!
//! The detector maintains the left matrix profile of a univariate series
//! incrementally: the distance from every subsequence to its nearest
//! neighbour among *earlier* subsequences. A large distance means the
//! pattern has not been seen before, so the left profile doubles as an
//! online discord score. Window scores are mapped back to points with
//! [`reverse_windowing`].
//!
//! Two ways to drive it:
//!
//! - **Batch**: [`LeftStampi::fit_predict`] initializes on the first
//!   `n_init_train` points and feeds the rest one at a time.
//! - **Stream**: [`LeftStampi::fit`] on a training prefix, then
//!   [`LeftStampi::predict`] with each new chunk.
//!
//! Both routes perform the same sequence of updates and return identical
//! scores for the same series.
//!
//! Reference: Yeh et al., "Matrix Profile I: All Pairs Similarity Joins for
//! Time Series", ICDM 2016.

pub mod validator;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::algorithms::discords::{find_discords, Discord};
use crate::algorithms::stampi::Stampi;
use crate::core::matrix_profile::{LeftMatrixProfile, MatrixProfileConfig};
use crate::error::{DetectorError, Result};
use crate::metrics::absolute::AbsoluteEuclidean;
use crate::metrics::euclidean::ZNormalizedEuclidean;
use crate::metrics::minkowski::Minkowski;
use crate::windowing::{reverse_windowing, Reduction};

pub use self::validator::Validator;

/// Detector parameters.
///
/// Every field has a default, so partial serialized configs are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeftStampiConfig {
    /// Subsequence length, at least 3.
    pub window_size: usize,
    /// Leading points used to initialize the profile in `fit_predict`.
    /// Scores for these points are 0. `fit` uses the training length instead.
    pub n_init_train: Option<usize>,
    /// Z-normalize subsequences before comparing them.
    pub normalize: bool,
    /// Minkowski exponent for non-normalized distances.
    pub p: f64,
    /// Number of nearest neighbours kept per subsequence.
    pub k: usize,
    /// How overlapping window scores combine into point scores.
    pub reduction: Reduction,
}

impl Default for LeftStampiConfig {
    fn default() -> Self {
        Self {
            window_size: 3,
            n_init_train: None,
            normalize: true,
            p: 2.0,
            k: 1,
            reduction: Reduction::Mean,
        }
    }
}

impl LeftStampiConfig {
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size,
            ..Self::default()
        }
    }

    pub fn with_n_init_train(mut self, n_init_train: usize) -> Self {
        self.n_init_train = Some(n_init_train);
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_p(mut self, p: f64) -> Self {
        self.p = p;
        self
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn with_reduction(mut self, reduction: Reduction) -> Self {
        self.reduction = reduction;
        self
    }
}

/// The incremental profile, monomorphized per distance.
#[derive(Debug, Clone)]
enum ProfileEngine {
    Normalized(Stampi<ZNormalizedEuclidean>),
    Absolute(Stampi<AbsoluteEuclidean>),
    Minkowski(Stampi<Minkowski>),
}

impl ProfileEngine {
    fn new(config: &LeftStampiConfig, initial: &[f64]) -> Result<Self> {
        let mp_config = MatrixProfileConfig::new(config.window_size);
        let k = config.k;
        Ok(if config.normalize {
            Self::Normalized(Stampi::new(ZNormalizedEuclidean, initial, mp_config, k)?)
        } else if config.p == 2.0 {
            Self::Absolute(Stampi::new(AbsoluteEuclidean, initial, mp_config, k)?)
        } else {
            Self::Minkowski(Stampi::new(Minkowski::new(config.p), initial, mp_config, k)?)
        })
    }

    fn update_many(&mut self, values: &[f64]) {
        match self {
            Self::Normalized(s) => s.update_many(values),
            Self::Absolute(s) => s.update_many(values),
            Self::Minkowski(s) => s.update_many(values),
        }
    }

    fn profile(&self) -> &LeftMatrixProfile {
        match self {
            Self::Normalized(s) => s.profile(),
            Self::Absolute(s) => s.profile(),
            Self::Minkowski(s) => s.profile(),
        }
    }

    fn time_series(&self) -> &[f64] {
        match self {
            Self::Normalized(s) => s.time_series(),
            Self::Absolute(s) => s.time_series(),
            Self::Minkowski(s) => s.time_series(),
        }
    }
}

/// Incremental left matrix profile anomaly detector.
///
/// # Examples
///
/// ```
/// use discord_rs::{LeftStampi, LeftStampiConfig};
///
/// let ts: Vec<f64> = (0..40).map(|i| (i as f64 * 0.4).sin()).collect();
/// let mut detector = LeftStampi::new(LeftStampiConfig::new(5).with_n_init_train(10));
/// let scores = detector.fit_predict(&ts).unwrap();
/// assert_eq!(scores.len(), ts.len());
/// assert!(scores[..10].iter().all(|&s| s == 0.0));
/// ```
#[derive(Debug, Clone)]
pub struct LeftStampi {
    config: LeftStampiConfig,
    /// Resolved warm-up length of the current fit.
    n_init_train: Option<usize>,
    engine: Option<ProfileEngine>,
}

impl LeftStampi {
    pub fn new(config: LeftStampiConfig) -> Self {
        Self {
            config,
            n_init_train: None,
            engine: None,
        }
    }

    pub fn config(&self) -> &LeftStampiConfig {
        &self.config
    }

    /// Warm-up length of the current fit, `None` before fitting.
    pub fn n_init_train(&self) -> Option<usize> {
        self.n_init_train
    }

    pub fn is_fitted(&self) -> bool {
        self.engine.is_some()
    }

    /// Number of points seen since the last fit.
    pub fn len(&self) -> usize {
        self.engine.as_ref().map_or(0, |e| e.time_series().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Initialize the profile on a training series.
    ///
    /// The whole of `x` becomes the warm-up segment: `n_init_train = x.len()`,
    /// overriding the configured value. Refitting discards previous state.
    pub fn fit(&mut self, x: &[f64]) -> Result<&mut Self> {
        Validator::validate_series(x)?;
        Validator::validate_params(&self.config, x.len(), x.len())?;

        self.engine = Some(ProfileEngine::new(&self.config, x)?);
        self.n_init_train = Some(x.len());

        debug!(
            window_size = self.config.window_size,
            n_init_train = x.len(),
            k = self.config.k,
            normalize = self.config.normalize,
            "fitted left matrix profile"
        );
        Ok(self)
    }

    /// Feed new points and score the whole series seen so far.
    ///
    /// The returned vector covers the warm-up segment plus every point
    /// streamed since the fit, `x` included.
    pub fn predict(&mut self, x: &[f64]) -> Result<Vec<f64>> {
        let engine = self.engine.as_mut().ok_or(DetectorError::NotFitted)?;
        Validator::validate_series(x)?;

        engine.update_many(x);
        trace!(points = x.len(), total = engine.time_series().len(), "streamed points");

        self.scores()
    }

    /// Initialize on `x[..n_init_train]`, feed the rest point by point and
    /// return one score per point of `x`.
    ///
    /// The detector stays fitted afterwards, so `predict` can continue the
    /// stream.
    pub fn fit_predict(&mut self, x: &[f64]) -> Result<Vec<f64>> {
        let n_init_train = self
            .config
            .n_init_train
            .ok_or(DetectorError::MissingInitTrain)?;
        Validator::validate_series(x)?;
        Validator::validate_params(&self.config, x.len(), n_init_train)?;

        let mut engine = ProfileEngine::new(&self.config, &x[..n_init_train])?;
        engine.update_many(&x[n_init_train..]);

        self.engine = Some(engine);
        self.n_init_train = Some(n_init_train);

        debug!(
            window_size = self.config.window_size,
            n_init_train,
            k = self.config.k,
            len = x.len(),
            "scored series with left matrix profile"
        );
        self.scores()
    }

    /// Current matrix profile (top-k and left profile), if fitted.
    pub fn matrix_profile(&self) -> Option<&LeftMatrixProfile> {
        self.engine.as_ref().map(ProfileEngine::profile)
    }

    /// Left profile with the warm-up windows set to 0.
    pub fn window_scores(&self) -> Result<Vec<f64>> {
        let engine = self.engine.as_ref().ok_or(DetectorError::NotFitted)?;
        let n_init_train = self.n_init_train.unwrap_or(0);

        let mut lmp = engine.profile().left_profile.clone();
        let warm_up = n_init_train.min(lmp.len());
        lmp[..warm_up].fill(0.0);
        Ok(lmp)
    }

    /// The `n` most anomalous subsequences outside the warm-up segment.
    pub fn discords(&self, n: usize) -> Result<Vec<Discord>> {
        let lmp = self.window_scores()?;
        let exclusion_zone = self.matrix_profile().map_or(0, |mp| mp.exclusion_zone);
        Ok(find_discords(&lmp, exclusion_zone, n))
    }

    fn scores(&self) -> Result<Vec<f64>> {
        let lmp = self.window_scores()?;
        Ok(reverse_windowing(
            &lmp,
            self.config.window_size,
            self.config.reduction,
        ))
    }
}
