//! Incremental anomaly detection on univariate time series with the left
//! matrix profile.
//!
//! [`LeftStampi`] keeps, for every subsequence of length `m`, the distance
//! to its nearest earlier neighbour and turns it into per-point anomaly
//! scores. The profile is maintained with STAMPI: a batch STOMP pass over a
//! warm-up segment, then one O(n) update per new observation.
//!
//! # Examples
//!
//! ```
//! use discord_rs::{LeftStampi, LeftStampiConfig};
//!
//! let ts: Vec<f64> = (0..60).map(|i| (i as f64 * 0.5).sin()).collect();
//! let (train, stream) = ts.split_at(20);
//!
//! let mut detector = LeftStampi::new(LeftStampiConfig::new(6));
//! detector.fit(train).unwrap();
//! let mut scores = Vec::new();
//! for &x in stream {
//!     scores = detector.predict(&[x]).unwrap();
//! }
//! assert_eq!(scores.len(), ts.len());
//! ```

pub mod algorithms;
pub mod core;
pub mod detector;
pub mod error;
pub mod metrics;
pub mod windowing;

pub use crate::algorithms::discords::{find_discords, Discord};
pub use crate::algorithms::stampi::Stampi;
pub use crate::algorithms::topk::TopKProfile;
pub use crate::core::distance_metric::DistanceMetric;
pub use crate::core::matrix_profile::{LeftMatrixProfile, MatrixProfileConfig, RollingStats};
pub use crate::detector::{LeftStampi, LeftStampiConfig, Validator};
pub use crate::error::{DetectorError, Result};
pub use crate::metrics::absolute::AbsoluteEuclidean;
pub use crate::metrics::euclidean::ZNormalizedEuclidean;
pub use crate::metrics::minkowski::Minkowski;
pub use crate::windowing::{reverse_windowing, Reduction};
