//! Parameter and input validation for the left-STAMPI detector.
//!
//! All checks run before any profile computation and fail fast on the first
//! violation. There is no correction of invalid inputs: the caller supplies
//! corrected parameters and retries.

use crate::detector::LeftStampiConfig;
use crate::error::{DetectorError, Result};

/// Smallest admissible window size.
pub const MIN_WINDOW_SIZE: usize = 3;

/// Validation utility for detector configuration and input series.
pub struct Validator;

impl Validator {
    /// Every value must be finite.
    pub fn validate_series(x: &[f64]) -> Result<()> {
        match x.iter().position(|v| !v.is_finite()) {
            Some(index) => Err(DetectorError::NonFiniteValue {
                index,
                value: x[index],
            }),
            None => Ok(()),
        }
    }

    /// `3 <= window_size <= len`.
    pub fn validate_window_size(window_size: usize, len: usize) -> Result<()> {
        if window_size < MIN_WINDOW_SIZE || window_size > len {
            return Err(DetectorError::InvalidWindowSize { window_size, len });
        }
        Ok(())
    }

    /// `window_size <= n_init_train <= len`.
    pub fn validate_init_train(window_size: usize, n_init_train: usize, len: usize) -> Result<()> {
        if window_size > n_init_train {
            return Err(DetectorError::WindowExceedsInitTrain {
                window_size,
                n_init_train,
            });
        }
        if n_init_train > len {
            return Err(DetectorError::InitTrainExceedsSeries { n_init_train, len });
        }
        Ok(())
    }

    /// `1 <= k <= len - window_size`.
    pub fn validate_top_k(k: usize, len: usize, window_size: usize) -> Result<()> {
        let max = len.saturating_sub(window_size);
        if k < 1 || k > max {
            return Err(DetectorError::InvalidTopK { k, max });
        }
        Ok(())
    }

    /// Only checked for non-normalized distances; `p` is ignored otherwise.
    pub fn validate_p_norm(p: f64, normalize: bool) -> Result<()> {
        if !normalize && (!p.is_finite() || p < 1.0) {
            return Err(DetectorError::InvalidPNorm(p));
        }
        Ok(())
    }

    /// Run every parameter check against a series of length `len`.
    pub fn validate_params(config: &LeftStampiConfig, len: usize, n_init_train: usize) -> Result<()> {
        Self::validate_window_size(config.window_size, len)?;
        Self::validate_init_train(config.window_size, n_init_train, len)?;
        Self::validate_top_k(config.k, len, config.window_size)?;
        Self::validate_p_norm(config.p, config.normalize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_size_bounds() {
        assert!(Validator::validate_window_size(3, 3).is_ok());
        assert_eq!(
            Validator::validate_window_size(2, 10),
            Err(DetectorError::InvalidWindowSize {
                window_size: 2,
                len: 10
            })
        );
        assert!(Validator::validate_window_size(11, 10).is_err());
        assert!(Validator::validate_window_size(3, 0).is_err());
    }

    #[test]
    fn test_init_train_bounds() {
        assert!(Validator::validate_init_train(5, 5, 10).is_ok());
        assert_eq!(
            Validator::validate_init_train(6, 5, 10),
            Err(DetectorError::WindowExceedsInitTrain {
                window_size: 6,
                n_init_train: 5
            })
        );
        assert_eq!(
            Validator::validate_init_train(5, 11, 10),
            Err(DetectorError::InitTrainExceedsSeries {
                n_init_train: 11,
                len: 10
            })
        );
    }

    #[test]
    fn test_top_k_bounds() {
        assert!(Validator::validate_top_k(1, 10, 3).is_ok());
        assert!(Validator::validate_top_k(7, 10, 3).is_ok());
        assert_eq!(
            Validator::validate_top_k(8, 10, 3),
            Err(DetectorError::InvalidTopK { k: 8, max: 7 })
        );
        assert!(Validator::validate_top_k(0, 10, 3).is_err());
        // A series exactly one window long leaves no room for any neighbour
        assert_eq!(
            Validator::validate_top_k(1, 3, 3),
            Err(DetectorError::InvalidTopK { k: 1, max: 0 })
        );
    }

    #[test]
    fn test_p_norm_only_checked_without_normalization() {
        assert!(Validator::validate_p_norm(0.5, true).is_ok());
        assert!(Validator::validate_p_norm(1.0, false).is_ok());
        assert_eq!(
            Validator::validate_p_norm(0.5, false),
            Err(DetectorError::InvalidPNorm(0.5))
        );
        assert!(Validator::validate_p_norm(f64::INFINITY, false).is_err());
    }

    #[test]
    fn test_series_must_be_finite() {
        assert!(Validator::validate_series(&[1.0, 2.0]).is_ok());
        assert!(Validator::validate_series(&[]).is_ok());
        let err = Validator::validate_series(&[1.0, f64::INFINITY, f64::NAN]).unwrap_err();
        assert_eq!(
            err,
            DetectorError::NonFiniteValue {
                index: 1,
                value: f64::INFINITY
            }
        );
    }

    #[test]
    fn test_validate_params_order() {
        let config = LeftStampiConfig::new(5).with_k(50);
        // Window size is checked first
        assert!(matches!(
            Validator::validate_params(&config, 4, 4),
            Err(DetectorError::InvalidWindowSize { .. })
        ));
        assert!(matches!(
            Validator::validate_params(&config, 20, 8),
            Err(DetectorError::InvalidTopK { k: 50, max: 15 })
        ));
    }
}
