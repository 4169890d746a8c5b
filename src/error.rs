use thiserror::Error;

/// Errors raised by parameter validation and by the detector lifecycle.
///
/// Every variant is raised before any profile computation starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DetectorError {
    #[error(
        "the window size must be at least 3 and at most the length of the time series \
         (window_size = {window_size}, length = {len})"
    )]
    InvalidWindowSize { window_size: usize, len: usize },

    #[error(
        "the window size must be less than or equal to n_init_train \
         (window_size = {window_size}, n_init_train = {n_init_train})"
    )]
    WindowExceedsInitTrain {
        window_size: usize,
        n_init_train: usize,
    },

    #[error("n_init_train ({n_init_train}) exceeds the length of the time series ({len})")]
    InitTrainExceedsSeries { n_init_train: usize, len: usize },

    #[error(
        "the top `k` distances must be at least 1 and at most the length of the time \
         series minus the window size (k = {k}, max = {max})"
    )]
    InvalidTopK { k: usize, max: usize },

    #[error("p-norm requires a finite p >= 1.0, got {0}")]
    InvalidPNorm(f64),

    #[error("n_init_train must be configured before calling fit_predict")]
    MissingInitTrain,

    #[error("the detector has not been fitted; call fit or fit_predict first")]
    NotFitted,

    #[error("non-finite value {value} at index {index}")]
    NonFiniteValue { index: usize, value: f64 },

    #[error("time series of length {len} is shorter than the subsequence length {m}")]
    SeriesTooShort { len: usize, m: usize },
}

pub type Result<T> = std::result::Result<T, DetectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_values() {
        let err = DetectorError::InvalidWindowSize {
            window_size: 2,
            len: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("at least 3"), "{msg}");
        assert!(msg.contains("window_size = 2"), "{msg}");

        let err = DetectorError::InvalidTopK { k: 9, max: 7 };
        assert!(err.to_string().contains("k = 9, max = 7"));
    }
}
