use discord_rs::{
    reverse_windowing, DistanceMetric, LeftStampi, LeftStampiConfig, Reduction,
    ZNormalizedEuclidean,
};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

const DEFAULT_PROPTEST_CASES: u32 = 64;

fn proptest_cases() -> u32 {
    std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|raw| raw.parse::<u32>().ok())
        .unwrap_or(DEFAULT_PROPTEST_CASES)
}

/// Pick `window_size` and `n_init_train` so that both batch and streaming
/// runs are valid for `k = 1`.
fn derive_params(len: usize, window_frac: f64, init_frac: f64) -> (usize, usize) {
    let max_window = (len / 3).max(3);
    let window_size = 3 + ((max_window - 3) as f64 * window_frac) as usize;
    let min_init = window_size + 1;
    let n_init_train = min_init + ((len - min_init) as f64 * init_frac) as usize;
    (window_size, n_init_train)
}

/// Concatenate `(value, run_length)` runs into one series.
fn from_runs(runs: &[(f64, usize)]) -> Vec<f64> {
    runs.iter()
        .flat_map(|&(value, len)| std::iter::repeat(value).take(len))
        .collect()
}

fn config_for(window_size: usize, mode: u8) -> LeftStampiConfig {
    let config = LeftStampiConfig::new(window_size);
    match mode {
        0 => config,
        1 => config.with_normalize(false),
        _ => config.with_normalize(false).with_p(1.0),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: proptest_cases(),
        .. ProptestConfig::default()
    })]

    #[test]
    fn scores_cover_every_point_and_warm_up_is_zero(
        values in prop::collection::vec(-10.0f64..10.0, 12..80),
        window_frac in 0.0f64..1.0,
        init_frac in 0.0f64..1.0,
        mode in 0u8..3,
    ) {
        let (window_size, n_init_train) = derive_params(values.len(), window_frac, init_frac);
        let config = config_for(window_size, mode).with_n_init_train(n_init_train);

        let scores = LeftStampi::new(config)
            .fit_predict(&values)
            .expect("derived parameters are valid");

        prop_assert_eq!(scores.len(), values.len());
        prop_assert!(scores[..n_init_train].iter().all(|&s| s == 0.0));
        prop_assert!(scores.iter().all(|s| s.is_finite() && *s >= 0.0));
    }

    #[test]
    fn batch_and_streaming_agree_exactly(
        values in prop::collection::vec(-10.0f64..10.0, 12..64),
        window_frac in 0.0f64..1.0,
        init_frac in 0.0f64..1.0,
        mode in 0u8..3,
        chunk in 1usize..6,
    ) {
        let (window_size, n_init_train) = derive_params(values.len(), window_frac, init_frac);
        let config = config_for(window_size, mode);

        let batch = LeftStampi::new(config.clone().with_n_init_train(n_init_train))
            .fit_predict(&values)
            .expect("derived parameters are valid");

        let mut streaming = LeftStampi::new(config);
        streaming.fit(&values[..n_init_train]).expect("derived parameters are valid");
        let mut scores = streaming.predict(&[]).expect("fitted");
        for part in values[n_init_train..].chunks(chunk) {
            scores = streaming.predict(part).expect("fitted");
        }

        prop_assert_eq!(scores, batch);
    }

    #[test]
    fn left_profile_matches_brute_force(
        values in prop::collection::vec(-10.0f64..10.0, 12..48),
        window_frac in 0.0f64..1.0,
        init_frac in 0.0f64..1.0,
    ) {
        let (m, n_init_train) = derive_params(values.len(), window_frac, init_frac);
        let mut detector = LeftStampi::new(LeftStampiConfig::new(m).with_n_init_train(n_init_train));
        detector.fit_predict(&values).expect("derived parameters are valid");
        let mp = detector.matrix_profile().expect("fitted");

        let ctx = ZNormalizedEuclidean.precompute(&values, m);
        for i in 0..mp.len() {
            let expected = (0..i)
                .filter(|&j| i - j > mp.exclusion_zone)
                .map(|j| ZNormalizedEuclidean.distance(&values, i, j, m, &ctx))
                .fold(f64::INFINITY, f64::min);
            let got = mp.left_profile[i];
            prop_assert!(
                (got.is_infinite() && expected.is_infinite()) || (got - expected).abs() < 1e-6,
                "index {}: got {}, expected {}", i, got, expected
            );
        }
    }

    #[test]
    fn reverse_windowing_preserves_bounds(
        y in prop::collection::vec(0.0f64..100.0, 1..40),
        window_size in 1usize..10,
    ) {
        let lo = y.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = y.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        for reduction in [Reduction::Mean, Reduction::Median, Reduction::Max] {
            let out = reverse_windowing(&y, window_size, reduction);
            prop_assert_eq!(out.len(), y.len() + window_size - 1);
            prop_assert!(out.iter().all(|&v| v >= lo - 1e-9 && v <= hi + 1e-9));
        }
    }

    #[test]
    fn flat_runs_match_earlier_flat_windows(
        runs in prop::collection::vec((-10.0f64..10.0, 1usize..16), 2..12),
        window_frac in 0.0f64..1.0,
        init_frac in 0.0f64..1.0,
    ) {
        let values = from_runs(&runs);
        prop_assume!(values.len() >= 12);
        let (m, n_init_train) = derive_params(values.len(), window_frac, init_frac);

        let config = LeftStampiConfig::new(m).with_n_init_train(n_init_train);
        let mut batch = LeftStampi::new(config.clone());
        let scores = batch.fit_predict(&values).expect("derived parameters are valid");
        prop_assert_eq!(scores.len(), values.len());
        prop_assert!(scores.iter().all(|s| s.is_finite() && *s >= 0.0));

        let mut streaming = LeftStampi::new(config);
        streaming.fit(&values[..n_init_train]).expect("derived parameters are valid");
        let streamed = streaming.predict(&values[n_init_train..]).expect("fitted");
        prop_assert_eq!(&streamed, &scores);

        // A flat window with an earlier flat window outside the zone scores 0
        let mp = batch.matrix_profile().expect("fitted");
        let flat: Vec<bool> = values
            .windows(m)
            .map(|w| w.iter().all(|&v| v == w[0]))
            .collect();
        for i in 0..mp.len() {
            let has_flat_left = (0..i).any(|j| i - j > mp.exclusion_zone && flat[j]);
            if flat[i] && has_flat_left {
                prop_assert_eq!(mp.left_profile[i], 0.0, "flat window {}", i);
            }
        }
    }
}
