use realfft::RealFftPlanner;

/// Work size (n * m) above which the sliding dot product goes through the FFT.
const FFT_THRESHOLD: usize = 256 * 1024;

/// Dot product of query `q` with every window of `ts`.
///
/// Element `i` of the result is `dot(q, ts[i..i + q.len()])`, so the result
/// has `ts.len() - q.len() + 1` entries. Large inputs use an O(n log n)
/// FFT cross-correlation, small ones the direct O(n*m) loop.
pub fn sliding_dot_product(q: &[f64], ts: &[f64]) -> Vec<f64> {
    debug_assert!(ts.len() >= q.len(), "time series shorter than query");
    if ts.len() * q.len() > FFT_THRESHOLD {
        sliding_dot_product_fft(q, ts)
    } else {
        sliding_dot_product_naive(q, ts)
    }
}

pub fn sliding_dot_product_naive(q: &[f64], ts: &[f64]) -> Vec<f64> {
    ts.windows(q.len())
        .map(|w| w.iter().zip(q).map(|(a, b)| a * b).sum())
        .collect()
}

/// FFT cross-correlation: convolve the reversed query with the series.
pub fn sliding_dot_product_fft(q: &[f64], ts: &[f64]) -> Vec<f64> {
    let m = q.len();
    let n = ts.len();
    let n_subs = n - m + 1;
    let fft_len = (n + m - 1).next_power_of_two();

    let mut planner = RealFftPlanner::<f64>::new();
    let forward = planner.plan_fft_forward(fft_len);
    let inverse = planner.plan_fft_inverse(fft_len);

    let mut q_buf = vec![0.0; fft_len];
    for (dst, &src) in q_buf.iter_mut().zip(q.iter().rev()) {
        *dst = src;
    }
    let mut ts_buf = vec![0.0; fft_len];
    ts_buf[..n].copy_from_slice(ts);

    let mut q_spec = forward.make_output_vec();
    let mut ts_spec = forward.make_output_vec();
    // Buffers come from the plans themselves, so lengths always match
    forward
        .process(&mut q_buf, &mut q_spec)
        .expect("planned FFT buffer length");
    forward
        .process(&mut ts_buf, &mut ts_spec)
        .expect("planned FFT buffer length");

    for (a, b) in q_spec.iter_mut().zip(&ts_spec) {
        *a *= b;
    }

    let mut out = inverse.make_output_vec();
    inverse
        .process(&mut q_spec, &mut out)
        .expect("planned FFT buffer length");

    // realfft's inverse is unnormalized
    let norm = 1.0 / fft_len as f64;
    out[m - 1..m - 1 + n_subs].iter().map(|x| x * norm).collect()
}

/// Set `profile[idx - zone ..= idx + zone]` (clamped to bounds) to infinity.
#[inline]
pub fn apply_exclusion_zone(profile: &mut [f64], idx: usize, zone: usize) {
    let start = idx.saturating_sub(zone);
    let end = (idx + zone + 1).min(profile.len());
    if start < end {
        profile[start..end].fill(f64::INFINITY);
    }
}
