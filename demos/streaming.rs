//! Streaming anomaly scoring with Left-STAMPI.
//!
//! The detector is fitted on a clean training prefix, then fed one point at
//! a time. Each update costs O(n) and returns the refreshed scores of the
//! full series. Halfway through the stream the signal changes shape and the
//! newest score jumps.
//!
//! Run with: cargo run --release --example streaming
//! Set `RUST_LOG=discord_rs=trace` to log every update.

use discord_rs::{LeftStampi, LeftStampiConfig};
use tracing_subscriber::EnvFilter;

fn main() -> discord_rs::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .without_time()
        .init();

    let m = 20;
    let period = 40.0;
    let n_train = 200;
    let n_stream = 200;
    let anomaly = 300..320;

    let signal = |i: usize| {
        let t = i as f64;
        if anomaly.contains(&i) {
            (t * std::f64::consts::TAU / 7.0).sin() * 0.5
        } else {
            (t * std::f64::consts::TAU / period).sin()
        }
    };

    let train: Vec<f64> = (0..n_train).map(signal).collect();
    let mut detector = LeftStampi::new(LeftStampiConfig::new(m));
    detector.fit(&train)?;

    println!("Streaming Left-STAMPI");
    println!("=====================");
    println!("Window size: {m}");
    println!("Training points: {n_train}");

    let mut peak = (0, 0.0_f64);
    let mut scores = Vec::new();
    for i in n_train..n_train + n_stream {
        scores = detector.predict(&[signal(i)])?;

        // The newest point is only covered by the newest window so far
        let newest = scores[i];
        if newest > peak.1 {
            peak = (i, newest);
        }
        if (i - n_train) % 25 == 0 {
            println!("  t={i:>4} score={newest:.4}");
        }
    }

    println!("\nPoints seen: {}", detector.len());
    println!("Highest streaming score at t={} ({:.4})", peak.0, peak.1);
    println!("Injected anomaly: {anomaly:?}");

    let discord = detector.discords(1)?;
    if let Some(d) = discord.first() {
        println!(
            "Most anomalous window after the full stream: {} (distance {:.4})",
            d.idx, d.distance
        );
    }

    let final_peak = scores
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(i, _)| i);
    println!("Highest final point score at t={:?}", final_peak);

    Ok(())
}
