//! Batch anomaly scoring with the left matrix profile.
//!
//! A simulated machine sensor runs a smooth periodic pattern with two
//! injected faults. The first 300 points initialize the profile; every later
//! point is scored against what came before it.
//!
//! Run with: cargo run --release --example anomaly_detection
//! Set `RUST_LOG=discord_rs=debug` to see detector logs.

use discord_rs::{LeftStampi, LeftStampiConfig, Reduction};
use tracing_subscriber::EnvFilter;

fn sensor_signal(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            let mut val = (t * std::f64::consts::TAU / 80.0).sin();

            // Amplitude spike
            if (480..530).contains(&i) {
                val *= 3.0;
            }
            // Frequency change
            if (780..850).contains(&i) {
                val = (t * std::f64::consts::TAU / 20.0).sin();
            }

            val + ((t * 7.3).sin() * (t * 13.7).cos()) * 0.05
        })
        .collect()
}

fn main() -> discord_rs::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .without_time()
        .init();

    let n = 1200;
    let m = 50;
    let n_init_train = 300;
    let ts = sensor_signal(n);

    let config = LeftStampiConfig::new(m)
        .with_n_init_train(n_init_train)
        .with_reduction(Reduction::Mean);
    let mut detector = LeftStampi::new(config);
    let scores = detector.fit_predict(&ts)?;

    println!("Left-STAMPI anomaly scores");
    println!("==========================");
    println!("Series length: {n}");
    println!("Window size: {m}");
    println!("Warm-up points: {n_init_train}");

    let discords = detector.discords(3)?;
    println!("\nTop {} discords:\n", discords.len());
    for (rank, discord) in discords.iter().enumerate() {
        let desc = if (430..530).contains(&discord.idx) {
            "amplitude spike (injected at 480)"
        } else if (730..850).contains(&discord.idx) {
            "frequency change (injected at 780)"
        } else {
            "unknown"
        };
        println!(
            "  #{}: window {} distance {:.4} ({desc})",
            rank + 1,
            discord.idx,
            discord.distance
        );
    }

    println!("\nMean point score per 100-point block:");
    for (block, chunk) in scores.chunks(100).enumerate() {
        let mean = chunk.iter().sum::<f64>() / chunk.len() as f64;
        let bar = "#".repeat((mean * 4.0).round() as usize);
        println!("  {:>4}..{:<4} {mean:>7.3} {bar}", block * 100, block * 100 + chunk.len());
    }

    Ok(())
}
