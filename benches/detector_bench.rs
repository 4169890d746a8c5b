use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use discord_rs::algorithms::common::{sliding_dot_product_fft, sliding_dot_product_naive};
use discord_rs::algorithms::stomp::stomp_left_topk;
use discord_rs::{
    AbsoluteEuclidean, DistanceMetric, LeftStampi, LeftStampiConfig, MatrixProfileConfig,
    Minkowski, Stampi, ZNormalizedEuclidean,
};

fn sine(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i as f64 * 0.1).sin()).collect()
}

fn bench_sdp_naive_vs_fft(c: &mut Criterion) {
    let mut group = c.benchmark_group("sdp_naive_vs_fft");
    let m = 100;
    for n in [1_000, 5_000, 10_000] {
        let ts = sine(n);
        let q: Vec<f64> = ts[0..m].to_vec();
        group.bench_with_input(BenchmarkId::new("naive", n), &n, |b, _| {
            b.iter(|| sliding_dot_product_naive(black_box(&q), black_box(&ts)))
        });
        group.bench_with_input(BenchmarkId::new("fft", n), &n, |b, _| {
            b.iter(|| sliding_dot_product_fft(black_box(&q), black_box(&ts)))
        });
    }
    group.finish();
}

fn bench_stomp_left(c: &mut Criterion) {
    let mut group = c.benchmark_group("stomp_left_topk");
    group.sample_size(10);
    for n in [1_000, 5_000] {
        let ts = sine(n);
        let config = MatrixProfileConfig::new(100);
        let ctx = ZNormalizedEuclidean.precompute(&ts, config.m);
        for k in [1, 3] {
            group.bench_with_input(BenchmarkId::new(format!("k{k}"), n), &n, |b, _| {
                b.iter(|| {
                    stomp_left_topk(
                        &ZNormalizedEuclidean,
                        black_box(&ts),
                        &config,
                        k,
                        &ctx,
                    )
                })
            });
        }
    }
    group.finish();
}

fn bench_stampi_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("stampi_update");
    let ts = sine(1_000);
    let config = MatrixProfileConfig::new(100);

    let mut znorm = Stampi::new(ZNormalizedEuclidean, &ts, config.clone(), 1)
        .expect("series longer than window");
    group.bench_function("znormalized", |b| {
        let mut val = 1000.0_f64;
        b.iter(|| {
            val += 0.1;
            znorm.update(black_box(val.sin()));
        })
    });

    let mut aamp = Stampi::new(AbsoluteEuclidean, &ts, config.clone(), 1)
        .expect("series longer than window");
    group.bench_function("absolute", |b| {
        let mut val = 1000.0_f64;
        b.iter(|| {
            val += 0.1;
            aamp.update(black_box(val.sin()));
        })
    });

    let mut pnorm = Stampi::new(Minkowski::new(1.0), &ts, config, 1)
        .expect("series longer than window");
    group.bench_function("minkowski_p1", |b| {
        let mut val = 1000.0_f64;
        b.iter(|| {
            val += 0.1;
            pnorm.update(black_box(val.sin()));
        })
    });
    group.finish();
}

fn bench_fit_predict(c: &mut Criterion) {
    let mut group = c.benchmark_group("left_stampi_fit_predict");
    group.sample_size(10);
    for n in [500, 2_000, 5_000] {
        let ts: Vec<f64> = (0..n)
            .map(|i| (i as f64 * 0.1).sin() + 0.1 * (i as f64 * 2.3).cos())
            .collect();
        let config = LeftStampiConfig::new(50).with_n_init_train(n / 5);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                LeftStampi::new(config.clone())
                    .fit_predict(black_box(&ts))
                    .expect("valid parameters")
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sdp_naive_vs_fft,
    bench_stomp_left,
    bench_stampi_update,
    bench_fit_predict,
);
criterion_main!(benches);
