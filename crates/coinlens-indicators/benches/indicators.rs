//! Benchmarks for indicator implementations.

use coinlens_core::traits::{Indicator, MultiOutputIndicator};
use coinlens_indicators::{simd, BollingerBands, Ema, Macd, Rsi, Sma, Stochastic};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn generate_test_data(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0)
        .collect()
}

fn benchmark_moving_averages(c: &mut Criterion) {
    let mut group = c.benchmark_group("MovingAverage");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("sma", size), &data, |b, data| {
            let sma = Sma::default();
            b.iter(|| sma.calculate(black_box(data)))
        });

        group.bench_with_input(BenchmarkId::new("ema", size), &data, |b, data| {
            let ema = Ema::default();
            b.iter(|| ema.calculate(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_rsi(c: &mut Criterion) {
    let mut group = c.benchmark_group("RSI");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("rsi", size), &data, |b, data| {
            let rsi = Rsi::default();
            b.iter(|| rsi.calculate(black_box(data)))
        });

        group.bench_with_input(BenchmarkId::new("gains_losses", size), &data, |b, data| {
            b.iter(|| simd::gains_losses(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_multi_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("MultiOutput");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("macd", size), &data, |b, data| {
            let macd = Macd::default();
            b.iter(|| macd.calculate(black_box(data)))
        });

        group.bench_with_input(BenchmarkId::new("bollinger", size), &data, |b, data| {
            let bands = BollingerBands::default();
            b.iter(|| bands.calculate(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_stochastic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Stochastic");

    for window in [14, 50, 200].iter() {
        let data = generate_test_data(100000);

        group.bench_with_input(BenchmarkId::new("window", window), &data, |b, data| {
            let stoch = Stochastic::new(*window).unwrap();
            b.iter(|| stoch.calculate(black_box(data)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_moving_averages,
    benchmark_rsi,
    benchmark_multi_output,
    benchmark_stochastic
);
criterion_main!(benches);
