//! Performance benchmarks for FastSynteny
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fast_synteny::core::{Anchor, ChainConfig, Chainer, Interleave};
use fast_synteny::formats::parse_anchor_bytes;

/// Deterministic noisy diagonal block of `n` anchors
fn synthetic_block(n: usize) -> Vec<Anchor> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    (0..n)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let jitter = (state % 9) as usize;
            Anchor::new(i, i * 2 + jitter, (state % 400) as f64)
        })
        .collect()
}

/// Benchmark chaining a single block against the window size
fn bench_chain_window(c: &mut Criterion) {
    let block = synthetic_block(2000);
    let mut group = c.benchmark_group("chain_window");
    group.throughput(Throughput::Elements(block.len() as u64));

    for window in [10usize, 50, 200] {
        let chainer = Chainer::new(ChainConfig::with_window(window));
        group.bench_with_input(BenchmarkId::from_parameter(window), &block, |b, block| {
            b.iter(|| black_box(chainer.best_chain(black_box(block))))
        });
    }

    group.finish();
}

/// Benchmark chaining against the block size
fn bench_chain_block_size(c: &mut Criterion) {
    let chainer = Chainer::default();
    let mut group = c.benchmark_group("chain_block_size");

    for size in [100usize, 1000, 10000] {
        let block = synthetic_block(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &block, |b, block| {
            b.iter(|| black_box(chainer.best_chain(black_box(block))))
        });
    }

    group.finish();
}

/// Benchmark ancestral interleaving of a chained block
fn bench_interleave(c: &mut Criterion) {
    let chain = Chainer::default().best_chain(&synthetic_block(5000));
    let pairs = chain.rank_pairs();

    c.bench_function("interleave_chain", |b| {
        b.iter(|| {
            let order = Interleave::new(black_box(&pairs)).unwrap();
            black_box(order.sum::<usize>())
        })
    });
}

/// Benchmark anchor file parsing
fn bench_anchor_parsing(c: &mut Criterion) {
    let mut text = String::new();
    for block in 0..100 {
        text.push_str("###\n");
        for i in 0..100 {
            text.push_str(&format!("Os{:02}g{:05}\tSb{:02}g{:05}\t{}L\n", block, i, block, i * 2, 50 + i));
        }
    }
    let data = text.into_bytes();

    let mut group = c.benchmark_group("anchor_parsing");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("parse_10k_anchors", |b| {
        b.iter(|| black_box(parse_anchor_bytes(black_box(&data)).unwrap()))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_chain_window,
    bench_chain_block_size,
    bench_interleave,
    bench_anchor_parsing,
);

criterion_main!(benches);
