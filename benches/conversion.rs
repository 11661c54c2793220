//! Performance benchmarks for the number converter.
//!
//! Run with: cargo bench
//!
//! Every query runs on each keystroke, so it should stay well under a
//! millisecond.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nova_radix::{convert, handle_query, Encoding, Preferences};

/// Benchmark decoding literals of increasing length.
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    let inputs = [
        ("hex_short", Encoding::Hexadecimal, "ff"),
        ("hex_long", Encoding::Hexadecimal, "0x7fff_ffff_ffff_ffff_ffff_ffff"),
        ("dec_long", Encoding::Decimal, "170141183460469231731687303715884105727"),
        ("bin_long", Encoding::Binary, "0b1010101010101010101010101010101010101010"),
        ("invalid", Encoding::Hexadecimal, "zz"),
    ];

    for (name, encoding, input) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, input| {
            b.iter(|| black_box(encoding.decode(black_box(input))))
        });
    }

    group.finish();
}

/// Benchmark a full conversion into both targets.
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for source in Encoding::ALL {
        let input = source.encode(i128::MAX);
        group.bench_with_input(
            BenchmarkId::from_parameter(source.display_name()),
            &input,
            |b, input| b.iter(|| black_box(convert(black_box(input), source, &source.targets()))),
        );
    }

    group.finish();
}

/// Benchmark the host entry point, keyword lookup included.
fn bench_handle_query(c: &mut Criterion) {
    let prefs = Preferences::default();

    c.bench_function("handle_query", |b| {
        b.iter(|| black_box(handle_query(black_box("dec"), &prefs, Some("65535 trailing"))))
    });
}

criterion_group!(benches, bench_decode, bench_convert, bench_handle_query);
criterion_main!(benches);
