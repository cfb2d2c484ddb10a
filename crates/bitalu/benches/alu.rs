//! Benchmarks for the bitwise ALU.
//!
//! Measures:
//! - Carry propagate addition vs native add, by carry chain length
//! - Derived operations (sub, mul, div_rem, isqrt, log)
//! - Representation conversions and bit-sequence reading

use bitalu::alu::{AluOps, CarryPropagateAdder, NativeBits};
use bitalu::{bits, repr};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// =============================================================================
// Addition
// =============================================================================

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("alu_add");
    group.throughput(Throughput::Elements(1));

    let p = NativeBits;

    // Labelled by carry rounds, which grow with the length of the carry chain
    for (a, b) in [
        (0xF0F0_F0F0u32, 0x0F0F_0F0Fu32),
        (0x0000_00FF, 0x0000_0001),
        (0x0000_FFFF, 0x0000_0001),
        (u32::MAX, 1),
    ] {
        let rounds = CarryPropagateAdder::rounds(&p, a, b);
        let label = format!("{rounds}_rounds");
        group.bench_with_input(BenchmarkId::new("bitwise", &label), &(a, b), |bench, &(a, b)| {
            bench.iter(|| black_box(p.add(black_box(a), black_box(b))));
        });
        group.bench_with_input(BenchmarkId::new("native", &label), &(a, b), |bench, &(a, b)| {
            bench.iter(|| black_box(black_box(a).wrapping_add(black_box(b))));
        });
    }

    group.finish();
}

// =============================================================================
// Derived Operations
// =============================================================================

fn bench_derived(c: &mut Criterion) {
    let mut group = c.benchmark_group("alu_derived");
    group.throughput(Throughput::Elements(1));

    let p = NativeBits;

    group.bench_function("sub", |b| {
        b.iter(|| black_box(p.sub(black_box(0xDEAD_BEEF), black_box(0xCAFE_BABE))));
    });

    group.bench_function("mul", |b| {
        b.iter(|| black_box(p.mul(black_box(0xDEAD_BEEF), black_box(0x0001_2345))));
    });

    group.bench_function("div_rem", |b| {
        b.iter(|| black_box(p.div_rem(black_box(0xDEAD_BEEF), black_box(7))));
    });

    group.bench_function("isqrt", |b| {
        b.iter(|| black_box(p.isqrt(black_box(0xDEAD_BEEF))));
    });

    group.bench_function("log10", |b| {
        b.iter(|| black_box(p.log(black_box(0xDEAD_BEEF), black_box(10))));
    });

    group.bench_function("log2", |b| {
        b.iter(|| black_box(p.log2(black_box(0xDEAD_BEEF))));
    });

    group.finish();
}

// =============================================================================
// Conversions and Bit Reading
// =============================================================================

fn bench_repr(c: &mut Criterion) {
    let mut group = c.benchmark_group("repr");
    group.throughput(Throughput::Elements(1));

    group.bench_function("twos_to_signed_magnitude", |b| {
        b.iter(|| black_box(repr::twos_complement_to_signed_magnitude(black_box(0xFFFF_FFF6))));
    });

    group.bench_function("signed_magnitude_to_twos", |b| {
        b.iter(|| black_box(repr::signed_magnitude_to_twos_complement(black_box(0x8000_000A))));
    });

    group.finish();
}

fn bench_bits(c: &mut Criterion) {
    let mut group = c.benchmark_group("bits");
    let buffer: Vec<u8> = (0..=255).collect();
    group.throughput(Throughput::Elements((buffer.len() * 8) as u64));

    for reverse in [false, true] {
        group.bench_with_input(
            BenchmarkId::new("read_all", if reverse { "reverse" } else { "forward" }),
            &reverse,
            |b, &reverse| {
                b.iter(|| {
                    let ones = bits::read(black_box(&buffer), 0, 0, buffer.len() * 8, reverse)
                        .map(|seq| seq.filter(|&bit| bit).count());
                    black_box(ones)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_add, bench_derived, bench_repr, bench_bits);
criterion_main!(benches);
