//! Benchmarks for filter design and batch convolution.
//!
//! Run with: cargo bench -p firvec-core --bench design_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use firvec_core::{FilterDesign, FilterSpec, FirFilter, FixedPointQuantizer, SignalSource, Tone};

fn reference_spec() -> FilterSpec {
    FilterSpec {
        sample_rate: 100e6,
        transition_width_hz: 20e6,
        stopband_attenuation_db: 60.0,
        cutoff_hz: 35e6,
    }
}

fn bench_design(c: &mut Criterion) {
    let mut group = c.benchmark_group("kaiser_design");

    for &atten in &[40.0, 60.0, 80.0, 100.0] {
        let spec = FilterSpec {
            stopband_attenuation_db: atten,
            ..reference_spec()
        };
        group.bench_with_input(BenchmarkId::new("attenuation_db", atten as u32), &spec, |b, s| {
            b.iter(|| FilterDesign::kaiser_lowpass(black_box(s)).unwrap());
        });
    }

    group.finish();
}

fn bench_convolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("fir_apply");

    let design = FilterDesign::kaiser_lowpass(&reference_spec()).unwrap();
    let filter = FirFilter::from_design(&design);
    let source = SignalSource::new(
        vec![Tone::new(10e6, 1.0), Tone::new(40e6, 1.0)],
        100e6,
    )
    .unwrap();

    for &len in &[1_000usize, 10_000, 100_000] {
        let signal = source.generate(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("samples", len), &signal, |b, sig| {
            b.iter(|| filter.apply(black_box(sig)).unwrap());
        });
    }

    group.finish();
}

fn bench_quantize(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantize");

    let source = SignalSource::new(
        vec![Tone::new(10e6, 1.0), Tone::new(40e6, 1.0)],
        100e6,
    )
    .unwrap();
    let signal = source.generate(100_000);
    let q = FixedPointQuantizer::new(23);

    group.throughput(Throughput::Elements(signal.len() as u64));
    group.bench_function("samples_23bit", |b| {
        b.iter(|| q.quantize(black_box(&signal)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_design, bench_convolution, bench_quantize);
criterion_main!(benches);
