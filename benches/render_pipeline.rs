use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mandel_server::{
    Complex, ComplexRect, MandelbrotAlgorithm, MandelbrotKernel, RenderCache, RenderKernel,
    RenderParams, generate_fractal_parallel_rayon, generate_fractal_serial,
};

fn params(size: u32, max_iterations: u32) -> RenderParams {
    let region = ComplexRect::new(Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0))
        .expect("benchmark viewport is valid");
    RenderParams::new(size, size, max_iterations, region).expect("benchmark params are valid")
}

fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape_counts");

    for size in [64, 256, 512] {
        let params = params(size, 256);
        let algorithm = MandelbrotAlgorithm::new(&params);

        group.bench_with_input(BenchmarkId::new("serial", size), &size, |b, &size| {
            b.iter(|| generate_fractal_serial(size, size, black_box(&algorithm)))
        });
        group.bench_with_input(BenchmarkId::new("rayon", size), &size, |b, &size| {
            b.iter(|| generate_fractal_parallel_rayon(size, size, black_box(&algorithm)))
        });
    }

    group.finish();
}

fn bench_kernel(c: &mut Criterion) {
    let kernel = MandelbrotKernel::new();
    let params = params(256, 256);

    c.bench_function("kernel_render_256", |b| {
        b.iter(|| kernel.render(black_box(&params)))
    });
}

fn bench_cache_hit(c: &mut Criterion) {
    let cache = RenderCache::new(MandelbrotKernel::new());
    let params = params(256, 256);
    cache.get_or_compute(&params);

    c.bench_function("cache_hit_256", |b| {
        b.iter(|| cache.get_or_compute(black_box(&params)))
    });
}

criterion_group!(benches, bench_generators, bench_kernel, bench_cache_hit);
criterion_main!(benches);
