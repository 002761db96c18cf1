//! Benchmarks for tonelift-core pipeline operations
//!
//! Run with: cargo bench -p tonelift-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tonelift_core::color::rgb_to_lab_buffer;
use tonelift_core::equalize::equalize_lightness;
use tonelift_core::models::PixelBuffer;
use tonelift_core::pipeline::correct_image;
use tonelift_core::CorrectionConfig;

/// Generate synthetic RGB test data with smooth gradients
fn generate_test_rgb(width: u32, height: u32) -> PixelBuffer {
    let pixel_count = (width * height) as usize;
    let mut data = Vec::with_capacity(pixel_count * 3);

    for i in 0..pixel_count {
        let x = (i % width as usize) as f32 / width as f32;
        let y = (i / width as usize) as f32 / height as f32;

        data.push((x * 255.0) as u8);
        data.push((y * 255.0) as u8);
        data.push(((x + y) * 127.5) as u8);
    }

    PixelBuffer::new(width, height, 3, data).unwrap()
}

/// Generate a synthetic lightness plane
fn generate_test_plane(width: u32, height: u32) -> Vec<u8> {
    (0..(width * height) as usize)
        .map(|i| ((i * 131 + 17) % 256) as u8)
        .collect()
}

/// Benchmark local equalization of a lightness plane
fn bench_equalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("equalize");
    let config = CorrectionConfig::default();

    for size in [256, 512, 1024, 2048].iter() {
        let width = *size;
        let height = *size;
        let pixel_count = (width * height) as u64;

        group.throughput(Throughput::Elements(pixel_count));

        group.bench_with_input(
            BenchmarkId::new("equalize_lightness", format!("{}x{}", width, height)),
            &(width, height),
            |b, &(w, h)| {
                let plane = generate_test_plane(w, h);
                b.iter(|| {
                    equalize_lightness(black_box(&plane), w, h, black_box(&config)).unwrap()
                });
            },
        );
    }

    group.finish();
}

/// Benchmark color space conversion
fn bench_color_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("color_conversion");

    for size in [256, 512, 1024].iter() {
        let width = *size;
        let height = *size;
        let pixel_count = (width * height) as u64;

        group.throughput(Throughput::Elements(pixel_count));

        group.bench_with_input(
            BenchmarkId::new("rgb_to_lab", format!("{}x{}", width, height)),
            &(width, height),
            |b, &(w, h)| {
                let buffer = generate_test_rgb(w, h);
                b.iter(|| rgb_to_lab_buffer(black_box(&buffer)).unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark the full correction pipeline
fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let config = CorrectionConfig::default();

    for size in [256, 512, 1024].iter() {
        let width = *size;
        let height = *size;
        let pixel_count = (width * height) as u64;

        group.throughput(Throughput::Elements(pixel_count));

        group.bench_with_input(
            BenchmarkId::new("correct_image", format!("{}x{}", width, height)),
            &(width, height),
            |b, &(w, h)| {
                let buffer = generate_test_rgb(w, h);
                b.iter(|| correct_image(black_box(&buffer), black_box(&config)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_equalize,
    bench_color_conversion,
    bench_full_pipeline
);
criterion_main!(benches);
