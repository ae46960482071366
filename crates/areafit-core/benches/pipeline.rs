//! Benchmarks for the areafit resize pipeline.
//!
//! Run with: cargo bench -p areafit-core

use areafit_core::config::{Config, ResizeConfig};
use areafit_core::pipeline::{proportional_dimensions, ImageResizer};
use areafit_core::{FileReference, ImageChecker};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{DynamicImage, RgbImage};

fn benchmark_dimensions(c: &mut Criterion) {
    c.bench_function("proportional_dimensions", |b| {
        b.iter(|| proportional_dimensions(black_box(4000), black_box(3000), black_box(750_000)))
    });
}

fn benchmark_resample(c: &mut Criterion) {
    let resizer = ImageResizer::new(ResizeConfig::default());
    let img = DynamicImage::new_rgb8(2000, 1500);

    c.bench_function("resample_2000x1500_to_1000x750", |b| {
        b.iter(|| resizer.resize(black_box(&img), 1000, 750))
    });
}

fn benchmark_classify(c: &mut Criterion) {
    let inputs = tempfile::tempdir().unwrap();
    let temp = tempfile::tempdir().unwrap();
    let path = inputs.path().join("big.png");
    RgbImage::from_fn(1600, 1200, |x, y| image::Rgb([x as u8, y as u8, 64]))
        .save(&path)
        .unwrap();

    let mut config = Config::default();
    config.output.temp_dir = Some(temp.path().to_path_buf());
    let checker = ImageChecker::new(&config);
    let original = FileReference::new(path);

    c.bench_function("classify_1600x1200_png", |b| {
        b.iter(|| checker.classify(black_box(&original), "big"))
    });
}

criterion_group!(
    benches,
    benchmark_dimensions,
    benchmark_resample,
    benchmark_classify
);
criterion_main!(benches);
