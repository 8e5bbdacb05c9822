//! Benchmarks for the sixbox pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sixbox::catalog::icon_set_name;
use sixbox::types::{Classification, Insets, Pixel, PixelBuffer};
use sixbox::{emit_declaration, GridSnapper, IconSlice, InsetDetector, PackKind};

/// Square sheet with an opaque block `margin` pixels in from every edge.
fn framed(size: u32, margin: u32) -> PixelBuffer {
    PixelBuffer::from_fn(size, size, |x, y| {
        if x >= margin && y >= margin && x < size - margin && y < size - margin {
            Pixel::BLACK
        } else {
            Pixel::TRANSPARENT
        }
    })
}

// -- Measurement benchmarks --

fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure");
    let detector = InsetDetector::default();

    // 6x reference page of a 12pt icon
    let small = framed(72, 12);
    // 6x page of a wide text button
    let large = framed(600, 96);
    let blank = PixelBuffer::filled(600, 600, Pixel::TRANSPARENT);

    group.bench_function("insets_small", |b| {
        b.iter(|| detector.detect(black_box(&small)))
    });

    group.bench_function("insets_large", |b| {
        b.iter(|| detector.detect(black_box(&large)))
    });

    group.bench_function("insets_blank", |b| {
        b.iter(|| detector.detect(black_box(&blank)))
    });

    group.finish();
}

// -- Slicing and emission benchmarks --

fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit");
    let snapper = GridSnapper::default();

    group.bench_function("slice", |b| {
        b.iter(|| {
            snapper
                .slice("bench", black_box(600), black_box(600), Insets::new(97, 95, 96, 98))
                .unwrap()
        })
    });

    let slices: Vec<IconSlice> = Classification::ALL
        .into_iter()
        .map(|c| {
            let sixbox = snapper
                .slice("bench", 72, 72, Insets::new(12, 12, 12, 12))
                .unwrap();
            IconSlice::new(icon_set_name("text_button", "add_points", c), c, sixbox)
        })
        .collect();

    group.bench_function("declaration", |b| {
        b.iter(|| {
            emit_declaration(PackKind::TextButton, "add_points", black_box(&slices)).unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_measure, bench_emit);
criterion_main!(benches);
