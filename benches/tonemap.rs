use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use exrview_rs::image_pipeline::{
    DisplayBitmap, DisplayDecoder, DisplayEncoder, HdrImageData,
};

fn generate_hdr_image(width: usize, height: usize) -> HdrImageData {
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let base = ((x + y) % 64) as f32 * 0.25;
            data.push(base);
            data.push(base * 0.5);
            data.push(base * 2.0);
        }
    }
    HdrImageData { width, height, data }
}

fn benchmark_forward_tone_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward_tone_map");

    let sizes = vec![
        (100, 100, "100x100"),
        (500, 500, "500x500"),
        (1000, 1000, "1000x1000"),
    ];

    for (width, height, label) in sizes {
        let image = generate_hdr_image(width, height);

        group.bench_with_input(BenchmarkId::from_parameter(label), &image, |b, image| {
            let encoder = DisplayEncoder::new();
            b.iter(|| encoder.encode(black_box(image)));
        });
    }

    group.finish();
}

fn benchmark_inverse_tone_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse_tone_map");

    let sizes = vec![
        (100, 100, "100x100"),
        (500, 500, "500x500"),
        (1000, 1000, "1000x1000"),
    ];

    for (width, height, label) in sizes {
        let bitmap = DisplayEncoder::new().encode(&generate_hdr_image(width, height));

        group.bench_with_input(BenchmarkId::from_parameter(label), &bitmap, |b, bitmap: &DisplayBitmap| {
            let decoder = DisplayDecoder::new();
            b.iter(|| decoder.decode(black_box(bitmap)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_forward_tone_map, benchmark_inverse_tone_map);
criterion_main!(benches);
