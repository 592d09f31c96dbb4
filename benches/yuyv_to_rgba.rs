use criterion::{Criterion, criterion_group, criterion_main};

use std::hint::black_box;
use yuyv_rgba::{Image, PixelFormat, convert, convert_yuyv_to_rgba};

const IMAGE_WIDTH: usize = 1920;
const IMAGE_HEIGHT: usize = 1080;

fn do_convert(src: &Image<Vec<u8>>, dst: &mut Image<Vec<u8>>) {
    convert(black_box(src), black_box(dst)).unwrap();
}

#[cfg(feature = "multi-thread")]
fn do_convert_multi_thread(src: &Image<Vec<u8>>, dst: &mut Image<Vec<u8>>) {
    use yuyv_rgba::convert_multi_thread;

    convert_multi_thread(black_box(src), black_box(dst)).unwrap();
}

type ConvertFunction = fn(&Image<Vec<u8>>, &mut Image<Vec<u8>>);

fn run_benchmarks(c: &mut Criterion, do_convert: ConvertFunction, s: &str) {
    let yuyv = Image::blank(PixelFormat::YUYV, IMAGE_WIDTH, IMAGE_HEIGHT).unwrap();
    let mut rgba = Image::blank(PixelFormat::RGBA, IMAGE_WIDTH, IMAGE_HEIGHT).unwrap();

    c.bench_function(&format!("YUYV to RGBA {s}"), |b| {
        b.iter(|| {
            do_convert(&yuyv, &mut rgba);
        })
    });

    let mut padded = Image::from_buffer(
        PixelFormat::RGBA,
        vec![0u8; (IMAGE_WIDTH + 64) * 4 * IMAGE_HEIGHT],
        Some((IMAGE_WIDTH + 64) * 4),
        IMAGE_WIDTH,
        IMAGE_HEIGHT,
    )
    .unwrap();

    c.bench_function(&format!("YUYV to padded RGBA {s}"), |b| {
        b.iter(|| {
            do_convert(&yuyv, &mut padded);
        })
    });
}

fn single_threaded(c: &mut Criterion) {
    run_benchmarks(c, do_convert, "single threaded");

    let yuyv = vec![128u8; IMAGE_WIDTH * IMAGE_HEIGHT * 2];
    let mut rgba = vec![0u8; IMAGE_WIDTH * IMAGE_HEIGHT * 4];

    c.bench_function("YUYV to RGBA slices", |b| {
        b.iter(|| {
            convert_yuyv_to_rgba(black_box(&yuyv), black_box(&mut rgba), IMAGE_WIDTH, IMAGE_WIDTH)
                .unwrap();
        })
    });
}

#[cfg(feature = "multi-thread")]
fn multi_threaded(c: &mut Criterion) {
    run_benchmarks(c, do_convert_multi_thread, "multi threaded")
}

#[cfg(feature = "multi-thread")]
criterion_group!(img, single_threaded, multi_threaded);

#[cfg(not(feature = "multi-thread"))]
criterion_group!(img, single_threaded);

criterion_main!(img);
