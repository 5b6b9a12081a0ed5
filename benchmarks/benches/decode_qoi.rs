/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use iris_benches::{sample_image, SIZE};
use iris_qoi::iris_core::bit_depth::BitDepth;
use iris_qoi::iris_core::bytestream::ByteCursor;
use iris_qoi::iris_core::colorspace::ColorSpace;
use iris_qoi::iris_core::options::EncoderOptions;

fn decode_rapid_qoi(data: &[u8]) -> Vec<u8> {
    rapid_qoi::Qoi::decode_alloc(data).unwrap().1
}

fn decode_iris_qoi(data: &[u8]) -> Vec<u8> {
    iris_qoi::QoiDecoder::new(ByteCursor::new(data))
        .decode()
        .unwrap()
}

fn bench_decode(c: &mut Criterion) {
    let pixels = sample_image();
    let options = EncoderOptions::new(SIZE, SIZE, ColorSpace::RGBA, BitDepth::Eight);
    let data = iris_qoi::QoiEncoder::new(&pixels, options)
        .encode_to_vec()
        .unwrap();

    let mut group = c.benchmark_group("qoi: Simple decode");

    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("rapid-qoi", |b| {
        b.iter(|| black_box(decode_rapid_qoi(data.as_slice())))
    });

    group.bench_function("iris-qoi", |b| {
        b.iter(|| black_box(decode_iris_qoi(data.as_slice())))
    });
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(20))
      };
    targets=bench_decode);

criterion_main!(benches);
