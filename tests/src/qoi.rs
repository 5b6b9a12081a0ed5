/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use iris_core::bit_depth::BitDepth;
use iris_core::bytestream::ByteCursor;
use iris_core::colorspace::ColorSpace;
use iris_core::options::{DecoderOptions, EncoderOptions};
use iris_qoi::header::QoiHeader;
use iris_qoi::{QoiDecoder, QoiEncoder};
use rapid_qoi::{Colors, Qoi};

use crate::{read_entries, TestEntry};

fn encode(entry: &TestEntry, pixels: &[u8]) -> Vec<u8> {
    let options = EncoderOptions::new(
        entry.width as usize,
        entry.height as usize,
        entry.colorspace.to_colorspace(),
        BitDepth::Eight
    );
    QoiEncoder::new(pixels, options).encode_to_vec().unwrap()
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_qoi_round_trip() {
    let mut error = false;
    let mut files = Vec::new();

    for entry in &read_entries() {
        let pixels = entry.pixels();
        let encoded = encode(entry, &pixels);

        let mut decoder = QoiDecoder::new(ByteCursor::new(&encoded));
        let decoded = decoder.decode().unwrap();

        assert_eq!(
            decoder.dimensions(),
            Some((entry.width as usize, entry.height as usize))
        );
        if decoded != pixels {
            error = true;
            files.push(entry.to_owned());
            eprintln!("Round trip mismatch for {}\nConfig:{:#?}", entry.name, entry);
        }
    }
    if error {
        panic!("Errors found during round trip\n {:#?}", files);
    }
}

#[test]
fn rapid_qoi_decodes_our_output() {
    for entry in &read_entries() {
        let pixels = entry.pixels();
        let encoded = encode(entry, &pixels);

        let (header, decoded) = Qoi::decode_alloc(&encoded).unwrap();

        assert_eq!((header.width, header.height), (entry.width, entry.height), "{}", entry.name);
        assert_eq!(decoded, pixels, "{}", entry.name);
    }
}

#[test]
fn we_decode_rapid_qoi_output() {
    for entry in &read_entries() {
        let pixels = entry.pixels();
        let colors = match entry.colorspace.to_colorspace() {
            ColorSpace::RGBA => Colors::Rgba,
            _ => Colors::Rgb
        };
        let qoi = Qoi {
            width: entry.width,
            height: entry.height,
            colors
        };
        let encoded = qoi.encode_alloc(&pixels).unwrap();

        let decoded = iris_qoi::decode(&encoded).unwrap();
        assert_eq!(decoded.pixels(), &pixels[..], "{}", entry.name);
    }
}

#[test]
fn compression_never_exceeds_worst_case() {
    for entry in &read_entries() {
        let pixels = entry.pixels();
        let options = EncoderOptions::new(
            entry.width as usize,
            entry.height as usize,
            entry.colorspace.to_colorspace(),
            BitDepth::Eight
        );
        let mut encoder = QoiEncoder::new(&pixels, options);
        let encoded = encoder.encode_to_vec().unwrap();

        assert!(encoded.len() <= encoder.max_size(), "{}", entry.name);
    }
}

#[test]
fn flat_image_is_all_runs() {
    let entry = read_entries()
        .into_iter()
        .find(|entry| entry.name == "flat_rgb")
        .unwrap();
    let encoded = encode(&entry, &entry.pixels());

    // one rgb chunk, then 4095 repeats in 62 pixel runs
    let runs = (4095 + 61) / 62;
    assert_eq!(encoded.len(), 14 + 4 + runs + 8);
}

#[test]
fn rgb_file_decoded_as_rgba() {
    let entry = read_entries()
        .into_iter()
        .find(|entry| entry.name == "gradient_rgb")
        .unwrap();
    let pixels = entry.pixels();
    let encoded = encode(&entry, &pixels);

    let options = DecoderOptions::default().set_out_colorspace(ColorSpace::RGBA);
    let expanded = QoiDecoder::new_with_options(ByteCursor::new(&encoded), options)
        .decode()
        .unwrap();

    let expected: Vec<u8> = pixels
        .chunks_exact(3)
        .flat_map(|px| [px[0], px[1], px[2], 255])
        .collect();
    assert_eq!(expanded, expected);
}

#[test]
fn header_helpers_agree_with_encoder() {
    let entry = &read_entries()[0];
    let encoded = encode(entry, &entry.pixels());

    let header = QoiHeader::decode(&encoded).unwrap();
    assert_eq!((header.width, header.height), (entry.width, entry.height));
    assert_eq!(header.to_bytes(), encoded[..14]);
}

#[test]
fn file_sink_and_std_cursor_source() {
    use std::fs::File;
    use std::io::{BufWriter, Cursor};

    let entry = read_entries()
        .into_iter()
        .find(|entry| entry.name == "stripes_rgba")
        .unwrap();
    let pixels = entry.pixels();
    let options = EncoderOptions::new(
        entry.width as usize,
        entry.height as usize,
        entry.colorspace.to_colorspace(),
        BitDepth::Eight
    );
    let path = std::env::temp_dir().join(format!("iris-qoi-{}.qoi", std::process::id()));

    let written = {
        let mut sink = BufWriter::new(File::create(&path).unwrap());
        QoiEncoder::new(&pixels, options).encode(&mut sink).unwrap()
    };
    let on_disk = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(written, on_disk.len());
    assert_eq!(on_disk, encode(&entry, &pixels));

    let decoded = QoiDecoder::new(Cursor::new(on_disk)).decode().unwrap();
    assert_eq!(decoded, pixels);
}
