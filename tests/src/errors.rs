/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use iris_core::bit_depth::BitDepth;
use iris_core::colorspace::ColorSpace;
use iris_core::options::EncoderOptions;
use iris_qoi::{QoiEncoder, QoiErrorKind, QoiErrors};

use nanorand::{Rng, WyRand};

fn valid_file() -> Vec<u8> {
    let pixels: Vec<u8> = (0..16 * 16 * 4).map(|i| (i / 5) as u8).collect();
    let options = EncoderOptions::new(16, 16, ColorSpace::RGBA, BitDepth::Eight);
    QoiEncoder::new(&pixels, options).encode_to_vec().unwrap()
}

#[test]
fn every_truncation_is_an_input_error() {
    let file = valid_file();

    for len in 0..file.len() {
        let err = iris_qoi::decode(&file[..len]).unwrap_err();
        assert!(err.is_invalid_input(), "length {len}: {err:?}");
    }
}

#[test]
fn truncation_kinds() {
    let file = valid_file();

    assert_eq!(
        iris_qoi::decode(&file[..10]).unwrap_err().kind(),
        QoiErrorKind::InvalidHeader
    );
    assert_eq!(
        iris_qoi::decode(&file[..file.len() - 3]).unwrap_err().kind(),
        QoiErrorKind::InvalidEndMarker
    );
}

#[test]
fn random_bytes_never_panic() {
    let mut rng = WyRand::new_seed(7);
    let header = &valid_file()[..14];

    for _ in 0..500 {
        let len = rng.generate_range(0_usize..512);
        let mut data = header.to_vec();
        data.resize(header.len() + len, 0);
        rng.fill(&mut data[header.len()..]);

        if let Err(err) = iris_qoi::decode(&data) {
            assert!(err.is_invalid_input(), "{err:?}");
        }
    }
}

#[test]
fn errors_display() {
    let err = iris_qoi::decode(b"qoix\0\0\0\x01\0\0\0\x01\x03\0").unwrap_err();
    assert!(matches!(err, QoiErrors::WrongMagicBytes));
    assert!(!format!("{err}").is_empty());

    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(!boxed.to_string().is_empty());
}
