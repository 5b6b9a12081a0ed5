/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use iris_core::bit_depth::BitDepth;
use iris_core::colorspace::{ColorCharacteristics, ColorSpace};

#[test]
fn descriptors_serialize_by_name() {
    assert_eq!(serde_json::to_string(&ColorSpace::RGBA).unwrap(), "\"RGBA\"");
    assert_eq!(serde_json::to_string(&BitDepth::Eight).unwrap(), "\"Eight\"");
    assert_eq!(
        serde_json::to_string(&ColorCharacteristics::Linear).unwrap(),
        "\"Linear\""
    );
}

#[test]
fn decoded_descriptors_to_json() {
    let qoi = [
        b'q', b'o', b'i', b'f', 0, 0, 0, 1, 0, 0, 0, 1, 4, 1, // header
        0xFF, 1, 2, 3, 4, // rgba
        0, 0, 0, 0, 0, 0, 0, 1
    ];
    let mut decoder = iris_qoi::QoiDecoder::new(iris_core::bytestream::ByteCursor::new(&qoi));
    decoder.decode_headers().unwrap();

    let json = serde_json::json!({
        "colorspace": decoder.colorspace().unwrap(),
        "depth": decoder.bit_depth(),
        "characteristics": decoder.color_characteristics().unwrap()
    });
    assert_eq!(
        json.to_string(),
        r#"{"characteristics":"Linear","colorspace":"RGBA","depth":"Eight"}"#
    );
}
