#![no_main]

use iris_qoi::iris_core::bytestream::ByteCursor;
use iris_qoi::iris_core::options::DecoderOptions;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let options = DecoderOptions::default()
        .set_max_width(1 << 10)
        .set_max_height(1 << 10);
    let mut decoder = iris_qoi::QoiDecoder::new_with_options(ByteCursor::new(data), options);
    let _ = decoder.decode();
});
