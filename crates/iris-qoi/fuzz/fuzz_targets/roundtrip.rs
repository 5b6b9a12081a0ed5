#![no_main]

use iris_qoi::header::{QoiChannels, QoiColorspace};
use iris_qoi::Image;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // first byte picks the layout, the rest are pixels
    let channels = if data[0] & 1 == 0 { QoiChannels::Rgb } else { QoiChannels::Rgba };
    let pixels = &data[1..];
    let width = (pixels.len() / channels.num_components()).min(1 << 14);
    let pixels = pixels[..width * channels.num_components()].to_vec();

    let image = Image::new(pixels, width as u32, 1, channels, QoiColorspace::sRGB).unwrap();
    let encoded = iris_qoi::encode(&image).unwrap();
    assert_eq!(iris_qoi::decode(&encoded).unwrap(), image);
});
