use lib_ebi::{Image, PixelFormat};

/// 2x1 RGBA image: one opaque dark pixel, one fully transparent one.
pub const SAMPLE_RGBA: [u8; 8] = [10, 20, 30, 255, 40, 50, 60, 0];

pub fn sample_rgba_image() -> Image {
    let mut image = Image::blank(2, 1, 4, PixelFormat::Rgba).unwrap();
    image.data.copy_from_slice(&SAMPLE_RGBA);
    image
}

/// Deterministic non-repeating pixel data for round-trip checks.
pub fn gradient_image(width: u16, height: u16, channels: u8, format: PixelFormat) -> Image {
    let mut image = Image::blank(width, height, channels, format).unwrap();
    for (i, byte) in image.data.iter_mut().enumerate() {
        *byte = (i % 251) as u8;
    }
    image
}
