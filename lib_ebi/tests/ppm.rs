mod common;

use std::fs;

use common::{gradient_image, sample_rgba_image};
use lib_ebi::ppm::PpmError;
use lib_ebi::{to_ppm, Image, PixelFormat};
use tempfile::tempdir;

#[test]
fn test_export_rgba_example() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.ppm");

    to_ppm(&sample_rgba_image(), &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes, b"P6\n2 1\n255\n\x0a\x14\x1e\x28\x32\x3c");
}

#[test]
fn test_export_rgb_passthrough() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rgb.ppm");

    let mut image = Image::blank(1, 2, 3, PixelFormat::Rgb).unwrap();
    image.data.copy_from_slice(&[1, 2, 3, 4, 5, 6]);
    to_ppm(&image, &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes, b"P6\n1 2\n255\n\x01\x02\x03\x04\x05\x06");
}

#[test]
fn test_export_argb_drops_leading_alpha() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("argb.ppm");

    let mut image = Image::blank(2, 1, 4, PixelFormat::Argb).unwrap();
    image.data.copy_from_slice(&[255, 1, 2, 3, 0, 4, 5, 6]);
    to_ppm(&image, &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[bytes.len() - 6..], [1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_export_payload_byte_count() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("count.ppm");

    let image = gradient_image(7, 5, 4, PixelFormat::Rgba);
    to_ppm(&image, &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    let header = b"P6\n7 5\n255\n";
    assert_eq!(&bytes[..header.len()], header);
    assert_eq!(bytes.len() - header.len(), 7 * 5 * 3);
}

#[test]
fn test_export_rejects_incompatible_format() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.ppm");

    // RGBA claims four channels per pixel; three is not exportable
    let image = gradient_image(2, 2, 3, PixelFormat::Rgba);
    let err = to_ppm(&image, &path).unwrap_err();
    assert!(matches!(
        err,
        PpmError::IncompatibleFormat {
            format: PixelFormat::Rgba,
            channels: 3
        }
    ));

    let image = gradient_image(2, 2, 2, PixelFormat::Rgb);
    assert!(matches!(
        to_ppm(&image, &path),
        Err(PpmError::IncompatibleFormat { .. })
    ));
}

#[test]
fn test_export_rejects_short_buffer() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("short.ppm");

    let mut image = gradient_image(2, 2, 4, PixelFormat::Rgba);
    image.data.truncate(10);

    assert!(matches!(
        to_ppm(&image, &path),
        Err(PpmError::BufferTooSmall {
            required: 16,
            actual: 10
        })
    ));
}

#[test]
fn test_export_uses_stored_row_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rows.ppm");

    // 1x2 RGB: top row in storage order comes out first, no flip
    let mut image = Image::blank(1, 2, 3, PixelFormat::Rgb).unwrap();
    image.data.copy_from_slice(&[10, 11, 12, 20, 21, 22]);
    to_ppm(&image, &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[bytes.len() - 6..], [10, 11, 12, 20, 21, 22]);
}
