use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::{error, info, warn};
use thiserror::Error;

use crate::image::format::{Image, PixelFormat};

#[derive(Error, Debug)]
pub enum PpmError {
    #[error("Cannot create pixmap file: {0}")]
    FileNotFound(io::Error),
    #[error("Pixel format {format:?} cannot be exported with {channels} channels")]
    IncompatibleFormat { format: PixelFormat, channels: u8 },
    #[error("Pixel buffer holds {actual} bytes but {required} are required")]
    BufferTooSmall { required: usize, actual: usize },

    #[error("I/O error while writing pixmap data")]
    Io(#[from] io::Error),
}

/// Exports an image as a binary PPM (`P6`).
///
/// Pixels are written in stored row order; the header's origin field is not
/// reinterpreted and no flip is applied. One-way: there is no PPM reader.
pub fn to_ppm<P: AsRef<Path>>(image: &Image, out_path: P) -> Result<(), PpmError> {
    let out_path = out_path.as_ref();
    let header = &image.header;

    // (R, G, B) byte positions within one stored pixel
    let rgb = match (header.format, header.channels) {
        (PixelFormat::Rgb, c) if c >= 3 => [0, 1, 2],
        (PixelFormat::Rgba, 4) => [0, 1, 2],
        (PixelFormat::Argb, 4) => [1, 2, 3],
        (format, channels) => {
            error!("Cannot export {format:?} with {channels} channels as PPM");
            return Err(PpmError::IncompatibleFormat { format, channels });
        }
    };

    if header.channels > 3 {
        warn!(".ppm files only support RGB format, ignoring other channels.");
    }

    let channels = usize::from(header.channels);
    let pixel_count = usize::from(header.width) * usize::from(header.height);
    let required = pixel_count * channels;
    if image.data.len() < required {
        error!(
            "Buffer holds {} bytes but {}x{}x{} needs {}",
            image.data.len(),
            header.width,
            header.height,
            header.channels,
            required
        );
        return Err(PpmError::BufferTooSmall {
            required,
            actual: image.data.len(),
        });
    }

    let stream = File::create(out_path).map_err(|e| {
        error!("Cannot create {}: {}", out_path.display(), e);
        PpmError::FileNotFound(e)
    })?;
    let mut out = BufWriter::new(stream);

    write!(out, "P6\n{} {}\n255\n", header.width, header.height)?;

    let mut payload = Vec::with_capacity(pixel_count * 3);
    for px in image.data[..required].chunks_exact(channels) {
        payload.push(px[rgb[0]]);
        payload.push(px[rgb[1]]);
        payload.push(px[rgb[2]]);
    }
    out.write_all(&payload)?;
    out.flush()?;

    info!(
        "Exported {}x{} pixmap to {}",
        header.width,
        header.height,
        out_path.display()
    );
    Ok(())
}
