//! In-place operations on raw pixel buffers.
//!
//! These take the buffer plus explicit dimensions and never touch header or
//! codec state. Coordinates, channel counts and buffer lengths are all
//! validated up front; nothing is written on an error return.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PixelError {
    #[error("Pixel ({x}, {y}) is outside the {width}x{height} image")]
    OutOfBounds {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    },
    #[error("Unsupported channel count: {0}")]
    UnsupportedChannels(u8),
    #[error("Buffer holds {actual} bytes but {required} are required")]
    BufferTooSmall { required: usize, actual: usize },
}

fn packed_len(width: u16, height: u16, channels: u8) -> usize {
    usize::from(width) * usize::from(height) * usize::from(channels)
}

/// Writes one pixel at `(x, y)`. The alpha value is only stored for
/// 4-channel buffers; with 3 channels it is ignored.
pub fn set_pixel(
    data: &mut [u8],
    width: u16,
    height: u16,
    x: u16,
    y: u16,
    channels: u8,
    r: u8,
    g: u8,
    b: u8,
    a: u8,
) -> Result<(), PixelError> {
    if channels != 3 && channels != 4 {
        return Err(PixelError::UnsupportedChannels(channels));
    }
    if x >= width || y >= height {
        return Err(PixelError::OutOfBounds {
            x,
            y,
            width,
            height,
        });
    }

    let channels = usize::from(channels);
    let idx = (usize::from(y) * usize::from(width) + usize::from(x)) * channels;
    if idx + channels > data.len() {
        return Err(PixelError::BufferTooSmall {
            required: idx + channels,
            actual: data.len(),
        });
    }

    data[idx] = r;
    data[idx + 1] = g;
    data[idx + 2] = b;
    if channels == 4 {
        data[idx + 3] = a;
    }
    Ok(())
}

/// Fills every pixel with the same color, row major. Writes `r,g,b` per
/// pixel for 3-channel buffers and `r,g,b,a` for 4-channel ones.
pub fn fill_color(
    data: &mut [u8],
    width: u16,
    height: u16,
    channels: u8,
    r: u8,
    g: u8,
    b: u8,
    a: u8,
) -> Result<(), PixelError> {
    if channels != 3 && channels != 4 {
        return Err(PixelError::UnsupportedChannels(channels));
    }

    let required = packed_len(width, height, channels);
    if data.len() < required {
        return Err(PixelError::BufferTooSmall {
            required,
            actual: data.len(),
        });
    }

    let color = [r, g, b, a];
    let channels = usize::from(channels);
    for px in data[..required].chunks_exact_mut(channels) {
        px.copy_from_slice(&color[..channels]);
    }
    Ok(())
}

/// Reverses the row order in place. Applying it twice restores the buffer;
/// for odd heights the middle row stays put.
pub fn vertical_flip(
    data: &mut [u8],
    width: u16,
    height: u16,
    channels: u8,
) -> Result<(), PixelError> {
    if channels == 0 {
        return Err(PixelError::UnsupportedChannels(0));
    }

    let required = packed_len(width, height, channels);
    if data.len() < required {
        return Err(PixelError::BufferTooSmall {
            required,
            actual: data.len(),
        });
    }

    let row_size = usize::from(width) * usize::from(channels);
    let height = usize::from(height);

    for y in 0..height / 2 {
        let bottom = (height - 1 - y) * row_size;
        let (head, tail) = data.split_at_mut(bottom);
        head[y * row_size..(y + 1) * row_size].swap_with_slice(&mut tail[..row_size]);
    }
    Ok(())
}
