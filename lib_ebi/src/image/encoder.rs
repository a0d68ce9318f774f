use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::{debug, error, info};
use thiserror::Error;

use super::format::{Image, MAGIC, VERSION};

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Cannot create image file: {0}")]
    FileNotFound(io::Error),
    #[error("Pixel buffer holds {actual} bytes but the header declares {declared}")]
    BufferTooSmall { declared: u32, actual: usize },

    #[error("I/O error while writing image data")]
    Io(#[from] io::Error),
}

/// Writes an image to disk as header record plus raw payload.
///
/// The header's magic and version bytes are stamped here; callers never need
/// to pre-fill them.
pub fn write<P: AsRef<Path>>(path: P, image: &mut Image) -> Result<(), EncodeError> {
    let path = path.as_ref();

    image.header.magic = [MAGIC[0], MAGIC[1], MAGIC[2], VERSION];
    let header = image.header;

    // Refuse to write a payload the buffer cannot back
    if image.data.len() < header.data_size as usize {
        error!(
            "Buffer holds {} bytes but data_size says {}",
            image.data.len(),
            header.data_size
        );
        return Err(EncodeError::BufferTooSmall {
            declared: header.data_size,
            actual: image.data.len(),
        });
    }

    let mut stream = File::create(path).map_err(|e| {
        error!("Cannot create {}: {}", path.display(), e);
        EncodeError::FileNotFound(e)
    })?;

    stream.write_all(&header.to_bytes())?;
    stream.write_all(&image.data[..header.data_size as usize])?;
    debug!("Header and {} payload bytes written", header.data_size);

    info!(
        "Wrote {}x{} image to {}",
        header.width,
        header.height,
        path.display()
    );
    Ok(())
}
