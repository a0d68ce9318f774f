use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use log::{debug, error, info};
use thiserror::Error;

use super::format::{Header, Image};

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Cannot open image file: {0}")]
    FileNotFound(io::Error),
    #[error("Unexpected end of file while reading the header")]
    TruncatedHeader,
    #[error("Invalid magic bytes or unsupported format version")]
    InvalidHeader,
    #[error("Unknown origin byte {0:#04x}")]
    UnknownOrigin(u8),
    #[error("Unknown pixel format byte {0:#04x}")]
    UnknownFormat(u8),
    #[error("Header declares a zero-length pixel payload")]
    EmptyPayload,
    #[error("Unexpected end of file while reading the pixel payload")]
    TruncatedPayload,

    #[error("I/O error while reading image data")]
    Io(#[from] io::Error),
}

/// Reads an EBI file back into a header and a freshly allocated pixel
/// buffer. Every failure is a hard stop; no partially filled image is ever
/// returned.
pub fn read<P: AsRef<Path>>(path: P) -> Result<Image, DecodeError> {
    let path = path.as_ref();

    let mut stream = File::open(path).map_err(|e| {
        error!("Cannot open {}: {}", path.display(), e);
        DecodeError::FileNotFound(e)
    })?;

    // Read and validate the fixed-size header record
    let mut raw = [0u8; Header::SIZE];
    stream.read_exact(&mut raw).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => {
            error!("File ends before the {}-byte header", Header::SIZE);
            DecodeError::TruncatedHeader
        }
        _ => DecodeError::Io(e),
    })?;

    let header = Header::from_bytes(&raw).map_err(|e| {
        error!("Rejected header of {}: {}", path.display(), e);
        e
    })?;
    debug!(
        "Header parsed: width={} height={} channels={} format={:?}",
        header.width, header.height, header.channels, header.format
    );

    // An image with no payload is not representable
    if header.data_size == 0 {
        error!("Header declares data_size == 0");
        return Err(DecodeError::EmptyPayload);
    }

    // Read exactly data_size payload bytes into a fresh buffer
    let mut data = vec![0u8; header.data_size as usize];
    stream.read_exact(&mut data).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => {
            error!("File ends before {} payload bytes", header.data_size);
            DecodeError::TruncatedPayload
        }
        _ => DecodeError::Io(e),
    })?;

    info!(
        "Decoded {}x{} image with {} bytes of pixel data",
        header.width, header.height, header.data_size
    );
    Ok(Image::new(header, data))
}
