use crate::image::decoder::DecodeError;

pub const MAGIC: [u8; 3] = *b"EBI";
pub const VERSION: u8 = 1;

/// Which corner of the image row 0 of the stored bytes represents.
///
/// Purely descriptive: the codec never reorders rows based on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Origin {
    #[default]
    TopLeft = 0,
    BottomLeft = 1,
}

impl Origin {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Origin::TopLeft),
            1 => Some(Origin::BottomLeft),
            _ => None,
        }
    }
}

/// Channel ordering of the bytes that make up one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum PixelFormat {
    #[default]
    Rgb = 0,
    Argb = 1,
    Rgba = 2,
}

impl PixelFormat {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(PixelFormat::Rgb),
            1 => Some(PixelFormat::Argb),
            2 => Some(PixelFormat::Rgba),
            _ => None,
        }
    }
}

/// The fixed 25-byte EBI file header.
///
/// All multi-byte fields are stored little endian. Construction never
/// cross-checks fields against each other; in particular `data_size` is not
/// required to equal `width * height * channels` (rows may carry padding).
/// Use [`Header::expected_data_size`] when you want the tightly packed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub magic: [u8; 4],
    pub origin: Origin,
    pub width: u16,
    pub height: u16,
    pub channels: u8,
    pub format: PixelFormat,
    pub data_size: u32,
    pub flags: u16,
    pub reserved: [u8; 8],
}

impl Header {
    pub const SIZE: usize = 25;

    /// Byte length of a tightly packed `width * height * channels` payload.
    pub fn expected_data_size(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height) * u64::from(self.channels)
    }

    /// Serializes the header field by field into its 25-byte disk layout.
    ///
    /// `magic` is written verbatim; the encoder stamps it before calling.
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut raw = [0u8; Self::SIZE];
        raw[0..4].copy_from_slice(&self.magic);
        raw[4] = self.origin as u8;
        raw[5..7].copy_from_slice(&self.width.to_le_bytes());
        raw[7..9].copy_from_slice(&self.height.to_le_bytes());
        raw[9] = self.channels;
        raw[10] = self.format as u8;
        raw[11..15].copy_from_slice(&self.data_size.to_le_bytes());
        raw[15..17].copy_from_slice(&self.flags.to_le_bytes());
        raw[17..25].copy_from_slice(&self.reserved);
        raw
    }

    /// Parses a 25-byte header record, rejecting anything that is not an
    /// exact signature and version match.
    pub fn from_bytes(raw: &[u8; Self::SIZE]) -> Result<Self, DecodeError> {
        if raw[0..3] != MAGIC || raw[3] != VERSION {
            return Err(DecodeError::InvalidHeader);
        }

        let origin = Origin::from_byte(raw[4]).ok_or(DecodeError::UnknownOrigin(raw[4]))?;
        let format = PixelFormat::from_byte(raw[10]).ok_or(DecodeError::UnknownFormat(raw[10]))?;

        let mut reserved = [0u8; 8];
        reserved.copy_from_slice(&raw[17..25]);

        Ok(Header {
            magic: [raw[0], raw[1], raw[2], raw[3]],
            origin,
            width: u16::from_le_bytes([raw[5], raw[6]]),
            height: u16::from_le_bytes([raw[7], raw[8]]),
            channels: raw[9],
            format,
            data_size: u32::from_le_bytes([raw[11], raw[12], raw[13], raw[14]]),
            flags: u16::from_le_bytes([raw[15], raw[16]]),
            reserved,
        })
    }
}

/// A decoded or caller-built image: header plus the exclusively owned pixel
/// buffer the header describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub header: Header,
    pub data: Vec<u8>,
}

impl Image {
    pub fn new(header: Header, data: Vec<u8>) -> Self {
        Self { header, data }
    }

    /// Allocates a zeroed image with a header consistent with the given
    /// dimensions. Returns `None` when `width * height * channels` does not
    /// fit the 32-bit `data_size` field.
    pub fn blank(width: u16, height: u16, channels: u8, format: PixelFormat) -> Option<Self> {
        let header = Header {
            magic: [MAGIC[0], MAGIC[1], MAGIC[2], VERSION],
            width,
            height,
            channels,
            format,
            ..Header::default()
        };
        let data_size = u32::try_from(header.expected_data_size()).ok()?;

        Some(Self {
            header: Header { data_size, ..header },
            data: vec![0; data_size as usize],
        })
    }
}
