use crate::SubsamplingFormat;

/// Size of the fixed frame header in bytes
pub const HEADER_SIZE: usize = 12;

/// Geometry and format prefixed to a raw frame
///
/// Layout, all fields little endian:
///
/// | offset | field  |
/// |--------|--------|
/// | 0      | width (u32) |
/// | 4      | height (u32) |
/// | 8      | format code (u32), 0 = 4:2:0, 1 = 4:2:2, 2 = 4:4:4 |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub width: u32,
    pub height: u32,
    pub format: SubsamplingFormat,

    /// Number of bytes to skip to reach the Y plane
    pub header_size: usize,
}

/// Error returned by [`parse_header`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    #[error("header requires {HEADER_SIZE} bytes, but got only {got}")]
    TooShort { got: usize },

    #[error("unknown format code {0}")]
    UnknownFormat(u32),
}

/// Parse the 12 byte frame header at the start of `buf`
///
/// Dimensions are not validated here, zero sized frames are rejected once the planes are split.
pub fn parse_header(buf: &[u8]) -> Result<FrameHeader, HeaderError> {
    let Some(header) = buf.first_chunk::<HEADER_SIZE>() else {
        return Err(HeaderError::TooShort { got: buf.len() });
    };

    let width = read_u32_le(header, 0);
    let height = read_u32_le(header, 4);
    let code = read_u32_le(header, 8);

    let format = SubsamplingFormat::from_code(code).ok_or(HeaderError::UnknownFormat(code))?;

    Ok(FrameHeader {
        width,
        height,
        format,
        header_size: HEADER_SIZE,
    })
}

impl FrameHeader {
    pub fn new(width: u32, height: u32, format: SubsamplingFormat) -> Self {
        Self {
            width,
            height,
            format,
            header_size: HEADER_SIZE,
        }
    }

    /// Serialize the header, the result can be read back with [`parse_header`]
    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];

        out[0..4].copy_from_slice(&self.width.to_le_bytes());
        out[4..8].copy_from_slice(&self.height.to_le_bytes());
        out[8..12].copy_from_slice(&self.format.code().to_le_bytes());

        out
    }
}

fn read_u32_le(header: &[u8; HEADER_SIZE], offset: usize) -> u32 {
    u32::from_le_bytes([
        header[offset],
        header[offset + 1],
        header[offset + 2],
        header[offset + 3],
    ])
}
