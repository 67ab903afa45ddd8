use crate::DecodeError;

/// Interleaved 8 bit output layouts
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RgbFormat {
    /// R, G, B
    RGB,

    /// R, G, B, A with A always 255
    #[default]
    RGBA,

    /// B, G, R
    BGR,

    /// B, G, R, A with A always 255
    BGRA,
}

impl RgbFormat {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            RgbFormat::RGB | RgbFormat::BGR => 3,
            RgbFormat::RGBA | RgbFormat::BGRA => 4,
        }
    }

    /// Calculate the required buffer size for an image of the given dimensions
    pub fn buffer_size(self, width: u32, height: u32) -> Result<usize, DecodeError> {
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(self.bytes_per_pixel()))
            .ok_or(DecodeError::FrameTooLarge { width, height })
    }

    pub(crate) fn is_reversed(self) -> bool {
        matches!(self, RgbFormat::BGR | RgbFormat::BGRA)
    }

    pub fn variants() -> impl IntoIterator<Item = Self> {
        use RgbFormat::*;

        [RGB, RGBA, BGR, BGRA]
    }
}

/// Owned, tightly packed, row-major RGB image produced by a conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    format: RgbFormat,
    width: u32,
    height: u32,
    buf: Vec<u8>,
}

impl RgbImage {
    pub(crate) fn new(format: RgbFormat, width: u32, height: u32, buf: Vec<u8>) -> Self {
        debug_assert_eq!(format.buffer_size(width, height).ok(), Some(buf.len()));

        Self {
            format,
            width,
            height,
            buf,
        }
    }

    pub fn format(&self) -> RgbFormat {
        self.format
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }

    /// Iterate over all pixels in row-major order, each item is `bytes_per_pixel` long
    pub fn pixels(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        self.buf.chunks_exact(self.format.bytes_per_pixel())
    }

    /// The pixel at the given column `x` and row `y`
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let bpp = self.format.bytes_per_pixel();
        let offset = (y as usize * self.width as usize + x as usize) * bpp;

        self.buf.get(offset..offset + bpp)
    }
}

/// Write a converted pixel into `px`, which is exactly one pixel of the output format long
#[inline(always)]
pub(crate) fn write_pixel<const REVERSE: bool, const ALPHA: bool>(px: &mut [u8], [r, g, b]: [u8; 3]) {
    if REVERSE {
        px[0] = b;
        px[2] = r;
    } else {
        px[0] = r;
        px[2] = b;
    }

    px[1] = g;

    if ALPHA {
        px[3] = u8::MAX;
    }
}
