use crate::DecodeError;
use crate::plane_decs::*;

/// Supported chroma subsampling layouts of a planar 8 bit YUV frame
///
/// All formats store a full resolution Y plane followed by a U and a V plane, tightly packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SubsamplingFormat {
    /// 4:2:0, one chroma sample per 2x2 block of luma samples
    Yuv420,

    /// 4:2:2, one chroma sample per horizontal pair of luma samples
    Yuv422,

    /// 4:4:4, full resolution chroma
    Yuv444,
}

impl SubsamplingFormat {
    /// Map the format code used by the frame header
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(SubsamplingFormat::Yuv420),
            1 => Some(SubsamplingFormat::Yuv422),
            2 => Some(SubsamplingFormat::Yuv444),
            _ => None,
        }
    }

    /// The format code written into a frame header
    pub fn code(self) -> u32 {
        match self {
            SubsamplingFormat::Yuv420 => 0,
            SubsamplingFormat::Yuv422 => 1,
            SubsamplingFormat::Yuv444 => 2,
        }
    }

    /// Calculate the required buffer size for a single frame of the given dimensions
    pub fn buffer_size(self, width: u32, height: u32) -> Result<usize, DecodeError> {
        let [y, u, v] = self.plane_lens(width, height)?;

        y.checked_add(u)
            .and_then(|size| size.checked_add(v))
            .ok_or(DecodeError::FrameTooLarge { width, height })
    }

    /// Length in bytes of the Y, U and V plane
    pub fn plane_lens(self, width: u32, height: u32) -> Result<[usize; 3], DecodeError> {
        let frame_size = frame_size(width, height)?;

        Ok(self.plane_desc().map(|desc| desc.len(frame_size)))
    }

    /// Native width and height of the Y, U and V plane
    ///
    /// This is the geometry a plane has to be displayed with when visualizing it on its own.
    pub fn plane_dimensions(self, width: u32, height: u32) -> [(usize, usize); 3] {
        self.plane_desc()
            .map(|desc| desc.dimensions(width as usize, height as usize))
    }

    pub(crate) fn plane_desc(self) -> [PlaneDesc; 3] {
        match self {
            SubsamplingFormat::Yuv420 => YUV420_PLANES,
            SubsamplingFormat::Yuv422 => YUV422_PLANES,
            SubsamplingFormat::Yuv444 => YUV444_PLANES,
        }
    }

    /// Returns if the given dimensions divide evenly into this format's chroma grid
    pub fn is_aligned(self, width: u32, height: u32) -> bool {
        match self {
            SubsamplingFormat::Yuv420 => width % 2 == 0 && height % 2 == 0,
            SubsamplingFormat::Yuv422 => width % 2 == 0,
            SubsamplingFormat::Yuv444 => true,
        }
    }

    pub fn variants() -> impl IntoIterator<Item = Self> {
        use SubsamplingFormat::*;

        [Yuv420, Yuv422, Yuv444]
    }
}

/// Number of luma samples, rejecting empty and unaddressable frames
pub(crate) fn frame_size(width: u32, height: u32) -> Result<usize, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidDimensions { width, height });
    }

    (width as usize)
        .checked_mul(height as usize)
        .ok_or(DecodeError::FrameTooLarge { width, height })
}
