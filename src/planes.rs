use crate::{DecodeError, SubsamplingFormat};

/// Read-only views of the Y, U and V plane of a single frame
///
/// The views borrow the buffer they were split from, nothing is copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Planes<'a> {
    pub y: &'a [u8],
    pub u: &'a [u8],
    pub v: &'a [u8],
}

impl<'a> Planes<'a> {
    /// Wrap planes which are already stored separately
    ///
    /// No sizes are checked here, inconsistent planes are reported by the conversion.
    pub fn from_slices(y: &'a [u8], u: &'a [u8], v: &'a [u8]) -> Self {
        Self { y, u, v }
    }

    /// Total number of bytes covered by all three planes
    pub fn len(&self) -> usize {
        self.y.len() + self.u.len() + self.v.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn to_array(self) -> [&'a [u8]; 3] {
        [self.y, self.u, self.v]
    }
}

/// Split a tightly packed frame buffer into its Y, U and V plane
///
/// Bytes after the V plane are ignored. Odd dimensions for subsampled formats are accepted,
/// the chroma plane lengths are truncated (e.g. a 3x3 4:2:0 frame has 2 byte chroma planes).
pub fn decode(
    buf: &[u8],
    width: u32,
    height: u32,
    format: SubsamplingFormat,
) -> Result<Planes<'_>, DecodeError> {
    let lens = format.plane_lens(width, height)?;
    let expected = format.buffer_size(width, height)?;

    if buf.len() < expected {
        return Err(DecodeError::BufferTooShort {
            expected,
            got: buf.len(),
        });
    }

    if !format.is_aligned(width, height) {
        log::warn!(
            "{width}x{height} is not aligned to the {format:?} chroma grid, chroma planes are truncated"
        );
    }

    let mut rem = buf;
    let mut out: [&[u8]; 3] = [&[]; 3];

    for (len, out) in lens.into_iter().zip(out.iter_mut()) {
        let (plane, next) = rem.split_at(len);

        *out = plane;
        rem = next;
    }

    let [y, u, v] = out;

    log::trace!(
        "split {format:?} frame {width}x{height}: y=0..{}, u={}..{}, v={}..{}",
        y.len(),
        y.len(),
        y.len() + u.len(),
        y.len() + u.len(),
        expected
    );

    Ok(Planes { y, u, v })
}
