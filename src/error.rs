use crate::HeaderError;
use std::fmt;

/// Identifies one of the three planes of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaneKind {
    Y,
    U,
    V,
}

impl fmt::Display for PlaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaneKind::Y => f.write_str("Y"),
            PlaneKind::U => f.write_str("U"),
            PlaneKind::V => f.write_str("V"),
        }
    }
}

/// Everything that can go wrong when splitting or converting a frame
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("width or height must not be zero, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("a frame of {width}x{height} does not fit into the address space")]
    FrameTooLarge { width: u32, height: u32 },

    #[error("buffer too short, expected at least {expected} bytes but got {got}")]
    BufferTooShort { expected: usize, got: usize },

    #[error("index {index} is out of range for the {plane} plane of length {len}")]
    PlaneIndexOutOfRange {
        plane: PlaneKind,
        index: usize,
        len: usize,
    },

    #[error(transparent)]
    Header(#[from] HeaderError),
}
