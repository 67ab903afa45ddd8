//! Split raw planar YUV frames into their Y, U and V planes and convert them to RGB.
//!
//! Frames are tightly packed 8 bit planar buffers (Y plane, then U, then V) using 4:2:0, 4:2:2
//! or 4:4:4 chroma subsampling. The geometry is either supplied by the caller or read from a
//! 12 byte header (see [`FrameHeader`]). Conversion uses the full range BT.601 matrix.
//!
//! ```
//! use ezk_yuv::{ConvertOptions, SubsamplingFormat, convert_to_rgb, decode};
//!
//! let buf = vec![128u8; SubsamplingFormat::Yuv420.buffer_size(4, 4)?];
//!
//! let planes = decode(&buf, 4, 4, SubsamplingFormat::Yuv420)?;
//! let rgba = convert_to_rgb(&planes, 4, 4, SubsamplingFormat::Yuv420, ConvertOptions::default())?;
//!
//! assert!(rgba.pixels().all(|px| px == [128, 128, 128, 255]));
//! # Ok::<(), ezk_yuv::DecodeError>(())
//! ```

pub use color::{CHROMA_BIAS, clamp, yuv_to_rgb};
pub use error::{DecodeError, PlaneKind};
pub use formats::{ConvertOptions, RgbFormat, RgbImage, convert_to_rgb, render_grayscale};
pub use frame::{Frame, decode_with_header};
pub use header::{FrameHeader, HEADER_SIZE, HeaderError, parse_header};
#[cfg(feature = "multi-thread")]
pub use multi_thread::convert_to_rgb_multi_thread;
pub use planes::{Planes, decode};
pub use sampler::ChromaSampling;
pub use stream::{FrameIter, frames};
pub use subsampling::SubsamplingFormat;

mod color;
mod error;
mod formats;
mod frame;
mod header;
#[cfg(feature = "multi-thread")]
mod multi_thread;
mod plane_decs;
mod planes;
mod sampler;
mod stream;
mod subsampling;
