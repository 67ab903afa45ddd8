pub(crate) mod space;

use space::{BT601_YUV_TO_RGB, convert_yuv_to_rgb_matrix};

pub(crate) mod mat_idxs {
    pub(crate) const Y: usize = 0;
    pub(crate) const U: usize = 1;
    pub(crate) const V: usize = 2;

    pub(crate) const R: usize = 0;
    pub(crate) const G: usize = 1;
    pub(crate) const B: usize = 2;
}

/// Chroma value representing zero color difference
pub const CHROMA_BIAS: u8 = 128;

/// Round to the nearest integer and clamp to `0..=255`
///
/// Halves round away from zero, negative halves end up as 0 either way.
#[inline(always)]
pub fn clamp(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Convert a single full range BT.601 YUV sample to RGB
///
/// U and V are expected to be bias-128 encoded.
#[inline(always)]
pub fn yuv_to_rgb(y: u8, u: u8, v: u8) -> [u8; 3] {
    let u = f64::from(u) - f64::from(CHROMA_BIAS);
    let v = f64::from(v) - f64::from(CHROMA_BIAS);

    let (r, g, b) = convert_yuv_to_rgb_matrix(&BT601_YUV_TO_RGB, f64::from(y), u, v);

    [clamp(r), clamp(g), clamp(b)]
}
