use super::mat_idxs::*;

/// Full range Rec. ITU-R BT.601 matrix, applied to Y and bias removed U/V
#[rustfmt::skip]
pub(crate) const BT601_YUV_TO_RGB: [[f64; 3]; 3] = [
    // R      G          B
    [1.0,     1.0,       1.0  ], // Y
    [0.0,    -0.344136,  1.772], // U
    [1.402,  -0.714136,  0.0  ], // V
];

#[inline(always)]
pub(crate) fn convert_yuv_to_rgb_matrix(
    mat: &[[f64; 3]; 3],
    y: f64,
    u: f64,
    v: f64,
) -> (f64, f64, f64) {
    let r = mat[Y][R] * y + mat[U][R] * u + mat[V][R] * v;
    let g = mat[Y][G] * y + mat[U][G] * u + mat[V][G] * v;
    let b = mat[Y][B] * y + mat[U][B] * u + mat[V][B] * v;

    (r, g, b)
}
