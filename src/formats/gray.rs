use super::RgbFormat;

/// Visualize a single plane by replicating every sample into R, G and B
///
/// The output contains exactly one pixel per plane byte, alpha is 255 for formats carrying it.
/// Use [`SubsamplingFormat::plane_dimensions`](crate::SubsamplingFormat::plane_dimensions) to
/// get the geometry to display a plane with.
pub fn render_grayscale(plane: &[u8], output: RgbFormat) -> Vec<u8> {
    let bpp = output.bytes_per_pixel();
    let mut out = vec![u8::MAX; plane.len() * bpp];

    for (px, &value) in out.chunks_exact_mut(bpp).zip(plane) {
        px[..3].fill(value);
    }

    out
}
