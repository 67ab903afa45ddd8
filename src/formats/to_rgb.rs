use super::rgb::{RgbFormat, RgbImage, write_pixel};
use crate::color::yuv_to_rgb;
use crate::subsampling::frame_size;
use crate::{ChromaSampling, DecodeError, PlaneKind, Planes, SubsamplingFormat};

/// Options for [`convert_to_rgb`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Layout of the produced image
    pub output: RgbFormat,

    /// How chroma samples are assigned to luma samples
    pub chroma_sampling: ChromaSampling,
}

/// Convert a frame's planes to an interleaved RGB image using full range BT.601
///
/// Every plane must be large enough for the index the geometry maps the last pixel to,
/// otherwise [`DecodeError::PlaneIndexOutOfRange`] is returned and nothing is converted.
pub fn convert_to_rgb(
    planes: &Planes<'_>,
    width: u32,
    height: u32,
    format: SubsamplingFormat,
    options: ConvertOptions,
) -> Result<RgbImage, DecodeError> {
    let size = verify_input(planes, width, height, format, options)?;

    let mut buf = vec![0u8; size];

    convert_rows(planes, width as usize, format, options, 0, &mut buf);

    log::debug!(
        "converted {width}x{height} {format:?} frame to {:?}",
        options.output
    );

    Ok(RgbImage::new(options.output, width, height, buf))
}

/// Verify that every index the conversion will compute is inside its plane
///
/// Returns the size of the output buffer.
pub(crate) fn verify_input(
    planes: &Planes<'_>,
    width: u32,
    height: u32,
    format: SubsamplingFormat,
    options: ConvertOptions,
) -> Result<usize, DecodeError> {
    let luma_last = frame_size(width, height)? - 1;
    let output_size = options.output.buffer_size(width, height)?;

    // Indices only grow in row-major order, checking the last pixel covers the whole frame
    let chroma_last = options.chroma_sampling.chroma_index(
        format,
        width as usize,
        height as usize - 1,
        width as usize - 1,
    );

    let kinds = [PlaneKind::Y, PlaneKind::U, PlaneKind::V];
    let last = [luma_last, chroma_last, chroma_last];

    for ((plane, kind), index) in planes.to_array().into_iter().zip(kinds).zip(last) {
        if index >= plane.len() {
            return Err(DecodeError::PlaneIndexOutOfRange {
                plane: kind,
                index,
                len: plane.len(),
            });
        }
    }

    Ok(output_size)
}

/// Convert the rows starting at `first_row` into `dst`, which holds whole output rows
pub(crate) fn convert_rows(
    planes: &Planes<'_>,
    width: usize,
    format: SubsamplingFormat,
    options: ConvertOptions,
    first_row: usize,
    dst: &mut [u8],
) {
    let convert: fn(&Planes<'_>, usize, SubsamplingFormat, ChromaSampling, usize, &mut [u8]) =
        match (options.output.is_reversed(), options.output.bytes_per_pixel()) {
            (false, 3) => convert_rows_impl::<false, false>,
            (false, _) => convert_rows_impl::<false, true>,
            (true, 3) => convert_rows_impl::<true, false>,
            (true, _) => convert_rows_impl::<true, true>,
        };

    convert(
        planes,
        width,
        format,
        options.chroma_sampling,
        first_row,
        dst,
    );
}

fn convert_rows_impl<const REVERSE: bool, const ALPHA: bool>(
    planes: &Planes<'_>,
    width: usize,
    format: SubsamplingFormat,
    sampling: ChromaSampling,
    first_row: usize,
    dst: &mut [u8],
) {
    let bpp = if ALPHA { 4 } else { 3 };

    for (row_offset, row_buf) in dst.chunks_exact_mut(width * bpp).enumerate() {
        let row = first_row + row_offset;

        for (col, px) in row_buf.chunks_exact_mut(bpp).enumerate() {
            let y_index = row * width + col;
            let uv_index = sampling.chroma_index(format, width, row, col);

            let rgb = yuv_to_rgb(planes.y[y_index], planes.u[uv_index], planes.v[uv_index]);

            write_pixel::<REVERSE, ALPHA>(px, rgb);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode;
    use SubsamplingFormat::*;

    fn frame(format: SubsamplingFormat, width: u32, height: u32, y: u8, u: u8, v: u8) -> Vec<u8> {
        let [y_len, u_len, v_len] = format.plane_lens(width, height).unwrap();

        let mut buf = vec![y; y_len];
        buf.extend(std::iter::repeat_n(u, u_len));
        buf.extend(std::iter::repeat_n(v, v_len));
        buf
    }

    #[test]
    fn neutral_is_gray() {
        for format in SubsamplingFormat::variants() {
            let buf = frame(format, 6, 4, 128, 128, 128);
            let planes = decode(&buf, 6, 4, format).unwrap();

            let image = convert_to_rgb(&planes, 6, 4, format, ConvertOptions::default()).unwrap();

            assert_eq!(image.pixels().len(), 24);
            assert!(image.pixels().all(|px| px == [128, 128, 128, 255]));
        }
    }

    #[test]
    fn layouts() {
        let buf = frame(Yuv444, 2, 2, 100, 50, 180);
        let planes = decode(&buf, 2, 2, Yuv444).unwrap();

        let expected = [
            (RgbFormat::RGB, vec![173, 90, 0]),
            (RgbFormat::RGBA, vec![173, 90, 0, 255]),
            (RgbFormat::BGR, vec![0, 90, 173]),
            (RgbFormat::BGRA, vec![0, 90, 173, 255]),
        ];

        for (output, px) in expected {
            let options = ConvertOptions {
                output,
                ..Default::default()
            };

            let image = convert_to_rgb(&planes, 2, 2, Yuv444, options).unwrap();

            assert_eq!(image.as_bytes().len(), 4 * output.bytes_per_pixel());
            assert!(image.pixels().all(|p| p == px.as_slice()));
        }
    }

    #[test]
    fn chroma_420_block_replication() {
        // 4x4 luma, 2x2 chroma: each quadrant gets its own U value
        let mut buf = vec![128u8; 16];
        buf.extend([100, 150, 120, 140]);
        buf.extend([128; 4]);

        let planes = decode(&buf, 4, 4, Yuv420).unwrap();
        let image = convert_to_rgb(&planes, 4, 4, Yuv420, ConvertOptions::default()).unwrap();

        let blue = |u: u8| yuv_to_rgb(128, u, 128)[2];

        for (x, y, u) in [
            (0, 0, 100),
            (1, 1, 100),
            (3, 0, 150),
            (2, 1, 150),
            (0, 3, 120),
            (3, 3, 140),
        ] {
            assert_eq!(image.pixel(x, y).unwrap()[2], blue(u), "pixel {x},{y}");
        }
    }

    #[test]
    fn chroma_420_carry_forward() {
        let mut buf = vec![128u8; 16];
        buf.extend([100, 150, 120, 140]);
        buf.extend([128; 4]);

        let planes = decode(&buf, 4, 4, Yuv420).unwrap();
        let options = ConvertOptions {
            chroma_sampling: ChromaSampling::CarryForward,
            ..Default::default()
        };
        let image = convert_to_rgb(&planes, 4, 4, Yuv420, options).unwrap();

        let blue = |u: u8| yuv_to_rgb(128, u, 128)[2];

        // row 1 keeps the chroma sample of the last block of row 0
        assert_eq!(image.pixel(0, 0).unwrap()[2], blue(100));
        assert_eq!(image.pixel(0, 1).unwrap()[2], blue(150));
        assert_eq!(image.pixel(0, 2).unwrap()[2], blue(120));
        assert_eq!(image.pixel(0, 3).unwrap()[2], blue(140));
    }

    #[test]
    fn chroma_422_pairs() {
        let mut buf = vec![128u8; 8];
        buf.extend([100, 150, 120, 140]);
        buf.extend([128; 4]);

        let planes = decode(&buf, 4, 2, Yuv422).unwrap();
        let image = convert_to_rgb(&planes, 4, 2, Yuv422, ConvertOptions::default()).unwrap();

        let blue = |u: u8| yuv_to_rgb(128, u, 128)[2];

        assert_eq!(image.pixel(0, 0).unwrap()[2], blue(100));
        assert_eq!(image.pixel(1, 0).unwrap()[2], blue(100));
        assert_eq!(image.pixel(2, 0).unwrap()[2], blue(150));
        assert_eq!(image.pixel(1, 1).unwrap()[2], blue(120));
        assert_eq!(image.pixel(3, 1).unwrap()[2], blue(140));
    }

    #[test]
    fn odd_420_is_out_of_range() {
        let buf = frame(Yuv420, 3, 3, 128, 128, 128);
        let planes = decode(&buf, 3, 3, Yuv420).unwrap();

        assert_eq!(
            convert_to_rgb(&planes, 3, 3, Yuv420, ConvertOptions::default()),
            Err(DecodeError::PlaneIndexOutOfRange {
                plane: PlaneKind::U,
                index: 2,
                len: 2
            })
        );
    }

    #[test]
    fn odd_422_fits() {
        let buf = frame(Yuv422, 3, 2, 128, 128, 128);
        let planes = decode(&buf, 3, 2, Yuv422).unwrap();

        let image = convert_to_rgb(&planes, 3, 2, Yuv422, ConvertOptions::default()).unwrap();

        assert_eq!(image.pixels().len(), 6);
    }

    #[test]
    fn inconsistent_planes() {
        let y = [0u8; 16];
        let u = [0u8; 16];
        let v = [0u8; 15];

        assert_eq!(
            convert_to_rgb(
                &Planes::from_slices(&y, &u, &v),
                4,
                4,
                Yuv444,
                ConvertOptions::default()
            ),
            Err(DecodeError::PlaneIndexOutOfRange {
                plane: PlaneKind::V,
                index: 15,
                len: 15
            })
        );

        assert_eq!(
            convert_to_rgb(
                &Planes::from_slices(&y[..8], &u, &u),
                4,
                4,
                Yuv444,
                ConvertOptions::default()
            ),
            Err(DecodeError::PlaneIndexOutOfRange {
                plane: PlaneKind::Y,
                index: 15,
                len: 8
            })
        );
    }

    #[test]
    fn zero_dimensions() {
        let planes = Planes::from_slices(&[], &[], &[]);

        assert_eq!(
            convert_to_rgb(&planes, 4, 0, Yuv444, ConvertOptions::default()),
            Err(DecodeError::InvalidDimensions {
                width: 4,
                height: 0
            })
        );
    }
}
