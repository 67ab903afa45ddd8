use crate::formats::{convert_rows, verify_input};
use crate::{ConvertOptions, DecodeError, Planes, RgbImage, SubsamplingFormat};
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
use rayon::slice::ParallelSliceMut;

/// Same as [`convert_to_rgb`](crate::convert_to_rgb) but converts bands of rows in parallel
///
/// The output is identical to the single threaded conversion.
#[inline(never)]
pub fn convert_to_rgb_multi_thread(
    planes: &Planes<'_>,
    width: u32,
    height: u32,
    format: SubsamplingFormat,
    options: ConvertOptions,
) -> Result<RgbImage, DecodeError> {
    let size = verify_input(planes, width, height, format, options)?;

    let threads = num_cpus::get();

    let mut buf = vec![0u8; size];

    let row_size = width as usize * options.output.bytes_per_pixel();
    let rows_per_band = (height as usize).div_ceil(threads);

    if threads == 1 {
        convert_rows(planes, width as usize, format, options, 0, &mut buf);
    } else {
        buf.par_chunks_mut(row_size * rows_per_band)
            .enumerate()
            .for_each(|(band, dst)| {
                convert_rows(
                    planes,
                    width as usize,
                    format,
                    options,
                    band * rows_per_band,
                    dst,
                );
            });
    }

    log::debug!(
        "converted {width}x{height} {format:?} frame to {:?} using {threads} threads",
        options.output
    );

    Ok(RgbImage::new(options.output, width, height, buf))
}
