use crate::SubsamplingFormat;

/// Rule used to pick the chroma sample for a luma sample
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChromaSampling {
    /// Every luma sample uses the chroma sample of the block it lies in
    ///
    /// - 4:2:0: `(row / 2) * (width / 2) + col / 2`
    /// - 4:2:2: `row * (width / 2) + col / 2`
    /// - 4:4:4: `row * width + col`
    #[default]
    Block,

    /// Reproduces decoders that only fetch a new 4:2:0 chroma sample at even rows and columns
    /// and keep using the last fetched one otherwise.
    ///
    /// When walking the frame row by row this makes every odd row reuse the chroma sample
    /// fetched last on the row above it, that is the sample of the last block of that row.
    /// Even rows and the 4:2:2 and 4:4:4 formats behave exactly like [`ChromaSampling::Block`].
    CarryForward,
}

impl ChromaSampling {
    /// Index into the U and V plane for the luma sample at `row`, `col`
    ///
    /// Indices are non-decreasing when walking a frame in row-major order, so the last
    /// sample of a frame has the largest index.
    pub fn chroma_index(
        self,
        format: SubsamplingFormat,
        width: usize,
        row: usize,
        col: usize,
    ) -> usize {
        match format {
            SubsamplingFormat::Yuv420 => {
                let chroma_width = width / 2;

                match self {
                    ChromaSampling::CarryForward if row % 2 == 1 => {
                        (row / 2) * chroma_width + width.saturating_sub(1) / 2
                    }
                    _ => (row / 2) * chroma_width + col / 2,
                }
            }
            SubsamplingFormat::Yuv422 => row * (width / 2) + col / 2,
            SubsamplingFormat::Yuv444 => row * width + col,
        }
    }
}

impl SubsamplingFormat {
    /// Index into the U and V plane for the luma sample at `row`, `col` using block replication
    pub fn chroma_index(self, width: usize, row: usize, col: usize) -> usize {
        ChromaSampling::Block.chroma_index(self, width, row, col)
    }
}
