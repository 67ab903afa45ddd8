use crate::{
    ConvertOptions, DecodeError, FrameHeader, Planes, RgbImage, SubsamplingFormat, convert_to_rgb,
    decode, parse_header,
};

/// A single decode request: a raw frame buffer and the geometry it is declared with
///
/// The geometry is either supplied by the caller or read from a frame header
/// using [`Frame::from_prefixed`].
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    buf: &'a [u8],
    width: u32,
    height: u32,
    format: SubsamplingFormat,
}

impl<'a> Frame<'a> {
    /// Create a new request for a headerless buffer
    ///
    /// Fails if the dimensions are zero or the buffer is too small for them.
    pub fn new(
        buf: &'a [u8],
        width: u32,
        height: u32,
        format: SubsamplingFormat,
    ) -> Result<Self, DecodeError> {
        let expected = format.buffer_size(width, height)?;

        if buf.len() < expected {
            return Err(DecodeError::BufferTooShort {
                expected,
                got: buf.len(),
            });
        }

        Ok(Self {
            buf,
            width,
            height,
            format,
        })
    }

    /// Create a request from a buffer starting with a [`FrameHeader`]
    pub fn from_prefixed(buf: &'a [u8]) -> Result<Self, DecodeError> {
        let header = parse_header(buf)?;

        Self::new(
            &buf[header.header_size..],
            header.width,
            header.height,
            header.format,
        )
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> SubsamplingFormat {
        self.format
    }

    /// The frame's data, without any header
    pub fn buffer(&self) -> &'a [u8] {
        self.buf
    }

    /// Header describing this frame
    pub fn header(&self) -> FrameHeader {
        FrameHeader::new(self.width, self.height, self.format)
    }

    pub fn planes(&self) -> Result<Planes<'a>, DecodeError> {
        decode(self.buf, self.width, self.height, self.format)
    }

    pub fn to_rgb(&self, options: ConvertOptions) -> Result<RgbImage, DecodeError> {
        convert_to_rgb(
            &self.planes()?,
            self.width,
            self.height,
            self.format,
            options,
        )
    }

    #[cfg(feature = "multi-thread")]
    pub fn to_rgb_multi_thread(&self, options: ConvertOptions) -> Result<RgbImage, DecodeError> {
        crate::convert_to_rgb_multi_thread(
            &self.planes()?,
            self.width,
            self.height,
            self.format,
            options,
        )
    }
}

/// Parse the header at the start of `buf` and split the frame following it
pub fn decode_with_header(buf: &[u8]) -> Result<(FrameHeader, Planes<'_>), DecodeError> {
    let header = parse_header(buf)?;
    let planes = decode(
        &buf[header.header_size..],
        header.width,
        header.height,
        header.format,
    )?;

    Ok((header, planes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HEADER_SIZE, HeaderError};

    fn prefixed(header: FrameHeader, data: &[u8]) -> Vec<u8> {
        let mut buf = header.encode().to_vec();
        buf.extend_from_slice(data);
        buf
    }

    #[test]
    fn header_is_stripped() {
        let data: Vec<u8> = (0..32).collect();
        let buf = prefixed(FrameHeader::new(4, 4, SubsamplingFormat::Yuv422), &data);

        let (header, planes) = decode_with_header(&buf).unwrap();

        assert_eq!(header.format, SubsamplingFormat::Yuv422);
        assert_eq!(planes.y, &data[..16]);
        assert_eq!(planes.u, &data[16..24]);
        assert_eq!(planes.v, &data[24..]);

        let frame = Frame::from_prefixed(&buf).unwrap();

        assert_eq!(frame.buffer(), &buf[HEADER_SIZE..]);
        assert_eq!(frame.header(), header);
        assert_eq!(frame.planes().unwrap(), planes);
    }

    #[test]
    fn header_errors_are_forwarded() {
        assert_eq!(
            decode_with_header(&[1, 2, 3]).unwrap_err(),
            DecodeError::Header(HeaderError::TooShort { got: 3 })
        );

        let mut buf = FrameHeader::new(2, 2, SubsamplingFormat::Yuv444).encode();
        buf[8] = 7;

        assert_eq!(
            Frame::from_prefixed(&buf).unwrap_err(),
            DecodeError::Header(HeaderError::UnknownFormat(7))
        );
    }

    #[test]
    fn zero_sized_header() {
        let buf = prefixed(FrameHeader::new(0, 4, SubsamplingFormat::Yuv420), &[0; 8]);

        assert_eq!(
            decode_with_header(&buf).unwrap_err(),
            DecodeError::InvalidDimensions {
                width: 0,
                height: 4
            }
        );
    }

    #[test]
    fn missing_frame_data() {
        let buf = prefixed(FrameHeader::new(2, 2, SubsamplingFormat::Yuv420), &[0; 5]);

        assert_eq!(
            Frame::from_prefixed(&buf).unwrap_err(),
            DecodeError::BufferTooShort {
                expected: 6,
                got: 5
            }
        );
    }

    #[test]
    fn frame_to_rgb() {
        let data = [200u8; 48];
        let frame = Frame::new(&data, 4, 4, SubsamplingFormat::Yuv444).unwrap();

        let image = frame.to_rgb(ConvertOptions::default()).unwrap();

        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 4);
        assert!(image.pixels().all(|px| px == [255, 124, 255, 255]));
    }
}
