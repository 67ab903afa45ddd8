use crate::{DecodeError, Planes, SubsamplingFormat, decode};

/// Iterate over the frames of a raw YUV stream, which is a sequence of frames of the
/// same geometry stored back to back without any headers
///
/// A trailing incomplete frame produces a single [`DecodeError::BufferTooShort`] and ends the iteration.
pub fn frames(buf: &[u8], width: u32, height: u32, format: SubsamplingFormat) -> FrameIter<'_> {
    let frame_size = format.buffer_size(width, height);

    FrameIter {
        rem: buf,
        width,
        height,
        format,
        frame_size,
        done: false,
    }
}

/// Iterator returned by [`frames`]
#[derive(Debug, Clone)]
pub struct FrameIter<'a> {
    rem: &'a [u8],
    width: u32,
    height: u32,
    format: SubsamplingFormat,
    frame_size: Result<usize, DecodeError>,
    done: bool,
}

impl FrameIter<'_> {
    /// Number of complete frames left
    pub fn complete_frames(&self) -> usize {
        match &self.frame_size {
            Ok(frame_size) if !self.done => self.rem.len() / frame_size,
            _ => 0,
        }
    }
}

impl<'a> Iterator for FrameIter<'a> {
    type Item = Result<Planes<'a>, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.rem.is_empty() {
            return None;
        }

        let frame_size = match &self.frame_size {
            Ok(frame_size) => *frame_size,
            Err(e) => {
                self.done = true;
                return Some(Err(e.clone()));
            }
        };

        if self.rem.len() < frame_size {
            log::warn!(
                "raw stream ends with an incomplete frame of {} bytes",
                self.rem.len()
            );

            self.done = true;

            return Some(Err(DecodeError::BufferTooShort {
                expected: frame_size,
                got: self.rem.len(),
            }));
        }

        let (frame, rem) = self.rem.split_at(frame_size);
        self.rem = rem;

        Some(decode(frame, self.width, self.height, self.format))
    }
}
