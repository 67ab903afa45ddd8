/// Description of a single plane relative to the frame's luma geometry.
///
/// The plane length is derived from the luma sample count (`width * height`), not from the
/// plane's own width and height. For odd dimensions both can differ, the length is what
/// the buffer layout is based on.
#[derive(Clone, Copy)]
pub(crate) struct PlaneDesc {
    pub(crate) len_op: Op,
    pub(crate) width_op: Op,
    pub(crate) height_op: Op,
}

impl PlaneDesc {
    pub(crate) fn len(&self, frame_size: usize) -> usize {
        self.len_op.op(frame_size)
    }

    pub(crate) fn dimensions(&self, width: usize, height: usize) -> (usize, usize) {
        (self.width_op.op(width), self.height_op.op(height))
    }
}

/// Plane's number of samples in relation to the luma plane, truncating
#[derive(Clone, Copy)]
pub(crate) enum Op {
    Div(usize),
    Identity,
}

impl Op {
    pub(crate) fn op(self, lhs: usize) -> usize {
        match self {
            Op::Div(rhs) => lhs / rhs,
            Op::Identity => lhs,
        }
    }
}

const LUMA: PlaneDesc = PlaneDesc {
    len_op: Op::Identity,
    width_op: Op::Identity,
    height_op: Op::Identity,
};

const CHROMA_420: PlaneDesc = PlaneDesc {
    len_op: Op::Div(4),
    width_op: Op::Div(2),
    height_op: Op::Div(2),
};

const CHROMA_422: PlaneDesc = PlaneDesc {
    len_op: Op::Div(2),
    width_op: Op::Div(2),
    height_op: Op::Identity,
};

pub(crate) const YUV420_PLANES: [PlaneDesc; 3] = [LUMA, CHROMA_420, CHROMA_420];

pub(crate) const YUV422_PLANES: [PlaneDesc; 3] = [LUMA, CHROMA_422, CHROMA_422];

pub(crate) const YUV444_PLANES: [PlaneDesc; 3] = [LUMA, LUMA, LUMA];
