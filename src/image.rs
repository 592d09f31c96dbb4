use crate::{BoundsCheckError, PixelFormat};

/// Basic wrapper around an image buffer with its dimensions and row stride
///
/// The stride is given in bytes, so padded allocations (e.g. V4L2 `bytesperline`) can be
/// described for both YUYV and RGBA images.
#[derive(Debug, Clone)]
pub struct Image<S> {
    format: PixelFormat,
    buffer: S,
    stride: usize,
    width: usize,
    height: usize,
}

/// Everything that can go wrong when constructing an [`Image`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ImageError {
    #[error("invalid dimensions {width}x{height}, both must be non-zero and width aligned to the pixel format")]
    InvalidDimension { width: usize, height: usize },

    #[error(transparent)]
    BoundsCheck(#[from] BoundsCheckError),
}

impl Image<Vec<u8>> {
    /// Allocate a zeroed, packed image
    pub fn blank(format: PixelFormat, width: usize, height: usize) -> Result<Self, ImageError> {
        let size = format
            .buffer_size(width, height)
            .ok_or(BoundsCheckError::Overflow)?;

        Self::from_buffer(format, vec![0u8; size], None, width, height)
    }
}

impl<S: AsRef<[u8]>> Image<S> {
    /// Wrap an existing buffer, `stride` defaults to the packed stride of `format`
    pub fn from_buffer(
        format: PixelFormat,
        buffer: S,
        stride: Option<usize>,
        width: usize,
        height: usize,
    ) -> Result<Self, ImageError> {
        if width == 0 || height == 0 || width % format.horizontal_alignment() != 0 {
            return Err(ImageError::InvalidDimension { width, height });
        }

        let stride = match stride {
            Some(stride) => stride,
            None => format
                .packed_stride(width)
                .ok_or(BoundsCheckError::Overflow)?,
        };

        let this = Self {
            format,
            buffer,
            stride,
            width,
            height,
        };

        this.bounds_check()?;

        Ok(this)
    }

    /// Perform a bounds check, return an error when it fails
    pub fn bounds_check(&self) -> Result<(), BoundsCheckError> {
        self.format
            .bounds_check(self.buffer.as_ref(), self.stride, self.width, self.height)
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row stride in bytes
    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn buffer(&self) -> &S {
        &self.buffer
    }

    pub fn into_buffer(self) -> S {
        self.buffer
    }

    /// The rows covering the image, each exactly `stride` bytes long
    pub(crate) fn rows(&self) -> &[u8] {
        &self.buffer.as_ref()[..self.stride * self.height]
    }
}

impl<S: AsRef<[u8]> + AsMut<[u8]>> Image<S> {
    pub fn buffer_mut(&mut self) -> &mut S {
        &mut self.buffer
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [u8] {
        let len = self.stride * self.height;
        &mut self.buffer.as_mut()[..len]
    }
}
