/// Supported pixel formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PixelFormat {
    /// Single packed Y0 U Y1 V plane, 4:2:2 sub sampling, 8 bits per sample
    YUYV,

    /// Single RGBA interleaved plane
    RGBA,
}

/// Error indicating that a buffer cannot hold the image it is supposed to contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoundsCheckError {
    #[error("stride must be at least {minimum} bytes, got {got}")]
    InvalidStride { minimum: usize, got: usize },

    #[error("buffer must be at least {minimum} bytes, got {got}")]
    InvalidBufferSize { minimum: usize, got: usize },

    #[error("image dimensions overflow the address space")]
    Overflow,
}

impl PixelFormat {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::YUYV => 2,
            PixelFormat::RGBA => 4,
        }
    }

    /// Number of pixels along a row which share a single sample group
    ///
    /// YUYV stores two pixels per 4 byte macropixel, so its width must be a multiple of 2.
    pub fn horizontal_alignment(self) -> usize {
        match self {
            PixelFormat::YUYV => 2,
            PixelFormat::RGBA => 1,
        }
    }

    /// Stride in bytes of a row without any padding
    pub fn packed_stride(self, width: usize) -> Option<usize> {
        width.checked_mul(self.bytes_per_pixel())
    }

    /// Calculate the required buffer size in bytes of a packed image with the given dimensions
    pub fn buffer_size(self, width: usize, height: usize) -> Option<usize> {
        self.packed_stride(width)?.checked_mul(height)
    }

    /// Check if a buffer with the given byte stride is valid for the dimensions
    pub fn bounds_check(
        self,
        buf: &[u8],
        stride: usize,
        width: usize,
        height: usize,
    ) -> Result<(), BoundsCheckError> {
        let min_stride = self
            .packed_stride(width)
            .ok_or(BoundsCheckError::Overflow)?;

        if min_stride > stride {
            return Err(BoundsCheckError::InvalidStride {
                minimum: min_stride,
                got: stride,
            });
        }

        let min_len = stride
            .checked_mul(height)
            .ok_or(BoundsCheckError::Overflow)?;

        if min_len > buf.len() {
            return Err(BoundsCheckError::InvalidBufferSize {
                minimum: min_len,
                got: buf.len(),
            });
        }

        Ok(())
    }
}
