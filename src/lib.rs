//! Conversion of packed YUYV (YUY2) 4:2:2 video frames into RGBA8888
//!
//! Every 4 byte `Y0 U Y1 V` macropixel of the source produces two opaque RGBA pixels which
//! share the macropixel's chroma pair. Colors are converted with the BT.601 integer matrix,
//! see [`yuv_to_rgba`].
//!
//! ```
//! let yuyv = [235, 128, 16, 128];
//! let mut rgba = [0u8; 8];
//!
//! let rows = yuyv_rgba::convert_yuyv_to_rgba(&yuyv, &mut rgba, 2, 2).unwrap();
//!
//! assert_eq!(rows, 1);
//! assert_eq!(rgba, [255u8, 255, 255, 255, 0, 0, 0, 255]);
//! ```

use std::fmt;

pub use color::{clamp8, yuv_to_rgba};
pub use image::{Image, ImageError};
#[cfg(feature = "multi-thread")]
pub use multi_thread::convert_multi_thread;
pub use pixel_format::{BoundsCheckError, PixelFormat};

mod color;
mod image;
#[cfg(feature = "multi-thread")]
mod multi_thread;
mod pixel_format;
mod yuyv;

/// Which side of a conversion an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferRole {
    Source,
    Destination,
}

impl fmt::Display for BufferRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferRole::Source => f.write_str("source"),
            BufferRole::Destination => f.write_str("destination"),
        }
    }
}

/// Everything that can go wrong when converting a frame
///
/// All checks happen before the destination is touched, a failed conversion never leaves a
/// partially written frame behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// `height` is `None` when it cannot be derived from a zero width
    #[error(
        "invalid dimensions {width}x{}, width must be even and neither may be zero",
        .height.map_or_else(|| "?".to_owned(), |height| height.to_string())
    )]
    InvalidDimension {
        width: usize,
        height: Option<usize>,
    },

    #[error("source length {len} is not a multiple of the row length {row_len}")]
    PartialRow { len: usize, row_len: usize },

    #[error("conversion from {src:?} to {dst:?} is not supported")]
    UnsupportedConversion { src: PixelFormat, dst: PixelFormat },

    #[error("source and destination dimensions must match")]
    SizeMismatch,

    #[error("{buffer} buffer too small: {source}")]
    BufferTooSmall {
        buffer: BufferRole,
        #[source]
        source: BoundsCheckError,
    },
}

impl ConvertError {
    fn from_image_error(buffer: BufferRole, err: ImageError) -> Self {
        match err {
            ImageError::InvalidDimension { width, height } => {
                ConvertError::InvalidDimension {
                    width,
                    height: Some(height),
                }
            }
            ImageError::BoundsCheck(source) => ConvertError::BufferTooSmall { buffer, source },
        }
    }
}

/// Verify that the input values are all valid and safe to move on to
pub(crate) fn verify_input<S, D>(src: &Image<S>, dst: &Image<D>) -> Result<(), ConvertError>
where
    S: AsRef<[u8]>,
    D: AsRef<[u8]>,
{
    fn verify<S, D>(src: &Image<S>, dst: &Image<D>) -> Result<(), ConvertError>
    where
        S: AsRef<[u8]>,
        D: AsRef<[u8]>,
    {
        if src.format() != PixelFormat::YUYV || dst.format() != PixelFormat::RGBA {
            return Err(ConvertError::UnsupportedConversion {
                src: src.format(),
                dst: dst.format(),
            });
        }

        if src.width() != dst.width() || src.height() != dst.height() {
            return Err(ConvertError::SizeMismatch);
        }

        src.bounds_check().map_err(|source| ConvertError::BufferTooSmall {
            buffer: BufferRole::Source,
            source,
        })?;

        dst.bounds_check().map_err(|source| ConvertError::BufferTooSmall {
            buffer: BufferRole::Destination,
            source,
        })?;

        Ok(())
    }

    verify(src, dst).inspect_err(|err| tracing::debug!(%err, "rejecting frame"))
}

/// Convert a YUYV [`Image`] into an RGBA [`Image`] of the same dimensions
///
/// Only the `width` pixels of every row are written, padding introduced by the destination
/// stride stays untouched.
pub fn convert<S, D>(src: &Image<S>, dst: &mut Image<D>) -> Result<(), ConvertError>
where
    S: AsRef<[u8]>,
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    verify_input(src, dst)?;

    let width = src.width();
    let src_stride = src.stride();
    let dst_stride = dst.stride();

    yuyv::convert_rows(src.rows(), src_stride, dst.rows_mut(), dst_stride, width);

    Ok(())
}

/// Convert a packed YUYV buffer into an RGBA buffer whose rows are `stride` pixels apart
///
/// The frame height is the number of whole `width` pixel rows in `src`. Passing
/// `stride == width` writes the destination as one flat run of `width * height` pixels.
///
/// Returns the number of rows converted.
pub fn convert_yuyv_to_rgba(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    stride: usize,
) -> Result<usize, ConvertError> {
    let (src, mut dst) = wrap_slices(src, dst, width, stride)
        .inspect_err(|err| tracing::debug!(%err, "rejecting frame"))?;

    convert(&src, &mut dst)?;

    Ok(src.height())
}

type SlicePair<'s, 'd> = (Image<&'s [u8]>, Image<&'d mut [u8]>);

fn wrap_slices<'s, 'd>(
    src: &'s [u8],
    dst: &'d mut [u8],
    width: usize,
    stride: usize,
) -> Result<SlicePair<'s, 'd>, ConvertError> {
    if width == 0 || width % 2 != 0 {
        let height = width
            .checked_mul(2)
            .filter(|&row_len| row_len != 0)
            .map(|row_len| src.len() / row_len);

        return Err(ConvertError::InvalidDimension { width, height });
    }

    let row_len = PixelFormat::YUYV
        .packed_stride(width)
        .ok_or(ConvertError::BufferTooSmall {
            buffer: BufferRole::Source,
            source: BoundsCheckError::Overflow,
        })?;

    if src.len() % row_len != 0 {
        return Err(ConvertError::PartialRow {
            len: src.len(),
            row_len,
        });
    }

    let height = src.len() / row_len;

    let dst_stride = PixelFormat::RGBA
        .packed_stride(stride)
        .ok_or(ConvertError::BufferTooSmall {
            buffer: BufferRole::Destination,
            source: BoundsCheckError::Overflow,
        })?;

    let src = Image::from_buffer(PixelFormat::YUYV, src, None, width, height)
        .map_err(|err| ConvertError::from_image_error(BufferRole::Source, err))?;

    let dst = Image::from_buffer(PixelFormat::RGBA, dst, Some(dst_stride), width, height)
        .map_err(|err| ConvertError::from_image_error(BufferRole::Destination, err))?;

    Ok((src, dst))
}
