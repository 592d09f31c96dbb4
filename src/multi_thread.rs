use crate::{ConvertError, Image, convert, verify_input, yuyv};
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
use rayon::slice::{ParallelSlice, ParallelSliceMut};

/// Same as [`convert`], but splits the frame into bands of rows which are converted in parallel
///
/// The result is identical to [`convert`].
#[inline(never)]
pub fn convert_multi_thread<S, D>(src: &Image<S>, dst: &mut Image<D>) -> Result<(), ConvertError>
where
    S: AsRef<[u8]>,
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    verify_input(src, dst)?;

    let threads = num_cpus::get();

    if threads == 1 {
        return convert(src, dst);
    }

    let width = src.width();
    let rows_per_thread = src.height().div_ceil(threads);

    tracing::trace!(threads, rows_per_thread, "splitting frame into bands");

    let src_stride = src.stride();
    let dst_stride = dst.stride();

    let src_bands = src.rows().par_chunks(rows_per_thread * src_stride);
    let dst_bands = dst.rows_mut().par_chunks_mut(rows_per_thread * dst_stride);

    src_bands.zip(dst_bands).for_each(|(src_band, dst_band)| {
        yuyv::convert_rows(src_band, src_stride, dst_band, dst_stride, width);
    });

    Ok(())
}
