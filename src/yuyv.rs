use crate::color::yuv_to_rgba;

/// Convert a single `Y0 U Y1 V` macropixel into two RGBA pixels sharing its chroma pair
#[inline(always)]
pub(crate) fn convert_macropixel(&[y0, u, y1, v]: &[u8; 4]) -> [[u8; 4]; 2] {
    [yuv_to_rgba(y0, u, v), yuv_to_rgba(y1, u, v)]
}

/// Convert `width` pixels per row, rows given as `stride` sized chunks
///
/// Bytes past the packed row in either buffer are neither read nor written.
#[inline(always)]
fn convert_rows_impl(
    src: &[u8],
    src_stride: usize,
    dst: &mut [u8],
    dst_stride: usize,
    width: usize,
) {
    let src_n = width * 2;
    let dst_n = width * 4;

    let src_rows = src.chunks_exact(src_stride);
    let dst_rows = dst.chunks_exact_mut(dst_stride);

    for (src_row, dst_row) in src_rows.zip(dst_rows) {
        let macropixels = src_row[..src_n].chunks_exact(4);
        let pixel_pairs = dst_row[..dst_n].chunks_exact_mut(8);

        for (macropixel, pair) in macropixels.zip(pixel_pairs) {
            if let Ok(macropixel) = <&[u8; 4]>::try_from(macropixel) {
                let [first, second] = convert_macropixel(macropixel);

                pair[..4].copy_from_slice(&first);
                pair[4..].copy_from_slice(&second);
            }
        }
    }
}

/// Row loop with runtime selection of the widest available instruction set
///
/// Callers must have bounds checked both buffers, `src` and `dst` must cover the same
/// number of whole rows.
#[inline(never)]
pub(crate) fn convert_rows(
    src: &[u8],
    src_stride: usize,
    dst: &mut [u8],
    dst_stride: usize,
    width: usize,
) {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    if is_x86_feature_detected!("avx2") {
        #[target_feature(enable = "avx2")]
        unsafe fn call(
            src: &[u8],
            src_stride: usize,
            dst: &mut [u8],
            dst_stride: usize,
            width: usize,
        ) {
            convert_rows_impl(src, src_stride, dst, dst_stride, width)
        }

        // Safety: Did a feature check
        unsafe {
            return call(src, src_stride, dst, dst_stride, width);
        }
    }

    #[cfg(target_arch = "aarch64")]
    if std::arch::is_aarch64_feature_detected!("neon") {
        #[target_feature(enable = "neon")]
        unsafe fn call(
            src: &[u8],
            src_stride: usize,
            dst: &mut [u8],
            dst_stride: usize,
            width: usize,
        ) {
            convert_rows_impl(src, src_stride, dst, dst_stride, width)
        }

        // Safety: Did a feature check
        unsafe {
            return call(src, src_stride, dst, dst_stride, width);
        }
    }

    convert_rows_impl(src, src_stride, dst, dst_stride, width)
}
