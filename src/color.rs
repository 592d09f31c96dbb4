//! BT.601 integer YUV to RGB conversion

/// Clamp a signed intermediate into the `0..=255` range
#[inline(always)]
pub fn clamp8(v: i32) -> u8 {
    v.clamp(0, u8::MAX as i32) as u8
}

/// Convert a single limited range BT.601 YUV sample to an opaque RGBA pixel
///
/// Uses the common 8 bit fixed point approximation of the BT.601 matrix:
///
/// ```text
/// C = Y - 16, D = U - 128, E = V - 128
/// R = clamp((298 * C           + 409 * E + 128) >> 8)
/// G = clamp((298 * C - 100 * D - 208 * E + 128) >> 8)
/// B = clamp((298 * C + 516 * D           + 128) >> 8)
/// ```
#[inline(always)]
pub fn yuv_to_rgba(y: u8, u: u8, v: u8) -> [u8; 4] {
    let c = 298 * (y as i32 - 16);
    let d = u as i32 - 128;
    let e = v as i32 - 128;

    [
        clamp8((c + 409 * e + 128) >> 8),
        clamp8((c - 100 * d - 208 * e + 128) >> 8),
        clamp8((c + 516 * d + 128) >> 8),
        u8::MAX,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp8_saturates() {
        assert_eq!(clamp8(-1), 0);
        assert_eq!(clamp8(i32::MIN), 0);
        assert_eq!(clamp8(128), 128);
        assert_eq!(clamp8(256), 255);
        assert_eq!(clamp8(i32::MAX), 255);
    }

    #[test]
    fn white_and_black() {
        assert_eq!(yuv_to_rgba(235, 128, 128), [255, 255, 255, 255]);
        assert_eq!(yuv_to_rgba(16, 128, 128), [0, 0, 0, 255]);
    }

    #[test]
    fn below_black_saturates_to_zero() {
        assert_eq!(yuv_to_rgba(0, 128, 128), [0, 0, 0, 255]);
    }

    #[test]
    fn above_white_saturates() {
        assert_eq!(yuv_to_rgba(255, 128, 128), [255, 255, 255, 255]);
    }

    #[test]
    fn chroma() {
        assert_eq!(yuv_to_rgba(100, 90, 160), [149, 87, 21, 255]);
        assert_eq!(yuv_to_rgba(200, 90, 160), [255, 203, 138, 255]);
    }

    #[test]
    fn extreme_chroma_does_not_wrap() {
        // Pure blue and red chroma on black luma would go negative without saturation
        assert_eq!(yuv_to_rgba(16, 255, 0), [0, 54, 255, 255]);
        assert_eq!(yuv_to_rgba(16, 0, 255), [203, 0, 0, 255]);
    }
}
