//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::pixel_buffer::PixelBuffer;

/// Copies an RGB frame into an RGBA framebuffer, bottom row first.
///
/// Frame row 0 samples the smallest imaginary value; flipping puts it at the
/// bottom of the window so larger imaginary values appear higher up, the way
/// a texture with a bottom-left origin displays it. Alpha is set to 255.
///
/// # Panics
/// Panics if `dst` is not exactly `width * height * 4` bytes.
pub fn copy_rgb_to_rgba_flipped(src: &PixelBuffer, dst: &mut [u8]) {
    let size = src.size();
    let expected_dst_len = size.pixel_count() * 4;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {} for {}x{}",
        dst.len(),
        expected_dst_len,
        size.width(),
        size.height()
    );

    let src_rows = src.buffer().chunks_exact(size.row_stride()).rev();
    let dst_rows = dst.chunks_exact_mut(size.width() as usize * 4);

    for (src_row, dst_row) in src_rows.zip(dst_rows) {
        for (src_pixel, dst_pixel) in src_row.chunks_exact(3).zip(dst_row.chunks_exact_mut(4)) {
            dst_pixel[..3].copy_from_slice(src_pixel);
            dst_pixel[3] = 255;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::frame_size::FrameSize;

    #[test]
    fn test_single_row_is_copied_with_opaque_alpha() {
        let src = PixelBuffer::from_data(
            FrameSize::new(2, 1).unwrap(),
            vec![10, 20, 30, 40, 50, 60],
        )
        .unwrap();
        let mut dst = vec![0; 8];

        copy_rgb_to_rgba_flipped(&src, &mut dst);

        assert_eq!(dst, vec![10, 20, 30, 255, 40, 50, 60, 255]);
    }

    #[test]
    fn test_rows_are_flipped() {
        let src = PixelBuffer::from_data(
            FrameSize::new(1, 3).unwrap(),
            vec![
                1, 1, 1, // row 0
                2, 2, 2, // row 1
                3, 3, 3, // row 2
            ],
        )
        .unwrap();
        let mut dst = vec![0; 12];

        copy_rgb_to_rgba_flipped(&src, &mut dst);

        assert_eq!(dst, vec![3, 3, 3, 255, 2, 2, 2, 255, 1, 1, 1, 255]);
    }

    #[test]
    #[should_panic(expected = "does not match expected")]
    fn test_mismatched_destination_panics() {
        let src = PixelBuffer::new(FrameSize::new(2, 2).unwrap());
        let mut dst = vec![0; 12];

        copy_rgb_to_rgba_flipped(&src, &mut dst);
    }
}
