use std::ops::Range;

use crate::core::actions::ports::colour_map::ColourMap;
use crate::core::actions::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::row_band::RowBand;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex::pixel_to_complex;

/// Renders `rows` of the frame into `out`, which holds exactly those rows.
pub fn render_rows<Alg, CMap>(
    rows: Range<u32>,
    out: &mut [u8],
    size: FrameSize,
    viewport: &Viewport,
    algorithm: &Alg,
    colour_map: &CMap,
) where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    let stride = size.row_stride();
    debug_assert_eq!(out.len(), rows.len() * stride);

    for (y, row) in rows.zip(out.chunks_exact_mut(stride)) {
        for (x, pixel) in (0..size.width()).zip(row.chunks_exact_mut(3)) {
            let c = pixel_to_complex(x, y, size, viewport);
            pixel.copy_from_slice(&colour_map.map(algorithm.compute(c)).to_rgb());
        }
    }
}

/// Single-threaded reference render of the whole frame.
#[must_use]
pub fn render_rows_serial<Alg, CMap>(
    viewport: &Viewport,
    size: FrameSize,
    algorithm: &Alg,
    colour_map: &CMap,
) -> PixelBuffer
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    let mut frame = PixelBuffer::new(size);
    let band = RowBand {
        start: 0,
        end: size.height(),
    };

    if let Some(slice) = frame.band_slices_mut(&[band]).pop() {
        render_rows(band.rows(), slice, size, viewport, algorithm, colour_map);
    }

    frame
}
