use crate::core::data::complex::Complex;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::viewport::Viewport;

/// Maps pixel `(x, y)` to its sample point in the viewport.
///
/// Each axis is normalised by its own dimension (`x / width`, `y / height`),
/// so column `width` would land on `max_real` and is never sampled.
#[must_use]
pub fn pixel_to_complex(x: u32, y: u32, size: FrameSize, viewport: &Viewport) -> Complex {
    debug_assert!(x < size.width() && y < size.height());

    Complex {
        real: viewport.min_real()
            + viewport.real_span() * f64::from(x) / f64::from(size.width()),
        imag: viewport.min_imag()
            + viewport.imag_span() * f64::from(y) / f64::from(size.height()),
    }
}
