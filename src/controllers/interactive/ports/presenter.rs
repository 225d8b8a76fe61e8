use std::error::Error;

use crate::controllers::interactive::data::frame_stats::FrameStats;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Presentation side of the frame loop: reports its output size once and
/// takes each finished frame by reference.
pub trait FramePresenterPort {
    type Error: Error;

    fn output_size(&self) -> FrameSize;

    fn present(&mut self, frame: &PixelBuffer, stats: &FrameStats) -> Result<(), Self::Error>;
}
