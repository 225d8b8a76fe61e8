use log::trace;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::adapters::pixel_format::copy_rgb_to_rgba_flipped;
use crate::controllers::interactive::{FramePresenterPort, FrameStats};
use crate::core::data::frame_size::FrameSize;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Uploads each finished frame into a `pixels` framebuffer and draws it.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    size: FrameSize,
}

impl PixelsPresenter {
    /// The framebuffer is fixed at `size`; the surface follows the window and
    /// `pixels` scales the framebuffer onto it.
    pub fn new(window: &'static Window, size: FrameSize) -> Result<Self, pixels::Error> {
        let surface_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(surface_size.width, surface_size.height, window);
        let pixels = Pixels::new(size.width(), size.height(), surface_texture)?;

        Ok(Self { pixels, size })
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)
    }
}

impl FramePresenterPort for PixelsPresenter {
    type Error = pixels::Error;

    fn output_size(&self) -> FrameSize {
        self.size
    }

    fn present(&mut self, frame: &PixelBuffer, stats: &FrameStats) -> Result<(), pixels::Error> {
        copy_rgb_to_rgba_flipped(frame, self.pixels.frame_mut());
        trace!("presenting frame {}", stats.frame_index);

        self.pixels.render()
    }
}
