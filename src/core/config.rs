use std::error::Error;
use std::fmt;
use std::num::NonZeroUsize;

use crate::core::actions::render_frame::{MandelbrotRenderPool, RenderPoolError};
use crate::core::data::frame_size::{FrameSize, FrameSizeError};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::GrayscaleColourMap;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_WORKER_COUNT: NonZeroUsize = NonZeroUsize::new(15).unwrap();
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

pub(crate) fn default_viewport() -> Viewport {
    Viewport::new(-2.0, 2.0, -2.0, 2.0).expect("default viewport is valid")
}

pub(crate) fn default_size() -> FrameSize {
    FrameSize::new(DEFAULT_WIDTH, DEFAULT_HEIGHT).expect("default frame size is valid")
}

pub(crate) fn default_algorithm() -> MandelbrotAlgorithm {
    MandelbrotAlgorithm::new(DEFAULT_MAX_ITERATIONS).expect("default iteration cap is non-zero")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerConfigError {
    FrameSize(FrameSizeError),
    Mandelbrot(MandelbrotError),
}

impl fmt::Display for ViewerConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrameSize(err) => write!(f, "invalid output size: {}", err),
            Self::Mandelbrot(err) => write!(f, "invalid fractal settings: {}", err),
        }
    }
}

impl Error for ViewerConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::FrameSize(err) => Some(err),
            Self::Mandelbrot(err) => Some(err),
        }
    }
}

impl From<FrameSizeError> for ViewerConfigError {
    fn from(err: FrameSizeError) -> Self {
        Self::FrameSize(err)
    }
}

impl From<MandelbrotError> for ViewerConfigError {
    fn from(err: MandelbrotError) -> Self {
        Self::Mandelbrot(err)
    }
}

/// Fixed settings for one viewer session. Nothing here changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    size: FrameSize,
    worker_count: NonZeroUsize,
    algorithm: MandelbrotAlgorithm,
    initial_viewport: Viewport,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            worker_count: DEFAULT_WORKER_COUNT,
            algorithm: default_algorithm(),
            initial_viewport: default_viewport(),
        }
    }
}

impl ViewerConfig {
    pub fn new(
        width: u32,
        height: u32,
        worker_count: NonZeroUsize,
        max_iterations: u32,
        initial_viewport: Viewport,
    ) -> Result<Self, ViewerConfigError> {
        let size = FrameSize::new(width, height)?;
        let algorithm = MandelbrotAlgorithm::new(max_iterations)?;

        Ok(Self {
            size,
            worker_count,
            algorithm,
            initial_viewport,
        })
    }

    /// Same settings with the output size reported by the presentation layer.
    #[must_use]
    pub fn with_size(self, size: FrameSize) -> Self {
        Self { size, ..self }
    }

    #[must_use]
    pub fn size(&self) -> FrameSize {
        self.size
    }

    #[must_use]
    pub fn worker_count(&self) -> NonZeroUsize {
        self.worker_count
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.algorithm.max_iterations()
    }

    #[must_use]
    pub fn initial_viewport(&self) -> Viewport {
        self.initial_viewport
    }

    /// Output width over height; zoom restores the viewport to this ratio.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.size.aspect_ratio()
    }

    pub(crate) fn build_render_pool(&self) -> Result<MandelbrotRenderPool, RenderPoolError> {
        let colour_map = GrayscaleColourMap::for_algorithm(&self.algorithm);

        MandelbrotRenderPool::new(self.worker_count, self.algorithm, colour_map)
    }
}
