#[cfg(any(feature = "gui", test))]
mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use crate::controllers::interactive::{
    FrameController, FramePresenterPort, FrameStats, NavigationSource, ScrollQueue, ScrollSender,
};
pub use crate::core::actions::ports::{colour_map::ColourMap, fractal_algorithm::FractalAlgorithm};
pub use crate::core::actions::render_frame::render_rows::render_rows_serial;
pub use crate::core::actions::render_frame::{MandelbrotRenderPool, RenderPool, RenderPoolError};
pub use crate::core::config::{
    DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS, DEFAULT_WIDTH, DEFAULT_WORKER_COUNT, ViewerConfig,
    ViewerConfigError,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame_size::{FrameSize, FrameSizeError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::row_band::RowBand;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, escape_iterations};
pub use crate::core::fractals::mandelbrot::colour_map::GrayscaleColourMap;
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::navigation::{PanDirection, PanDirections, apply_pan, apply_zoom};
pub use crate::core::util::partition_rows::partition_rows;
pub use crate::presenters::headless::{FrameSummary, ScriptStep, ScriptedNavigation, SummaryPresenter};

#[cfg(feature = "gui")]
pub use crate::input::gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::PixelsPresenter;
