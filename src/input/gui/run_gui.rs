use std::error::Error;

use log::{error, info};
use winit::{
    dpi::LogicalSize,
    event::{Event, MouseScrollDelta, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::{FrameController, FramePresenterPort};
use crate::core::config::ViewerConfig;
use crate::input::gui::keyboard::ArrowKeyState;
use crate::presenters::pixels::PixelsPresenter;

/// Opens the viewer window and runs the frame loop until it is closed.
pub struct RunGuiCommand {
    config: ViewerConfig,
}

impl RunGuiCommand {
    pub fn new(config: ViewerConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoop::new()?;
        let size = self.config.size();

        // pixels needs a 'static window; it lives for the rest of the process.
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Set")
                .with_inner_size(LogicalSize::new(size.width(), size.height()))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let mut presenter = PixelsPresenter::new(window, size)?;
        let mut controller = FrameController::for_presenter(self.config, &presenter)?;
        let scrolls = controller.scroll_sender();
        let mut keys = ArrowKeyState::default();

        info!(
            "window open at {}x{}",
            presenter.output_size().width(),
            presenter.output_size().height()
        );

        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::KeyboardInput { event, .. } => {
                    if let PhysicalKey::Code(key_code) = event.physical_key {
                        keys.handle_key_event(key_code, event.state);
                    }
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    let vertical = match delta {
                        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
                        MouseScrollDelta::PixelDelta(position) => position.y,
                    };
                    scrolls.send(vertical);
                }
                WindowEvent::Focused(false) => keys.reset(),
                WindowEvent::Resized(surface) => {
                    if let Err(e) = presenter.resize_surface(surface.width, surface.height) {
                        error!("surface resize failed: {e}");
                        elwt.exit();
                    }
                }
                WindowEvent::RedrawRequested => {
                    if let Err(e) = controller.present_next(&mut keys, &mut presenter) {
                        error!("present failed: {e}");
                        elwt.exit();
                    }
                }
                _ => {}
            },
            Event::AboutToWait => window.request_redraw(),
            _ => {}
        })?;

        Ok(())
    }
}
