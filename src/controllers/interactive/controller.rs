use std::time::Instant;

use log::{debug, info};

use crate::controllers::interactive::data::frame_stats::FrameStats;
use crate::controllers::interactive::events::scroll_queue::{ScrollQueue, ScrollSender};
use crate::controllers::interactive::ports::{FramePresenterPort, NavigationSource};
use crate::core::actions::render_frame::{MandelbrotRenderPool, RenderPoolError};
use crate::core::config::ViewerConfig;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::navigation::{PanDirections, apply_pan, apply_zoom};

/// Owns the view state and the frame, and runs one synchronous pass per frame.
///
/// The viewport only changes inside [`FrameController::step`], before the
/// pass starts; scroll deltas queued since the last step are applied then.
pub struct FrameController {
    config: ViewerConfig,
    viewport: Viewport,
    frame: PixelBuffer,
    pool: MandelbrotRenderPool,
    scrolls: ScrollQueue,
    frame_index: u64,
}

impl FrameController {
    /// Starts the worker pool and renders the initial view.
    pub fn new(config: ViewerConfig) -> Result<Self, RenderPoolError> {
        let pool = config.build_render_pool()?;
        let viewport = config.initial_viewport();
        let frame = pool.render_frame(&viewport, config.size());

        info!(
            "frame controller ready: {}x{}, {} workers, cap {}",
            config.size().width(),
            config.size().height(),
            config.worker_count(),
            config.max_iterations()
        );

        Ok(Self {
            config,
            viewport,
            frame,
            pool,
            scrolls: ScrollQueue::new(),
            frame_index: 0,
        })
    }

    /// Like [`FrameController::new`], taking the output size from the presenter.
    pub fn for_presenter<P: FramePresenterPort>(
        config: ViewerConfig,
        presenter: &P,
    ) -> Result<Self, RenderPoolError> {
        Self::new(config.with_size(presenter.output_size()))
    }

    #[must_use]
    pub fn scroll_sender(&self) -> ScrollSender {
        self.scrolls.sender()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn frame(&self) -> &PixelBuffer {
        &self.frame
    }

    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Applies this frame's navigation, then re-renders the whole frame.
    ///
    /// Scrolls queued since the last frame land first, so the pan step is
    /// taken from the zoomed span.
    pub fn step(&mut self, directions: PanDirections) -> FrameStats {
        let mut zoom_steps = 0;
        for delta in self.scrolls.drain() {
            self.viewport = apply_zoom(self.viewport, delta, self.config.aspect_ratio());
            zoom_steps += 1;
        }

        self.viewport = apply_pan(self.viewport, directions);

        let start = Instant::now();
        self.pool.render_into(&self.viewport, &mut self.frame);
        let render_duration = start.elapsed();

        self.frame_index += 1;

        debug!(
            "frame {} rendered in {:?}: {}",
            self.frame_index, render_duration, self.viewport
        );

        FrameStats {
            frame_index: self.frame_index,
            viewport: self.viewport,
            zoom_steps,
            render_duration,
        }
    }

    /// One full frame: poll input, step, hand the finished frame over.
    pub fn present_next<S, P>(&mut self, source: &mut S, presenter: &mut P) -> Result<FrameStats, P::Error>
    where
        S: NavigationSource,
        P: FramePresenterPort,
    {
        let stats = self.step(source.poll_navigation());
        presenter.present(&self.frame, &stats)?;

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::frame_size::FrameSize;
    use crate::core::navigation::PanDirection;
    use std::fmt;
    use std::num::NonZeroUsize;

    const EPSILON: f64 = 1e-12;

    fn small_config() -> ViewerConfig {
        ViewerConfig::new(
            40,
            30,
            NonZeroUsize::new(4).unwrap(),
            50,
            Viewport::new(-2.0, 2.0, -2.0, 2.0).unwrap(),
        )
        .unwrap()
    }

    #[derive(Debug)]
    struct PresentFailed;

    impl fmt::Display for PresentFailed {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "present failed")
        }
    }

    impl std::error::Error for PresentFailed {}

    struct MockPresenter {
        size: FrameSize,
        presented: Vec<(usize, u64)>,
        fail: bool,
    }

    impl FramePresenterPort for MockPresenter {
        type Error = PresentFailed;

        fn output_size(&self) -> FrameSize {
            self.size
        }

        fn present(&mut self, frame: &PixelBuffer, stats: &FrameStats) -> Result<(), PresentFailed> {
            if self.fail {
                return Err(PresentFailed);
            }
            self.presented.push((frame.buffer_size(), stats.frame_index));
            Ok(())
        }
    }

    struct HeldKeys(PanDirections);

    impl NavigationSource for HeldKeys {
        fn poll_navigation(&mut self) -> PanDirections {
            self.0
        }
    }

    #[test]
    fn test_new_renders_initial_frame() {
        let controller = FrameController::new(small_config()).unwrap();

        assert_eq!(controller.frame().buffer_size(), 40 * 30 * 3);
        assert_eq!(controller.viewport(), small_config().initial_viewport());
        // (20, 15) samples the origin.
        assert_eq!(controller.frame().pixel(20, 15).map(|c| c.r), Some(255));
    }

    #[test]
    fn test_step_without_input_keeps_viewport_and_frame() {
        let mut controller = FrameController::new(small_config()).unwrap();
        let before = controller.frame().clone();

        let stats = controller.step(PanDirections::none());

        assert_eq!(stats.frame_index, 1);
        assert_eq!(stats.zoom_steps, 0);
        assert_eq!(controller.viewport(), small_config().initial_viewport());
        assert_eq!(controller.frame(), &before);
    }

    #[test]
    fn test_step_applies_pan() {
        let mut controller = FrameController::new(small_config()).unwrap();

        let stats = controller.step(PanDirections::none().with(PanDirection::Right));

        assert!((stats.viewport.min_real() - -1.6).abs() < EPSILON);
        assert!((stats.viewport.max_real() - 2.4).abs() < EPSILON);
        assert_eq!(controller.viewport(), stats.viewport);
    }

    #[test]
    fn test_queued_scrolls_apply_on_next_step() {
        let mut controller = FrameController::new(small_config()).unwrap();
        let sender = controller.scroll_sender();

        sender.send(1.0);
        sender.send(1.0);
        assert_eq!(controller.viewport(), small_config().initial_viewport());

        let stats = controller.step(PanDirections::none());

        assert_eq!(stats.zoom_steps, 2);
        assert!((stats.viewport.real_span() - 4.0 * 0.9 * 0.9).abs() < EPSILON);
        assert!((stats.viewport.aspect_ratio() - 40.0 / 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_pan_step_uses_span_after_queued_zoom() {
        let mut controller = FrameController::new(small_config()).unwrap();
        controller.scroll_sender().send(1.0);

        let stats = controller.step(PanDirections::none().with(PanDirection::Right));

        // Zoom in to a 3.6 x 2.7 view about the origin, then move right by 0.36.
        assert_eq!(stats.zoom_steps, 1);
        assert!((stats.viewport.min_real() - -1.44).abs() < EPSILON);
        assert!((stats.viewport.max_real() - 2.16).abs() < EPSILON);
        assert!((stats.viewport.min_imag() - -1.35).abs() < EPSILON);
        assert!((stats.viewport.max_imag() - 1.35).abs() < EPSILON);
    }

    #[test]
    fn test_step_frame_matches_fresh_render_of_same_view() {
        let mut controller = FrameController::new(small_config()).unwrap();
        controller.scroll_sender().send(1.0);
        controller.step(PanDirections::none().with(PanDirection::Up));

        let fresh = FrameController::new(
            ViewerConfig::new(
                40,
                30,
                NonZeroUsize::new(1).unwrap(),
                50,
                controller.viewport(),
            )
            .unwrap(),
        )
        .unwrap();

        assert_eq!(controller.frame(), fresh.frame());
    }

    #[test]
    fn test_present_next_hands_frame_to_presenter() {
        let mut presenter = MockPresenter {
            size: FrameSize::new(16, 12).unwrap(),
            presented: Vec::new(),
            fail: false,
        };
        let mut controller = FrameController::for_presenter(small_config(), &presenter).unwrap();
        let mut keys = HeldKeys(PanDirections::none().with(PanDirection::Down));

        controller.present_next(&mut keys, &mut presenter).unwrap();
        controller.present_next(&mut keys, &mut presenter).unwrap();

        assert_eq!(presenter.presented, vec![(16 * 12 * 3, 1), (16 * 12 * 3, 2)]);
        assert!(controller.viewport().max_imag() < 2.0);
    }

    #[test]
    fn test_present_next_propagates_presenter_error() {
        let mut presenter = MockPresenter {
            size: FrameSize::new(8, 8).unwrap(),
            presented: Vec::new(),
            fail: true,
        };
        let mut controller = FrameController::for_presenter(small_config(), &presenter).unwrap();

        let result = controller.present_next(&mut HeldKeys(PanDirections::none()), &mut presenter);

        assert!(result.is_err());
    }
}
