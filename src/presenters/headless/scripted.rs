use std::collections::VecDeque;
use std::convert::Infallible;
use std::time::Duration;

use crate::controllers::interactive::{FramePresenterPort, FrameStats, NavigationSource, ScrollSender};
use crate::core::data::frame_size::FrameSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::navigation::{PanDirection, PanDirections};

/// Input for one scripted frame: keys held plus an optional wheel delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptStep {
    pub pan: PanDirections,
    pub scroll: Option<f64>,
}

impl ScriptStep {
    #[must_use]
    pub fn pan(direction: PanDirection) -> Self {
        Self {
            pan: PanDirections::none().with(direction),
            scroll: None,
        }
    }

    #[must_use]
    pub fn scroll(delta: f64) -> Self {
        Self {
            pan: PanDirections::none(),
            scroll: Some(delta),
        }
    }
}

/// Replays a fixed list of steps as if a user were at the keyboard.
/// Wheel deltas go through the scroll queue, like a real event callback.
pub struct ScriptedNavigation {
    steps: VecDeque<ScriptStep>,
    scroll: ScrollSender,
}

impl ScriptedNavigation {
    pub fn new(steps: impl IntoIterator<Item = ScriptStep>, scroll: ScrollSender) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            scroll,
        }
    }

    /// Pans towards the left of the set, then zooms in and back out.
    pub fn tour(scroll: ScrollSender) -> Self {
        let steps = std::iter::repeat_n(ScriptStep::pan(PanDirection::Left), 2)
            .chain(std::iter::repeat_n(ScriptStep::scroll(1.0), 12))
            .chain(std::iter::repeat_n(ScriptStep::pan(PanDirection::Up), 3))
            .chain(std::iter::repeat_n(ScriptStep::scroll(-1.0), 6));

        Self::new(steps, scroll)
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.steps.is_empty()
    }
}

impl NavigationSource for ScriptedNavigation {
    fn poll_navigation(&mut self) -> PanDirections {
        match self.steps.pop_front() {
            Some(step) => {
                if let Some(delta) = step.scroll {
                    self.scroll.send(delta);
                }
                step.pan
            }
            None => PanDirections::none(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSummary {
    pub frame_index: u64,
    pub render_duration: Duration,
    pub checksum: u64,
    pub mean_intensity: f64,
}

/// Collects a summary of every presented frame instead of drawing it.
#[derive(Debug)]
pub struct SummaryPresenter {
    size: FrameSize,
    summaries: Vec<FrameSummary>,
}

impl SummaryPresenter {
    #[must_use]
    pub fn new(size: FrameSize) -> Self {
        Self {
            size,
            summaries: Vec::new(),
        }
    }

    #[must_use]
    pub fn summaries(&self) -> &[FrameSummary] {
        &self.summaries
    }
}

impl FramePresenterPort for SummaryPresenter {
    type Error = Infallible;

    fn output_size(&self) -> FrameSize {
        self.size
    }

    fn present(&mut self, frame: &PixelBuffer, stats: &FrameStats) -> Result<(), Infallible> {
        let bytes = frame.buffer();
        let total: u64 = bytes.iter().map(|&b| u64::from(b)).sum();

        self.summaries.push(FrameSummary {
            frame_index: stats.frame_index,
            render_duration: stats.render_duration,
            checksum: fnv1a(bytes),
            mean_intensity: total as f64 / bytes.len() as f64,
        });

        Ok(())
    }
}

fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0xcbf2_9ce4_8422_2325, |hash, &b| {
        (hash ^ u64::from(b)).wrapping_mul(0x0000_0100_0000_01b3)
    })
}
