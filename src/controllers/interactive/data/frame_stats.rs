use std::time::Duration;

use crate::core::data::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub frame_index: u64,
    pub viewport: Viewport,
    pub zoom_steps: usize,
    pub render_duration: Duration,
}
