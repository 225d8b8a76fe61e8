//! Frame loop orchestration for interactive viewing.
//!
//! Follows the ports & adapters split:
//! - **Input**: a `NavigationSource` polled per frame plus queued scroll deltas
//! - **Output**: a `FramePresenterPort` that receives each finished frame
//! - **Core**: viewport transforms and the render pool from `core/`

mod controller;
pub mod data;
pub mod events;
pub mod ports;

pub use controller::FrameController;
pub use data::frame_stats::FrameStats;
pub use events::scroll_queue::{ScrollQueue, ScrollSender};
pub use ports::{FramePresenterPort, NavigationSource};
