//! Traits the frame loop uses to talk to the presentation layer.

pub mod navigation_source;
pub mod presenter;

pub use navigation_source::NavigationSource;
pub use presenter::FramePresenterPort;
