//! Viewport navigation: pure pan and zoom transforms applied between passes.

pub mod pan;
pub mod zoom;

pub use pan::{PanDirection, PanDirections, apply_pan};
pub use zoom::apply_zoom;
