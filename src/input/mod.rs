//! Input adapters for the viewer.
//!
//! This module contains adapters that receive input from the windowing
//! toolkit and translate it into navigation for the frame loop.

#[cfg(feature = "gui")]
pub mod gui;
