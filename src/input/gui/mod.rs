//! GUI input adapter: a winit window whose arrow keys and mouse wheel drive
//! the frame loop, drawn through the `pixels` presenter.

pub mod keyboard;
pub mod run_gui;

pub use run_gui::RunGuiCommand;
