//! Presentation without a window: scripted input and per-frame summaries.

pub mod scripted;

pub use scripted::{FrameSummary, ScriptStep, ScriptedNavigation, SummaryPresenter};
