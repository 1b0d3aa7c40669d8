//! Rendering widgets for the termfolio TUI.

pub mod output_view;
pub mod prompt;
pub mod suggestions;
