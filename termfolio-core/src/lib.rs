//! Core interpreter for a terminal-styled portfolio.
//!
//! This crate is the headless half of termfolio: a synchronous command
//! interpreter (line buffer, recall history, two-tier completion,
//! dispatch) with a presentation-agnostic output model. It never touches
//! the terminal; the `termfolio` binary hosts it behind a TUI.

pub mod commands;
pub mod completion;
pub mod config;
pub mod error;
pub mod history;
pub mod output;
pub mod persist;
pub mod registry;
pub mod session;
pub mod theme;

pub use completion::Suggestion;
pub use config::{PortfolioConfig, load_config};
pub use error::{ConfigError, Result, TermfolioError, ThemeError};
pub use history::HistoryTracker;
pub use output::{CommandOutcome, Effect, Line, Output, Span, Tone};
pub use persist::ThemeStore;
pub use registry::{CLEAR_COMMAND, CommandKind, CommandRegistry, CommandSpec};
pub use session::{InputEvent, InputSession, LogEntry};
pub use theme::{PaletteColors, ThemePalette, ThemeSet};
