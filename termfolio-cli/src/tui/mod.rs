//! TUI host for the termfolio interpreter.
//!
//! Owns the terminal lifecycle (raw mode, alternate screen), decodes key
//! events into interpreter input, renders the output log, the prompt
//! line, and the suggestion popup, and performs the effects the
//! interpreter requests.

pub mod app;
pub mod event;
pub mod theme;
pub mod widgets;

use app::App;
use termfolio_core::{PortfolioConfig, ThemeSet, ThemeStore};

/// Run the TUI application.
pub async fn run(
    config: PortfolioConfig,
    themes: ThemeSet,
    store: Option<ThemeStore>,
    initial_theme: Option<&str>,
) -> anyhow::Result<()> {
    // Setup terminal
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(std::io::stdout(), crossterm::terminal::EnterAlternateScreen)?;

    let backend = ratatui::backend::CrosstermBackend::new(std::io::stdout());
    let mut terminal = ratatui::Terminal::new(backend)?;
    terminal.clear()?;

    // Run app
    let mut app = App::new(config, themes, store, initial_theme);
    let result = app.run(&mut terminal).await;

    // Restore terminal
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
