//! Interactive session state machine.
//!
//! [`InputSession`] owns everything the prompt needs between keystrokes:
//! the edit buffer, the suggestion dropdown, the recall history and the
//! displayed output log. The host feeds it decoded [`InputEvent`]s and
//! renders whatever state results; external side effects come back as
//! [`Effect`] descriptors for the host to perform.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::commands::{self, HandlerContext};
use crate::completion::{self, Suggestion};
use crate::config::PortfolioConfig;
use crate::history::HistoryTracker;
use crate::output::{CommandOutcome, Effect, Output, Span};
use crate::registry::{CLEAR_COMMAND, CommandKind, CommandRegistry};
use crate::theme::{ThemePalette, ThemeSet};

/// Decoded input event, terminal-backend agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Char(char),
    Backspace,
    Tab,
    Enter,
    Esc,
    Up,
    Down,
    /// Ctrl+L shortcut, equivalent to submitting `clear`.
    ClearScreen,
}

/// One executed command and its rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// The command as typed (empty for the seeded welcome block).
    pub raw_command: String,
    pub output: Output,
    pub executed_at: DateTime<Utc>,
}

/// Full interpreter state for one visitor session.
pub struct InputSession {
    config: PortfolioConfig,
    themes: ThemeSet,
    registry: CommandRegistry,
    buffer: String,
    history: HistoryTracker,
    suggestions: Vec<Suggestion>,
    suggestions_visible: bool,
    selected_suggestion: usize,
    log: Vec<LogEntry>,
    current_theme: String,
}

impl InputSession {
    /// Start a session with the welcome block pre-seeded into the log.
    ///
    /// `initial_theme` is validated against the theme table; unknown
    /// names fall back to the default palette.
    pub fn new(config: PortfolioConfig, themes: ThemeSet, initial_theme: Option<&str>) -> Self {
        let current_theme = initial_theme
            .filter(|name| themes.get(name).is_some())
            .unwrap_or_else(|| themes.default_name())
            .to_string();

        let mut session = Self {
            config,
            themes,
            registry: CommandRegistry::with_defaults(),
            buffer: String::new(),
            history: HistoryTracker::new(),
            suggestions: Vec::new(),
            suggestions_visible: false,
            selected_suggestion: 0,
            log: Vec::new(),
            current_theme,
        };

        let welcome = commands::execute(CommandKind::Welcome, &[], &session.handler_context());
        session.log.push(LogEntry {
            raw_command: String::new(),
            output: welcome.output,
            executed_at: Utc::now(),
        });
        session
    }

    pub fn config(&self) -> &PortfolioConfig {
        &self.config
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn suggestions_visible(&self) -> bool {
        self.suggestions_visible && !self.suggestions.is_empty()
    }

    pub fn selected_suggestion(&self) -> usize {
        self.selected_suggestion
    }

    pub fn current_theme(&self) -> &str {
        &self.current_theme
    }

    /// Palette for the active theme. `None` only if the theme table was
    /// constructed without the active name, which `new` prevents.
    pub fn current_palette(&self) -> Option<&ThemePalette> {
        self.themes.get(&self.current_theme)
    }

    /// Apply one input event. Returns an effect when the host must act
    /// (open a URL, persist a theme change, re-skin the screen).
    pub fn handle_event(&mut self, event: InputEvent) -> Option<Effect> {
        match event {
            InputEvent::Char(c) => {
                self.buffer.push(c);
                self.on_text_edit();
                None
            }
            InputEvent::Backspace => {
                self.buffer.pop();
                self.on_text_edit();
                None
            }
            InputEvent::Tab => {
                self.on_tab();
                None
            }
            InputEvent::Enter => self.submit(),
            InputEvent::Esc => {
                self.buffer.clear();
                self.close_suggestions();
                None
            }
            InputEvent::Up => {
                self.on_up();
                None
            }
            InputEvent::Down => {
                self.on_down();
                None
            }
            InputEvent::ClearScreen => {
                self.log.clear();
                None
            }
        }
    }

    /// Recompute live suggestions after the buffer text changed.
    ///
    /// Editing always leaves history browse mode; an empty buffer closes
    /// the dropdown.
    fn on_text_edit(&mut self) {
        self.history.reset();
        if self.buffer.trim().is_empty() {
            self.close_suggestions();
            return;
        }
        self.suggestions = completion::prefix(&self.buffer, &self.registry);
        self.suggestions_visible = !self.suggestions.is_empty();
        self.selected_suggestion = 0;
    }

    /// Tab: argument-aware completion first, then the visible dropdown.
    ///
    /// A single argument-aware candidate is accepted immediately with a
    /// trailing space; several candidates open the dropdown. With no
    /// argument-aware result, Tab accepts the selected visible suggestion.
    fn on_tab(&mut self) {
        let argument = completion::argument_aware(&self.buffer, &self.config, &self.themes);
        match argument.len() {
            0 => {
                if self.suggestions_visible() {
                    let accepted = self.suggestions[self.selected_suggestion].command.clone();
                    self.accept(&accepted);
                }
            }
            1 => {
                let accepted = argument[0].command.clone();
                self.accept(&accepted);
            }
            _ => {
                self.suggestions = argument;
                self.suggestions_visible = true;
                self.selected_suggestion = 0;
            }
        }
    }

    /// Replace the buffer with a completed command plus a trailing space
    /// and close the dropdown.
    fn accept(&mut self, command: &str) {
        self.buffer = format!("{command} ");
        self.close_suggestions();
    }

    fn on_up(&mut self) {
        if self.suggestions_visible() {
            let len = self.suggestions.len();
            self.selected_suggestion = self
                .selected_suggestion
                .checked_sub(1)
                .unwrap_or(len - 1);
            return;
        }
        let recalled = self
            .history
            .recall_previous(&self.buffer)
            .map(str::to_string);
        if let Some(entry) = recalled {
            self.buffer = entry;
        }
    }

    fn on_down(&mut self) {
        if self.suggestions_visible() {
            self.selected_suggestion = (self.selected_suggestion + 1) % self.suggestions.len();
            return;
        }
        if let Some(entry) = self.history.recall_next() {
            self.buffer = entry;
        }
    }

    /// Enter: execute the buffer. Suggestions never intercept Enter.
    fn submit(&mut self) -> Option<Effect> {
        let trimmed = self.buffer.trim().to_string();
        self.buffer.clear();
        self.close_suggestions();
        self.history.reset();

        if trimmed.is_empty() {
            return None;
        }

        let mut tokens = trimmed.split_whitespace();
        let typed_name = tokens.next()?;
        let args: Vec<&str> = tokens.collect();
        let normalized = typed_name.to_lowercase();
        debug!(command = %normalized, args = args.len(), "executing command");

        let outcome = match self.registry.lookup(&normalized) {
            Some(spec) => {
                let kind = spec.kind;
                commands::execute(kind, &args, &self.handler_context())
            }
            None => CommandOutcome::output(command_not_found(typed_name)),
        };

        match &outcome.effect {
            Some(Effect::ClearScreen) => self.log.clear(),
            Some(Effect::ThemeChanged(name)) => self.current_theme = name.clone(),
            Some(Effect::OpenUrl(_)) | None => {}
        }

        // `clear` leaves no trace: neither in the log nor in recall.
        if normalized != CLEAR_COMMAND {
            self.log.push(LogEntry {
                raw_command: trimmed.clone(),
                output: outcome.output,
                executed_at: Utc::now(),
            });
            self.history.record(&trimmed);
        }

        outcome.effect
    }

    fn close_suggestions(&mut self) {
        self.suggestions.clear();
        self.suggestions_visible = false;
        self.selected_suggestion = 0;
    }

    fn handler_context(&self) -> HandlerContext<'_> {
        HandlerContext {
            config: &self.config,
            themes: &self.themes,
            registry: &self.registry,
            recall_history: self.history.entries(),
            current_theme: &self.current_theme,
        }
    }
}

fn command_not_found(typed: &str) -> Output {
    Output::new().line(vec![
        Span::error(format!("Command not found: {typed}. Type ")),
        Span::accent("help"),
        Span::error(" for available commands."),
    ])
}
