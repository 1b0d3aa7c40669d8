//! Main application loop: draw, read a key, feed the interpreter,
//! perform requested effects.

use crossterm::event::Event;
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Layout};
use tracing::{info, warn};

use termfolio_core::session::InputSession;
use termfolio_core::{Effect, PortfolioConfig, ThemeSet, ThemeStore};

use crate::tui::event::{Action, EventHandler, map_key};
use crate::tui::theme::TuiTheme;
use crate::tui::widgets;

pub struct App {
    session: InputSession,
    store: Option<ThemeStore>,
    theme: TuiTheme,
    events: EventHandler,
    should_quit: bool,
}

impl App {
    pub fn new(
        config: PortfolioConfig,
        themes: ThemeSet,
        store: Option<ThemeStore>,
        initial_theme: Option<&str>,
    ) -> Self {
        let session = InputSession::new(config, themes, initial_theme);
        let theme = session
            .current_palette()
            .map(TuiTheme::from_palette)
            .unwrap_or_else(TuiTheme::fallback);
        Self {
            session,
            store,
            theme,
            events: EventHandler::new(),
            should_quit: false,
        }
    }

    /// Main loop. Exits on Ctrl+C / Ctrl+D or when the event stream ends.
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        info!(theme = %self.theme.name, "session started");
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;

            let Some(event) = self.events.next().await else {
                break;
            };
            let Event::Key(key) = event else { continue };

            match map_key(&key) {
                Some(Action::Quit) => self.should_quit = true,
                Some(Action::Input(input)) => {
                    if let Some(effect) = self.session.handle_event(input) {
                        self.apply_effect(effect);
                    }
                }
                None => {}
            }
        }
        info!("session ended");
        Ok(())
    }

    /// Perform one effect the interpreter requested. Effects are fire
    /// and forget: failures are logged, the session state already moved
    /// on.
    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::OpenUrl(url) => {
                info!(%url, "opening external link");
                if let Err(err) = open::that_detached(&url) {
                    warn!(%url, error = %err, "failed to open link");
                }
            }
            Effect::ThemeChanged(name) => {
                if let Some(palette) = self.session.current_palette() {
                    self.theme = TuiTheme::from_palette(palette);
                }
                if let Some(store) = &self.store {
                    store.save_theme_best_effort(&name);
                }
            }
            // The session already emptied its log; the next draw shows
            // the blank screen.
            Effect::ClearScreen => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let [output_area, prompt_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

        widgets::output_view::render(frame, output_area, &self.session, &self.theme);
        widgets::prompt::render(frame, prompt_area, &self.session, &self.theme);
        widgets::suggestions::render(frame, prompt_area, &self.session, &self.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use termfolio_core::session::InputEvent;

    fn app() -> App {
        App::new(PortfolioConfig::default(), ThemeSet::builtin(), None, None)
    }

    #[test]
    fn test_new_app_uses_default_palette() {
        let app = app();
        assert_eq!(app.theme.name, "amber");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_initial_theme_is_respected() {
        let app = App::new(
            PortfolioConfig::default(),
            ThemeSet::builtin(),
            None,
            Some("solarized"),
        );
        assert_eq!(app.theme.name, "solarized");
    }

    #[test]
    fn test_theme_change_reskins_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::with_dir(dir.path());
        let mut app = App::new(
            PortfolioConfig::default(),
            ThemeSet::builtin(),
            Some(store.clone()),
            None,
        );

        for c in "themes set green".chars() {
            app.session.handle_event(InputEvent::Char(c));
        }
        let effect = app.session.handle_event(InputEvent::Enter);
        assert_eq!(effect, Some(Effect::ThemeChanged("green".into())));
        app.apply_effect(effect.unwrap());

        assert_eq!(app.theme.name, "green");
        assert_eq!(store.saved_theme(), Some("green".to_string()));
    }

    #[test]
    fn test_clear_effect_leaves_theme_untouched() {
        let mut app = app();
        app.apply_effect(Effect::ClearScreen);
        assert_eq!(app.theme.name, "amber");
    }

    #[test]
    fn test_draw_full_frame_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut app = app();
        for c in "th".chars() {
            app.session.handle_event(InputEvent::Char(c));
        }
        terminal.draw(|frame| app.draw(frame)).unwrap();
    }

    #[test]
    fn test_draw_tiny_terminal_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(10, 2);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let app = app();
        terminal.draw(|frame| app.draw(frame)).unwrap();
    }
}
