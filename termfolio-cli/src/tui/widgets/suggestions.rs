//! Suggestion dropdown rendered above the prompt line.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};
use termfolio_core::session::InputSession;
use unicode_width::UnicodeWidthStr;

use crate::tui::theme::TuiTheme;

/// Maximum suggestion rows shown at once.
const MAX_VISIBLE: usize = 10;

/// Render the suggestion popup anchored above the prompt line. Does
/// nothing when the dropdown is closed.
pub fn render(frame: &mut Frame, anchor: Rect, session: &InputSession, theme: &TuiTheme) {
    if !session.suggestions_visible() {
        return;
    }
    let suggestions = session.suggestions();

    let rows = suggestions.len().min(MAX_VISIBLE);
    let height = rows as u16 + 2;
    let width = popup_width(session).min(anchor.width);

    let popup_y = anchor.y.saturating_sub(height);
    let popup_area = Rect::new(anchor.x, popup_y, width, height);

    frame.render_widget(Clear, popup_area);

    let items: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .map(|(i, suggestion)| {
            let (command_style, label_style) = if i == session.selected_suggestion() {
                (theme.selection_style(), theme.selection_style())
            } else {
                (
                    theme.tone_style(termfolio_core::Tone::Primary),
                    theme.tone_style(termfolio_core::Tone::Muted),
                )
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {}", suggestion.command), command_style),
                Span::styled(format!("  {}", suggestion.description), label_style),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .style(theme.popup_style());

    let mut state = ListState::default();
    state.select(Some(session.selected_suggestion()));

    let list = List::new(items).block(block);
    frame.render_stateful_widget(list, popup_area, &mut state);
}

/// Width of the widest `command  description` row plus padding and the
/// popup border.
fn popup_width(session: &InputSession) -> u16 {
    session
        .suggestions()
        .iter()
        .map(|s| s.command.width() + s.description.width() + 5)
        .max()
        .unwrap_or(0) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use termfolio_core::session::{InputEvent, InputSession};
    use termfolio_core::{PortfolioConfig, ThemeSet};

    fn session_with_input(input: &str) -> InputSession {
        let mut session =
            InputSession::new(PortfolioConfig::default(), ThemeSet::builtin(), None);
        for c in input.chars() {
            session.handle_event(InputEvent::Char(c));
        }
        session
    }

    fn theme() -> TuiTheme {
        let themes = ThemeSet::builtin();
        TuiTheme::from_palette(themes.get("monochrome").unwrap())
    }

    #[test]
    fn test_popup_width_covers_widest_row() {
        let session = session_with_input("h");
        let width = popup_width(&session) as usize;
        for suggestion in session.suggestions() {
            assert!(width >= suggestion.command.len() + suggestion.description.len());
        }
    }

    #[test]
    fn test_render_with_suggestions_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let session = session_with_input("h");
        assert!(session.suggestions_visible());
        let theme = theme();
        terminal
            .draw(|frame| {
                let anchor = Rect::new(0, 23, 80, 1);
                render(frame, anchor, &session, &theme);
            })
            .unwrap();
    }

    #[test]
    fn test_render_without_suggestions_is_noop() {
        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let session = session_with_input("");
        let theme = theme();
        terminal
            .draw(|frame| {
                let anchor = Rect::new(0, 23, 80, 1);
                render(frame, anchor, &session, &theme);
            })
            .unwrap();
    }

    #[test]
    fn test_render_dropdown_after_tab_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut session = session_with_input("themes set");
        session.handle_event(InputEvent::Tab);
        assert_eq!(session.suggestions().len(), 7);
        let theme = theme();
        terminal
            .draw(|frame| {
                let anchor = Rect::new(0, 23, 80, 1);
                render(frame, anchor, &session, &theme);
            })
            .unwrap();
    }
}
