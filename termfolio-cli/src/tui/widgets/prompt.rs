//! The live prompt line at the bottom of the screen.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use termfolio_core::session::InputSession;
use unicode_width::UnicodeWidthStr;

use crate::tui::theme::TuiTheme;

/// Render the prompt plus the edit buffer and place the hardware cursor
/// after the last typed character.
pub fn render(frame: &mut Frame, area: Rect, session: &InputSession, theme: &TuiTheme) {
    let prompt = session.config().prompt();
    let buffer = session.buffer().to_string();

    let cursor_x = cursor_offset(&prompt, &buffer).min(area.width.saturating_sub(1) as usize);

    let line = Line::from(vec![
        Span::styled(prompt, theme.prompt_style()),
        Span::raw(" "),
        Span::styled(buffer, theme.tone_style(Default::default())),
    ]);
    frame.render_widget(Paragraph::new(line).style(theme.base_style()), area);
    frame.set_cursor_position(Position::new(area.x + cursor_x as u16, area.y));
}

/// Display column of the cursor: prompt, one space, then the buffer,
/// measured in terminal cells (wide characters count as two).
fn cursor_offset(prompt: &str, buffer: &str) -> usize {
    prompt.width() + 1 + buffer.width()
}
