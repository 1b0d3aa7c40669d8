//! The scrollback pane: executed commands and their toned output.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;
use termfolio_core::session::InputSession;

use crate::tui::theme::TuiTheme;

/// Flatten the session log into styled lines: for each entry, an echoed
/// prompt line (skipped for the seeded welcome block) followed by the
/// command's output and a spacer.
pub fn log_lines(session: &InputSession, theme: &TuiTheme) -> Vec<Line<'static>> {
    let prompt = session.config().prompt();
    let mut lines = Vec::new();

    for entry in session.log() {
        if !entry.raw_command.is_empty() {
            lines.push(Line::from(vec![
                Span::styled(prompt.clone(), theme.prompt_style()),
                Span::raw(" "),
                Span::styled(entry.raw_command.clone(), theme.tone_style(Default::default())),
            ]));
        }
        for line in &entry.output.lines {
            lines.push(styled_line(line, theme));
        }
        lines.push(Line::default());
    }

    lines
}

fn styled_line(line: &termfolio_core::Line, theme: &TuiTheme) -> Line<'static> {
    Line::from(
        line.spans
            .iter()
            .map(|span| Span::styled(span.text.clone(), theme.tone_style(span.tone)))
            .collect::<Vec<_>>(),
    )
}

/// Render the log bottom-anchored: when it outgrows the area, the oldest
/// lines scroll off the top.
pub fn render(frame: &mut Frame, area: Rect, session: &InputSession, theme: &TuiTheme) {
    let lines = log_lines(session, theme);
    let overflow = lines.len().saturating_sub(area.height as usize);
    let paragraph = Paragraph::new(Text::from(lines))
        .style(theme.base_style())
        .scroll((overflow as u16, 0));
    frame.render_widget(paragraph, area);
}
