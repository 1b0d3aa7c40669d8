//! Terminal event handling using crossterm EventStream.

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use termfolio_core::InputEvent;

/// High-level actions the TUI can perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Input(InputEvent),
}

/// Reads terminal events asynchronously using crossterm's EventStream.
pub struct EventHandler {
    stream: EventStream,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            stream: EventStream::new(),
        }
    }

    /// Read the next terminal event. Returns None if the stream ends.
    pub async fn next(&mut self) -> Option<Event> {
        self.stream.next().await.and_then(|r| r.ok())
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a key event to an Action. Returns None for keys the prompt
/// ignores (release events, unmapped control combos, function keys).
pub fn map_key(event: &KeyEvent) -> Option<Action> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(Action::Quit),
            KeyCode::Char('l') => Some(Action::Input(InputEvent::ClearScreen)),
            _ => None,
        };
    }

    match event.code {
        KeyCode::Enter => Some(Action::Input(InputEvent::Enter)),
        KeyCode::Tab => Some(Action::Input(InputEvent::Tab)),
        KeyCode::Backspace => Some(Action::Input(InputEvent::Backspace)),
        KeyCode::Esc => Some(Action::Input(InputEvent::Esc)),
        KeyCode::Up => Some(Action::Input(InputEvent::Up)),
        KeyCode::Down => Some(Action::Input(InputEvent::Down)),
        KeyCode::Char(c) => Some(Action::Input(InputEvent::Char(c))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_ctrl_c_quits() {
        assert_eq!(map_key(&ctrl(KeyCode::Char('c'))), Some(Action::Quit));
    }

    #[test]
    fn test_ctrl_d_quits() {
        assert_eq!(map_key(&ctrl(KeyCode::Char('d'))), Some(Action::Quit));
    }

    #[test]
    fn test_ctrl_l_clears_screen() {
        assert_eq!(
            map_key(&ctrl(KeyCode::Char('l'))),
            Some(Action::Input(InputEvent::ClearScreen))
        );
    }

    #[test]
    fn test_unmapped_ctrl_combo_is_ignored() {
        assert_eq!(map_key(&ctrl(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_plain_char_is_input() {
        assert_eq!(
            map_key(&key(KeyCode::Char('a'))),
            Some(Action::Input(InputEvent::Char('a')))
        );
    }

    #[test]
    fn test_shifted_char_is_input() {
        let event = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(map_key(&event), Some(Action::Input(InputEvent::Char('A'))));
    }

    #[test]
    fn test_editing_keys_map_to_input_events() {
        assert_eq!(
            map_key(&key(KeyCode::Enter)),
            Some(Action::Input(InputEvent::Enter))
        );
        assert_eq!(
            map_key(&key(KeyCode::Tab)),
            Some(Action::Input(InputEvent::Tab))
        );
        assert_eq!(
            map_key(&key(KeyCode::Backspace)),
            Some(Action::Input(InputEvent::Backspace))
        );
        assert_eq!(
            map_key(&key(KeyCode::Esc)),
            Some(Action::Input(InputEvent::Esc))
        );
        assert_eq!(
            map_key(&key(KeyCode::Up)),
            Some(Action::Input(InputEvent::Up))
        );
        assert_eq!(
            map_key(&key(KeyCode::Down)),
            Some(Action::Input(InputEvent::Down))
        );
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut event = key(KeyCode::Char('a'));
        event.kind = KeyEventKind::Release;
        assert_eq!(map_key(&event), None);
    }

    #[test]
    fn test_function_keys_are_ignored() {
        assert_eq!(map_key(&key(KeyCode::F(1))), None);
        assert_eq!(map_key(&key(KeyCode::Home)), None);
    }
}
