//! Presentation-agnostic output model for command handlers.
//!
//! Handlers never touch the terminal. They return an [`Output`] — an
//! ordered list of lines of toned spans — plus an optional [`Effect`]
//! descriptor for the one external action a command may request (opening
//! a URL, switching the theme, clearing the screen). The host decides how
//! tones map onto the active palette and actually performs the effects.

use serde::{Deserialize, Serialize};

/// Semantic color role for a span of text.
///
/// Tones are resolved against the active theme palette by the
/// presentation layer; the interpreter only deals in roles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Text,
    Muted,
    Primary,
    Secondary,
    Accent,
    Error,
    Success,
    Info,
}

/// A run of text with a single tone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Text)
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Muted)
    }

    pub fn primary(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Primary)
    }

    pub fn secondary(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Secondary)
    }

    pub fn accent(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Accent)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Error)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Success)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Info)
    }
}

/// One output line, composed of ordered spans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// An empty spacer line.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Concatenated plain text of the line, tones discarded.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

impl From<Span> for Line {
    fn from(span: Span) -> Self {
        Self { spans: vec![span] }
    }
}

impl From<Vec<Span>> for Line {
    fn from(spans: Vec<Span>) -> Self {
        Self { spans }
    }
}

/// Structured output returned by a command handler.
///
/// May be empty: `clear` produces no visible output, only an effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    pub lines: Vec<Line>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style line append.
    pub fn line(mut self, line: impl Into<Line>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn push(&mut self, line: impl Into<Line>) {
        self.lines.push(line.into());
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Single-line error output.
    pub fn error_message(text: impl Into<String>) -> Self {
        Self::new().line(Span::error(text))
    }
}

/// External side effect requested by a handler.
///
/// The interpreter itself never performs these; it records the request
/// and hands it to the host. Effects are fire-and-forget: a host failure
/// does not roll back the history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Effect {
    /// Open an external link in the visitor's browser.
    OpenUrl(String),
    /// The active theme changed; the host should re-skin and persist.
    ThemeChanged(String),
    /// Empty the displayed output log (raw recall history untouched).
    ClearScreen,
}

/// Display payload plus optional effect descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    pub output: Output,
    pub effect: Option<Effect>,
}

impl CommandOutcome {
    pub fn output(output: Output) -> Self {
        Self {
            output,
            effect: None,
        }
    }

    pub fn with_effect(output: Output, effect: Effect) -> Self {
        Self {
            output,
            effect: Some(effect),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_line_plain_text_joins_spans() {
        let line = Line::new(vec![Span::primary("help"), Span::muted(" — show commands")]);
        assert_eq!(line.plain_text(), "help — show commands");
    }

    #[test]
    fn test_output_builder_preserves_order() {
        let output = Output::new()
            .line(Span::accent("first"))
            .line(Line::blank())
            .line(Span::text("third"));
        assert_eq!(output.lines.len(), 3);
        assert_eq!(output.lines[0].plain_text(), "first");
        assert_eq!(output.lines[1].plain_text(), "");
        assert_eq!(output.lines[2].plain_text(), "third");
    }

    #[test]
    fn test_error_message_uses_error_tone() {
        let output = Output::error_message("Command not found: foo");
        assert_eq!(output.lines.len(), 1);
        assert_eq!(output.lines[0].spans[0].tone, Tone::Error);
    }

    #[test]
    fn test_effect_serializes_as_tagged_json() {
        let effect = Effect::ThemeChanged("green".into());
        let json = serde_json::to_string(&effect).unwrap();
        assert_eq!(json, r#"{"kind":"theme_changed","value":"green"}"#);

        let clear = serde_json::to_string(&Effect::ClearScreen).unwrap();
        assert_eq!(clear, r#"{"kind":"clear_screen"}"#);
    }

    #[test]
    fn test_outcome_without_effect() {
        let outcome = CommandOutcome::output(Output::new());
        assert!(outcome.effect.is_none());
    }

    #[test]
    fn test_outcome_with_effect() {
        let outcome = CommandOutcome::with_effect(
            Output::new(),
            Effect::OpenUrl("https://example.com".into()),
        );
        assert_eq!(
            outcome.effect,
            Some(Effect::OpenUrl("https://example.com".into()))
        );
    }
}
