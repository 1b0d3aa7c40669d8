//! Maps core palettes onto ratatui styles.
//!
//! The interpreter core stores colors as hex strings and tags output
//! spans with semantic tones; this module resolves both into concrete
//! `ratatui` styles for the active theme.

use ratatui::style::{Color, Modifier, Style};
use termfolio_core::theme::ThemePalette;
use termfolio_core::Tone;

/// Resolved color set for the active theme.
#[derive(Debug, Clone)]
pub struct TuiTheme {
    pub name: String,
    pub bg: Color,
    pub bg_secondary: Color,
    pub border: Color,
    pub text: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub error: Color,
    pub success: Color,
    pub info: Color,
    pub cursor: Color,
}

/// Parse a `#rrggbb` hex string into an RGB color.
pub fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

fn hex_or_reset(hex: &str) -> Color {
    parse_hex(hex).unwrap_or(Color::Reset)
}

impl TuiTheme {
    /// Resolve a core palette into terminal colors. Malformed hex values
    /// fall back to the terminal default rather than failing the render.
    pub fn from_palette(palette: &ThemePalette) -> Self {
        let colors = &palette.colors;
        Self {
            name: palette.name.clone(),
            bg: hex_or_reset(&colors.background),
            bg_secondary: hex_or_reset(&colors.background_secondary),
            border: hex_or_reset(&colors.border),
            text: hex_or_reset(&colors.text),
            text_muted: hex_or_reset(&colors.text_muted),
            primary: hex_or_reset(&colors.primary),
            secondary: hex_or_reset(&colors.secondary),
            accent: hex_or_reset(&colors.accent),
            error: hex_or_reset(&colors.error),
            success: hex_or_reset(&colors.success),
            info: hex_or_reset(&colors.info),
            cursor: hex_or_reset(&colors.cursor),
        }
    }

    /// Theme used when no palette resolves. Terminal defaults only.
    pub fn fallback() -> Self {
        Self {
            name: "fallback".to_string(),
            bg: Color::Reset,
            bg_secondary: Color::Reset,
            border: Color::DarkGray,
            text: Color::Reset,
            text_muted: Color::DarkGray,
            primary: Color::Yellow,
            secondary: Color::Yellow,
            accent: Color::White,
            error: Color::Red,
            success: Color::Green,
            info: Color::Blue,
            cursor: Color::Reset,
        }
    }

    /// Style for one semantic output tone.
    pub fn tone_style(&self, tone: Tone) -> Style {
        let fg = match tone {
            Tone::Text => self.text,
            Tone::Muted => self.text_muted,
            Tone::Primary => self.primary,
            Tone::Secondary => self.secondary,
            Tone::Accent => self.accent,
            Tone::Error => self.error,
            Tone::Success => self.success,
            Tone::Info => self.info,
        };
        Style::default().fg(fg)
    }

    pub fn base_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.bg)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn popup_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.bg_secondary)
    }

    pub fn selection_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn prompt_style(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use termfolio_core::ThemeSet;

    #[test]
    fn test_parse_hex_valid() {
        assert_eq!(parse_hex("#ffb000"), Some(Color::Rgb(255, 176, 0)));
        assert_eq!(parse_hex("#000000"), Some(Color::Rgb(0, 0, 0)));
        assert_eq!(parse_hex("#FFFFFF"), Some(Color::Rgb(255, 255, 255)));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert_eq!(parse_hex("ffb000"), None);
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
        assert_eq!(parse_hex(""), None);
    }

    #[test]
    fn test_from_palette_resolves_amber() {
        let themes = ThemeSet::builtin();
        let amber = themes.get("amber").unwrap();
        let theme = TuiTheme::from_palette(amber);
        assert_eq!(theme.name, "amber");
        assert_eq!(theme.text, Color::Rgb(255, 176, 0));
        assert_eq!(theme.bg, Color::Rgb(26, 26, 26));
    }

    #[test]
    fn test_every_builtin_palette_resolves_fully() {
        let themes = ThemeSet::builtin();
        for palette in themes.all() {
            let theme = TuiTheme::from_palette(palette);
            // Every color role must parse; Reset would mean a bad hex
            // string in the palette table.
            for color in [
                theme.bg,
                theme.border,
                theme.text,
                theme.text_muted,
                theme.primary,
                theme.accent,
                theme.error,
                theme.success,
                theme.info,
            ] {
                assert!(
                    matches!(color, Color::Rgb(..)),
                    "unparsed color in palette {}",
                    palette.name
                );
            }
        }
    }

    #[test]
    fn test_tone_styles_use_palette_colors() {
        let themes = ThemeSet::builtin();
        let theme = TuiTheme::from_palette(themes.get("green").unwrap());
        assert_eq!(theme.tone_style(Tone::Text).fg, Some(theme.text));
        assert_eq!(theme.tone_style(Tone::Error).fg, Some(theme.error));
        assert_eq!(theme.tone_style(Tone::Muted).fg, Some(theme.text_muted));
    }
}
