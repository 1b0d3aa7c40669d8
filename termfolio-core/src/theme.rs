//! Theme palette table.
//!
//! A fixed set of named phosphor-style palettes. Colors are stored as hex
//! strings and stay presentation-agnostic; the host maps them onto its
//! rendering backend. Lookup keys are the short lower-case names the
//! visitor types (`themes set amber`).

use serde::{Deserialize, Serialize};

/// Color roles of one palette, as `#rrggbb` hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColors {
    pub background: String,
    pub background_secondary: String,
    pub border: String,
    pub text: String,
    pub text_muted: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub error: String,
    pub success: String,
    pub warning: String,
    pub info: String,
    pub cursor: String,
}

/// A named theme palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePalette {
    /// Short lookup key, e.g. "amber".
    pub name: String,
    /// Human-readable label, e.g. "Amber Phosphor".
    pub label: String,
    pub colors: PaletteColors,
}

macro_rules! palette {
    ($name:literal, $label:literal, bg=$bg:literal, bg2=$bg2:literal, border=$border:literal,
     text=$text:literal, muted=$muted:literal, primary=$primary:literal,
     secondary=$secondary:literal, accent=$accent:literal, error=$error:literal,
     success=$success:literal, warning=$warning:literal, info=$info:literal,
     cursor=$cursor:literal) => {
        ThemePalette {
            name: $name.to_string(),
            label: $label.to_string(),
            colors: PaletteColors {
                background: $bg.to_string(),
                background_secondary: $bg2.to_string(),
                border: $border.to_string(),
                text: $text.to_string(),
                text_muted: $muted.to_string(),
                primary: $primary.to_string(),
                secondary: $secondary.to_string(),
                accent: $accent.to_string(),
                error: $error.to_string(),
                success: $success.to_string(),
                warning: $warning.to_string(),
                info: $info.to_string(),
                cursor: $cursor.to_string(),
            },
        }
    };
}

/// Ordered, immutable set of available palettes.
#[derive(Debug, Clone)]
pub struct ThemeSet {
    palettes: Vec<ThemePalette>,
}

impl ThemeSet {
    /// The built-in palette table, in enumeration order.
    pub fn builtin() -> Self {
        Self {
            palettes: vec![
                palette!("amber", "Amber Phosphor",
                    bg = "#1a1a1a", bg2 = "#252525", border = "#3d3d3d",
                    text = "#ffb000", muted = "#996800", primary = "#ffb000",
                    secondary = "#cc8c00", accent = "#ffcc00", error = "#ff4444",
                    success = "#88bb44", warning = "#ffaa00", info = "#66aaff",
                    cursor = "#ffb000"),
                palette!("green", "Green Phosphor",
                    bg = "#0d1a0d", bg2 = "#142614", border = "#2d4a2d",
                    text = "#33ff33", muted = "#1a801a", primary = "#33ff33",
                    secondary = "#22cc22", accent = "#66ff66", error = "#ff3333",
                    success = "#44ff44", warning = "#ffff33", info = "#33ffff",
                    cursor = "#33ff33"),
                palette!("white", "White Phosphor",
                    bg = "#1a1a1a", bg2 = "#252525", border = "#3d3d3d",
                    text = "#e0e0e0", muted = "#808080", primary = "#e0e0e0",
                    secondary = "#a0a0a0", accent = "#ffffff", error = "#cc3333",
                    success = "#55aa55", warning = "#cc9900", info = "#6699cc",
                    cursor = "#e0e0e0"),
                palette!("ibm", "IBM Blue",
                    bg = "#0a0a14", bg2 = "#12121f", border = "#2a2a3d",
                    text = "#a0c0ff", muted = "#6080aa", primary = "#a0c0ff",
                    secondary = "#80a0dd", accent = "#c0d8ff", error = "#ff6666",
                    success = "#66cc88", warning = "#ffcc66", info = "#88ccff",
                    cursor = "#a0c0ff"),
                palette!("paper", "Paper White",
                    bg = "#f5f5f0", bg2 = "#ebebe5", border = "#d0d0c8",
                    text = "#2a2a2a", muted = "#6a6a6a", primary = "#2a2a2a",
                    secondary = "#4a4a4a", accent = "#1a1a1a", error = "#aa3333",
                    success = "#338833", warning = "#aa6600", info = "#3355aa",
                    cursor = "#2a2a2a"),
                palette!("solarized", "Solarized Dark",
                    bg = "#002b36", bg2 = "#073642", border = "#586e75",
                    text = "#839496", muted = "#586e75", primary = "#b58900",
                    secondary = "#268bd2", accent = "#cb4b16", error = "#dc322f",
                    success = "#859900", warning = "#b58900", info = "#2aa198",
                    cursor = "#b58900"),
                palette!("monochrome", "Monochrome",
                    bg = "#000000", bg2 = "#111111", border = "#333333",
                    text = "#bbbbbb", muted = "#666666", primary = "#ffffff",
                    secondary = "#999999", accent = "#dddddd", error = "#ff0000",
                    success = "#00ff00", warning = "#ffff00", info = "#00ffff",
                    cursor = "#ffffff"),
            ],
        }
    }

    /// Name of the palette used when nothing was saved.
    pub fn default_name(&self) -> &str {
        "amber"
    }

    /// Exact-match lookup by short name.
    pub fn get(&self, name: &str) -> Option<&ThemePalette> {
        self.palettes.iter().find(|palette| palette.name == name)
    }

    /// Palette names in enumeration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.palettes.iter().map(|palette| palette.name.as_str())
    }

    /// All palettes in enumeration order.
    pub fn all(&self) -> &[ThemePalette] {
        &self.palettes
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}

impl Default for ThemeSet {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_seven_palettes() {
        let themes = ThemeSet::builtin();
        assert_eq!(themes.len(), 7);
    }

    #[test]
    fn test_enumeration_order_is_stable() {
        let themes = ThemeSet::builtin();
        let names: Vec<&str> = themes.names().collect();
        assert_eq!(
            names,
            vec!["amber", "green", "white", "ibm", "paper", "solarized", "monochrome"]
        );
    }

    #[test]
    fn test_default_name_resolves() {
        let themes = ThemeSet::builtin();
        assert!(themes.get(themes.default_name()).is_some());
    }

    #[test]
    fn test_get_known_palette() {
        let themes = ThemeSet::builtin();
        let green = themes.get("green").expect("green palette");
        assert_eq!(green.label, "Green Phosphor");
        assert_eq!(green.colors.text, "#33ff33");
    }

    #[test]
    fn test_get_is_case_sensitive() {
        let themes = ThemeSet::builtin();
        assert!(themes.get("Amber").is_none());
        assert!(themes.get("amber").is_some());
    }

    #[test]
    fn test_get_unknown_returns_none() {
        let themes = ThemeSet::builtin();
        assert!(themes.get("neon").is_none());
    }
}
