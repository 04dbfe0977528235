//! Color themes

mod palettes;

pub use palettes::{LEDGER, PAPER};

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::course::ModuleKind;

/// A color theme for the application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,

    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,

    // Foreground colors
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // Module kinds
    pub kind_video: Color,
    pub kind_reading: Color,
    pub kind_interactive: Color,
    pub kind_quiz: Color,

    // UI elements
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
    pub gauge_track: Color,
}

impl Theme {
    pub fn ledger() -> Self {
        Theme { name: "Ledger".to_string(), ..LEDGER }
    }

    pub fn paper() -> Self {
        Theme { name: "Paper".to_string(), ..PAPER }
    }

    /// Built-in theme by name (case-insensitive), if there is one
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "ledger" => Some(Self::ledger()),
            "paper" => Some(Self::paper()),
            _ => None,
        }
    }

    /// Badge color for a module kind
    pub fn kind_color(&self, kind: ModuleKind) -> Color {
        match kind {
            ModuleKind::Video => self.kind_video,
            ModuleKind::Reading => self.kind_reading,
            ModuleKind::Interactive => self.kind_interactive,
            ModuleKind::Quiz => self.kind_quiz,
        }
    }

    /// Color for a 0-100 score: green when passing, amber when close, red otherwise
    pub fn grade_color(&self, grade: u8) -> Color {
        match grade {
            90..=u8::MAX => self.success,
            80..=89 => self.warning,
            _ => self.error,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::ledger()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_ledger() {
        assert_eq!(Theme::default().name, "Ledger");
    }

    #[test]
    fn lookup_by_name_ignores_case() {
        assert_eq!(Theme::by_name("PAPER").map(|t| t.name), Some("Paper".to_string()));
        assert!(Theme::by_name("solarized").is_none());
    }

    #[test]
    fn module_kinds_have_distinct_colors() {
        let theme = Theme::ledger();
        let colors = [
            theme.kind_color(ModuleKind::Video),
            theme.kind_color(ModuleKind::Reading),
            theme.kind_color(ModuleKind::Interactive),
            theme.kind_color(ModuleKind::Quiz),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn grade_colors() {
        let theme = Theme::ledger();
        assert_eq!(theme.grade_color(95), theme.success);
        assert_eq!(theme.grade_color(80), theme.warning);
        assert_eq!(theme.grade_color(42), theme.error);
    }
}
