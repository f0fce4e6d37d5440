//! Theme system for consistent UI colors across dark and light terminals.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights, selections, and focus states
    pub accent: Color,
    /// Success state color for confirmations
    pub success: Color,
    /// Error state color for validation errors
    pub error: Color,
    /// Warning state color
    pub warning: Color,
    /// Primary text content color
    pub text: Color,
    /// Muted text color for help text and dim content
    pub text_muted: Color,
    /// Main background color
    pub background: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,
    /// Radar chart polygon and marker color
    pub chart: Color,
    /// Radar chart grid ring color
    pub chart_grid: Color,
}

impl Theme {
    /// Resolves the theme from a configured mode, detecting the OS theme
    /// for [`ThemeMode::Auto`] via the `dark-light` crate.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
            ThemeMode::Auto => match dark_light::detect() {
                Ok(dark_light::Mode::Light) => Self::light(),
                // Dark theme for dark mode, unspecified, or detection errors
                Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => {
                    Self::dark()
                }
            },
        }
    }

    /// Dark theme for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            text: Color::White,
            text_muted: Color::DarkGray,
            background: Color::Black,
            highlight_bg: Color::DarkGray,
            chart: Color::Magenta,
            chart_grid: Color::DarkGray,
        }
    }

    /// Light theme for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0),
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0),
            text: Color::Black,
            text_muted: Color::Gray,
            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
            chart: Color::Rgb(136, 132, 216),
            chart_grid: Color::Gray,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_mode(ThemeMode::Auto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_contrast() {
        let theme = Theme::dark();
        assert_eq!(theme.text, Color::White);
        assert_eq!(theme.background, Color::Black);
    }

    #[test]
    fn test_light_theme_contrast() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
        assert_eq!(theme.background, Color::White);
        // Yellow accents wash out on white
        assert_ne!(theme.accent, Color::Yellow);
    }

    #[test]
    fn test_explicit_modes() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }
}
