//! Theme system for TUI colors and styles
//!
//! Defines color constants consistent with the CLI output (commands/mod.rs).

use iocraft::prelude::Color;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,

    // Field colors (consistent with the CLI)
    pub id_color: Color,
    pub date_color: Color,
    pub title_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            highlight: Color::Blue,
            highlight_text: Color::White,

            id_color: Color::Cyan,
            date_color: Color::Magenta,
            title_color: Color::White,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
