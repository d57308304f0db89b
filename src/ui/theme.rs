use ratatui::style::Color;

/// Colors for everything drawn on top of the generated background.
pub struct Theme;

impl Theme {
    /// Shown before the first color is painted
    pub fn fallback_background() -> Color {
        Color::Reset
    }

    /// Color code label; pastel backgrounds are light
    pub fn label() -> Color {
        Color::Black
    }

    /// Key hints at the bottom
    pub fn hint() -> Color {
        Color::DarkGray
    }

    /// Help overlay border and headings
    pub fn accent() -> Color {
        Color::Magenta
    }

    /// Help overlay body text
    pub fn text() -> Color {
        Color::White
    }
}
