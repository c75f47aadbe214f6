use crate::trace::element::Highlight;
use crate::syntax::TokenCategory;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub builtin: Color,
    pub string: Color,
    pub number: Color,
    pub boolean: Color,
    pub operator: Color,
    pub function: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub executed_marker: Color,
    pub dimmed: Color, // Lines not reached yet
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(203, 166, 247),        // Mauve for keywords
    builtin: Color::Rgb(148, 226, 213),        // Teal for builtins
    string: Color::Rgb(166, 227, 161),         // Green for strings
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    boolean: Color::Rgb(250, 179, 135),        // Orange like numbers
    operator: Color::Rgb(137, 220, 235),       // Sky for operators
    function: Color::Rgb(249, 226, 175),       // Yellow for functions
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    executed_marker: Color::Rgb(166, 227, 161),
    dimmed: Color::Rgb(88, 91, 112),
};

impl Theme {
    /// Foreground color of a token category
    pub fn token_color(&self, category: TokenCategory) -> Color {
        match category {
            TokenCategory::Keyword => self.keyword,
            TokenCategory::Builtin => self.builtin,
            TokenCategory::String => self.string,
            TokenCategory::Number => self.number,
            TokenCategory::Comment => self.comment,
            TokenCategory::Boolean => self.boolean,
            TokenCategory::Operator => self.operator,
            TokenCategory::Function => self.function,
            TokenCategory::Default => self.fg,
        }
    }
}

/// Terminal color of a highlight category, taken from the shared hex table
pub fn highlight_color(highlight: Highlight) -> Color {
    let (r, g, b) = highlight.color_rgb();
    Color::Rgb(r, g, b)
}

/// Parse a `#rrggbb` pointer color, falling back to the `active` color
pub fn parse_hex_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    if digits.len() == 6 && digits.is_ascii() {
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        if let (Some(r), Some(g), Some(b)) = (channel(0), channel(2), channel(4)) {
            return Color::Rgb(r, g, b);
        }
    }
    highlight_color(Highlight::Active)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_color_uses_shared_table() {
        assert_eq!(highlight_color(Highlight::Found), Color::Rgb(0x22, 0xc5, 0x5e));
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ff0080"), Color::Rgb(255, 0, 128));
        assert_eq!(parse_hex_color("red"), highlight_color(Highlight::Active));
    }
}
