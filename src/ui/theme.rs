use crate::gallery::card::FALLBACK_COLOR;
use ratatui::style::Color;
use std::str::FromStr;

pub const ACCENT: Color = Color::Rgb(140, 115, 200);
pub const HEADER_BG: Color = Color::Rgb(25, 25, 38);
pub const STATUS_BG: Color = Color::Rgb(30, 30, 40);
pub const SEPARATOR: Color = Color::Rgb(55, 55, 75);
pub const BORDER_COLOR: Color = Color::Rgb(70, 70, 95);
pub const SELECTED_BG: Color = Color::Rgb(50, 50, 80);
pub const DIM_TEXT: Color = Color::Rgb(100, 100, 120);
pub const KEY_COLOR: Color = Color::Cyan;
pub const STAR_COLOR: Color = Color::Yellow;
pub const LIVE_COLOR: Color = Color::LightGreen;
pub const CHIP_FG: Color = Color::Rgb(170, 170, 200);
pub const CHIP_BG: Color = Color::Rgb(40, 40, 60);
pub const ERROR_FG: Color = Color::LightRed;

/// Terminal color for a card's `#rrggbb` display color.
pub fn card_color(hex: &str) -> Color {
    Color::from_str(hex)
        .or_else(|_| Color::from_str(FALLBACK_COLOR))
        .unwrap_or(ACCENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_map_to_rgb() {
        assert_eq!(card_color("#00ADD8"), Color::Rgb(0x00, 0xAD, 0xD8));
        assert_eq!(card_color("#f1e05a"), Color::Rgb(0xf1, 0xe0, 0x5a));
    }

    #[test]
    fn garbage_uses_fallback() {
        assert_eq!(card_color("#zzz"), Color::Rgb(0x6a, 0x11, 0xcb));
    }
}
