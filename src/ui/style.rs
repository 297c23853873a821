use ratatui::style::Color;

use crate::brand::{parse_hex, BRAND};
use crate::theme::Theme;

/// Colors for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub success: Color,
    pub danger: Color,
    pub warning: Color,
}

pub fn hex_color(hex: &str) -> Color {
    parse_hex(hex)
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(Color::Reset)
}

pub fn palette(theme: Theme) -> Palette {
    let primary = hex_color(BRAND.colors.primary);
    let secondary = hex_color(BRAND.colors.secondary);
    let accent = hex_color(BRAND.colors.accent);

    match theme {
        Theme::Light => Palette {
            bg: Color::Rgb(250, 250, 250),
            fg: Color::Rgb(23, 23, 23),
            muted: Color::Rgb(115, 115, 115),
            border: Color::Rgb(212, 212, 212),
            primary,
            secondary,
            accent,
            success: Color::Rgb(5, 150, 105),
            danger: Color::Rgb(225, 29, 72),
            warning: Color::Rgb(217, 119, 6),
        },
        Theme::Dark => Palette {
            bg: hex_color(BRAND.colors.dark_bg),
            fg: Color::Rgb(245, 245, 245),
            muted: Color::Rgb(163, 163, 163),
            border: Color::Rgb(64, 64, 64),
            primary,
            secondary,
            accent,
            success: Color::Rgb(52, 211, 153),
            danger: Color::Rgb(251, 113, 133),
            warning: Color::Rgb(251, 191, 36),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_colors_shared_across_themes() {
        let light = palette(Theme::Light);
        let dark = palette(Theme::Dark);
        assert_eq!(light.primary, Color::Rgb(0x25, 0x63, 0xeb));
        assert_eq!(light.primary, dark.primary);
        assert_ne!(light.bg, dark.bg);
        assert_eq!(dark.bg, Color::Rgb(0x0a, 0x0b, 0x0f));
    }
}
