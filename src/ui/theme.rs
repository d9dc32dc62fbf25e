// Color palettes for the light and dark themes.

use ratatui::style::Color;

use crate::config::ThemeName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub bg: Color,
    pub panel_bg: Color,
    pub text: Color,
    pub subtle_text: Color,
    pub accent: Color,
    pub accent_text: Color,
    pub border: Color,
    pub error: Color,
    pub warn: Color,
}

impl Theme {
    pub fn for_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Light => Self {
                bg: Color::Rgb(0xf6, 0xf8, 0xfa),
                panel_bg: Color::Rgb(0xff, 0xff, 0xff),
                text: Color::Rgb(0x24, 0x29, 0x2f),
                subtle_text: Color::Rgb(0x57, 0x60, 0x6a),
                accent: Color::Rgb(0x23, 0x86, 0x36),
                accent_text: Color::Rgb(0xff, 0xff, 0xff),
                border: Color::Rgb(0xd0, 0xd7, 0xde),
                error: Color::Rgb(0xcf, 0x22, 0x2e),
                warn: Color::Rgb(0x9a, 0x67, 0x00),
            },
            ThemeName::Dark => Self {
                bg: Color::Rgb(0x0d, 0x11, 0x17),
                panel_bg: Color::Rgb(0x16, 0x1b, 0x22),
                text: Color::Rgb(0xc9, 0xd1, 0xd9),
                subtle_text: Color::Rgb(0x8b, 0x94, 0x9e),
                accent: Color::Rgb(0x2e, 0xa0, 0x43),
                accent_text: Color::Rgb(0xff, 0xff, 0xff),
                border: Color::Rgb(0x30, 0x36, 0x3d),
                error: Color::Rgb(0xf8, 0x51, 0x49),
                warn: Color::Rgb(0xd2, 0x99, 0x22),
            },
        }
    }
}
