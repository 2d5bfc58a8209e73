use ratatui::style::Color;

pub const BRAND_ACCENT: Color = Color::Rgb(0x7c, 0x3a, 0xed);
pub const SELECTED_TEXT: Color = Color::Rgb(0xfa, 0xfa, 0xfa);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const TEXT_MUTED: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const RATING_STAR: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
