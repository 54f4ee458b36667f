use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const SLIDE_BORDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const BUTTON: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const INDICATOR_ACTIVE: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const INDICATOR_IDLE: Color = Color::Rgb(0x6b, 0x72, 0x80);
