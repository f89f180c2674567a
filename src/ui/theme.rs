use ratatui::style::Color;

/// Title, active nav link and focused card border.
pub const BRAND: Color = Color::Rgb(0x38, 0xbd, 0xf8);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const FRAME_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const NAV_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const PROMPT_BORDER: Color = Color::Rgb(0xfb, 0xbf, 0x24);
pub const SELECTED_BG: Color = Color::Rgb(0x1e, 0x29, 0x3b);
pub const LOADING: Color = Color::Rgb(0x22, 0xc5, 0x5e);
/// Error banners, validation messages and footer notices.
pub const ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
