use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 120, g: 200, b: 255 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 180, b: 80 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const IPV4_ADDR: Color = Color::TrueColor { r: 110, g: 220, b: 140 };
pub const IPV6_ADDR: Color = Color::TrueColor { r: 200, g: 150, b: 255 };
pub const OPEN_PORT: Color = Color::Green;
pub const UNRESOLVED: Color = Color::Red;
