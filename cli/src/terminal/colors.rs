use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 120, g: 170, b: 255 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 200, b: 90 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 210, g: 210, b: 210 };

pub const IPV6_ADDR: Color = Color::TrueColor { r: 130, g: 220, b: 160 };
pub const IPV6_PREFIX: Color = Color::TrueColor { r: 90, g: 180, b: 120 };
pub const INVALID: Color = Color::Red;

pub const RTT: Color = Color::Yellow;
pub const TIMEOUT: Color = Color::BrightRed;
