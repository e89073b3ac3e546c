use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::Cyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const MONEY: Color = Color::Yellow;
pub const DATE: Color = Color::Magenta;
pub const COUNT: Color = Color::BrightBlue;
pub const MISSING: Color = Color::Red;
pub const IN_STOCK: Color = Color::Green;
pub const OUT_OF_STOCK: Color = Color::BrightRed;
