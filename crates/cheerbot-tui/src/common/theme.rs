//! Chat window palette.

use ratatui::style::Color;

/// Bot bubble background.
pub const BOT_BUBBLE: Color = Color::Rgb(0xE3, 0xA1, 0xA1);
/// User bubble background.
pub const USER_BUBBLE: Color = Color::Rgb(0xFF, 0x5C, 0x5C);
/// Transcript background.
pub const BACKGROUND: Color = Color::Rgb(0xF4, 0xC2, 0xC2);
/// Title bar, send label and focused borders.
pub const ACCENT: Color = Color::Rgb(0xF7, 0x63, 0x63);
/// Text drawn on top of the pink shades.
pub const INK: Color = Color::Rgb(0x33, 0x1A, 0x1A);
pub const MUTED: Color = Color::DarkGray;
