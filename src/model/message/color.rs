//! Conversion between the color picker's `#rrggbb` strings and embed color integers.

use thiserror::Error;

/// Accent shown by the color picker for embeds that have no color of their own.
pub const DEFAULT_ACCENT_HEX: &str = "#3b82f6";

/// [`DEFAULT_ACCENT_HEX`] as an embed color integer.
pub const DEFAULT_ACCENT: u32 = 0x3b82f6;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not a #rrggbb color")]
pub struct InvalidColor(pub String);

/// Parses `#rrggbb` (the leading `#` is optional, case-insensitive) into a 24-bit integer.
pub fn parse_hex_color(value: &str) -> Result<u32, InvalidColor> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(InvalidColor(value.to_string()));
    }

    u32::from_str_radix(digits, 16).map_err(|_| InvalidColor(value.to_string()))
}

/// Formats a color integer as a zero padded lowercase `#rrggbb` string.
///
/// Colors above 24 bits are written out in full rather than truncated, so they never
/// read back as a different color.
pub fn format_hex_color(color: u32) -> String {
    format!("#{:06x}", color)
}
