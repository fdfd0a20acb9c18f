//! Hexadecimal `#rrggbb` notation for 8-bit sRGB colors.

/// Errors returned when parsing a hex color.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    /// The string did not start with `#`.
    #[error("hex color must start with '#'")]
    MissingPrefix,
    /// The number of digits after `#` was not 3 or 6.
    #[error("hex color must have 3 or 6 digits, found {0}")]
    InvalidLength(usize),
    /// A character that is not a hexadecimal digit.
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

/// Format 8-bit channels as `#rrggbb` with lowercase digits.
pub fn encode([red, green, blue]: [u8; 3]) -> String {
    format!("#{red:02x}{green:02x}{blue:02x}")
}

/// Parse `#rrggbb` or the `#rgb` shorthand. Digits are case insensitive.
pub fn parse_hex(hex: &str) -> Result<[u8; 3], HexError> {
    let digits = hex.strip_prefix('#').ok_or(HexError::MissingPrefix)?;

    let nibbles = digits
        .chars()
        .map(|c| {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or(HexError::InvalidDigit(c))
        })
        .collect::<Result<Vec<_>, _>>()?;

    match *nibbles.as_slice() {
        [r, g, b] => Ok([r * 17, g * 17, b * 17]),
        [r1, r0, g1, g0, b1, b0] => Ok([(r1 << 4) | r0, (g1 << 4) | g0, (b1 << 4) | b0]),
        _ => Err(HexError::InvalidLength(nibbles.len())),
    }
}
