use std::fmt::{self, Display};

use serde::{Serialize, Serializer};

/// Dominant color of a photo, sent by the API as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses six hex digits, with or without a leading `#`.
    ///
    /// Anything else yields `None`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();

        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// The color as `RRGGBB`, without the leading `#`.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#60544D"), Some(Rgb::new(0x60, 0x54, 0x4D)));
        assert_eq!(Rgb::from_hex("0c2640"), Some(Rgb::new(0x0C, 0x26, 0x40)));
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", "#", "not-a-color", "#12345", "#1234567", "#+f+f+f", "#GG0000", "##123456"] {
            assert_eq!(Rgb::from_hex(input), None, "{input:?}");
        }
    }

    #[test]
    fn displays_as_hash_hex() {
        let color = Rgb::new(255, 8, 171);

        assert_eq!(color.hex(), "FF08AB");
        assert_eq!(color.to_string(), "#FF08AB");
        assert_eq!(serde_json::to_value(color).unwrap(), "#FF08AB");
    }
}
