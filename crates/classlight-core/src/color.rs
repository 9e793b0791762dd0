//! 24-bit RGB colors and their hex representation.
//!
//! Rule colors are stored as six uppercase hex digits (e.g. `"FFF2CC"`). Any
//! bits above the low 24 are dropped, both when building a color from an
//! integer and when parsing a longer hex string.

use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mask for the 24 color bits.
const RGB_MASK: u32 = 0x00FF_FFFF;

/// Maximum number of hex digits accepted by [`Rgb::from_hex`].
const MAX_HEX_DIGITS: usize = 8;

/// Color applied when a rule does not specify one.
pub const DEFAULT_COLOR: Rgb = Rgb(0xFFDDC7);

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(u32);

impl Rgb {
    /// Create a color from an integer, keeping only the low 24 bits.
    pub const fn new(value: u32) -> Self {
        Self(value & RGB_MASK)
    }

    /// The color as `0xRRGGBB`.
    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Six uppercase hex digits, e.g. `"F9D7B5"`.
    pub fn to_hex(self) -> String {
        format!("{:06X}", self.0)
    }

    /// Parse up to eight hex digits, with an optional leading `#`.
    ///
    /// Only the rightmost six digits contribute to the color, so
    /// `"18BEEF00"` parses to `0xBEEF00`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.is_empty() {
            return Err(ColorError::Empty);
        }
        if digits.len() > MAX_HEX_DIGITS {
            return Err(ColorError::TooLong {
                value: hex.to_string(),
                len: digits.len(),
            });
        }
        // from_str_radix accepts a leading sign, which is not a hex digit
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::NotHex(hex.to_string()));
        }

        u32::from_str_radix(digits, 16)
            .map(Self::new)
            .map_err(|_| ColorError::NotHex(hex.to_string()))
    }
}

impl Default for Rgb {
    fn default() -> Self {
        DEFAULT_COLOR
    }
}

impl From<u32> for Rgb {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgb::new(0xF9D7B5).to_hex(), "F9D7B5");
    }

    #[test]
    fn test_to_hex_always_six_chars() {
        assert_eq!(Rgb::new(0x000000).to_hex(), "000000");
        assert_eq!(Rgb::new(0x0A0501).to_hex(), "0A0501");
        assert_eq!(Rgb::new(0x18BEEF00).to_hex(), "BEEF00");
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex("F9D7B5").unwrap().value(), 0xF9D7B5);
        assert_eq!(Rgb::from_hex("000000").unwrap().value(), 0x000000);
        assert_eq!(Rgb::from_hex("0A0501").unwrap().value(), 0x0A0501);
        assert_eq!(Rgb::from_hex("18BEEF00").unwrap().value(), 0xBEEF00);
    }

    #[test]
    fn test_from_hex_lowercase_and_hash() {
        assert_eq!(Rgb::from_hex("#fff2cc").unwrap().value(), 0xFFF2CC);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert_eq!(Rgb::from_hex(""), Err(ColorError::Empty));
        assert_eq!(Rgb::from_hex("#"), Err(ColorError::Empty));
        assert!(matches!(
            Rgb::from_hex("123456789"),
            Err(ColorError::TooLong { len: 9, .. })
        ));
        assert!(matches!(Rgb::from_hex("GG0000"), Err(ColorError::NotHex(_))));
        assert!(matches!(Rgb::from_hex("+FFFFF"), Err(ColorError::NotHex(_))));
    }

    #[test]
    fn test_default_color_in_sync() {
        assert_eq!(DEFAULT_COLOR.to_hex(), "FFDDC7");
        assert_eq!(Rgb::default(), DEFAULT_COLOR);
    }

    #[test]
    fn test_channels() {
        let color = Rgb::new(0x123456);
        assert_eq!((color.red(), color.green(), color.blue()), (0x12, 0x34, 0x56));
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(0xDDEBF7)).unwrap();
        assert_eq!(json, "\"DDEBF7\"");

        let color: Rgb = serde_json::from_str("\"e2f0d9\"").unwrap();
        assert_eq!(color.value(), 0xE2F0D9);

        assert!(serde_json::from_str::<Rgb>("\"nope\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_hex_round_trip(value in 0u32..=0xFF_FFFF) {
            let hex = Rgb::new(value).to_hex();
            prop_assert_eq!(hex.len(), 6);
            prop_assert!(hex.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
            prop_assert_eq!(Rgb::from_hex(&hex).unwrap().value(), value);
        }

        #[test]
        fn prop_new_masks_to_24_bits(value in any::<u32>()) {
            prop_assert_eq!(Rgb::new(value).value(), value & 0xFF_FFFF);
        }
    }
}
