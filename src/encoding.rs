//! Integer text encodings supported by the converter.
//!
//! There are exactly three of them, so they are modelled as a closed enum
//! with a lookup per variant rather than as a trait.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RadixError, RadixResult};

/// Icon shown for results that carry no conversion.
pub const DEFAULT_ICON: &str = "images/icon.png";

/// A textual representation of an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    Hexadecimal,
    Decimal,
    Binary,
}

impl Encoding {
    /// All encodings, in keyword matching order.
    pub const ALL: [Encoding; 3] = [Encoding::Hexadecimal, Encoding::Binary, Encoding::Decimal];

    /// Numeric base of this encoding.
    pub fn base(self) -> u32 {
        match self {
            Encoding::Hexadecimal => 16,
            Encoding::Decimal => 10,
            Encoding::Binary => 2,
        }
    }

    /// Lowercase name used in messages ("hexadecimal", "decimal", "binary").
    pub fn display_name(self) -> &'static str {
        match self {
            Encoding::Hexadecimal => "hexadecimal",
            Encoding::Decimal => "decimal",
            Encoding::Binary => "binary",
        }
    }

    /// Icon resource the host maps to an image.
    pub fn icon(self) -> &'static str {
        match self {
            Encoding::Hexadecimal => "images/hex.png",
            Encoding::Decimal => "images/dec.png",
            Encoding::Binary => "images/bin.png",
        }
    }

    /// The two other encodings, in the order they are displayed.
    pub fn targets(self) -> [Encoding; 2] {
        match self {
            Encoding::Hexadecimal => [Encoding::Decimal, Encoding::Binary],
            Encoding::Binary => [Encoding::Decimal, Encoding::Hexadecimal],
            Encoding::Decimal => [Encoding::Hexadecimal, Encoding::Binary],
        }
    }

    fn prefix(self) -> Option<[&'static str; 2]> {
        match self {
            Encoding::Hexadecimal => Some(["0x", "0X"]),
            Encoding::Binary => Some(["0b", "0B"]),
            Encoding::Decimal => None,
        }
    }

    /// Render a value with lowercase digits and no base prefix.
    ///
    /// Negative values are written as `-` followed by the digits of the
    /// magnitude, e.g. `-ff` in hexadecimal.
    pub fn encode(self, value: i128) -> String {
        let sign = if value < 0 { "-" } else { "" };
        let magnitude = value.unsigned_abs();
        match self {
            Encoding::Hexadecimal => format!("{}{:x}", sign, magnitude),
            Encoding::Decimal => format!("{}{}", sign, magnitude),
            Encoding::Binary => format!("{}{:b}", sign, magnitude),
        }
    }

    /// Parse a literal of this encoding.
    ///
    /// Accepts an optional sign, the base prefix (`0x` / `0b`) and single
    /// `_` separators between digits. Letters may be in either case.
    pub fn decode(self, text: &str) -> RadixResult<i128> {
        let invalid = || RadixError::InvalidNumber {
            value: text.to_string(),
            encoding: self,
        };

        let (negative, unsigned) = if let Some(rest) = text.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = text.strip_prefix('+') {
            (false, rest)
        } else {
            (false, text)
        };

        let (body, prefixed) = match self
            .prefix()
            .and_then(|prefixes| prefixes.iter().find_map(|p| unsigned.strip_prefix(p)))
        {
            Some(rest) => (rest, true),
            None => (unsigned, false),
        };

        let digits = strip_separators(body, prefixed).ok_or_else(invalid)?;
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(self.base())) {
            return Err(invalid());
        }

        let magnitude = u128::from_str_radix(&digits, self.base()).map_err(|_| invalid())?;
        if negative {
            if magnitude > i128::MIN.unsigned_abs() {
                return Err(invalid());
            }
            // 2^127 wraps onto i128::MIN, which is exactly its negation
            Ok((magnitude as i128).wrapping_neg())
        } else {
            i128::try_from(magnitude).map_err(|_| invalid())
        }
    }
}

/// Remove `_` digit separators, rejecting misplaced ones.
///
/// A single separator may directly follow a base prefix.
fn strip_separators(body: &str, prefixed: bool) -> Option<String> {
    let body = if prefixed {
        body.strip_prefix('_').unwrap_or(body)
    } else {
        body
    };

    if body.starts_with('_') || body.ends_with('_') || body.contains("__") {
        return None;
    }

    Some(body.replace('_', ""))
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Encoding {
    type Err = RadixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hexadecimal" | "hex" | "16" => Ok(Encoding::Hexadecimal),
            "decimal" | "dec" | "10" => Ok(Encoding::Decimal),
            "binary" | "bin" | "2" => Ok(Encoding::Binary),
            _ => Err(RadixError::Config(format!("unknown encoding '{}'", s))),
        }
    }
}
