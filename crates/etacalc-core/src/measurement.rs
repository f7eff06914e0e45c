//! Measurement table: bit and byte units for each magnitude prefix.
//!
//! A table is a pure function of the [`Base`]; it is regenerated whenever the
//! base changes and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnitError;

/// Magnitude prefixes in ascending order.
pub const PREFIXES: [&str; 5] = ["kilo", "mega", "giga", "tera", "peta"];

/// Bits per byte.
pub const BITS_PER_BYTE: u64 = 8;

/// Radix controlling how far apart consecutive prefixes are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Base {
    /// Binary prefixes: each step is 1024.
    Two,
    /// Decimal prefixes: each step is 1000.
    #[default]
    Ten,
}

impl Base {
    /// Factor between consecutive prefixes.
    pub fn multiplier(self) -> u64 {
        match self {
            Base::Two => 1024,
            Base::Ten => 1000,
        }
    }

    pub fn as_u32(self) -> u32 {
        match self {
            Base::Two => 2,
            Base::Ten => 10,
        }
    }
}

impl TryFrom<u32> for Base {
    type Error = UnitError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Base::Two),
            10 => Ok(Base::Ten),
            other => Err(UnitError::UnsupportedBase(other.to_string())),
        }
    }
}

impl From<Base> for u32 {
    fn from(base: Base) -> Self {
        base.as_u32()
    }
}

impl FromStr for Base {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u32>()
            .map_err(|_| UnitError::UnsupportedBase(trimmed.to_string()))
            .and_then(Base::try_from)
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

/// One named unit and the number of bits it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Measurement {
    /// Full name, e.g. `kilobyte`.
    pub name: String,
    /// Short form, e.g. `KB` (bytes) or `Kb` (bits).
    pub abbreviation: String,
    /// Bits represented by one unit.
    pub bits: u64,
}

/// Build the ordered measurement table for `base`.
///
/// For each prefix the bit unit is emitted first, then the byte unit, so the
/// result has ten entries with strictly increasing bit counts.
pub fn generate_measurements(base: Base) -> Vec<Measurement> {
    let multiplier = base.multiplier();
    let mut measurements = Vec::with_capacity(PREFIXES.len() * 2);

    let mut bits = 1u64;
    for prefix in PREFIXES {
        bits *= multiplier;
        let initial = prefix
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or_default();

        measurements.push(Measurement {
            name: format!("{prefix}bit"),
            abbreviation: format!("{initial}b"),
            bits,
        });
        measurements.push(Measurement {
            name: format!("{prefix}byte"),
            abbreviation: format!("{initial}B"),
            bits: bits * BITS_PER_BYTE,
        });
    }

    measurements
}
