//! Per-field unit options and lookup of a user's unit choice.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{FormError, UnitError};
use crate::measurement::Measurement;

/// The three quantities the form asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Total,
    Downloaded,
    Speed,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Total, Field::Downloaded, Field::Speed];

    /// Label shown next to the field.
    pub fn label(self) -> &'static str {
        match self {
            Field::Total => "Total size",
            Field::Downloaded => "Downloaded already",
            Field::Speed => "Speed",
        }
    }

    /// Measurement name selected when nothing else is configured.
    pub fn default_unit_name(self) -> &'static str {
        match self {
            Field::Total => "gigabyte",
            Field::Downloaded => "megabyte",
            Field::Speed => "kilobyte",
        }
    }

    /// Display text for one measurement in this field's unit list.
    pub fn display_name(self, m: &Measurement) -> String {
        match self {
            Field::Total | Field::Downloaded => format!("{} ({})", m.name, m.abbreviation),
            Field::Speed => format!("{}/sec ({}/s)", m.name, m.abbreviation),
        }
    }

    /// Unit options for this field, in measurement table order.
    pub fn options(self, measurements: &[Measurement]) -> Vec<UnitOption> {
        let default_name = self.default_unit_name();
        measurements
            .iter()
            .map(|m| UnitOption {
                display_name: self.display_name(m),
                name: m.name.clone(),
                abbreviation: m.abbreviation.clone(),
                bits: m.bits,
                is_default: m.name == default_name,
            })
            .collect()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Field::Total => "total",
            Field::Downloaded => "downloaded",
            Field::Speed => "speed",
        };
        f.write_str(s)
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "total" | "size" | "total-size" => Ok(Field::Total),
            "downloaded" | "done" | "so-far" => Ok(Field::Downloaded),
            "speed" | "rate" => Ok(Field::Speed),
            _ => Err(FormError::UnknownField(s.trim().to_string())),
        }
    }
}

/// One selectable unit for a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitOption {
    pub display_name: String,
    pub name: String,
    pub abbreviation: String,
    /// Bits per unit (bits per second for speed).
    pub bits: u64,
    pub is_default: bool,
}

/// The flagged default option, else the first one.
pub fn default_option(options: &[UnitOption]) -> Option<&UnitOption> {
    options.iter().find(|o| o.is_default).or_else(|| options.first())
}

/// Find the option a user meant.
///
/// Matches the exact display name first, then the measurement name (ignoring
/// case), then the abbreviation. Abbreviations are case-sensitive since `Kb`
/// and `KB` differ by a factor of eight. Speed abbreviations may carry a `/s`
/// suffix.
pub fn resolve_unit<'a>(options: &'a [UnitOption], query: &str) -> Result<&'a UnitOption, UnitError> {
    let query = query.trim();
    let abbreviation = query.strip_suffix("/s").unwrap_or(query);

    options
        .iter()
        .find(|o| o.display_name == query)
        .or_else(|| options.iter().find(|o| o.name.eq_ignore_ascii_case(query)))
        .or_else(|| options.iter().find(|o| o.abbreviation == abbreviation))
        .ok_or_else(|| UnitError::UnknownUnit(query.to_string()))
}
