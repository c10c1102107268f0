//! Field area units

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unit a field area is entered in
///
/// The serialized form is the display symbol, so stored records stay readable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaUnit {
    #[default]
    #[serde(rename = "ha")]
    Hectares,
    #[serde(rename = "ar")]
    Ares,
    #[serde(rename = "m²")]
    SquareMeters,
}

impl AreaUnit {
    pub const ALL: [AreaUnit; 3] = [AreaUnit::Hectares, AreaUnit::Ares, AreaUnit::SquareMeters];

    /// Hectares per one unit
    pub fn to_hectares(&self) -> f64 {
        match self {
            AreaUnit::Hectares => 1.0,
            AreaUnit::Ares => 0.01,
            AreaUnit::SquareMeters => 0.0001,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            AreaUnit::Hectares => "ha",
            AreaUnit::Ares => "ar",
            AreaUnit::SquareMeters => "m²",
        }
    }
}

impl std::fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for AreaUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ha" | "hectare" | "hectares" => Ok(AreaUnit::Hectares),
            "ar" | "a" | "are" | "ares" => Ok(AreaUnit::Ares),
            "m²" | "m2" | "sqm" | "square-meters" | "square_meters" => Ok(AreaUnit::SquareMeters),
            other => Err(format!(
                "Unknown area unit '{}' (expected one of: ha, ar, m2)",
                other
            )),
        }
    }
}
