//! Core types for spray mixing calculations

mod error;

pub use error::*;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Display language for labels and reports
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "pl")]
    #[value(name = "pl")]
    Polish,
    #[serde(rename = "en")]
    #[value(name = "en")]
    English,
}

impl Language {
    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Polish => "pl",
            Language::English => "en",
        }
    }

    /// Name of the language in itself
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Polish => "Polski",
            Language::English => "English",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.code())
    }
}

/// One of the four text fields collected before a calculation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    FieldArea,
    SprayRate,
    ChemicalRate,
    TankCapacity,
}

impl InputField {
    pub const ALL: [InputField; 4] = [
        InputField::FieldArea,
        InputField::SprayRate,
        InputField::ChemicalRate,
        InputField::TankCapacity,
    ];
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputField::FieldArea => write!(f, "field area"),
            InputField::SprayRate => write!(f, "spray rate"),
            InputField::ChemicalRate => write!(f, "chemical rate"),
            InputField::TankCapacity => write!(f, "tank capacity"),
        }
    }
}
