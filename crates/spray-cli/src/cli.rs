//! CLI definition using clap

use clap::{Parser, Subcommand};
use spray_domain::model::AreaUnit;
use spray_types::{Language, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spray-calculator")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Field sprayer calculator: working fluid, chemical to buy and tank fills")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Label language (pl, en). Uses config value if not specified.
    #[arg(long, short = 'l', global = true)]
    pub language: Option<Language>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate working fluid, chemical and tank fills for a field
    Calc {
        /// Field area (comma or period as decimal separator)
        area: String,

        /// Unit of the field area (ha, ar, m2)
        #[arg(long, short = 'u')]
        unit: Option<AreaUnit>,

        /// Spray rate in l/ha
        #[arg(long, short = 's')]
        spray: Option<String>,

        /// Chemical rate in l/ha
        #[arg(long, short = 'c')]
        chemical: Option<String>,

        /// Sprayer tank capacity in litres
        #[arg(long, short = 't')]
        tank: Option<String>,

        /// Take rates and tank from a saved configuration (id, id prefix or name)
        #[arg(long)]
        favorite: Option<String>,

        /// Do not record the calculation in history
        #[arg(long)]
        no_save: bool,
    },

    /// Show calculation history
    History {
        /// Limit number of entries shown
        #[arg(long, short = 'n', default_value = "20")]
        limit: usize,

        /// Delete one calculation (id or id prefix)
        #[arg(long)]
        delete: Option<String>,

        /// Delete all calculations
        #[arg(long)]
        clear: bool,

        /// Export the whole history to a CSV file
        #[arg(long)]
        export_csv: Option<PathBuf>,
    },

    /// Manage saved configurations
    Favorites {
        #[command(subcommand)]
        action: Option<FavoritesAction>,
    },

    /// Render a printable report of calculations
    Report {
        /// Calculation to report (latest, id or id prefix)
        #[arg(default_value = "latest")]
        calculation: String,

        /// Report the whole history instead of one calculation
        #[arg(long)]
        all: bool,

        /// Write the text report to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Write an Excel workbook instead of a text report
        #[arg(long)]
        xlsx: Option<PathBuf>,

        /// Lines per page of the text report
        #[arg(long, default_value = "60")]
        page_lines: usize,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set label language
        #[arg(long)]
        set_language: Option<Language>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set directory for history and favorites
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum FavoritesAction {
    /// List saved configurations
    List,

    /// Save a configuration from typed rates
    Add {
        /// Name; a parameter summary is used when empty
        #[arg(default_value = "")]
        name: String,

        /// Unit of the field area (ha, ar, m2)
        #[arg(long, short = 'u', default_value = "ha")]
        unit: AreaUnit,

        /// Spray rate in l/ha
        #[arg(long, short = 's')]
        spray: String,

        /// Chemical rate in l/ha
        #[arg(long, short = 'c')]
        chemical: String,

        /// Sprayer tank capacity in litres
        #[arg(long, short = 't')]
        tank: String,
    },

    /// Save the parameters of a past calculation
    SaveLast {
        /// Name; a parameter summary is used when empty
        #[arg(default_value = "")]
        name: String,

        /// Calculation to take parameters from (latest, id or id prefix)
        #[arg(long, default_value = "latest")]
        calculation: String,
    },

    /// Delete a saved configuration (id, id prefix or name)
    Delete { key: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_calc_with_comma_decimals() {
        let cli = Cli::try_parse_from([
            "spray-calculator",
            "calc",
            "12,5",
            "--unit",
            "ar",
            "-s",
            "200",
            "-c",
            "2,5",
            "-t",
            "1000",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Calc {
                area,
                unit,
                chemical,
                no_save,
                ..
            } => {
                assert_eq!(area, "12,5");
                assert_eq!(unit, Some(AreaUnit::Ares));
                assert_eq!(chemical.as_deref(), Some("2,5"));
                assert!(!no_save);
            }
            _ => panic!("expected calc"),
        }
    }

    #[test]
    fn test_parse_favorites_subcommands() {
        let cli = Cli::try_parse_from(["spray-calculator", "favorites"]).unwrap();
        assert!(matches!(cli.command, Commands::Favorites { action: None }));

        let cli = Cli::try_parse_from([
            "spray-calculator",
            "-l",
            "en",
            "favorites",
            "save-last",
            "Rzepak",
        ])
        .unwrap();
        assert_eq!(cli.language, Some(Language::English));
        match cli.command {
            Commands::Favorites {
                action: Some(FavoritesAction::SaveLast { name, calculation }),
            } => {
                assert_eq!(name, "Rzepak");
                assert_eq!(calculation, "latest");
            }
            _ => panic!("expected favorites save-last"),
        }
    }

    #[test]
    fn test_unknown_unit_rejected() {
        let result = Cli::try_parse_from(["spray-calculator", "calc", "1", "--unit", "acre"]);
        assert!(result.is_err());
    }
}
