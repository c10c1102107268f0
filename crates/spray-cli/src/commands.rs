//! Command handlers

use crate::cli::{Cli, Commands, FavoritesAction};
use crate::output::{output_calculation, output_favorites, output_history};
use spray_app::app::{
    calculate, calculate_and_record, favorite_from_text, find_calculation, find_favorite,
    save_favorite,
};
use spray_app::config::Config;
use spray_app::export::{export_to_excel, render_report};
use spray_app::labels::Labels;
use spray_app::repository::{open_favorites_repo, open_history_repo};
use spray_domain::model::AreaUnit;
use spray_domain::repository::{CalculationHistoryRepository, FavoritesRepository};
use spray_domain::service::{NumberLocale, RawCalculationInput};
use spray_infra::history_csv::export_history_csv;
use spray_types::{Language, OutputFormat, Result};
use std::path::PathBuf;
use tracing::debug;

/// How results are presented for this invocation
struct Presentation {
    format: OutputFormat,
    labels: &'static Labels,
    locale: NumberLocale,
}

impl Presentation {
    fn new(format: OutputFormat, language: Language) -> Self {
        Self {
            format,
            labels: Labels::for_language(language),
            locale: NumberLocale::for_language(language),
        }
    }
}

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    debug!(?config, "configuration loaded");

    // Override from CLI args
    let format = cli.format.unwrap_or(config.output_format);
    let language = cli.language.unwrap_or(config.language);
    let view = Presentation::new(format, language);

    match cli.command {
        Commands::Calc {
            area,
            unit,
            spray,
            chemical,
            tank,
            favorite,
            no_save,
        } => cmd_calc(&config, &view, area, unit, spray, chemical, tank, favorite, no_save),

        Commands::History {
            limit,
            delete,
            clear,
            export_csv,
        } => cmd_history(&config, &view, limit, delete, clear, export_csv),

        Commands::Favorites { action } => {
            cmd_favorites(&config, &view, action.unwrap_or(FavoritesAction::List))
        }

        Commands::Report {
            calculation,
            all,
            output,
            xlsx,
            page_lines,
        } => cmd_report(&config, &view, &calculation, all, output, xlsx, page_lines),

        Commands::Config {
            show,
            set_language,
            set_output,
            set_data_dir,
            reset,
        } => cmd_config(show, set_language, set_output, set_data_dir, reset),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_calc(
    config: &Config,
    view: &Presentation,
    area: String,
    unit: Option<AreaUnit>,
    spray: Option<String>,
    chemical: Option<String>,
    tank: Option<String>,
    favorite: Option<String>,
    no_save: bool,
) -> Result<()> {
    let mut raw = match favorite {
        Some(key) => {
            let favorites = open_favorites_repo(config)?;
            let favorite = find_favorite(&favorites, &key)?;
            RawCalculationInput::from_favorite(&favorite, area)
        }
        None => RawCalculationInput {
            field_area: area,
            ..Default::default()
        },
    };

    // Explicit flags win over a favorite's values
    if let Some(unit) = unit {
        raw.area_unit = unit;
    }
    if let Some(spray) = spray {
        raw.spray_rate = spray;
    }
    if let Some(chemical) = chemical {
        raw.chemical_rate = chemical;
    }
    if let Some(tank) = tank {
        raw.tank_capacity = tank;
    }

    let calculation = if no_save {
        calculate(&raw)?
    } else {
        let history = open_history_repo(config)?;
        calculate_and_record(&raw, &history)?
    };

    output_calculation(view.format, &calculation, view.labels, &view.locale)
}

fn cmd_history(
    config: &Config,
    view: &Presentation,
    limit: usize,
    delete: Option<String>,
    clear: bool,
    export_csv: Option<PathBuf>,
) -> Result<()> {
    let history = open_history_repo(config)?;

    if clear {
        let removed = history.count();
        history.clear()?;
        println!("History cleared ({} calculations removed)", removed);
        return Ok(());
    }

    if let Some(key) = delete {
        let calculation = find_calculation(&history, &key)?;
        history.delete_by_id(calculation.id())?;
        println!("Deleted calculation {}", calculation.id());
        return Ok(());
    }

    let calculations = history.list()?;

    if let Some(path) = export_csv {
        export_history_csv(&calculations, &path)?;
        println!(
            "Exported {} calculations to {}",
            calculations.len(),
            path.display()
        );
        return Ok(());
    }

    output_history(view.format, &calculations, limit, view.labels, &view.locale)
}

fn cmd_favorites(config: &Config, view: &Presentation, action: FavoritesAction) -> Result<()> {
    let favorites = open_favorites_repo(config)?;

    match action {
        FavoritesAction::List => {
            output_favorites(view.format, &favorites.list()?, view.labels, &view.locale)
        }

        FavoritesAction::Add {
            name,
            unit,
            spray,
            chemical,
            tank,
        } => {
            let favorite = favorite_from_text(&name, unit, &spray, &chemical, &tank)?;
            favorites.add(&favorite)?;
            println!("Saved \"{}\" ({})", favorite.name, favorite.id);
            Ok(())
        }

        FavoritesAction::SaveLast { name, calculation } => {
            let history = open_history_repo(config)?;
            let calculation = find_calculation(&history, &calculation)?;
            let favorite = save_favorite(&name, &calculation, &favorites)?;
            println!("Saved \"{}\" ({})", favorite.name, favorite.id);
            Ok(())
        }

        FavoritesAction::Delete { key } => {
            let favorite = find_favorite(&favorites, &key)?;
            favorites.delete_by_id(favorite.id)?;
            println!("Deleted \"{}\"", favorite.name);
            Ok(())
        }
    }
}

fn cmd_report(
    config: &Config,
    view: &Presentation,
    key: &str,
    all: bool,
    output: Option<PathBuf>,
    xlsx: Option<PathBuf>,
    page_lines: usize,
) -> Result<()> {
    let history = open_history_repo(config)?;
    let calculations = if all {
        history.list()?
    } else {
        vec![find_calculation(&history, key)?]
    };

    if let Some(path) = xlsx {
        export_to_excel(&calculations, view.labels, &view.locale, &path)?;
        println!("Exported to: {}", path.display());
        return Ok(());
    }

    let report = render_report(&calculations, view.labels, &view.locale, page_lines);
    match output {
        Some(path) => {
            std::fs::write(&path, report.to_text())?;
            println!(
                "Report written to: {} ({} pages)",
                path.display(),
                report.page_count()
            );
        }
        None => println!("{}", report.to_text()),
    }

    Ok(())
}

fn cmd_config(
    show: bool,
    set_language: Option<Language>,
    set_output: Option<OutputFormat>,
    set_data_dir: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(language) = set_language {
        config.language = language;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(data_dir) = set_data_dir {
        config.data_dir = Some(data_dir);
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("\n{}", config);
    }

    Ok(())
}
