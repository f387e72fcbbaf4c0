use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tourist_converter::app::{self, App, AppError};
use tourist_converter::conversion::format_result;
use tourist_converter::country::filter_countries;
use tourist_converter::translate::Translator;
use tourist_converter::{config, logging};

/// Travel helper: unit and currency conversion, translation, expense
/// tracking and country notes.
#[derive(Debug, Parser)]
#[command(name = "tourist_converter_cli", version)]
struct Cli {
    /// Configuration file; created with defaults when missing.
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Exchange-rate file to use instead of the configured rates.
    #[arg(long, global = true)]
    rates: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List conversion categories.
    Categories,
    /// List the units of a category.
    Units { category: String },
    /// Convert a value between two units of a category.
    Convert {
        category: String,
        from: String,
        to: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Translate text into another language.
    Translate {
        /// Target language code.
        #[arg(long, short)]
        to: Option<String>,
        text: String,
    },
    /// List known countries, optionally filtered.
    Countries { search: Option<String> },
    /// Menu-driven session (the default).
    Interactive,
}

/// Loads configuration, then runs the requested command.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let cfg = config::load_or_default(&cli.config)?;
    logging::init_logging(&cfg.logging);
    let mut app = App::from_config(cfg, &cli.config)?;
    if let Some(path) = &cli.rates {
        let rates = config::load_rate_table(path)?;
        app.replace_rates(rates)?;
    }

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Categories => {
            for name in app.engine.category_names() {
                println!("{name}");
            }
        }
        Command::Units { category } => {
            println!("{}", app.engine.units_for(&category)?.join(" "));
        }
        Command::Convert {
            category,
            from,
            to,
            value,
        } => {
            let result = app.engine.convert(&category, &from, &to, value)?;
            println!("{} {to}", format_result(result));
        }
        Command::Translate { to, text } => {
            let target = to.unwrap_or_else(|| app.config.translation.default_target.clone());
            println!("{}", app.translator.translate(&text, &target)?);
        }
        Command::Countries { search } => {
            for name in filter_countries(search.as_deref().unwrap_or("")) {
                println!("{name}");
            }
        }
        Command::Interactive => app::run(&mut app)?,
    }
    Ok(())
}
