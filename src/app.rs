use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::conversion::{ConversionEngine, ConversionError};
use crate::country::{CountryDirectory, LookupError, SupabaseDirectory};
use crate::expense::{ExpenseError, ExpenseLedger};
use crate::navigation::{NavigationError, Navigator, Page};
use crate::translate::{GoogleTranslateClient, TranslateError, Translator};
use crate::ui_cli;
use crate::units::currency::{RateTable, RateTableError};

/// Errors surfaced by the front ends.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),
    #[error("exchange-rate error: {0}")]
    Rates(#[from] RateTableError),
    #[error("translation error: {0}")]
    Translate(#[from] TranslateError),
    #[error("country lookup error: {0}")]
    Lookup(#[from] LookupError),
    #[error("navigation error: {0}")]
    Navigation(#[from] NavigationError),
    #[error("expense error: {0}")]
    Expense(#[from] ExpenseError),
}

/// Everything a front end needs for one session.
pub struct App {
    pub config: Config,
    pub config_path: PathBuf,
    pub engine: ConversionEngine,
    pub ledger: ExpenseLedger,
    pub translator: Arc<dyn Translator>,
    pub directory: Arc<dyn CountryDirectory>,
    pub navigator: Navigator,
}

impl App {
    /// Wires the engine and the remote services from configuration.
    pub fn from_config(config: Config, config_path: &Path) -> Result<Self, AppError> {
        let engine = ConversionEngine::new(config.currency.clone())?;
        let translator = GoogleTranslateClient::from_config(&config.translation)?;
        let directory = SupabaseDirectory::from_config(&config.country_data)?;
        Ok(Self::with_services(
            config,
            config_path,
            engine,
            Arc::new(translator),
            Arc::new(directory),
        ))
    }

    pub fn with_services(
        config: Config,
        config_path: &Path,
        engine: ConversionEngine,
        translator: Arc<dyn Translator>,
        directory: Arc<dyn CountryDirectory>,
    ) -> Self {
        Self {
            config,
            config_path: config_path.to_path_buf(),
            engine,
            ledger: ExpenseLedger::new(),
            translator,
            directory,
            navigator: Navigator::default(),
        }
    }

    /// Swaps in a new exchange-rate table by rebuilding the engine.
    pub fn replace_rates(&mut self, rates: RateTable) -> Result<(), AppError> {
        self.engine = ConversionEngine::new(rates.clone())?;
        info!(currencies = rates.rates.len(), "exchange rates replaced");
        self.config.currency = rates;
        Ok(())
    }

    /// Default category for the conversion page, falling back to the first
    /// catalog entry when the configured name is unknown.
    pub fn default_category(&self) -> String {
        match self.engine.category(&self.config.default_category) {
            Ok(category) => category.name().to_string(),
            Err(_) => self
                .engine
                .category_names()
                .first()
                .map(|name| name.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Runs the interactive terminal session.
pub fn run(app: &mut App) -> Result<(), AppError> {
    loop {
        let Some(page) = ui_cli::main_menu(app)? else {
            println!("Goodbye!");
            break;
        };
        app.navigator.navigate_to(page.id())?;
        match page {
            Page::Home => ui_cli::handle_home(),
            Page::Conversion => ui_cli::handle_conversion(app)?,
            Page::Translate => ui_cli::handle_translate(app)?,
            Page::ExpenseTracker => ui_cli::handle_expenses(app)?,
            Page::Extracurriculars => ui_cli::handle_extracurriculars(app)?,
            Page::CulturalRecs => ui_cli::handle_cultural_recs(app)?,
        }
    }
    Ok(())
}
