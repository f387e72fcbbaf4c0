use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tourist_converter::{
    app::App,
    config::{self, Config, ConfigError},
    conversion::{ConversionEngine, CURRENCY},
    country::{CountryDirectory, CulturalProfile, Extracurriculars, InMemoryDirectory, LookupError},
    expense::{format_amount, ExpenseError},
    navigation::Page,
    translate::{translate_or_error_text, TranslateError, Translator, TRANSLATION_ERROR_TEXT},
    units::currency::RateTableError,
};

struct Shout;

impl Translator for Shout {
    fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError> {
        if text.is_empty() {
            return Err(TranslateError::EmptyText);
        }
        Ok(format!("[{target}] {}", text.to_uppercase()))
    }
}

fn scratch_file(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tourist_converter_{}", std::process::id()));
    fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join(name);
    fs::write(&path, content).expect("write scratch file");
    path
}

fn japan() -> InMemoryDirectory {
    let phrases = vec![
        ("Hello".to_string(), "Konnichiwa".to_string()),
        ("Thank you".to_string(), "Arigatou".to_string()),
    ];
    InMemoryDirectory::new().with_country(
        "Japan",
        CulturalProfile {
            key_phrases: Some(phrases),
            cultural_norms: Some("Bow when greeting.".into()),
        },
        Extracurriculars {
            outdoor_adventures: Some("Hike Mount Fuji.".into()),
            fine_cuisine: Some("Try kaiseki.".into()),
            ..Default::default()
        },
    )
}

fn session() -> App {
    App::with_services(
        Config::default(),
        Path::new("config.toml"),
        ConversionEngine::default(),
        Arc::new(Shout),
        Arc::new(japan()),
    )
}

#[test]
fn rate_file_refreshes_currency_conversion() {
    let path = scratch_file(
        "rates.toml",
        r#"
base = "USD"

[[rates]]
code = "USD"
rate = 1.0

[[rates]]
code = "THB"
rate = 36.5
"#,
    );
    let mut app = session();
    let rates = config::load_rate_table(&path).expect("valid rate file");
    app.replace_rates(rates).expect("accepted");
    assert_eq!(app.engine.units_for(CURRENCY).unwrap(), vec!["USD", "THB"]);
    assert_eq!(app.engine.convert(CURRENCY, "USD", "THB", 2.0).unwrap(), 73.0);
    assert!(app.engine.convert(CURRENCY, "USD", "EUR", 1.0).is_err());
}

#[test]
fn rate_file_without_the_base_is_refused() {
    let path = scratch_file(
        "no_base.toml",
        r#"
base = "USD"

[[rates]]
code = "EUR"
rate = 0.84
"#,
    );
    assert!(matches!(
        config::load_rate_table(&path),
        Err(ConfigError::Rates(RateTableError::MissingBase(_)))
    ));
}

#[test]
fn config_is_written_on_first_load_and_read_back() {
    let path = scratch_file("placeholder", "");
    let cfg_path = path.with_file_name("first_run.toml");
    let _ = fs::remove_file(&cfg_path);

    let created = config::load_or_default(&cfg_path).expect("defaults written");
    assert!(cfg_path.exists());
    let reread = config::load_or_default(&cfg_path).expect("defaults read back");
    assert_eq!(reread.default_category, created.default_category);
    assert_eq!(reread.currency, created.currency);
}

#[test]
fn expenses_accumulate_across_entries() {
    let mut app = session();
    app.ledger.add_from_input("12.50", "Lunch").unwrap();
    app.ledger.add_from_input("7", "  Metro card ").unwrap();
    assert_eq!(
        app.ledger.add_from_input("", "Taxi"),
        Err(ExpenseError::MissingAmount)
    );
    assert_eq!(
        app.ledger.add_from_input("ten", "Taxi"),
        Err(ExpenseError::InvalidAmount("ten".into()))
    );
    assert_eq!(app.ledger.len(), 2);
    assert_eq!(app.ledger.entries()[1].description, "Metro card");
    assert_eq!(format_amount(app.ledger.total()), "$19.50");
}

#[test]
fn translation_failures_collapse_to_the_error_text() {
    let app = session();
    assert_eq!(
        translate_or_error_text(app.translator.as_ref(), "good morning", "ja"),
        "[ja] GOOD MORNING"
    );
    assert_eq!(
        translate_or_error_text(app.translator.as_ref(), "", "ja"),
        TRANSLATION_ERROR_TEXT
    );
}

#[test]
fn country_pages_read_from_the_directory() {
    let app = session();
    let profile = app.directory.cultural_profile("Japan").unwrap();
    assert_eq!(
        profile
            .key_phrases
            .unwrap()
            .iter()
            .find(|(phrase, _)| phrase == "Hello")
            .map(|(_, local)| local.as_str()),
        Some("Konnichiwa")
    );
    let activities = app.directory.extracurriculars("Japan").unwrap();
    let titles: Vec<&str> = activities.sections().into_iter().map(|(t, _)| t).collect();
    assert_eq!(titles, vec!["Outdoor Adventures", "Fine Cuisine"]);
    assert!(matches!(
        app.directory.cultural_profile("Peru"),
        Err(LookupError::NotFound(c)) if c == "Peru"
    ));
}

#[test]
fn navigation_follows_menu_choices() {
    let mut app = session();
    assert_eq!(app.navigator.current(), Page::Home);
    app.navigator.navigate_to(Page::CulturalRecs.id()).unwrap();
    assert_eq!(app.navigator.current(), Page::CulturalRecs);
    assert!(app.navigator.navigate_to("settings").is_err());
    assert_eq!(app.navigator.current(), Page::CulturalRecs);
}
