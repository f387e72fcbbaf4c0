//! Per-country cultural and recreational notes served by a hosted
//! PostgREST (Supabase) table.

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::CountryDataConfig;

/// Countries offered by the lookup pages.
pub const COUNTRIES: &[&str] = &[
    "Albania",
    "Argentina",
    "Armenia",
    "Australia",
    "Austria",
    "Bahamas",
    "Bahrain",
    "Barbados",
    "Belarus",
    "Belgium",
    "Belize",
    "Bhutan",
    "Bolivia",
    "Botswana",
    "Brazil",
    "Bulgaria",
    "Cambodia",
    "Canada",
    "Chile",
    "China",
    "Colombia",
    "Costa Rica",
    "Croatia",
    "Cuba",
    "Czech Republic",
    "Denmark",
    "Ecuador",
    "Egypt",
    "El Salvador",
    "Estonia",
    "Fiji",
    "Finland",
    "France",
    "Germany",
    "Ghana",
    "Greece",
    "Guatemala",
    "Honduras",
    "Hungary",
    "Iceland",
    "India",
    "Indonesia",
    "Israel",
    "Italy",
    "Jamaica",
    "Japan",
    "Jordan",
    "Kazakhstan",
    "Kenya",
    "Kyrgyzstan",
    "Latvia",
    "Lebanon",
    "Lithuania",
    "Luxembourg",
    "Malaysia",
    "Maldives",
    "Mexico",
    "Mongolia",
    "Morocco",
    "Myanmar",
    "Nepal",
    "Netherlands",
    "New Zealand",
    "Nicaragua",
    "Nigeria",
    "Norway",
    "Oman",
    "Pakistan",
    "Panama",
    "Peru",
    "Philippines",
    "Poland",
    "Portugal",
    "Qatar",
    "Russia",
    "Samoa",
    "Saudi Arabia",
    "Serbia",
    "Seychelles",
    "Singapore",
    "Slovenia",
    "South Africa",
    "South Korea",
    "Spain",
    "Sri Lanka",
    "Sweden",
    "Switzerland",
    "Tajikistan",
    "Tanzania",
    "Thailand",
    "Trinidad and Tobago",
    "Tunisia",
    "Turkey",
    "UAE",
    "Ukraine",
    "United Kingdom",
    "Uruguay",
    "Uzbekistan",
    "Vanuatu",
    "Vietnam",
];

/// Countries whose name contains `search`, ignoring case.
pub fn filter_countries(search: &str) -> Vec<&'static str> {
    let needle = search.trim().to_lowercase();
    COUNTRIES
        .iter()
        .copied()
        .filter(|c| c.to_lowercase().contains(&needle))
        .collect()
}

/// Phrasebook entries and etiquette notes for one country.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CulturalProfile {
    /// English phrase and its local rendering, in the order the service
    /// returned them.
    pub key_phrases: Option<Vec<(String, String)>>,
    pub cultural_norms: Option<String>,
}

/// Things to do in one country.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Extracurriculars {
    pub outdoor_adventures: Option<String>,
    pub relaxing_and_wellness: Option<String>,
    pub fine_cuisine: Option<String>,
    pub tourist_sites: Option<String>,
}

impl Extracurriculars {
    /// Titled sections that have content, in display order.
    pub fn sections(&self) -> Vec<(&'static str, &str)> {
        [
            ("Outdoor Adventures", &self.outdoor_adventures),
            ("Relaxing & Wellness", &self.relaxing_and_wellness),
            ("Fine Cuisine", &self.fine_cuisine),
            ("Tourist Sites", &self.tourist_sites),
        ]
        .into_iter()
        .filter_map(|(title, content)| {
            content
                .as_deref()
                .filter(|c| !c.trim().is_empty())
                .map(|c| (title, c))
        })
        .collect()
    }
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("country data service is not configured")]
    NotConfigured,
    #[error("no data for {0}")]
    NotFound(String),
    #[error("{rows} rows matched {country}; expected one")]
    Ambiguous { country: String, rows: usize },
    #[error("country data request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("country data service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected country data: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of per-country records.
pub trait CountryDirectory: Send + Sync {
    fn cultural_profile(&self, country: &str) -> Result<CulturalProfile, LookupError>;
    fn extracurriculars(&self, country: &str) -> Result<Extracurriculars, LookupError>;
}

#[derive(Debug, Deserialize)]
struct CulturalRow {
    #[serde(default)]
    key_phrases: Value,
    #[serde(default)]
    cultural_norms: Option<String>,
}

/// `key_phrases` is a JSON column; some rows hold the object itself, others a
/// JSON-encoded string of it.
fn decode_key_phrases(raw: Value) -> Result<Option<Vec<(String, String)>>, LookupError> {
    let object = match raw {
        Value::Null => return Ok(None),
        Value::String(text) => serde_json::from_str::<Value>(&text)?,
        other => other,
    };
    let map = match object {
        Value::Object(map) => map,
        other => serde_json::from_value::<serde_json::Map<String, Value>>(other)?,
    };
    let phrases = map
        .into_iter()
        .map(|(k, v)| {
            let text = match v {
                Value::String(s) => s,
                other => other.to_string(),
            };
            (k, text)
        })
        .collect();
    Ok(Some(phrases))
}

/// Mirrors PostgREST `.single()`: exactly one row or an error.
fn single_row(rows: Vec<Value>, country: &str) -> Result<Value, LookupError> {
    let count = rows.len();
    match (rows.into_iter().next(), count) {
        (None, _) => Err(LookupError::NotFound(country.to_string())),
        (Some(row), 1) => Ok(row),
        (Some(_), n) => Err(LookupError::Ambiguous {
            country: country.to_string(),
            rows: n,
        }),
    }
}

fn parse_cultural_rows(body: &str, country: &str) -> Result<CulturalProfile, LookupError> {
    let rows: Vec<Value> = serde_json::from_str(body)?;
    let row: CulturalRow = serde_json::from_value(single_row(rows, country)?)?;
    Ok(CulturalProfile {
        key_phrases: decode_key_phrases(row.key_phrases)?,
        cultural_norms: row.cultural_norms,
    })
}

fn parse_extracurricular_rows(body: &str, country: &str) -> Result<Extracurriculars, LookupError> {
    let rows: Vec<Value> = serde_json::from_str(body)?;
    Ok(serde_json::from_value(single_row(rows, country)?)?)
}

/// Reads the `countries` table over the PostgREST API.
#[derive(Debug, Clone)]
pub struct SupabaseDirectory {
    http: reqwest::blocking::Client,
    url: String,
    api_key: Option<String>,
    table: String,
}

impl SupabaseDirectory {
    pub fn from_config(cfg: &CountryDataConfig) -> Result<Self, LookupError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            url: cfg.url.trim_end_matches('/').to_string(),
            api_key: cfg.resolved_api_key().map(String::from),
            table: cfg.table.clone(),
        })
    }

    fn fetch(&self, columns: &str, country: &str) -> Result<String, LookupError> {
        let key = match (&self.api_key, self.url.is_empty()) {
            (Some(key), false) => key,
            _ => return Err(LookupError::NotConfigured),
        };
        let endpoint = format!("{}/rest/v1/{}", self.url, self.table);
        let filter = format!("eq.{country}");
        debug!(country, columns, "querying country data");
        let response = self
            .http
            .get(&endpoint)
            .query(&[("select", columns), ("country_name", filter.as_str())])
            .header("apikey", key)
            .bearer_auth(key)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()?;
        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            warn!(status = status.as_u16(), country, "country data request rejected");
            return Err(LookupError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

impl CountryDirectory for SupabaseDirectory {
    fn cultural_profile(&self, country: &str) -> Result<CulturalProfile, LookupError> {
        let body = self.fetch("key_phrases,cultural_norms", country)?;
        parse_cultural_rows(&body, country)
    }

    fn extracurriculars(&self, country: &str) -> Result<Extracurriculars, LookupError> {
        let body = self.fetch(
            "outdoor_adventures,relaxing_and_wellness,fine_cuisine,tourist_sites",
            country,
        )?;
        parse_extracurricular_rows(&body, country)
    }
}

/// Directory backed by a map, for offline use and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    entries: HashMap<String, (CulturalProfile, Extracurriculars)>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_country(
        mut self,
        country: &str,
        profile: CulturalProfile,
        activities: Extracurriculars,
    ) -> Self {
        self.entries
            .insert(country.to_string(), (profile, activities));
        self
    }

    fn entry(&self, country: &str) -> Result<&(CulturalProfile, Extracurriculars), LookupError> {
        self.entries
            .get(country)
            .ok_or_else(|| LookupError::NotFound(country.to_string()))
    }
}

impl CountryDirectory for InMemoryDirectory {
    fn cultural_profile(&self, country: &str) -> Result<CulturalProfile, LookupError> {
        Ok(self.entry(country)?.0.clone())
    }

    fn extracurriculars(&self, country: &str) -> Result<Extracurriculars, LookupError> {
        Ok(self.entry(country)?.1.clone())
    }
}
