//! Text translation through the Google Cloud Translation v2 REST API.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::TranslationConfig;

/// Shown in place of a translation when the request fails.
pub const TRANSLATION_ERROR_TEXT: &str = "Translation error";

/// Target languages offered by the translator page, as (code, name).
pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("zh", "Chinese"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("bn", "Bengali"),
    ("pa", "Punjabi"),
    ("ur", "Urdu"),
    ("vi", "Vietnamese"),
    ("th", "Thai"),
    ("ms", "Malay"),
    ("id", "Indonesian"),
    ("tr", "Turkish"),
    ("fa", "Persian"),
    ("pl", "Polish"),
    ("uk", "Ukrainian"),
    ("nl", "Dutch"),
    ("el", "Greek"),
    ("hu", "Hungarian"),
    ("cs", "Czech"),
    ("sv", "Swedish"),
    ("fi", "Finnish"),
    ("no", "Norwegian"),
    ("da", "Danish"),
    ("he", "Hebrew"),
    ("ro", "Romanian"),
    ("bg", "Bulgarian"),
    ("sr", "Serbian"),
    ("hr", "Croatian"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("et", "Estonian"),
    ("is", "Icelandic"),
    ("ga", "Irish"),
    ("mt", "Maltese"),
    ("cy", "Welsh"),
    ("sq", "Albanian"),
    ("mk", "Macedonian"),
    ("bs", "Bosnian"),
    ("az", "Azerbaijani"),
    ("ka", "Georgian"),
    ("hy", "Armenian"),
    ("mn", "Mongolian"),
    ("my", "Burmese"),
    ("km", "Khmer"),
    ("lo", "Lao"),
    ("si", "Sinhala"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("ml", "Malayalam"),
    ("kn", "Kannada"),
    ("gu", "Gujarati"),
    ("mr", "Marathi"),
    ("ne", "Nepali"),
    ("am", "Amharic"),
    ("sw", "Swahili"),
];

pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("nothing to translate")]
    EmptyText,
    #[error("no translation API key configured")]
    MissingApiKey,
    #[error("translation request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("translation service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected translation response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("translation response contained no translations")]
    EmptyResponse,
}

/// Translates text into a target language.
pub trait Translator: Send + Sync {
    fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslateError>;
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
    #[serde(default)]
    detected_source_language: Option<String>,
}

/// Extracts the first translation from a v2 response body.
fn parse_response(body: &str) -> Result<String, TranslateError> {
    let response: TranslateResponse = serde_json::from_str(body)?;
    let first = response
        .data
        .translations
        .into_iter()
        .next()
        .ok_or(TranslateError::EmptyResponse)?;
    if let Some(lang) = &first.detected_source_language {
        debug!(detected = %lang, "source language detected");
    }
    Ok(first.translated_text)
}

/// Blocking client for the Translation v2 endpoint. One request per call,
/// no retries.
#[derive(Debug, Clone)]
pub struct GoogleTranslateClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GoogleTranslateClient {
    pub fn from_config(cfg: &TranslationConfig) -> Result<Self, TranslateError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: cfg.endpoint.clone(),
            api_key: cfg.resolved_api_key().map(String::from),
        })
    }
}

impl Translator for GoogleTranslateClient {
    fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslateError> {
        if text.trim().is_empty() {
            return Err(TranslateError::EmptyText);
        }
        let key = self.api_key.as_deref().ok_or(TranslateError::MissingApiKey)?;
        debug!(target_language, chars = text.chars().count(), "sending translation request");
        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("q", text), ("target", target_language), ("key", key)])
            .json(&serde_json::json!({}))
            .send()?;
        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "translation request rejected");
            return Err(TranslateError::Status {
                status: status.as_u16(),
                body,
            });
        }
        parse_response(&body)
    }
}

/// Runs a translation and renders any failure the way the translator page
/// shows it.
pub fn translate_or_error_text(translator: &dyn Translator, text: &str, target: &str) -> String {
    match translator.translate(text, target) {
        Ok(translated) => translated,
        Err(err) => {
            warn!(%err, "translation failed");
            TRANSLATION_ERROR_TEXT.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Translator for Upper {
        fn translate(&self, text: &str, _target: &str) -> Result<String, TranslateError> {
            Ok(text.to_uppercase())
        }
    }

    struct Broken;

    impl Translator for Broken {
        fn translate(&self, _text: &str, _target: &str) -> Result<String, TranslateError> {
            Err(TranslateError::EmptyResponse)
        }
    }

    #[test]
    fn parses_first_translation() {
        let body = r#"{"data":{"translations":[
            {"translatedText":"Hola","detectedSourceLanguage":"en"},
            {"translatedText":"ignored"}
        ]}}"#;
        assert_eq!(parse_response(body).unwrap(), "Hola");
    }

    #[test]
    fn empty_translation_list_is_an_error() {
        let body = r#"{"data":{"translations":[]}}"#;
        assert!(matches!(
            parse_response(body),
            Err(TranslateError::EmptyResponse)
        ));
        assert!(matches!(
            parse_response(r#"{"error":{"code":403}}"#),
            Err(TranslateError::Decode(_))
        ));
    }

    #[test]
    fn client_refuses_without_key_or_text() {
        let client = GoogleTranslateClient::from_config(&TranslationConfig::default()).unwrap();
        assert!(matches!(
            client.translate("hello", "es"),
            Err(TranslateError::MissingApiKey)
        ));
        assert!(matches!(
            client.translate("  ", "es"),
            Err(TranslateError::EmptyText)
        ));
    }

    #[test]
    fn failures_render_as_error_text() {
        assert_eq!(translate_or_error_text(&Upper, "hi", "es"), "HI");
        assert_eq!(translate_or_error_text(&Broken, "hi", "es"), TRANSLATION_ERROR_TEXT);
    }

    #[test]
    fn language_table_lookup() {
        assert_eq!(LANGUAGES.len(), 65);
        assert_eq!(language_name("es"), Some("Spanish"));
        assert_eq!(language_name("xx"), None);
    }
}
