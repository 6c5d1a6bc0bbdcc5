//! HTTP word services
//!
//! Random words come from random-word-api and validity checks from the free
//! dictionary API. Response interpretation lives in plain functions so it can
//! be tested without a network.

use super::{LookupError, WordSource, WordValidator};
use crate::core::Word;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Endpoint returning a JSON array with one capitalized five-letter word
pub const DEFAULT_RANDOM_WORD_URL: &str =
    "https://random-word-api.vercel.app/api?words=1&length=5&type=capitalized";

/// Endpoint prefix; the lowercase word is appended
pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";

/// Title the dictionary API sends back for unknown words
const NO_DEFINITIONS_TITLE: &str = "No Definitions Found";

fn build_client(timeout: Duration) -> Result<Client, LookupError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// Random target words over HTTP
pub struct RandomWordApi {
    client: Client,
    url: String,
}

impl RandomWordApi {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        Ok(Self {
            client: build_client(timeout)?,
            url: url.into(),
        })
    }
}

#[async_trait]
impl WordSource for RandomWordApi {
    async fn random_word(&self) -> Result<Word, LookupError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        parse_random_word(&body)
    }
}

/// Interpret a random-word response body such as `["Apple"]`
///
/// # Errors
///
/// Returns `MalformedResponse` if the body is not a JSON array of strings,
/// is empty, or its first word is not five letters.
pub fn parse_random_word(body: &str) -> Result<Word, LookupError> {
    let words: Vec<String> = serde_json::from_str(body)
        .map_err(|e| LookupError::MalformedResponse(e.to_string()))?;

    let first = words
        .first()
        .ok_or_else(|| LookupError::MalformedResponse("empty word list".to_string()))?;

    Word::new(first).map_err(|e| LookupError::MalformedResponse(format!("{first}: {e}")))
}

/// Dictionary lookups over HTTP
pub struct DictionaryApi {
    client: Client,
    base_url: String,
}

impl DictionaryApi {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.into(),
        })
    }

    fn url_for(&self, word: &Word) -> String {
        format!("{}{}", self.base_url, word.to_lowercase())
    }
}

#[async_trait]
impl WordValidator for DictionaryApi {
    async fn lookup(&self, word: &Word) -> Result<bool, LookupError> {
        let url = self.url_for(word);
        debug!("Checking {word} at {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        definition_found(status.as_u16(), &body)
    }
}

#[derive(Deserialize)]
struct NotFound {
    title: Option<String>,
}

/// Decide from a dictionary response whether the word has a definition
///
/// A non-2xx status or a `{"title": "No Definitions Found"}` object means no.
///
/// # Errors
///
/// Returns `MalformedResponse` if a successful response is not JSON.
pub fn definition_found(status: u16, body: &str) -> Result<bool, LookupError> {
    if !(200..300).contains(&status) {
        return Ok(false);
    }

    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| LookupError::MalformedResponse(e.to_string()))?;

    if value.is_object() {
        let not_found: NotFound = serde_json::from_value(value)
            .map_err(|e| LookupError::MalformedResponse(e.to_string()))?;
        if not_found.title.as_deref() == Some(NO_DEFINITIONS_TITLE) {
            return Ok(false);
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_capitalized_word() {
        let word = parse_random_word(r#"["Apple"]"#).unwrap();
        assert_eq!(word.text(), "APPLE");
    }

    #[test]
    fn takes_first_of_many() {
        let word = parse_random_word(r#"["crane", "slate"]"#).unwrap();
        assert_eq!(word.text(), "CRANE");
    }

    #[test]
    fn rejects_bad_random_word_bodies() {
        assert!(matches!(
            parse_random_word("[]"),
            Err(LookupError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_random_word(r#"["elephant"]"#),
            Err(LookupError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_random_word("<html>"),
            Err(LookupError::MalformedResponse(_))
        ));
        assert!(parse_random_word(r#"{"word": "apple"}"#).is_err());
    }

    #[test]
    fn definition_present() {
        let body = r#"[{"word": "crane", "meanings": []}]"#;
        assert!(definition_found(200, body).unwrap());
    }

    #[test]
    fn no_definitions_title() {
        let body = r#"{"title": "No Definitions Found", "message": "Sorry pal"}"#;
        assert!(!definition_found(200, body).unwrap());
    }

    #[test]
    fn not_found_status() {
        assert!(!definition_found(404, "").unwrap());
        assert!(!definition_found(500, "oops").unwrap());
    }

    #[test]
    fn malformed_success_body() {
        assert!(matches!(
            definition_found(200, "not json"),
            Err(LookupError::MalformedResponse(_))
        ));
    }

    #[test]
    fn dictionary_url_uses_lowercase() {
        let api = DictionaryApi::new(DEFAULT_DICTIONARY_URL, Duration::from_secs(1)).unwrap();
        let url = api.url_for(&Word::new("CRANE").unwrap());
        assert_eq!(url, "https://api.dictionaryapi.dev/api/v2/entries/en/crane");
    }
}
