//! Word services
//!
//! The game depends on two collaborators: a source of random target words and
//! a validator that decides whether a guess is a real word. Both are async and
//! may fail; failures never reach the player. A failed target lookup falls back
//! to a fixed word and a failed validity lookup counts as "not a word".

mod http;
mod offline;

pub use http::{
    DEFAULT_DICTIONARY_URL, DEFAULT_RANDOM_WORD_URL, DictionaryApi, RandomWordApi,
    definition_found, parse_random_word,
};
pub use offline::{EmbeddedWordSource, FixedWordSource, WordListValidator};

use crate::core::Word;
use async_trait::async_trait;
use log::{debug, warn};
use thiserror::Error;

/// Why a lookup did not produce an answer
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("word source unavailable: {0}")]
    WordSourceUnavailable(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Supplies target words
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Fetch one random five-letter word
    async fn random_word(&self) -> Result<Word, LookupError>;
}

/// Decides whether a guess is a real word
#[async_trait]
pub trait WordValidator: Send + Sync {
    /// Look the word up, reporting lookup failures as errors
    async fn lookup(&self, word: &Word) -> Result<bool, LookupError>;

    /// Look the word up, treating any failure as "not a word"
    async fn is_valid(&self, word: &Word) -> bool {
        match self.lookup(word).await {
            Ok(found) => found,
            Err(err) => {
                warn!("Validity lookup for {word} failed, treating as invalid: {err}");
                false
            }
        }
    }
}

/// Obtain a target word, substituting `fallback` if the source fails
pub async fn choose_target(source: &dyn WordSource, fallback: &Word) -> Word {
    match source.random_word().await {
        Ok(word) => {
            debug!("Target word: {word}");
            word
        }
        Err(err) => {
            warn!("Could not fetch target word, using fallback {fallback}: {err}");
            fallback.clone()
        }
    }
}
