//! Game configuration
//!
//! Collects the command-line options that decide where target words come
//! from and how guesses are validated.

use crate::core::Word;
use crate::services::{
    DEFAULT_DICTIONARY_URL, DEFAULT_RANDOM_WORD_URL, DictionaryApi, EmbeddedWordSource,
    FixedWordSource, RandomWordApi, WordListValidator, WordSource, WordValidator,
};
use crate::wordlists::WORDS;
use crate::wordlists::loader::{load_from_file, words_from_slice};
use anyhow::{Context, Result, bail};
use log::info;
use std::path::PathBuf;
use std::time::Duration;

/// Target used when the random word source is unavailable
pub const DEFAULT_FALLBACK_WORD: &str = "APPLE";

const FALLBACK_WORD: Word = match Word::from_ascii(*b"APPLE") {
    Some(word) => word,
    None => panic!("fallback word must be five letters"),
};

/// Per-request timeout for the HTTP services
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for a run of the game
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Use the word list instead of the HTTP services
    pub offline: bool,
    /// Custom word list file for validation (and offline targets)
    pub dictionary: Option<PathBuf>,
    /// Fixed target for every game
    pub target: Option<Word>,
    pub fallback_word: Word,
    pub random_word_url: String,
    pub dictionary_url: String,
    pub timeout: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            offline: false,
            dictionary: None,
            target: None,
            fallback_word: FALLBACK_WORD,
            random_word_url: DEFAULT_RANDOM_WORD_URL.to_string(),
            dictionary_url: DEFAULT_DICTIONARY_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// The two collaborators a game needs
pub struct Services {
    pub source: Box<dyn WordSource>,
    pub validator: Box<dyn WordValidator>,
}

impl GameConfig {
    /// Build the word source and validator this configuration describes
    ///
    /// # Errors
    ///
    /// Returns an error if the custom dictionary cannot be read or holds no
    /// valid words, or if an HTTP client cannot be created.
    pub fn build_services(&self) -> Result<Services> {
        let word_list = match &self.dictionary {
            Some(path) => {
                let words = load_from_file(path)
                    .with_context(|| format!("reading word list {}", path.display()))?;
                if words.is_empty() {
                    bail!("word list {} has no five-letter words", path.display());
                }
                info!("Using {} words from {}", words.len(), path.display());
                Some(words)
            }
            None => None,
        };

        // A list-backed validator must accept every word that can become the target
        let validator: Box<dyn WordValidator> = match (&word_list, self.offline) {
            (Some(words), _) => Box::new(self.list_validator(words.iter().cloned())),
            (None, true) => Box::new(self.list_validator(words_from_slice(WORDS))),
            (None, false) => Box::new(
                DictionaryApi::new(&self.dictionary_url, self.timeout)
                    .context("creating dictionary client")?,
            ),
        };

        // Targets come from the word list whenever guesses are checked against one
        let source: Box<dyn WordSource> = match (&self.target, word_list, self.offline) {
            (Some(target), _, _) => Box::new(FixedWordSource::new(target.clone())),
            (None, Some(words), _) => Box::new(EmbeddedWordSource::new(words)),
            (None, None, true) => Box::new(EmbeddedWordSource::embedded()),
            (None, None, false) => Box::new(
                RandomWordApi::new(&self.random_word_url, self.timeout)
                    .context("creating random word client")?,
            ),
        };

        Ok(Services { source, validator })
    }

    fn list_validator(&self, words: impl IntoIterator<Item = Word>) -> WordListValidator {
        let extra = self
            .target
            .iter()
            .chain(std::iter::once(&self.fallback_word))
            .cloned();
        WordListValidator::new(words.into_iter().chain(extra))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameSession, Outcome};
    use std::fs;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert!(!config.offline);
        assert_eq!(config.fallback_word.text(), "APPLE");
        assert_eq!(config.fallback_word, Word::new(DEFAULT_FALLBACK_WORD).unwrap());
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.dictionary_url, DEFAULT_DICTIONARY_URL);
    }

    #[tokio::test]
    async fn offline_services_use_embedded_list() {
        let config = GameConfig {
            offline: true,
            ..GameConfig::default()
        };
        let services = config.build_services().unwrap();

        let word = services.source.random_word().await.unwrap();
        assert!(services.validator.is_valid(&word).await);
        assert!(
            !services
                .validator
                .is_valid(&Word::new("qxqxq").unwrap())
                .await
        );
    }

    #[tokio::test]
    async fn fixed_target_overrides_source() {
        let config = GameConfig {
            offline: true,
            target: Some(Word::new("crane").unwrap()),
            ..GameConfig::default()
        };
        let services = config.build_services().unwrap();
        assert_eq!(services.source.random_word().await.unwrap().text(), "CRANE");
    }

    #[tokio::test]
    async fn custom_dictionary_file() {
        let path = std::env::temp_dir().join("wordle_game_config_test_words.txt");
        fs::write(&path, "crane\nslate\n").unwrap();

        let config = GameConfig {
            offline: true,
            dictionary: Some(path.clone()),
            ..GameConfig::default()
        };
        let services = config.build_services().unwrap();

        assert!(services.validator.is_valid(&Word::new("slate").unwrap()).await);
        assert!(!services.validator.is_valid(&Word::new("tiger").unwrap()).await);
        let target = services.source.random_word().await.unwrap();
        assert!(["CRANE", "SLATE"].contains(&target.text()));

        fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn fixed_target_outside_word_list_can_be_won() {
        let config = GameConfig {
            offline: true,
            target: Some(Word::new("zebra").unwrap()),
            ..GameConfig::default()
        };
        let services = config.build_services().unwrap();

        let mut session =
            GameSession::start(services.source.as_ref(), &config.fallback_word).await;
        session.enter_word("zebra");
        let report = session
            .submit_guess(services.validator.as_ref())
            .await
            .unwrap();
        assert_eq!(report.outcome, Outcome::Won);
    }

    #[tokio::test]
    async fn online_dictionary_file_draws_targets_from_list() {
        let path = std::env::temp_dir().join("wordle_game_config_test_online.txt");
        fs::write(&path, "crane\n").unwrap();

        let config = GameConfig {
            dictionary: Some(path.clone()),
            random_word_url: "http://127.0.0.1:9/unreachable".to_string(),
            ..GameConfig::default()
        };
        let services = config.build_services().unwrap();

        let target = services.source.random_word().await.unwrap();
        assert_eq!(target.text(), "CRANE");
        assert!(services.validator.is_valid(&target).await);

        fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn fallback_word_accepted_by_list_validator() {
        let path = std::env::temp_dir().join("wordle_game_config_test_fallback.txt");
        fs::write(&path, "crane\nslate\n").unwrap();

        let config = GameConfig {
            offline: true,
            dictionary: Some(path.clone()),
            fallback_word: Word::new("zesty").unwrap(),
            ..GameConfig::default()
        };
        let services = config.build_services().unwrap();
        assert!(services.validator.is_valid(&Word::new("zesty").unwrap()).await);

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn empty_dictionary_file_rejected() {
        let path = std::env::temp_dir().join("wordle_game_config_test_empty.txt");
        fs::write(&path, "toolong\nab\n").unwrap();

        let config = GameConfig {
            dictionary: Some(path.clone()),
            ..GameConfig::default()
        };
        assert!(config.build_services().is_err());

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_dictionary_file_rejected() {
        let config = GameConfig {
            dictionary: Some(PathBuf::from("/definitely/not/here.txt")),
            ..GameConfig::default()
        };
        assert!(config.build_services().is_err());
    }
}
