//! Word services backed by an in-memory word list

use super::{LookupError, WordSource, WordValidator};
use crate::core::Word;
use crate::wordlists::{WORDS, loader::words_from_slice};
use async_trait::async_trait;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Picks targets uniformly from a word list
pub struct EmbeddedWordSource {
    words: Vec<Word>,
}

impl EmbeddedWordSource {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Source over the word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(WORDS))
    }
}

#[async_trait]
impl WordSource for EmbeddedWordSource {
    async fn random_word(&self) -> Result<Word, LookupError> {
        self.words
            .choose(&mut rand::rng())
            .cloned()
            .ok_or_else(|| LookupError::WordSourceUnavailable("word list is empty".to_string()))
    }
}

/// Always returns the same word (practice games with a chosen target)
pub struct FixedWordSource(Word);

impl FixedWordSource {
    #[must_use]
    pub const fn new(word: Word) -> Self {
        Self(word)
    }
}

#[async_trait]
impl WordSource for FixedWordSource {
    async fn random_word(&self) -> Result<Word, LookupError> {
        Ok(self.0.clone())
    }
}

/// Accepts exactly the words in a list
pub struct WordListValidator {
    words: FxHashSet<Word>,
}

impl WordListValidator {
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Validator over the word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(WORDS))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[async_trait]
impl WordValidator for WordListValidator {
    async fn lookup(&self, word: &Word) -> Result<bool, LookupError> {
        Ok(self.words.contains(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn embedded_source_returns_listed_word() {
        let source = EmbeddedWordSource::embedded();
        let validator = WordListValidator::embedded();
        for _ in 0..20 {
            let word = source.random_word().await.unwrap();
            assert!(validator.is_valid(&word).await, "{word} not in list");
        }
    }

    #[tokio::test]
    async fn empty_source_is_unavailable() {
        let source = EmbeddedWordSource::new(Vec::new());
        assert!(matches!(
            source.random_word().await,
            Err(LookupError::WordSourceUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn fixed_source_repeats_word() {
        let source = FixedWordSource::new(Word::new("crane").unwrap());
        assert_eq!(source.random_word().await.unwrap().text(), "CRANE");
        assert_eq!(source.random_word().await.unwrap().text(), "CRANE");
    }

    #[tokio::test]
    async fn list_validator_membership() {
        let validator = WordListValidator::new(words_from_slice(&["crane", "slate"]));
        assert_eq!(validator.len(), 2);
        assert!(validator.is_valid(&Word::new("CRANE").unwrap()).await);
        assert!(!validator.is_valid(&Word::new("xxxxx").unwrap()).await);
    }

    #[tokio::test]
    async fn embedded_validator_knows_common_words() {
        let validator = WordListValidator::embedded();
        assert!(!validator.is_empty());
        for word in ["apple", "alert", "crane"] {
            assert!(validator.is_valid(&Word::new(word).unwrap()).await);
        }
    }
}
