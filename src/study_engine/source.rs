//! The word-generation boundary.
//!
//! The generation service itself (network, credentials, model choice) lives
//! outside this crate. What lives here is its contract ([`WordSource`]), the
//! request text a generative backend is sent ([`word_prompt`]), the parser for
//! the JSON array it answers with ([`parse_word_list`]), and an in-memory
//! source for tests and offline use.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::study_engine::{
    errors::SourceError,
    models::{Book, Level, Word, WordCount},
};

#[async_trait]
pub trait WordSource: Send + Sync {
    async fn generate(
        &self,
        book: Book,
        level: Level,
        count: WordCount,
    ) -> Result<Vec<Word>, SourceError>;
}

/// One entry of the service payload, before an id is assigned.
#[derive(Debug, Deserialize)]
struct RawWord {
    word: String,
    pronunciation: String,
    translation: String,
}

/// Parse the service's JSON array into words with ids `"{word}-{index}"`.
pub fn parse_word_list(json: &str) -> Result<Vec<Word>, SourceError> {
    let value: Value = serde_json::from_str(json.trim())?;
    let Value::Array(items) = value else {
        return Err(SourceError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| -> Result<Word, SourceError> {
            let raw: RawWord = serde_json::from_value(item)?;
            Ok(Word {
                id: format!("{}-{}", raw.word, index),
                headword: raw.word,
                pronunciation: raw.pronunciation,
                translation: raw.translation,
            })
        })
        .collect()
}

/// The instruction a generative backend receives for one study request.
pub fn word_prompt(book: Book, level: Level, count: WordCount) -> String {
    format!(
        "Generate a list of {count} English vocabulary words from the novel \"{book}\".\n\
         The words should be suitable for an \"{level}\" level English learner.\n\
         For each word, provide the following information in a JSON format:\n\
         1. 'word': The English word itself.\n\
         2. 'pronunciation': The phonetic spelling (IPA).\n\
         3. 'translation': A simple Chinese translation.\n\
         \n\
         Return the response as a JSON array of objects."
    )
}

/// Serves fixed word lists per book, truncated to the requested count.
///
/// The level is ignored; a list is whatever the caller loaded for the book.
#[derive(Debug, Clone, Default)]
pub struct StaticWordSource {
    lists: HashMap<Book, Vec<Word>>,
}

impl StaticWordSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_words(mut self, book: Book, words: Vec<Word>) -> Self {
        self.lists.insert(book, words);
        self
    }

    /// Load a book's list from a payload in the service's JSON format.
    pub fn with_json(self, book: Book, json: &str) -> Result<Self, SourceError> {
        let words = parse_word_list(json)?;
        Ok(self.with_words(book, words))
    }
}

#[async_trait]
impl WordSource for StaticWordSource {
    async fn generate(
        &self,
        book: Book,
        _level: Level,
        count: WordCount,
    ) -> Result<Vec<Word>, SourceError> {
        let words = self
            .lists
            .get(&book)
            .ok_or_else(|| SourceError::Unavailable(format!("no word list loaded for {book}")))?;
        Ok(words.iter().take(count.get()).cloned().collect())
    }
}
