//! Eligible guess words
//!
//! The raw list is embedded at build time. At startup it is filtered to
//! the configured word length, upper-cased and loaded once.

use std::collections::HashSet;

/// Newline-delimited source list, as shipped with the game
pub const EMBEDDED_WORD_LIST: &str = include_str!("resources/words.txt");

/// Trim, keep entries of exactly `word_length` characters, upper-case
pub fn prepare_word_list(raw: &str, word_length: usize) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|word| word.chars().count() == word_length)
        .map(str::to_uppercase)
        .collect()
}

/// Words the player may guess this session
#[derive(Debug, Clone, Default)]
pub struct WordListStore {
    /// Load order
    words: Vec<String>,
    lookup: HashSet<String>,
}

impl WordListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append words verbatim. Filtering and casing are the caller's job.
    pub fn load<I>(&mut self, words: I)
    where
        I: IntoIterator<Item = String>,
    {
        let before = self.words.len();
        for word in words {
            self.lookup.insert(word.clone());
            self.words.push(word);
        }
        log::info!("Loaded {} words", self.words.len() - before);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
