//! A single finished game

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_GUESSES, WORD_LENGTH};
use crate::error::{RecordError, Result};

/// Outcome of one played game. Never mutated once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Whether the game was won
    pub won: bool,
    /// Number of guesses used
    pub guesses: i32,
    /// The word to guess
    pub word: String,
}

impl GameRecord {
    /// Build a record, rejecting guess counts outside 1..=6 and words
    /// that are not exactly five characters
    pub fn new(won: bool, guesses: i32, word: impl Into<String>) -> Result<Self> {
        let record = Self {
            won,
            guesses,
            word: word.into(),
        };
        record.validate()?;
        Ok(record)
    }

    pub fn won(guesses: i32, word: impl Into<String>) -> Self {
        Self {
            won: true,
            guesses,
            word: word.into(),
        }
    }

    pub fn lost(guesses: i32, word: impl Into<String>) -> Self {
        Self {
            won: false,
            guesses,
            word: word.into(),
        }
    }

    pub fn validate(&self) -> std::result::Result<(), RecordError> {
        if !(1..=MAX_GUESSES).contains(&self.guesses) {
            return Err(RecordError::GuessesOutOfRange(self.guesses));
        }

        let actual = self.word.chars().count();
        if actual != WORD_LENGTH {
            return Err(RecordError::WordLength {
                word: self.word.clone(),
                actual,
                expected: WORD_LENGTH,
            });
        }

        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
