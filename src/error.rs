//! Error types shared by the stores and storage backends

/// Reasons a [`GameRecord`](crate::record::GameRecord) fails validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("guess count {0} is outside 1..={max}", max = crate::consts::MAX_GUESSES)]
    GuessesOutOfRange(i32),

    #[error("word {word:?} has {actual} characters, expected {expected}")]
    WordLength {
        word: String,
        actual: usize,
        expected: usize,
    },
}

/// All errors surfaced by the save data store
#[derive(Debug, thiserror::Error)]
pub enum SaveDataError {
    /// Save data was not well-formed JSON of the expected shape
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The key-value backend refused a read or write
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid game record: {0}")]
    Record(#[from] RecordError),
}

impl SaveDataError {
    pub fn is_parse(&self) -> bool {
        matches!(self, SaveDataError::Parse(_))
    }
}

pub type Result<T> = std::result::Result<T, SaveDataError>;
