//! Wordy - client-side state for a word-guessing game
//!
//! Core modules:
//! - `save_data`: Game history, streaks and migration of old saves
//! - `words`: Eligible guess words loaded at startup
//! - `persistence`: Key-value storage abstraction
//! - `platform`: LocalStorage (web) and file (native) backends
//! - `app`: Root context tying the stores together

pub mod app;
pub mod config;
pub mod distribution;
pub mod error;
pub mod persistence;
pub mod platform;
pub mod record;
pub mod save_data;
pub mod words;

pub use app::Wordy;
pub use config::Config;
pub use distribution::Distribution;
pub use error::{RecordError, Result, SaveDataError};
pub use persistence::{MemoryStorage, Storage};
pub use record::GameRecord;
pub use save_data::{SaveDataState, SaveDataStore, Stats};
pub use words::WordListStore;

/// Game configuration constants
pub mod consts {
    /// Storage key the save data lives under
    pub const SAVE_KEY: &str = "wordy-save-data";
    /// Deprecated storage key, only read for migration
    pub const LEGACY_SAVE_KEY: &str = "saveData";

    /// Letters per word
    pub const WORD_LENGTH: usize = 5;
    /// Guesses allowed per game
    pub const MAX_GUESSES: i32 = 6;
}
