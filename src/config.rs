//! Store configuration
//!
//! Defaults match the keys the game has always written. A URL query string
//! (`?log=debug`) can override them on web.

use log::LevelFilter;

use crate::consts::{LEGACY_SAVE_KEY, SAVE_KEY, WORD_LENGTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Key the save data is persisted under
    pub save_key: String,
    /// Deprecated key consumed once by migration
    pub legacy_key: String,
    /// Length of words kept when the word list is loaded
    pub word_length: usize,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            save_key: SAVE_KEY.to_string(),
            legacy_key: LEGACY_SAVE_KEY.to_string(),
            word_length: WORD_LENGTH,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Defaults with overrides from a `key=value&...` query string.
    /// Unknown keys and unparsable values are ignored.
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "log" => {
                    if let Ok(level) = value.parse::<LevelFilter>() {
                        config.log_level = level;
                    }
                }
                "save_key" if !value.is_empty() => config.save_key = value.to_string(),
                _ => {}
            }
        }

        config
    }
}
