//! Application root context
//!
//! Owns both stores for the life of the app. Startup order:
//! 1. filter the raw word list and load it
//! 2. restore save data from the save key
//! 3. migrate the legacy key, if any, and delete it

use crate::config::Config;
use crate::persistence::Storage;
use crate::save_data::SaveDataStore;
use crate::words::{WordListStore, prepare_word_list};

pub struct Wordy<S: Storage> {
    pub save_data: SaveDataStore<S>,
    pub words: WordListStore,
    config: Config,
}

impl<S: Storage> Wordy<S> {
    /// Run the startup sequence. Never fails: unreadable save data and
    /// failed migrations are logged and the game starts from defaults.
    pub fn start(storage: S, config: Config, raw_words: &str) -> Self {
        let mut words = WordListStore::new();
        words.load(prepare_word_list(raw_words, config.word_length));

        let mut save_data = SaveDataStore::open(storage, &config);
        match save_data.migrate_legacy() {
            Ok(true) => log::info!("Old save data migrated"),
            Ok(false) => {}
            Err(e) => log::warn!("Abandoning save data migration: {}", e),
        }

        Self {
            save_data,
            words,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether `guess` is in the word list, ignoring case
    pub fn is_valid_word(&self, guess: &str) -> bool {
        self.words.contains(&guess.trim().to_uppercase())
    }

    /// Flush save data one last time and release the storage backend
    pub fn shutdown(mut self) -> S {
        if let Err(e) = self.save_data.persist() {
            log::warn!("Final save failed: {}", e);
        }
        log::info!("Wordy shut down");
        self.save_data.into_storage()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;
    use crate::record::GameRecord;

    const WORDS: &str = "crane\nlight\ncat\nhouses\nquick\n";

    #[test]
    fn test_start_fresh() {
        let app = Wordy::start(MemoryStorage::new(), Config::default(), WORDS);
        assert_eq!(app.words.words(), ["CRANE", "LIGHT", "QUICK"]);
        assert_eq!(app.save_data.games_played(), 0);
        assert_eq!(app.save_data.storage().writes(), 0);
        assert!(app.is_valid_word("crane"));
        assert!(!app.is_valid_word("cat"));
    }

    #[test]
    fn test_start_migrates_and_deletes_legacy_key() {
        let legacy = r#"{"record":[{"won":true,"guesses":4,"word":"LIGHT"}],"currentStreak":1,"bestStreak":1,"onHighStreak":true}"#;
        let app = Wordy::start(
            MemoryStorage::with_item("saveData", legacy),
            Config::default(),
            WORDS,
        );

        assert_eq!(app.save_data.games_played(), 1);
        assert!(app.save_data.on_high_streak());

        let storage = app.shutdown();
        assert!(!storage.contains_key("saveData"));
        assert!(storage.contains_key("wordy-save-data"));
    }

    #[test]
    fn test_start_with_bad_legacy_data_uses_defaults() {
        let app = Wordy::start(
            MemoryStorage::with_item("saveData", "not json"),
            Config::default(),
            WORDS,
        );
        assert_eq!(app.save_data.games_played(), 0);
        assert_eq!(app.save_data.best_streak(), 0);
        assert!(app.save_data.storage().contains_key("saveData"));
    }

    #[test]
    fn test_games_survive_restart() {
        let mut app = Wordy::start(MemoryStorage::new(), Config::default(), WORDS);
        app.save_data
            .save_game_record(GameRecord::won(3, "CRANE"))
            .unwrap();
        app.save_data
            .save_game_record(GameRecord::won(5, "QUICK"))
            .unwrap();
        let storage = app.shutdown();

        let app = Wordy::start(storage, Config::default(), WORDS);
        assert_eq!(app.save_data.games_played(), 2);
        assert_eq!(app.save_data.current_streak(), 2);
        assert_eq!(app.save_data.distribution().get(5), 1);
    }

    #[test]
    fn test_custom_save_key() {
        let config = Config::from_query("save_key=wordy-alt");
        let mut app = Wordy::start(MemoryStorage::new(), config, WORDS);
        app.save_data
            .save_game_record(GameRecord::lost(6, "LIGHT"))
            .unwrap();

        let storage = app.shutdown();
        assert!(storage.contains_key("wordy-alt"));
        assert!(!storage.contains_key("wordy-save-data"));
    }
}
