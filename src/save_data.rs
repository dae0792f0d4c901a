//! Save data: game history and streak statistics
//!
//! [`SaveDataStore`] is the only writer of the save key. Every mutating
//! operation writes the save key exactly once, so the storage write is
//! part of each operation's contract rather than a hidden side effect.
//!
//! Derived values (`distribution`, `games_won`, `games_played`) are never
//! stored. They are recomputed from `record` on demand.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::distribution::Distribution;
use crate::error::Result;
use crate::persistence::{self, Storage};
use crate::record::GameRecord;

/// Everything persisted under the save key
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaveDataState {
    /// Previous games, oldest first
    pub record: Vec<GameRecord>,
    /// How many games have been won in a row
    pub current_streak: u32,
    /// The greatest win streak the player has made
    pub best_streak: u32,
    /// Whether the current streak is the highest streak
    pub on_high_streak: bool,
}

impl SaveDataState {
    /// Apply one finished game to the streak counters and history
    pub fn apply(&mut self, game: GameRecord) {
        if game.won {
            self.current_streak = self.current_streak.saturating_add(1);

            if self.current_streak > self.best_streak {
                self.best_streak = self.current_streak;
                self.on_high_streak = true;
            }
        } else {
            self.current_streak = 0;
            self.on_high_streak = false;
        }

        self.record.push(game);
    }

    pub fn distribution(&self) -> Distribution {
        Distribution::from_records(&self.record)
    }

    pub fn games_won(&self) -> usize {
        self.record.iter().filter(|game| game.won).count()
    }

    pub fn games_played(&self) -> usize {
        self.record.len()
    }

    /// Problems a syntactically valid blob can still carry
    fn inconsistencies(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.best_streak < self.current_streak {
            problems.push(format!(
                "bestStreak {} is below currentStreak {}",
                self.best_streak, self.current_streak
            ));
        }

        let invalid = self.record.iter().filter(|g| !g.is_valid()).count();
        if invalid > 0 {
            problems.push(format!("{} malformed game records", invalid));
        }

        problems
    }
}

/// Snapshot of everything the statistics screen shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub current_streak: u32,
    pub best_streak: u32,
    pub on_high_streak: bool,
    pub distribution: Distribution,
    pub games_won: usize,
    pub games_played: usize,
}

impl Stats {
    /// Rounded percentage of games won (0 when nothing has been played)
    pub fn win_percentage(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        ((self.games_won as f64 / self.games_played as f64) * 100.0).round() as u32
    }
}

/// Owner of [`SaveDataState`] and the storage it is persisted to
pub struct SaveDataStore<S: Storage> {
    state: SaveDataState,
    storage: S,
    key: String,
    legacy_key: String,
}

impl<S: Storage> SaveDataStore<S> {
    /// Restore from the save key, falling back to a fresh state if the
    /// stored data is missing or unreadable
    pub fn open(storage: S, config: &Config) -> Self {
        let state = match persistence::load_json::<SaveDataState>(&storage, &config.save_key) {
            Ok(Some(state)) => {
                log::info!("Loaded save data ({} games)", state.record.len());
                state
            }
            Ok(None) => {
                log::info!("No save data found, starting fresh");
                SaveDataState::default()
            }
            Err(e) => {
                log::warn!("Ignoring unreadable save data: {}", e);
                SaveDataState::default()
            }
        };

        Self::with_state(storage, config, state)
    }

    /// Like [`open`](Self::open) but surfaces parse and storage errors
    pub fn try_open(storage: S, config: &Config) -> Result<Self> {
        let state = persistence::load_json(&storage, &config.save_key)?.unwrap_or_default();
        Ok(Self::with_state(storage, config, state))
    }

    fn with_state(storage: S, config: &Config, state: SaveDataState) -> Self {
        Self {
            state,
            storage,
            key: config.save_key.clone(),
            legacy_key: config.legacy_key.clone(),
        }
    }

    /// Record a finished game, update streaks and persist.
    ///
    /// The game is always appended, even if it fails validation. An `Err`
    /// only means the storage write failed; the in-memory state is updated.
    pub fn save_game_record(&mut self, game: GameRecord) -> Result<()> {
        if let Err(e) = game.validate() {
            log::warn!("Recording malformed game: {}", e);
        }

        self.state.apply(game);
        self.persist()
    }

    /// Replace the whole state with a JSON blob in the legacy layout.
    ///
    /// The migrated state is written before it replaces the current one,
    /// so any `Err` (parse or storage) leaves the state untouched.
    /// The caller removes the legacy key after this succeeds.
    pub fn migrate_old_save_data(&mut self, data: &str) -> Result<()> {
        let migrated: SaveDataState = serde_json::from_str(data)?;

        for problem in migrated.inconsistencies() {
            log::warn!("Migrated save data: {}", problem);
        }

        persistence::save_json(&mut self.storage, &self.key, &migrated)?;
        log::info!("Migrated {} games from old save data", migrated.record.len());
        self.state = migrated;
        Ok(())
    }

    /// Migrate from the legacy key if it exists, then delete it.
    ///
    /// Returns `Ok(true)` when a migration happened. On failure the legacy
    /// key is left in place. A legacy key found next to an existing save
    /// key is stale and is dropped without migrating.
    pub fn migrate_legacy(&mut self) -> Result<bool> {
        let Some(data) = self.storage.get_item(&self.legacy_key)? else {
            return Ok(false);
        };

        if self.storage.get_item(&self.key)?.is_some() {
            log::warn!(
                "Save data already present, discarding stale {}",
                self.legacy_key
            );
            self.storage.remove_item(&self.legacy_key)?;
            return Ok(false);
        }

        self.migrate_old_save_data(&data)?;
        self.storage.remove_item(&self.legacy_key)?;
        log::info!("Removed legacy save key {}", self.legacy_key);
        Ok(true)
    }

    /// Serialize the current state to the save key
    pub fn persist(&mut self) -> Result<()> {
        persistence::save_json(&mut self.storage, &self.key, &self.state)
    }

    pub fn state(&self) -> &SaveDataState {
        &self.state
    }

    pub fn record(&self) -> &[GameRecord] {
        &self.state.record
    }

    pub fn current_streak(&self) -> u32 {
        self.state.current_streak
    }

    pub fn best_streak(&self) -> u32 {
        self.state.best_streak
    }

    pub fn on_high_streak(&self) -> bool {
        self.state.on_high_streak
    }

    pub fn distribution(&self) -> Distribution {
        self.state.distribution()
    }

    pub fn games_won(&self) -> usize {
        self.state.games_won()
    }

    pub fn games_played(&self) -> usize {
        self.state.games_played()
    }

    pub fn stats(&self) -> Stats {
        Stats {
            current_streak: self.state.current_streak,
            best_streak: self.state.best_streak,
            on_high_streak: self.state.on_high_streak,
            distribution: self.distribution(),
            games_won: self.games_won(),
            games_played: self.games_played(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Tear down the store and hand back its backend
    pub fn into_storage(self) -> S {
        self.storage
    }
}
