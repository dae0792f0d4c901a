//! Wordy entry point
//!
//! On web this boots the stores over LocalStorage and exposes them to the
//! UI layer. Natively it opens a data directory and prints the stats.

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;

    use wordy::platform::LocalStorage;
    use wordy::words::EMBEDDED_WORD_LIST;
    use wordy::{Config, GameRecord, Wordy};

    thread_local! {
        static APP: RefCell<Option<Wordy<LocalStorage>>> = const { RefCell::new(None) };
    }

    fn to_js(e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    fn with_app<T>(f: impl FnOnce(&mut Wordy<LocalStorage>) -> Result<T, JsValue>) -> Result<T, JsValue> {
        APP.with(|app| match app.borrow_mut().as_mut() {
            Some(app) => f(app),
            None => Err(JsValue::from_str("Wordy not started")),
        })
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let query = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let config = Config::from_query(&query);

        if let Some(level) = config.log_level.to_level() {
            console_log::init_with_level(level).expect("Failed to init logger");
        }

        log::info!("Wordy starting...");
        let storage = LocalStorage::open().map_err(to_js)?;
        let wordy = Wordy::start(storage, config, EMBEDDED_WORD_LIST);
        log::info!("Wordy ready with {} words", wordy.words.len());

        APP.with(|app| *app.borrow_mut() = Some(wordy));
        Ok(())
    }

    /// Record a finished game
    #[wasm_bindgen]
    pub fn save_game_record(won: bool, guesses: i32, word: String) -> Result<(), JsValue> {
        with_app(|app| {
            app.save_data
                .save_game_record(GameRecord {
                    won,
                    guesses,
                    word,
                })
                .map_err(to_js)
        })
    }

    /// Current statistics as JSON for the stats screen
    #[wasm_bindgen]
    pub fn stats_json() -> Result<String, JsValue> {
        with_app(|app| serde_json::to_string(&app.save_data.stats()).map_err(to_js))
    }

    #[wasm_bindgen]
    pub fn is_valid_word(word: &str) -> Result<bool, JsValue> {
        with_app(|app| Ok(app.is_valid_word(word)))
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Entry point is `wasm_app::start`
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use wordy::platform::FileStorage;
    use wordy::words::EMBEDDED_WORD_LIST;
    use wordy::{Config, Wordy};

    let config = Config::default();
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();

    let dir = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());
    let storage = match FileStorage::open(&dir) {
        Ok(storage) => storage,
        Err(e) => {
            eprintln!("Failed to open data directory '{dir}': {e}");
            std::process::exit(1);
        }
    };

    let wordy = Wordy::start(storage, config, EMBEDDED_WORD_LIST);
    let stats = wordy.save_data.stats();

    println!("Words loaded: {}", wordy.words.len());
    println!("Played: {}", stats.games_played);
    println!("Win %: {}", stats.win_percentage());
    println!("Current streak: {}", stats.current_streak);
    println!("Best streak: {}", stats.best_streak);
    println!("Guess distribution:");
    let widest = stats.distribution.max().max(1);
    for (guesses, count) in stats.distribution.iter() {
        let bar = "#".repeat((count * 20 / widest) as usize);
        println!("  {guesses}: {bar} {count}");
    }

    wordy.shutdown();
}
