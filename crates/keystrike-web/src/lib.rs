//! WASM exports for KeyStrike.
//!
//! The page calls `game_init` once, forwards every `keydown` to
//! `game_key_down`, calls `game_tick` from `requestAnimationFrame`, and reads
//! the HUD JSON and effect buffers back after each tick.

pub mod runner;

use std::cell::RefCell;

use keystrike_engine::{GameConfig, InputEvent, Key, TypingGame, WordBank};
use wasm_bindgen::prelude::*;

pub use runner::GameRunner;

thread_local! {
    static RUNNER: RefCell<Option<GameRunner<TypingGame>>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut GameRunner<TypingGame>) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
        f(runner)
    })
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64 + 1
}

fn start(game: TypingGame) {
    let mut runner = GameRunner::new(game);
    runner.init();
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
}

fn install_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Start with default settings and the built-in word list.
#[wasm_bindgen]
pub fn game_init() {
    install_logging();
    let config = GameConfig {
        seed: random_seed(),
        ..GameConfig::default()
    };
    start(TypingGame::with_config(config));
    log::info!("keystrike: initialized");
}

/// Start with a JSON config and an optional JSON word list. Unreadable input
/// is logged and replaced by the defaults.
#[wasm_bindgen]
pub fn game_init_with_config(config_json: &str, words_json: Option<String>) {
    install_logging();
    let mut config = GameConfig::from_json(config_json).unwrap_or_else(|err| {
        log::warn!("bad config, using defaults: {err}");
        GameConfig::default()
    });
    // An explicit seed replays the same words and explosions.
    let seeded = serde_json::from_str::<serde_json::Value>(config_json)
        .ok()
        .is_some_and(|v| v.get("seed").is_some());
    if !seeded {
        config.seed = random_seed();
    }

    let mut game = TypingGame::with_config(config.clone());
    if let Some(json) = words_json {
        match WordBank::from_json(&json, config.seed) {
            Ok(bank) => game = game.with_word_bank(bank),
            Err(err) => log::warn!("bad word list, using built-in words: {err}"),
        }
    }
    start(game);
    log::info!("keystrike: initialized with custom config");
}

/// Pass the stored player record (`localStorage.currentPlayer`), or nothing.
#[wasm_bindgen]
pub fn game_set_player(record_json: Option<String>) {
    with_runner(|r| r.game_mut().set_player_record(record_json.as_deref()));
}

#[wasm_bindgen]
pub fn game_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

/// Queue a `KeyboardEvent.key`. Returns true when the page should call
/// `preventDefault()`.
#[wasm_bindgen]
pub fn game_key_down(key: &str) -> bool {
    let key = Key::from_raw(key);
    let prevent = keystrike_engine::classify(&key).prevents_default();
    with_runner(|r| r.push_input(InputEvent::KeyDown { key }));
    prevent
}

#[wasm_bindgen]
pub fn game_custom_event(kind: u32, a: f32) {
    with_runner(|r| r.push_input(InputEvent::Custom { kind, a }));
}

// ---- Snapshots ----

#[wasm_bindgen]
pub fn get_hud_json() -> String {
    with_runner(|r| r.game().hud(r.ctx()).to_json())
}

/// Enemy snapshot as JSON, or `null` before the first target.
#[wasm_bindgen]
pub fn get_enemy_json() -> String {
    with_runner(|r| {
        serde_json::to_string(&r.ctx().effects.enemy_snapshot()).unwrap_or_else(|_| "null".to_string())
    })
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_header_ptr() -> *const f32 {
    with_runner(|r| r.header_ptr())
}

#[wasm_bindgen]
pub fn get_effects_ptr() -> *const f32 {
    with_runner(|r| r.effects_ptr())
}

#[wasm_bindgen]
pub fn get_effects_vertex_count() -> u32 {
    with_runner(|r| r.effects_vertex_count())
}

#[wasm_bindgen]
pub fn get_game_events_ptr() -> *const f32 {
    with_runner(|r| r.game_events_ptr())
}

#[wasm_bindgen]
pub fn get_game_events_len() -> u32 {
    with_runner(|r| r.game_events_len())
}

// ---- Capacity accessors ----

#[wasm_bindgen]
pub fn get_max_effects_vertices() -> u32 {
    with_runner(|r| r.max_effects_vertices())
}

#[wasm_bindgen]
pub fn get_max_events() -> u32 {
    with_runner(|r| r.max_events())
}

#[wasm_bindgen]
pub fn get_buffer_total_floats() -> u32 {
    with_runner(|r| r.buffer_total_floats())
}
