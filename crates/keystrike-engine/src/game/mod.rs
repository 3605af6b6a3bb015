//! The typing game: owns the word bank and typing state, and couples them to
//! the effects coordinator through the engine context.

mod dispatch;
pub mod hud;

use crate::api::game::{EngineContext, Game, GameConfig};
use crate::api::types::*;
use crate::core::schedule::Scheduler;
use crate::input::keys::classify;
use crate::input::queue::InputEvent;
use crate::player::{pilot_label, PlayerRecord, GUEST};
use crate::typing::{CaseMode, TypingState};
use crate::words::WordBank;

use hud::HudSnapshot;

/// Continuations run after a delay, guarded by the scheduler epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Move to the next word after the completion volley.
    AdvanceTarget,
    /// Bring the enemy back after a debug volley.
    RevealEnemy,
}

pub struct TypingGame {
    config: GameConfig,
    bank: WordBank,
    state: TypingState,
    pending: Scheduler<Deferred>,
    pilot: String,
    revision: u64,
}

impl TypingGame {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            bank: WordBank::builtin(config.seed),
            config,
            state: TypingState::new(),
            pending: Scheduler::new(),
            pilot: pilot_label(GUEST),
            revision: 0,
        }
    }

    /// Use a custom word list instead of the built-in one.
    pub fn with_word_bank(mut self, bank: WordBank) -> Self {
        self.bank = bank;
        self
    }

    /// Set the pilot label from the stored player record, if any.
    pub fn set_player_record(&mut self, stored: Option<&str>) {
        let name = PlayerRecord::display_name(stored);
        log::info!("pilot: {name}");
        self.pilot = pilot_label(&name);
    }

    pub fn state(&self) -> &TypingState {
        &self.state
    }

    pub fn pending(&self) -> &Scheduler<Deferred> {
        &self.pending
    }

    /// Bumped on every state change the HUD has to reflect.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn pilot(&self) -> &str {
        &self.pilot
    }

    pub fn hud(&self, ctx: &EngineContext) -> HudSnapshot {
        HudSnapshot::build(&self.state, &self.pilot, ctx.effects.enemy_visible(), self.revision)
    }

    /// Fill the queue, take the first target and spawn its enemy.
    fn begin(&mut self, ctx: &mut EngineContext) {
        self.state.start(&mut self.bank, self.config.queue_len);
        self.show_current_enemy(ctx);
    }

    fn show_current_enemy(&mut self, ctx: &mut EngineContext) {
        if let Some(word) = self.state.current() {
            let difficulty = word.difficulty;
            ctx.effects.select_enemy(difficulty);
            ctx.emit_event(GameEvent::new(EVENT_TARGET, difficulty.index() as f32, 0.0, 0.0));
        }
    }

    fn emit_score(&self, ctx: &mut EngineContext) {
        ctx.emit_event(GameEvent::new(
            EVENT_SCORE,
            self.state.score() as f32,
            self.state.streak() as f32,
            0.0,
        ));
    }

    fn emit_mode(&self, ctx: &mut EngineContext) {
        ctx.emit_event(GameEvent::new(
            EVENT_MODE,
            self.state.is_free() as u8 as f32,
            (self.state.case_mode() == CaseMode::Upper) as u8 as f32,
            0.0,
        ));
    }

    fn refresh(&mut self, ctx: &mut EngineContext) {
        self.revision += 1;
        ctx.emit_event(GameEvent::new(EVENT_REFRESH, self.revision as f32, 0.0, 0.0));
    }
}

impl Default for TypingGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for TypingGame {
    fn config(&self) -> GameConfig {
        self.config.clone()
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.begin(ctx);
        self.emit_mode(ctx);
        self.emit_score(ctx);
        self.refresh(ctx);
        log::info!("typing game ready: {} words in bank", self.bank.len());
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, event: &InputEvent) {
        match event {
            InputEvent::KeyDown { key } => self.dispatch(classify(key), ctx),
            InputEvent::Custom { kind, a } => self.handle_custom(*kind, *a, ctx),
        }
    }

    fn update(&mut self, ctx: &mut EngineContext, dt: f32) {
        for action in self.pending.tick(dt) {
            self.run_deferred(action, ctx);
        }
    }

    fn hud_revision(&self) -> u64 {
        self.revision
    }
}
