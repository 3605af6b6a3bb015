//! Input routing: classified key actions and UI custom events become state
//! machine calls, effect triggers and deferred continuations.

use super::{Deferred, TypingGame};
use crate::api::game::EngineContext;
use crate::api::types::*;
use crate::input::keys::KeyAction;
use crate::typing::{Mode, OutcomeKind};

impl TypingGame {
    /// Route one classified key press. Everything but `Ignored` ends in a
    /// HUD refresh.
    pub fn dispatch(&mut self, action: KeyAction, ctx: &mut EngineContext) {
        match action {
            KeyAction::Ignored => return,
            KeyAction::ToggleFreeMode => self.toggle_free_mode(ctx),
            KeyAction::ToggleCase => {
                self.state.toggle_case();
                self.emit_mode(ctx);
            }
            KeyAction::ClearInput => {
                self.state.clear_free_text();
            }
            KeyAction::Backspace => {
                self.state.backspace();
            }
            KeyAction::Letter(ch) => self.submit_letter(ch, ctx),
        }
        self.refresh(ctx);
    }

    /// Buttons and debug hooks from the page.
    pub fn handle_custom(&mut self, kind: u32, a: f32, ctx: &mut EngineContext) {
        match kind {
            CUSTOM_TOGGLE_FREE => self.dispatch(KeyAction::ToggleFreeMode, ctx),
            CUSTOM_TOGGLE_CASE => self.dispatch(KeyAction::ToggleCase, ctx),
            CUSTOM_CLEAR_INPUT => self.dispatch(KeyAction::ClearInput, ctx),
            CUSTOM_SKIP_WORD => self.skip_word(ctx),
            CUSTOM_CHEAT => self.force_streak(a.max(0.0) as u32, ctx),
            CUSTOM_RESET => self.reset(ctx),
            other => log::warn!("unknown custom event kind {other}"),
        }
    }

    fn submit_letter(&mut self, ch: char, ctx: &mut EngineContext) {
        let outcome = self.state.submit_character(ch);
        match outcome.kind {
            OutcomeKind::WordComplete { level } => {
                ctx.effects.trigger_completion(level);
                self.pending.schedule(self.config.advance_delay, Deferred::AdvanceTarget);
                ctx.emit_event(GameEvent::new(
                    EVENT_WORD_COMPLETE,
                    level as f32,
                    self.state.score() as f32,
                    0.0,
                ));
                self.emit_score(ctx);
            }
            OutcomeKind::Continue => self.emit_score(ctx),
            OutcomeKind::Miss => {
                ctx.emit_event(GameEvent::new(EVENT_MISS, 0.0, 0.0, 0.0));
                self.emit_score(ctx);
            }
            OutcomeKind::FreeAppend | OutcomeKind::Pending => {}
        }
    }

    fn toggle_free_mode(&mut self, ctx: &mut EngineContext) {
        // A completion waiting to advance must not fire into the other mode.
        self.pending.invalidate();
        match self.state.toggle_free_mode() {
            Mode::Free => ctx.effects.set_enemy_visible(false),
            Mode::Targeting if self.state.is_word_complete() => self.advance_now(ctx),
            Mode::Targeting => ctx.effects.set_enemy_visible(true),
        }
        log::debug!("mode: {:?}", self.state.mode());
        self.emit_mode(ctx);
    }

    /// Advance outside the deferred path; any pending advance becomes stale.
    fn advance_now(&mut self, ctx: &mut EngineContext) {
        self.pending.invalidate();
        if self.state.advance_target(&mut self.bank) {
            self.show_current_enemy(ctx);
        }
    }

    fn skip_word(&mut self, ctx: &mut EngineContext) {
        if self.state.is_free() {
            log::warn!("skip ignored in free mode");
            return;
        }
        self.advance_now(ctx);
        self.refresh(ctx);
    }

    /// Debug hook: force the streak and fire the matching volley.
    fn force_streak(&mut self, streak: u32, ctx: &mut EngineContext) {
        self.state.set_streak(streak);
        let level = if streak > 15 { 3 } else { 2 };
        ctx.effects.trigger_completion(level);
        self.pending.schedule(self.config.enemy_reveal_delay, Deferred::RevealEnemy);
        self.emit_score(ctx);
        self.refresh(ctx);
    }

    fn reset(&mut self, ctx: &mut EngineContext) {
        self.pending.invalidate();
        self.state.reset();
        ctx.effects.clear();
        self.begin(ctx);
        log::info!("game reset");
        self.emit_mode(ctx);
        self.emit_score(ctx);
        self.refresh(ctx);
    }

    pub(super) fn run_deferred(&mut self, action: Deferred, ctx: &mut EngineContext) {
        match action {
            Deferred::AdvanceTarget => {
                if self.state.advance_target(&mut self.bank) {
                    self.show_current_enemy(ctx);
                    self.refresh(ctx);
                }
            }
            Deferred::RevealEnemy => {
                if self.state.mode() == Mode::Targeting && !self.state.is_word_complete() {
                    ctx.effects.set_enemy_visible(true);
                    self.refresh(ctx);
                }
            }
        }
    }
}
