use serde::Deserialize;

use crate::api::types::{GameEvent, EVENT_REFRESH, EVENT_SCORE};
use crate::effects::EffectsState;
use crate::error::{Error, Result};
use crate::input::queue::InputEvent;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60). Effect constants are per step.
    pub fixed_dt: f32,
    /// Lookahead queue length (default: 5).
    pub queue_len: usize,
    /// Delay between finishing a word and advancing to the next (default: 0.5s).
    pub advance_delay: f32,
    /// Delay before the cheat hook re-shows the enemy (default: 1.0s).
    pub enemy_reveal_delay: f32,
    /// Number of background stars (default: 2000).
    pub star_count: usize,
    /// Sub-particles per explosion (default: 50).
    pub burst_particles: usize,
    /// Maximum number of effects vertices (default: 4096).
    pub max_effects_vertices: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// RNG seed for word draws and effects.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            queue_len: 5,
            advance_delay: 0.5,
            enemy_reveal_delay: 1.0,
            star_count: 2000,
            burst_particles: 50,
            max_effects_vertices: 4096,
            max_events: 32,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) config; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stop time or leave the queue empty.
    pub fn validate(&self) -> Result<()> {
        if !(self.fixed_dt.is_finite() && self.fixed_dt > 0.0) {
            return Err(Error::InvalidConfig("fixed_dt must be a positive number"));
        }
        if !(self.advance_delay.is_finite() && self.advance_delay >= 0.0) {
            return Err(Error::InvalidConfig("advance_delay must not be negative"));
        }
        if !(self.enemy_reveal_delay.is_finite() && self.enemy_reveal_delay >= 0.0) {
            return Err(Error::InvalidConfig("enemy_reveal_delay must not be negative"));
        }
        if self.queue_len == 0 {
            return Err(Error::InvalidConfig("queue_len must be at least 1"));
        }
        Ok(())
    }
}

/// The contract a game fulfills to be driven by the runner.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Handle one raw input event. Called at a frame boundary, before the
    /// fixed steps of that frame.
    fn handle_input(&mut self, ctx: &mut EngineContext, event: &InputEvent);

    /// One fixed step of game time.
    fn update(&mut self, ctx: &mut EngineContext, dt: f32);

    /// Counter the host polls to know when to re-render its HUD.
    fn hud_revision(&self) -> u64 {
        0
    }
}

/// Mutable engine state shared with the game.
pub struct EngineContext {
    pub effects: EffectsState,
    pub events: Vec<GameEvent>,
}

impl EngineContext {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            effects: EffectsState::from_config(config),
            events: Vec::with_capacity(config.max_events),
        }
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Keep only the latest SCORE and REFRESH of the frame. Those carry
    /// state the host overwrites; every other event is kept in order.
    pub fn coalesce_events(&mut self) {
        let last_score = self.events.iter().rposition(|e| e.kind == EVENT_SCORE);
        let last_refresh = self.events.iter().rposition(|e| e.kind == EVENT_REFRESH);
        let mut index = 0;
        self.events.retain(|e| {
            let keep = if e.kind == EVENT_SCORE {
                Some(index) == last_score
            } else if e.kind == EVENT_REFRESH {
                Some(index) == last_refresh
            } else {
                true
            };
            index += 1;
            keep
        });
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
