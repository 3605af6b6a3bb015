use keystrike_engine::api::types::CUSTOM_RESET;
use keystrike_engine::bridge::protocol::HEADER_FLOATS;
use keystrike_engine::{EngineContext, FixedTimestep, Game, InputEvent, InputQueue, ProtocolLayout};

/// Generic game runner that wires up the engine loop.
///
/// The concrete game keeps a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    timestep: FixedTimestep,
    layout: ProtocolLayout,
    initialized: bool,
    frame: u32,
    header: [f32; HEADER_FLOATS],
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);

        Self {
            game,
            ctx: EngineContext::new(&config),
            input: InputQueue::new(),
            timestep,
            layout,
            initialized: false,
            frame: 0,
            header: [0.0; HEADER_FLOATS],
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.ctx.effects.rebuild_effects_buffer();
        self.initialized = true;
    }

    /// Queue an input event; it is handled at the start of the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one host frame: route input, run fixed steps, pack buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        // Input is handled once per frame, even when no fixed step runs.
        for event in self.input.drain() {
            if matches!(event, InputEvent::Custom { kind: CUSTOM_RESET, .. }) {
                self.timestep.reset();
            }
            self.game.handle_input(&mut self.ctx, &event);
        }

        let steps = self.timestep.accumulate(dt);
        let step_dt = self.timestep.dt();
        for _ in 0..steps {
            self.game.update(&mut self.ctx, step_dt);
            self.ctx.effects.tick(step_dt);
        }

        self.ctx.coalesce_events();
        if self.ctx.events.len() > self.layout.max_events {
            log::warn!(
                "dropping {} game events over capacity",
                self.ctx.events.len() - self.layout.max_events
            );
            self.ctx.events.truncate(self.layout.max_events);
        }

        self.ctx.effects.rebuild_effects_buffer();

        self.frame = self.frame.wrapping_add(1);
        self.header = self.layout.header(
            self.frame,
            self.ctx.effects.effects_vertex_count(),
            self.ctx.events.len(),
            self.game.hud_revision(),
        );
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn ctx(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn effects_ptr(&self) -> *const f32 {
        self.ctx.effects.effects_buffer_ptr()
    }

    pub fn effects_vertex_count(&self) -> u32 {
        self.ctx.effects.effects_vertex_count() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    // ---- Capacity accessors ----

    pub fn max_effects_vertices(&self) -> u32 {
        self.layout.max_effects_vertices as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keystrike_engine::api::types::{EVENT_MISS, EVENT_REFRESH, EVENT_WORD_COMPLETE};
    use keystrike_engine::bridge::protocol::{
        HEADER_EFFECTS_VERTEX_COUNT, HEADER_FRAME_COUNTER, HEADER_HUD_REVISION,
    };
    use keystrike_engine::{GameConfig, Key, TypingGame, WordBank};

    const FRAME: f32 = 1.0 / 60.0;

    fn runner() -> GameRunner<TypingGame> {
        let config = GameConfig {
            star_count: 16,
            ..GameConfig::default()
        };
        let bank = WordBank::from_json(r#"[{ "text": "GO", "difficulty": "easy" }]"#, 1).unwrap();
        let mut runner = GameRunner::new(TypingGame::with_config(config).with_word_bank(bank));
        runner.init();
        runner
    }

    fn key(runner: &mut GameRunner<TypingGame>, raw: &str) {
        runner.push_input(InputEvent::KeyDown { key: Key::from_raw(raw) });
    }

    #[test]
    fn tick_before_init_is_a_noop() {
        let mut runner = GameRunner::new(TypingGame::new());
        runner.push_input(InputEvent::KeyDown { key: Key::Char('a') });
        runner.tick(FRAME);
        assert!(!runner.is_initialized());
        assert_eq!(runner.game_events_len(), 0);
    }

    #[test]
    fn input_is_handled_even_without_a_fixed_step() {
        let mut runner = runner();
        key(&mut runner, "g");
        runner.tick(0.001);
        assert_eq!(runner.game().state().progress(), 1);
        assert!(runner.ctx().events.iter().any(|e| e.kind == EVENT_REFRESH));
    }

    #[test]
    fn full_word_flows_through_effects_and_advance() {
        let mut runner = runner();
        key(&mut runner, "g");
        key(&mut runner, "o");
        runner.tick(FRAME);
        assert!(runner.ctx().events.iter().any(|e| e.kind == EVENT_WORD_COMPLETE));
        assert_eq!(runner.ctx().effects.lasers.len(), 1);
        // 16 stars + 1 laser + 50 particles.
        assert_eq!(runner.effects_vertex_count(), 16 + 1 + 50);

        // Half a second of frames later the next word is up and the laser is gone.
        for _ in 0..40 {
            runner.tick(FRAME);
        }
        assert_eq!(runner.game().state().progress(), 0);
        assert!(runner.ctx().effects.lasers.is_empty());
        assert!(runner.ctx().effects.enemy_visible());
    }

    #[test]
    fn header_tracks_counts_and_revision() {
        let mut runner = runner();
        key(&mut runner, "g");
        runner.tick(FRAME);
        let header = unsafe { std::slice::from_raw_parts(runner.header_ptr(), HEADER_FLOATS) };
        assert_eq!(header[HEADER_FRAME_COUNTER], 1.0);
        assert_eq!(header[HEADER_EFFECTS_VERTEX_COUNT], runner.effects_vertex_count() as f32);
        assert_eq!(header[HEADER_HUD_REVISION], runner.game().revision() as f32);
    }

    #[test]
    fn busy_frame_keeps_misses_and_completion() {
        let mut runner = runner();
        for _ in 0..20 {
            key(&mut runner, "x");
        }
        key(&mut runner, "g");
        key(&mut runner, "o");
        runner.tick(FRAME);
        let events = &runner.ctx().events;
        assert!(events.len() <= runner.max_events() as usize);
        assert_eq!(events.iter().filter(|e| e.kind == EVENT_MISS).count(), 20);
        assert!(events.iter().any(|e| e.kind == EVENT_WORD_COMPLETE));
        assert_eq!(events.iter().filter(|e| e.kind == EVENT_REFRESH).count(), 1);
    }

    #[test]
    fn reset_drops_partial_step() {
        let mut runner = runner();
        // Under one step: nothing runs, the remainder is carried.
        runner.tick(0.01);
        let stars = runner.ctx().effects.stars.stars.clone();
        runner.push_input(InputEvent::Custom { kind: CUSTOM_RESET, a: 0.0 });
        runner.tick(0.01);
        // The carried remainder would have completed a step and moved the stars.
        assert_eq!(runner.ctx().effects.stars.stars, stars);
        assert_eq!(runner.game().state().progress(), 0);
    }
}
