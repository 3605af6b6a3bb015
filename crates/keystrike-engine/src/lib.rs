pub mod api;
pub mod core;
pub mod effects;
pub mod error;
pub mod game;
pub mod input;
pub mod bridge;
pub mod player;
pub mod typing;
pub mod words;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::GameEvent;
pub use crate::core::rng::Rng;
pub use crate::core::schedule::{Epoch, Scheduler};
pub use crate::core::time::FixedTimestep;
pub use effects::{EffectVertex, EffectsState, Enemy, EnemyArchetype, EnemySnapshot, Laser, ParticleBurst, StarField};
pub use error::{Error, Result};
pub use game::{Deferred, TypingGame};
pub use game::hud::HudSnapshot;
pub use input::keys::{classify, Key, KeyAction};
pub use input::queue::{InputEvent, InputQueue};
pub use bridge::protocol::ProtocolLayout;
pub use player::PlayerRecord;
pub use typing::{CaseMode, InputOutcome, Mode, OutcomeKind, TypingState};
pub use words::{Difficulty, WordBank, WordEntry};
