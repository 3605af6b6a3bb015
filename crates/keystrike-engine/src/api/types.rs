use bytemuck::{Pod, Zeroable};

/// A game event communicated from Rust to the host page via the shared buffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}

// Event kinds (Rust → host)

/// Score changed: a = score, b = streak. Both are `f32` on the wire, so
/// scores above 2^24 arrive rounded; the HUD JSON carries the exact value.
pub const EVENT_SCORE: f32 = 1.0;
/// A letter did not match; the host flashes the screen.
pub const EVENT_MISS: f32 = 2.0;
/// Target word finished: a = level, b = score.
pub const EVENT_WORD_COMPLETE: f32 = 3.0;
/// Mode buttons changed: a = free mode (0/1), b = upper case (0/1).
pub const EVENT_MODE: f32 = 4.0;
/// New target selected: a = difficulty index.
pub const EVENT_TARGET: f32 = 5.0;
/// State mutated, HUD must re-render: a = revision.
pub const EVENT_REFRESH: f32 = 6.0;

// Custom event kinds (host UI buttons → Rust)

pub const CUSTOM_TOGGLE_FREE: u32 = 1;
pub const CUSTOM_TOGGLE_CASE: u32 = 2;
pub const CUSTOM_CLEAR_INPUT: u32 = 3;
pub const CUSTOM_SKIP_WORD: u32 = 4;
/// a = streak value to force.
pub const CUSTOM_CHEAT: u32 = 5;
pub const CUSTOM_RESET: u32 = 6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_is_four_packed_floats() {
        let events = [GameEvent::new(EVENT_WORD_COMPLETE, 2.0, 170.0, 0.0)];
        let floats: &[f32] = bytemuck::cast_slice(&events[..]);
        assert_eq!(floats.len(), GameEvent::FLOATS);
        assert_eq!(floats, &[3.0, 2.0, 170.0, 0.0]);
    }
}
