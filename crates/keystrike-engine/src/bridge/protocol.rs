//! SharedArrayBuffer layout.
//! Must stay in sync with the host's `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 8 floats]
//! [Effects: max_effects_vertices × 6 floats]
//! [Events: max_events × 4 floats]
//! ```
//!
//! Capacities are written once into the header at init.
//! The host reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;
use crate::api::types::GameEvent;
use crate::effects::EffectVertex;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 8;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_EFFECTS_VERTICES: usize = 2;
pub const HEADER_EFFECTS_VERTEX_COUNT: usize = 3;
pub const HEADER_MAX_EVENTS: usize = 4;
pub const HEADER_EVENT_COUNT: usize = 5;
pub const HEADER_HUD_REVISION: usize = 6;
pub const HEADER_PROTOCOL_VERSION: usize = 7;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per effects vertex: x, y, z, alpha, color, size.
pub const EFFECTS_VERTEX_FLOATS: usize = EffectVertex::FLOATS;

/// Floats per game event: kind, a, b, c.
pub const EVENT_FLOATS: usize = GameEvent::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_effects_vertices: usize,
    pub max_events: usize,

    /// Size of effects data section in floats.
    pub effects_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where effects data begins.
    pub effects_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    pub buffer_total_floats: usize,
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(max_effects_vertices: usize, max_events: usize) -> Self {
        let effects_data_floats = max_effects_vertices * EFFECTS_VERTEX_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let effects_data_offset = HEADER_FLOATS;
        let event_data_offset = effects_data_offset + effects_data_floats;
        let buffer_total_floats = event_data_offset + event_data_floats;

        Self {
            max_effects_vertices,
            max_events,
            effects_data_floats,
            event_data_floats,
            effects_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_effects_vertices, config.max_events)
    }

    /// Header values for a frame.
    pub fn header(&self, frame: u32, effects_vertex_count: usize, event_count: usize, hud_revision: u64) -> [f32; HEADER_FLOATS] {
        let mut header = [0.0; HEADER_FLOATS];
        header[HEADER_FRAME_COUNTER] = frame as f32;
        header[HEADER_MAX_EFFECTS_VERTICES] = self.max_effects_vertices as f32;
        header[HEADER_EFFECTS_VERTEX_COUNT] = effects_vertex_count.min(self.max_effects_vertices) as f32;
        header[HEADER_MAX_EVENTS] = self.max_events as f32;
        header[HEADER_EVENT_COUNT] = event_count.min(self.max_events) as f32;
        header[HEADER_HUD_REVISION] = hud_revision as f32;
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header
    }
}
