use crate::input::keys::Key;

/// Input event types the engine understands.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key was pressed. Carries the host's raw key identifier, parsed.
    KeyDown { key: Key },
    /// A custom event from the UI layer (mode buttons, debug hooks).
    /// `kind` identifies the event type; `a` carries an optional argument.
    Custom { kind: u32, a: f32 },
}

/// A queue of input events.
/// JS writes events into the queue; Rust drains them once per frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events in arrival order.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_preserves_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::KeyDown { key: Key::from_raw("c") });
        q.push(InputEvent::Custom { kind: 5, a: 16.0 });
        q.push(InputEvent::KeyDown { key: Key::from_raw("F1") });
        assert_eq!(q.len(), 3);

        let events = q.drain();
        assert!(q.is_empty());
        assert_eq!(events[0], InputEvent::KeyDown { key: Key::Char('c') });
        assert_eq!(events[1], InputEvent::Custom { kind: 5, a: 16.0 });
        assert_eq!(events[2], InputEvent::KeyDown { key: Key::F1 });
    }
}
