/// Input event types the substrate understands.
/// Carries no game-specific semantics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A press began at pixel coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// The pointer moved to pixel coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// The press ended at pixel coordinates (x, y).
    PointerUp { x: f32, y: f32 },
    /// The embedder is shutting down (window close, SIGINT, ...).
    Quit,
}

/// A queue of input events.
/// The embedder writes events in; the game reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called by the embedder's event pump).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
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
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::PointerUp { x: 10.0, y: 20.0 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn events_keep_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 1.0, y: 1.0 });
        q.push(InputEvent::PointerMove { x: 2.0, y: 2.0 });
        q.push(InputEvent::Quit);
        let events = q.drain();
        assert_eq!(events[0], InputEvent::PointerDown { x: 1.0, y: 1.0 });
        assert_eq!(events[1], InputEvent::PointerMove { x: 2.0, y: 2.0 });
        assert_eq!(events[2], InputEvent::Quit);
    }
}
