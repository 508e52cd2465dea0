use crate::domain::event::Event;
use crate::domain::ports::EventSink;
use crate::error::Result;

/// An in-memory sink that keeps every event in emission order.
///
/// Ideal for testing, where the emitted events need to be inspected
/// rather than written anywhere.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Vec<Event>,
}

impl RecordingSink {
    /// Creates a new, empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &Event) -> Result<()> {
        self.events.push(event.clone());
        Ok(())
    }
}
