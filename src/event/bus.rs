use super::EditorEvent;

/// Queue of editor events waiting to be picked up by the UI.
#[derive(Default)]
pub struct EventBus {
    pending: Vec<EditorEvent>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("pending", &format!("<{} events>", self.pending.len()))
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, event: EditorEvent) {
        log::trace!("event: {:?}", event);
        self.pending.push(event);
    }

    /// Take every event emitted since the last drain, oldest first.
    pub fn drain(&mut self) -> Vec<EditorEvent> {
        std::mem::take(&mut self.pending)
    }
}
