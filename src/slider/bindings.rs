//! Bookkeeping for listeners a slider registers on its host.

use super::host::{EventSource, ListenerId, SliderHost};

/// Listeners registered at init, released together at teardown.
#[derive(Debug, Default)]
pub struct BoundHandlers {
    listeners: Vec<(EventSource, ListenerId)>,
}

impl BoundHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind<H: SliderHost>(&mut self, host: &mut H, source: EventSource) {
        let id = host.add_listener(source);
        self.listeners.push((source, id));
    }

    pub fn is_bound(&self, source: EventSource) -> bool {
        self.listeners.iter().any(|(bound, _)| *bound == source)
    }

    /// Remove every listener from the host by the id it was registered with.
    pub fn release<H: SliderHost>(&mut self, host: &mut H) {
        for (_, id) in self.listeners.drain(..) {
            host.remove_listener(id);
        }
    }
}
