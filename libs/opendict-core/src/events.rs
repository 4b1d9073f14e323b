//! Notifications for front-end components.

use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 64;

/// Events published to interested UI parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A cached entry was written; eligibility and history views should refresh.
    EntriesChanged { word: String },
    /// Transient UI state should return to its initial values.
    /// Persisted data is untouched.
    Reset,
}

/// Publish/subscribe bus for [`StoreEvent`]s.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<StoreEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.sender.subscribe()
    }

    /// Publish an event. Having no subscribers is not an error.
    pub fn publish(&self, event: StoreEvent) {
        let _ = self.sender.send(event);
    }

    pub fn entries_changed(&self, word: &str) {
        self.publish(StoreEvent::EntriesChanged {
            word: word.to_string(),
        });
    }

    pub fn reset(&self) {
        self.publish(StoreEvent::Reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_without_subscribers_is_fine() {
        let bus = EventBus::new();
        bus.reset();
        bus.entries_changed("casa");
    }

    #[tokio::test]
    async fn test_subscribers_receive_events_in_order() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.entries_changed("casa");
        bus.reset();

        assert_eq!(
            rx.recv().await.unwrap(),
            StoreEvent::EntriesChanged {
                word: "casa".into()
            }
        );
        assert_eq!(rx.recv().await.unwrap(), StoreEvent::Reset);
    }
}
