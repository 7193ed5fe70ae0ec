use tokio::sync::broadcast;

use crate::event::LayoutEvent;

/// Broadcast channel for layout notifications.
#[derive(Debug, Clone)]
pub struct LayoutBus {
    sender: broadcast::Sender<LayoutEvent>,
}

impl LayoutBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LayoutEvent> {
        self.sender.subscribe()
    }

    /// Sends `event` to every subscriber, returning how many received it.
    /// Having no subscribers is not an error.
    pub fn publish(&self, event: LayoutEvent) -> usize {
        match self.sender.send(event) {
            Ok(receivers) => receivers,
            Err(_) => {
                log::trace!("no subscribers for {event:?}");
                0
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
