//! Inbound event channel
//!
//! A FIFO message queue owned by the embedding application and drained by
//! the lifecycle controller once per fixed-update tick, before the physics
//! step. Delivery order is FIFO; at-least-once delivery is not required.

use std::collections::VecDeque;

/// Events posted by the embedding application or backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The display surface changed size; cameras must refresh their aspect
    DisplayResized {
        /// New surface width in pixels
        width: u32,
        /// New surface height in pixels
        height: u32,
    },
    /// The render context was recreated; cached render state is stale
    RenderContextRefreshed,
    /// Request to load the next scene in manifest order
    SceneAdvanceRequested,
}

/// FIFO message queue
#[derive(Debug)]
pub struct Messenger<T> {
    queue: VecDeque<T>,
}

impl<T> Default for Messenger<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Messenger<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Append a message at the back of the queue
    pub fn post(&mut self, message: T) {
        self.queue.push_back(message);
    }

    /// Remove and return the oldest message, if any
    pub fn next_message(&mut self) -> Option<T> {
        self.queue.pop_front()
    }

    /// Number of pending messages
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Discard every pending message
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_drain_in_fifo_order() {
        let mut messenger = Messenger::new();
        messenger.post(1);
        messenger.post(2);
        messenger.post(3);

        assert_eq!(messenger.next_message(), Some(1));
        assert_eq!(messenger.next_message(), Some(2));
        assert_eq!(messenger.next_message(), Some(3));
        assert_eq!(messenger.next_message(), None);
    }

    #[test]
    fn test_clear_discards_pending() {
        let mut messenger = Messenger::new();
        messenger.post(EngineEvent::SceneAdvanceRequested);
        messenger.clear();
        assert!(messenger.is_empty());
    }
}
