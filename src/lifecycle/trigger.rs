//! Refresh signal shared by the views.
//!
//! Mutating views call [`RefreshTrigger::toggle`]; every view holding a
//! [`TriggerListener`] refetches its data the next time it checks.

use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// Generation counter bumped on every data change.
#[derive(Debug, Clone)]
pub struct RefreshTrigger {
    sender: Arc<watch::Sender<u64>>,
}

impl Default for RefreshTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshTrigger {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(0);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Marks data as changed. Never fails, even with no listeners.
    pub fn toggle(&self) {
        self.sender.send_modify(|generation| *generation = generation.wrapping_add(1));
        debug!(generation = self.generation(), "Refresh triggered");
    }

    pub fn generation(&self) -> u64 {
        *self.sender.borrow()
    }

    /// A listener that only sees toggles made after this call.
    pub fn subscribe(&self) -> TriggerListener {
        TriggerListener {
            receiver: self.sender.subscribe(),
        }
    }
}

#[derive(Debug)]
pub struct TriggerListener {
    receiver: watch::Receiver<u64>,
}

impl TriggerListener {
    /// Returns true once per batch of toggles seen since the last call.
    pub fn take_pending(&mut self) -> bool {
        match self.receiver.has_changed() {
            Ok(true) => {
                let _ = self.receiver.borrow_and_update();
                true
            }
            _ => false,
        }
    }

    /// Waits for the next toggle. Returns false if the trigger is gone.
    pub async fn changed(&mut self) -> bool {
        self.receiver.changed().await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_sees_toggles_once() {
        let trigger = RefreshTrigger::new();
        let mut listener = trigger.subscribe();
        assert!(!listener.take_pending());

        trigger.toggle();
        trigger.clone().toggle();
        assert_eq!(trigger.generation(), 2);
        assert!(listener.take_pending());
        assert!(!listener.take_pending());
    }

    #[tokio::test]
    async fn test_changed_wakes_on_toggle() {
        let trigger = RefreshTrigger::new();
        let mut listener = trigger.subscribe();

        let remote = trigger.clone();
        tokio::spawn(async move { remote.toggle() });

        assert!(listener.changed().await);
    }

    #[tokio::test]
    async fn test_changed_reports_dropped_trigger() {
        let trigger = RefreshTrigger::new();
        let mut listener = trigger.subscribe();
        drop(trigger);

        assert!(!listener.changed().await);
    }
}
