//! Subscribers notified when the live state changes.

use serde::{Deserialize, Serialize};

use crate::round::RoundState;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriberId(pub u64);

type Callback = Box<dyn FnMut(&RoundState)>;

/// Subscriber list, notified in subscription order.
#[derive(Default)]
pub struct Subscribers {
    entries: Vec<(SubscriberId, Callback)>,
    next_id: u64,
}

impl Subscribers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&RoundState) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Returns true if the subscriber existed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn notify(&mut self, state: &RoundState) {
        for (_, callback) in &mut self.entries {
            callback(state);
        }
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::new();

        let first = Rc::clone(&log);
        subscribers.subscribe(move |_| first.borrow_mut().push("first"));
        let second = Rc::clone(&log);
        subscribers.subscribe(move |_| second.borrow_mut().push("second"));

        subscribers.notify(&RoundState::Idle);
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut subscribers = Subscribers::new();

        let c = Rc::clone(&count);
        let id = subscribers.subscribe(move |_| *c.borrow_mut() += 1);

        subscribers.notify(&RoundState::Idle);
        assert!(subscribers.unsubscribe(id));
        assert!(!subscribers.unsubscribe(id));
        subscribers.notify(&RoundState::Idle);

        assert_eq!(*count.borrow(), 1);
    }
}
