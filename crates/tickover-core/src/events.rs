//! Change notification.
//!
//! The timer keeps an explicit list of subscriber callbacks invoked
//! synchronously after every actual mutation. Notifications carry no
//! payload; observers re-read the state they care about.

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Box<dyn FnMut()>)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, callback: impl FnMut() + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns `false` if the id was already gone.
    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub(crate) fn notify(&mut self) {
        for (_, callback) in &mut self.subscribers {
            callback();
        }
    }
}
