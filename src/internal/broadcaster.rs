use std::{
    collections::HashMap,
    sync::{Arc, Weak},
};

use parking_lot::RwLock;

use super::Mailbox;
use crate::{Event, Hooks, PublisherId, SubscriberId};

/// Shared state behind every [`MemoryPublisher`](crate::MemoryPublisher) handle.
///
/// Every operation that touches a mailbox does so while holding the
/// `subscribers` lock, so the lock order across the bus is always
/// publisher, then subscriber.
pub(crate) struct Broadcaster<E: Event> {
    id: PublisherId,
    subscribers: RwLock<HashMap<SubscriberId, Weak<Mailbox<E>>>>,
    hooks: Hooks<E>,
}

impl<E: Event> Broadcaster<E> {
    pub fn new(hooks: Hooks<E>) -> Self {
        Self {
            id: PublisherId::new(),
            subscribers: RwLock::new(HashMap::new()),
            hooks,
        }
    }

    #[inline]
    pub fn id(&self) -> PublisherId {
        self.id
    }

    /// Pushes a clone of `event` to every registered mailbox. Publishes only
    /// share the read lock, so they never serialize against each other.
    pub fn publish(&self, event: E) {
        self.hooks.published(&event);
        let subscribers = self.subscribers.read();
        for mailbox in subscribers.values().filter_map(Weak::upgrade) {
            mailbox.push(event.clone());
        }
    }

    pub fn subscribe(self: &Arc<Self>, mailbox: &Arc<Mailbox<E>>) {
        self.hooks.subscribed(mailbox.id());
        let mut subscribers = self.subscribers.write();
        subscribers.retain(|_, m| m.strong_count() > 0);
        subscribers.insert(mailbox.id(), Arc::downgrade(mailbox));
        mailbox.acknowledge(self);
        tracing::debug!(publisher = %self.id, subscriber = %mailbox.id(), "subscriber registered");
    }

    pub fn unsubscribe(&self, mailbox: &Mailbox<E>) {
        self.hooks.unsubscribed(mailbox.id());
        let mut subscribers = self.subscribers.write();
        if subscribers.remove(&mailbox.id()).is_some() {
            mailbox.ack_removal(self.id);
            tracing::debug!(publisher = %self.id, subscriber = %mailbox.id(), "subscriber removed");
        }
    }

    pub fn close(&self) {
        self.hooks.closed();
        let mut subscribers = self.subscribers.write();
        let count = release(self.id, &mut subscribers);
        tracing::debug!(publisher = %self.id, released = count, "publisher closed");
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .read()
            .values()
            .filter(|m| m.strong_count() > 0)
            .count()
    }

    pub fn contains(&self, subscriber: SubscriberId) -> bool {
        self.subscribers
            .read()
            .get(&subscriber)
            .is_some_and(|m| m.strong_count() > 0)
    }
}

impl<E: Event> Drop for Broadcaster<E> {
    fn drop(&mut self) {
        let count = release(self.id, self.subscribers.get_mut());
        if count > 0 {
            tracing::debug!(publisher = %self.id, released = count, "publisher dropped");
        }
    }
}

/// Tells every live mailbox that `publisher` is gone and empties the set.
fn release<E: Event>(
    publisher: PublisherId,
    subscribers: &mut HashMap<SubscriberId, Weak<Mailbox<E>>>,
) -> usize {
    let mut count = 0;
    for mailbox in subscribers.drain().filter_map(|(_, m)| m.upgrade()) {
        mailbox.ack_removal(publisher);
        count += 1;
    }
    count
}
