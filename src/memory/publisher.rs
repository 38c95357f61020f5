use std::{fmt, sync::Arc};

use crate::{
    Error, Event, Hooks, Publisher, PublisherId, Result, Subscriber, internal::Broadcaster,
};

/// An in-memory publisher.
///
/// - `subscribe` / `unsubscribe` change the set of receivers.
/// - `publish` pushes a clone of the event into each receiver's queue without
///   ever waiting on it; full queues drop the event.
/// - `close` releases every subscriber. A subscriber left without any
///   publisher closes itself.
///
/// Handles are cheap to clone and all clones drive the same publisher.
/// Dropping the last handle releases subscribers like `close` does, except
/// that the `on_close` hook does not fire.
///
/// # Example
///
/// ```rust
/// use pubsub::{MemoryPublisher, MemorySubscriber, Publisher, SubscriberOptions};
///
/// let publisher = MemoryPublisher::<u32>::default();
/// let subscriber = MemorySubscriber::<u32>::new(SubscriberOptions::default());
/// publisher.subscribe(&subscriber)?;
///
/// publisher.publish(1)?;
/// publisher.close()?;
///
/// assert_eq!(subscriber.blocking_recv(), Some(1));
/// assert_eq!(subscriber.blocking_recv(), None);
/// # Ok::<(), pubsub::Error>(())
/// ```
pub struct MemoryPublisher<E: Event> {
    shared: Arc<Broadcaster<E>>,
}

impl<E: Event> MemoryPublisher<E> {
    pub fn new(hooks: Hooks<E>) -> Self {
        Self {
            shared: Arc::new(Broadcaster::new(hooks)),
        }
    }

    #[inline]
    pub fn id(&self) -> PublisherId {
        self.shared.id()
    }

    /// Number of live subscribers currently registered.
    pub fn subscriber_count(&self) -> usize {
        self.shared.subscriber_count()
    }

    /// Whether `subscriber` is currently registered with this publisher.
    /// Always `false` for subscribers not created by this crate.
    pub fn is_subscribed<S: Subscriber<E>>(&self, subscriber: &S) -> bool {
        subscriber
            .registrant()
            .is_some_and(|r| self.shared.contains(r.0.id()))
    }
}

impl<E: Event> Publisher<E> for MemoryPublisher<E> {
    fn publish(&self, event: E) -> Result<()> {
        self.shared.publish(event);
        Ok(())
    }

    fn subscribe<S: Subscriber<E>>(&self, subscriber: &S) -> Result<()> {
        let mailbox = subscriber.registrant().ok_or(Error::InvalidSubscriber)?.0;
        self.shared.subscribe(&mailbox);
        Ok(())
    }

    fn unsubscribe<S: Subscriber<E>>(&self, subscriber: &S) -> Result<()> {
        let mailbox = subscriber.registrant().ok_or(Error::InvalidSubscriber)?.0;
        self.shared.unsubscribe(&mailbox);
        Ok(())
    }

    fn close(&self) -> Result<()> {
        self.shared.close();
        Ok(())
    }
}

impl<E: Event> Default for MemoryPublisher<E> {
    fn default() -> Self {
        Self::new(Hooks::default())
    }
}

impl<E: Event> Clone for MemoryPublisher<E> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<E: Event> fmt::Debug for MemoryPublisher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryPublisher")
            .field("id", &self.id())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
