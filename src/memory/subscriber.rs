use std::{fmt, future::Future, sync::Arc};

use futures_util::{Stream, stream};

use crate::{
    Event, PublisherId, Subscriber, SubscriberId, SubscriberOptions, internal::Mailbox,
    subscriber::Registrant,
};

/// An in-memory subscriber backed by a bounded FIFO queue.
///
/// Events pushed while the queue is full are dropped, so a slow consumer
/// never stalls its publishers. Once closed, either explicitly or because its
/// last publisher went away, the subscriber hands out what is still buffered
/// and then reports exhaustion with `None`.
///
/// Handles are cheap to clone; all clones consume from the same queue.
pub struct MemorySubscriber<E: Event> {
    shared: Arc<Mailbox<E>>,
}

impl<E: Event> MemorySubscriber<E> {
    pub fn new(opts: SubscriberOptions) -> Self {
        Self {
            shared: Arc::new(Mailbox::new(&opts)),
        }
    }

    #[inline]
    pub fn id(&self) -> SubscriberId {
        self.shared.id()
    }

    /// Wait for the next event. Returns `None` once closed and drained.
    pub async fn recv(&self) -> Option<E> {
        self.shared.recv().await
    }

    /// Blocking variant of [`recv`](Self::recv) for plain threads.
    ///
    /// # Panics
    ///
    /// Panics when called from within an asynchronous execution context.
    pub fn blocking_recv(&self) -> Option<E> {
        self.shared.blocking_recv()
    }

    /// Stop accepting events and unsubscribe from every publisher.
    /// Calling it again does nothing.
    pub fn close(&self) {
        self.shared.close();
    }

    pub fn is_closed(&self) -> bool {
        self.shared.is_closed()
    }

    /// Resolves once the subscriber is closed, explicitly or automatically.
    pub fn closed(&self) -> impl Future<Output = ()> + Send + '_ {
        self.shared.closed()
    }

    /// Queue capacity this subscriber was created with.
    pub fn capacity(&self) -> usize {
        self.shared.capacity()
    }

    /// Number of events waiting to be received.
    pub fn len(&self) -> usize {
        self.shared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of publishers this subscriber is registered with.
    pub fn publisher_count(&self) -> usize {
        self.shared.publisher_count()
    }

    pub fn is_registered_with(&self, publisher: PublisherId) -> bool {
        self.shared.is_registered_with(publisher)
    }

    /// Every remaining event as a [`Stream`], ending when the subscriber is
    /// closed and drained.
    pub fn stream(&self) -> impl Stream<Item = E> + Send + use<E> {
        stream::unfold(self.shared.clone(), |mailbox| async move {
            let event = mailbox.recv().await?;
            Some((event, mailbox))
        })
    }

    /// Every remaining event as a blocking [`Iterator`].
    ///
    /// # Panics
    ///
    /// `next` panics when called from within an asynchronous execution context.
    pub fn blocking_iter(&self) -> impl Iterator<Item = E> + Send + use<E> {
        let mailbox = self.shared.clone();
        std::iter::from_fn(move || mailbox.blocking_recv())
    }
}

impl<E: Event> Subscriber<E> for MemorySubscriber<E> {
    fn recv(&self) -> impl Future<Output = Option<E>> + Send {
        self.shared.recv()
    }

    fn blocking_recv(&self) -> Option<E> {
        self.shared.blocking_recv()
    }

    fn close(&self) {
        self.shared.close();
    }

    fn registrant(&self) -> Option<Registrant<E>> {
        Some(Registrant(self.shared.clone()))
    }
}

impl<E: Event> Default for MemorySubscriber<E> {
    fn default() -> Self {
        Self::new(SubscriberOptions::default())
    }
}

impl<E: Event> Clone for MemorySubscriber<E> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<E: Event> fmt::Debug for MemorySubscriber<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemorySubscriber")
            .field("id", &self.id())
            .field("capacity", &self.capacity())
            .field("closed", &self.is_closed())
            .finish()
    }
}
