use std::{
    collections::HashMap,
    sync::{Arc, Weak},
};

use parking_lot::{Mutex, RwLock};
use tokio::sync::mpsc::{self, Receiver, Sender, error::TrySendError};
use tokio_util::sync::CancellationToken;

use super::Broadcaster;
use crate::{Event, PublisherId, SubscriberId, SubscriberOptions};

/// Shared state behind every [`MemorySubscriber`](crate::MemorySubscriber) handle.
///
/// Lock order inside a mailbox is `publishers` then `sender`. A mailbox never
/// holds either lock while calling into a [`Broadcaster`].
pub(crate) struct Mailbox<E: Event> {
    id: SubscriberId,
    capacity: usize,
    /// `None` once closed. Dropping the only sender is what ends the queue.
    sender: RwLock<Option<Sender<E>>>,
    receiver: tokio::sync::Mutex<Receiver<E>>,
    publishers: Mutex<HashMap<PublisherId, Weak<Broadcaster<E>>>>,
    closed: CancellationToken,
}

impl<E: Event> Mailbox<E> {
    pub fn new(opts: &SubscriberOptions) -> Self {
        let capacity = opts.capacity();
        let (tx, rx) = mpsc::channel(capacity);
        Self {
            id: SubscriberId::new(),
            capacity,
            sender: RwLock::new(Some(tx)),
            receiver: tokio::sync::Mutex::new(rx),
            publishers: Mutex::new(HashMap::new()),
            closed: CancellationToken::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Non-blocking enqueue. Returns `false` when the event was discarded,
    /// either because the mailbox is closed or because the queue is full.
    pub fn push(&self, event: E) -> bool {
        let sender = self.sender.read();
        let Some(tx) = sender.as_ref() else {
            tracing::trace!(subscriber = %self.id, "subscriber closed, event discarded");
            return false;
        };
        match tx.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                tracing::trace!(
                    subscriber = %self.id,
                    capacity = self.capacity,
                    "queue full, event dropped"
                );
                false
            }
            // The receiver lives as long as the mailbox does.
            Err(TrySendError::Closed(_)) => false,
        }
    }

    pub fn acknowledge(&self, publisher: &Arc<Broadcaster<E>>) {
        self.publishers
            .lock()
            .insert(publisher.id(), Arc::downgrade(publisher));
    }

    /// Forget `publisher`. Removing the last one closes the mailbox without
    /// any cascade, since there is nobody left to unsubscribe from.
    pub fn ack_removal(&self, publisher: PublisherId) {
        let mut publishers = self.publishers.lock();
        if publishers.remove(&publisher).is_none() {
            return;
        }
        if publishers.is_empty() && self.shut() {
            tracing::debug!(subscriber = %self.id, "last publisher gone, subscriber auto-closed");
        }
    }

    /// Explicit close: stop accepting events, then unsubscribe from every
    /// publisher this mailbox is registered with.
    pub fn close(&self) {
        if !self.shut() {
            return;
        }
        tracing::debug!(subscriber = %self.id, "subscriber closed");

        let publishers: Vec<_> = self
            .publishers
            .lock()
            .values()
            .filter_map(Weak::upgrade)
            .collect();
        for publisher in publishers {
            publisher.unsubscribe(self);
        }
    }

    /// Marks the mailbox closed. Returns `true` only for the call that did it.
    fn shut(&self) -> bool {
        let mut sender = self.sender.write();
        if sender.take().is_none() {
            return false;
        }
        self.closed.cancel();
        true
    }

    pub async fn recv(&self) -> Option<E> {
        self.receiver.lock().await.recv().await
    }

    pub fn blocking_recv(&self) -> Option<E> {
        self.receiver.blocking_lock().blocking_recv()
    }

    /// Number of buffered events. Reports zero while another caller is
    /// parked in `recv`, which only happens on an empty queue.
    pub fn len(&self) -> usize {
        self.receiver.try_lock().map(|rx| rx.len()).unwrap_or(0)
    }

    pub fn publisher_count(&self) -> usize {
        self.publishers.lock().len()
    }

    pub fn is_registered_with(&self, publisher: PublisherId) -> bool {
        self.publishers.lock().contains_key(&publisher)
    }

    pub fn is_closed(&self) -> bool {
        self.closed.is_cancelled()
    }

    pub async fn closed(&self) {
        self.closed.cancelled().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hooks;

    fn mailbox(size: usize) -> Mailbox<u32> {
        Mailbox::new(&SubscriberOptions::default().with_buffer_size(size))
    }

    #[test]
    fn test_push_drops_newest_when_full() {
        let mb = mailbox(2);
        assert!(mb.push(1));
        assert!(mb.push(2));
        assert!(!mb.push(3));
        assert_eq!(mb.len(), 2);

        mb.shut();
        assert_eq!(mb.blocking_recv(), Some(1));
        assert_eq!(mb.blocking_recv(), Some(2));
        assert_eq!(mb.blocking_recv(), None);
    }

    #[test]
    fn test_push_after_shut_is_discarded() {
        let mb = mailbox(4);
        assert!(mb.shut());
        assert!(!mb.shut());
        assert!(!mb.push(1));
        assert!(mb.is_closed());
        assert_eq!(mb.blocking_recv(), None);
    }

    #[test]
    fn test_ack_removal_of_last_publisher_auto_closes() {
        let mb = mailbox(4);
        let a = Arc::new(Broadcaster::new(Hooks::default()));
        let b = Arc::new(Broadcaster::new(Hooks::default()));
        mb.acknowledge(&a);
        mb.acknowledge(&b);
        assert_eq!(mb.publisher_count(), 2);

        mb.ack_removal(a.id());
        assert!(!mb.is_closed());
        mb.ack_removal(b.id());
        assert!(mb.is_closed());
        assert_eq!(mb.publisher_count(), 0);
    }

    #[test]
    fn test_ack_removal_of_unknown_publisher_keeps_mailbox_open() {
        let mb = mailbox(4);
        let a = Arc::new(Broadcaster::<u32>::new(Hooks::default()));
        mb.ack_removal(a.id());
        assert!(!mb.is_closed());
    }
}
