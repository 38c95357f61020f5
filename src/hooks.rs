use std::{fmt, sync::Arc};

use crate::{Event, SubscriberId};

type EventHook<E> = Arc<dyn Fn(&E) + Send + Sync>;
type SubscriberHook = Arc<dyn Fn(SubscriberId) + Send + Sync>;
type CloseHook = Arc<dyn Fn() + Send + Sync>;

/// Optional lifecycle callbacks for a [`MemoryPublisher`](crate::MemoryPublisher).
///
/// Each slot is independent; unset slots fire nothing. Hooks run synchronously
/// on the thread calling the publisher operation, before the publisher takes
/// its lock. A hook that blocks or panics blocks or panics that caller.
///
/// Cloning is cheap, so one set of hooks can be shared between publishers.
///
/// ```rust
/// use pubsub::Hooks;
///
/// let hooks = Hooks::<u32>::new()
///     .on_publish(|e| tracing::info!(event = *e, "published"))
///     .on_close(|| tracing::info!("publisher closed"));
/// ```
pub struct Hooks<E: Event> {
    pub(crate) on_publish: Option<EventHook<E>>,
    pub(crate) on_subscribe: Option<SubscriberHook>,
    pub(crate) on_unsubscribe: Option<SubscriberHook>,
    pub(crate) on_close: Option<CloseHook>,
}

impl<E: Event> Hooks<E> {
    pub fn new() -> Self {
        Self {
            on_publish: None,
            on_subscribe: None,
            on_unsubscribe: None,
            on_close: None,
        }
    }

    /// Called with every event passed to `publish`, before broadcast.
    pub fn on_publish<F>(mut self, f: F) -> Self
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        self.on_publish = Some(Arc::new(f));
        self
    }

    /// Called with the subscriber's id on every `subscribe`.
    pub fn on_subscribe<F>(mut self, f: F) -> Self
    where
        F: Fn(SubscriberId) + Send + Sync + 'static,
    {
        self.on_subscribe = Some(Arc::new(f));
        self
    }

    /// Called with the subscriber's id on every `unsubscribe`, including the
    /// ones a closing subscriber triggers.
    pub fn on_unsubscribe<F>(mut self, f: F) -> Self
    where
        F: Fn(SubscriberId) + Send + Sync + 'static,
    {
        self.on_unsubscribe = Some(Arc::new(f));
        self
    }

    /// Called on every explicit `close`.
    pub fn on_close<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_close = Some(Arc::new(f));
        self
    }

    pub(crate) fn published(&self, event: &E) {
        if let Some(hook) = &self.on_publish {
            hook(event);
        }
    }

    pub(crate) fn subscribed(&self, id: SubscriberId) {
        if let Some(hook) = &self.on_subscribe {
            hook(id);
        }
    }

    pub(crate) fn unsubscribed(&self, id: SubscriberId) {
        if let Some(hook) = &self.on_unsubscribe {
            hook(id);
        }
    }

    pub(crate) fn closed(&self) {
        if let Some(hook) = &self.on_close {
            hook();
        }
    }
}

impl<E: Event> Default for Hooks<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event> Clone for Hooks<E> {
    fn clone(&self) -> Self {
        Self {
            on_publish: self.on_publish.clone(),
            on_subscribe: self.on_subscribe.clone(),
            on_unsubscribe: self.on_unsubscribe.clone(),
            on_close: self.on_close.clone(),
        }
    }
}

impl<E: Event> fmt::Debug for Hooks<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("on_publish", &self.on_publish.is_some())
            .field("on_subscribe", &self.on_subscribe.is_some())
            .field("on_unsubscribe", &self.on_unsubscribe.is_some())
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}
