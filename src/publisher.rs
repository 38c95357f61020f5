use crate::{Event, Result, Subscriber};

/// A source broadcasting events of type `E` to its registered subscribers.
///
/// Implementations must be safe to call from many threads at once.
pub trait Publisher<E: Event>: Send + Sync {
    /// Deliver `event` to every currently registered subscriber.
    ///
    /// Delivery is best effort: a subscriber whose queue is full misses the
    /// event, and that is not reported as an error.
    fn publish(&self, event: E) -> Result<()>;

    /// Register `subscriber` to receive future events.
    fn subscribe<S: Subscriber<E>>(&self, subscriber: &S) -> Result<()>;

    /// Remove a previously registered subscriber.
    fn unsubscribe<S: Subscriber<E>>(&self, subscriber: &S) -> Result<()>;

    /// Release every registered subscriber.
    fn close(&self) -> Result<()>;
}
