use std::{future::Future, sync::Arc};

use crate::{Event, internal::Mailbox};

/// A consumer of events of type `E`.
///
/// Receiving returns `None` once the subscriber is closed and every buffered
/// event has been handed out. Closing is the only way to cancel a pending
/// receive; wrap `recv` in `tokio::time::timeout` for a deadline.
pub trait Subscriber<E: Event>: Send + Sync {
    /// Wait for the next event.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// async fn recv(&self) -> Option<E>;
    /// ```
    fn recv(&self) -> impl Future<Output = Option<E>> + Send;

    /// Block the current thread until the next event arrives.
    fn blocking_recv(&self) -> Option<E>;

    /// Stop receiving and detach from every publisher.
    fn close(&self);

    /// Hook used by publishers to reach the delivery side of a subscriber.
    ///
    /// Only subscribers created by this crate can produce a [`Registrant`];
    /// publishers reject everything else with
    /// [`Error::InvalidSubscriber`](crate::Error::InvalidSubscriber).
    #[doc(hidden)]
    fn registrant(&self) -> Option<Registrant<E>> {
        None
    }
}

/// Opaque capability that lets a publisher push to a subscriber.
#[doc(hidden)]
pub struct Registrant<E: Event>(pub(crate) Arc<Mailbox<E>>);
