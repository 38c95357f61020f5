//! In-process implementation of [`Publisher`](crate::Publisher) and
//! [`Subscriber`](crate::Subscriber).

mod publisher;
mod subscriber;

pub use publisher::MemoryPublisher;
pub use subscriber::MemorySubscriber;
