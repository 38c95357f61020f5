//! Pubsub - generic in-memory publish/subscribe bus
//!
//! Publishers broadcast typed events to any number of subscribers, and a
//! subscriber may listen to any number of publishers. Delivery never blocks a
//! publisher: each subscriber owns a bounded queue and events arriving at a
//! full queue are dropped.
//!
//! Closing either side cascades. A closed subscriber unsubscribes from all of
//! its publishers, and a closed publisher releases all of its subscribers; a
//! subscriber whose last publisher is released closes itself and, once its
//! buffered events are consumed, reports exhaustion.
//!
//! See `demos/hello-world.rs`.

mod config;
mod envelope;
mod error;
mod event;
mod hooks;
mod id;
mod publisher;
mod subscriber;

mod internal;

pub mod memory;

pub use config::{DEFAULT_BUFFER_SIZE, SubscriberOptions};
pub use envelope::EventEnvelope;
pub use error::Error;
pub use event::Event;
pub use hooks::Hooks;
pub use id::{PublisherId, SubscriberId};
pub use memory::{MemoryPublisher, MemorySubscriber};
pub use publisher::Publisher;
pub use subscriber::{Registrant, Subscriber};

pub type Result<T = ()> = std::result::Result<T, Error>;

pub mod prelude {
    pub use crate::error::Error as PubsubError;
    pub use crate::memory::{MemoryPublisher, MemorySubscriber};
    pub use crate::publisher::Publisher;
    pub use crate::subscriber::Subscriber;
    pub use crate::{EventEnvelope, Hooks, SubscriberOptions};
}
