/// Marker trait for values carried by the bus.
///
/// Events must be `Send + Sync + Clone + 'static` because they:
/// - are cloned once per registered subscriber on every broadcast (Clone)
/// - cross thread boundaries between publishers and consumers (Send, Sync)
/// - live in queues owned by shared handles ('static)
///
/// Every type meeting those bounds is an event, so plain integers, strings and
/// [`EventEnvelope`](crate::EventEnvelope) all work without extra code.
pub trait Event: Send + Sync + Clone + 'static {}

impl<T> Event for T where T: Send + Sync + Clone + 'static {}
