#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The subscriber handed to a publisher was not created by
    /// [`MemorySubscriber::new`](crate::MemorySubscriber::new).
    ///
    /// This is a caller bug; retrying with the same value fails the same way.
    #[error("Invalid subscriber: it wasn't created by this crate's subscriber constructor.")]
    InvalidSubscriber,
}
