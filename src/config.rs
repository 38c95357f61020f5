/// Queue capacity used when [`SubscriberOptions::buffer_size`] is left at zero.
pub const DEFAULT_BUFFER_SIZE: usize = 10_000;

/// Construction options for [`MemorySubscriber`](crate::MemorySubscriber).
///
/// # Examples
///
/// ```rust
/// use pubsub::SubscriberOptions;
///
/// let opts = SubscriberOptions::default().with_buffer_size(256);
/// assert_eq!(opts.capacity(), 256);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberOptions {
    /// Maximum number of undelivered events the subscriber buffers.
    /// Once full, further events for this subscriber are dropped.
    /// Zero means [`DEFAULT_BUFFER_SIZE`].
    pub buffer_size: usize,
}

impl Default for SubscriberOptions {
    fn default() -> Self {
        SubscriberOptions {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl SubscriberOptions {
    /// Set the queue capacity. Zero falls back to [`DEFAULT_BUFFER_SIZE`].
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// The capacity the subscriber queue is actually created with.
    pub fn capacity(&self) -> usize {
        if self.buffer_size == 0 {
            DEFAULT_BUFFER_SIZE
        } else {
            self.buffer_size
        }
    }
}
