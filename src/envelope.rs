/// A named, typed payload: the unit of delivery shared by publishers and
/// subscribers.
///
/// - `name`: any string-like identifier (`&str`, `String`, `Arc<str>`, or a
///   newtype implementing `AsRef<str>`).
/// - `data`: the payload.
///
/// No validation is performed; every value is a legal name or payload. The
/// envelope is a plain value and is cloned into each subscriber's queue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventEnvelope<N, P> {
    pub name: N,
    pub data: P,
}

impl<N: AsRef<str>, P> EventEnvelope<N, P> {
    pub fn new(name: N, data: P) -> Self {
        Self { name, data }
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn into_parts(self) -> (N, P) {
        (self.name, self.data)
    }
}

impl<N: AsRef<str>, P> From<(N, P)> for EventEnvelope<N, P> {
    fn from((name, data): (N, P)) -> Self {
        EventEnvelope::new(name, data)
    }
}
