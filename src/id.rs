use std::fmt;

use uuid::Uuid;

macro_rules! bus_id {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u128);

        impl $name {
            pub(crate) fn new() -> Self {
                Self(Uuid::new_v4().as_u128())
            }

            #[inline]
            pub fn as_u128(&self) -> u128 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", Uuid::from_u128(self.0).simple())
            }
        }
    };
}

bus_id! {
    /// Opaque identity of a publisher.
    ///
    /// Handles cloned from the same publisher share one id. Subscribers key
    /// their registration sets by it.
    PublisherId
}

bus_id! {
    /// Opaque identity of a subscriber.
    ///
    /// Handles cloned from the same subscriber share one id. Publishers key
    /// their registration sets by it, and it is what lifecycle hooks receive.
    SubscriberId
}
