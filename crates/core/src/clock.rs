//! Time source abstraction.

use crate::Time;

/// Something that can tell the current time.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> Time;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Time {
        chrono::Utc::now()
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Time);

impl FixedClock {
    /// Create a clock that always reports `at`.
    pub fn new(at: Time) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Time {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> Time {
        (**self).now()
    }
}
