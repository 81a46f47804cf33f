//! Time source capability.
//!
//! Everything in the token path that needs "now" asks an injected [`Clock`]
//! instead of the wall clock, so expiry behavior can be exercised in tests
//! without sleeping.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, Utc};

/// Capability supplying the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation used by the running server.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually advanced clock for tests.
///
/// Stores whole seconds only, which is all token expiry arithmetic needs.
#[derive(Debug)]
pub struct ManualClock {
    epoch_secs: AtomicI64,
}

impl ManualClock {
    /// Start the clock at the given instant (sub-second part is dropped).
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            epoch_secs: AtomicI64::new(start.timestamp()),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, duration: Duration) {
        self.epoch_secs
            .fetch_add(duration.num_seconds(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let secs = self.epoch_secs.load(Ordering::SeqCst);
        DateTime::<Utc>::from_timestamp(secs, 0).expect("timestamp within chrono range")
    }
}
