//! Mock observer for testing.
//!
//! Provides [`MockObserver`] for driving an
//! [`ActiveSectionTracker`](crate::ActiveSectionTracker) without a host
//! platform.

use std::sync::{Mutex, PoisonError};

use crate::band::TriggerBand;
use crate::observer::{
    ChannelObserver, ObservationHandle, ObserveError, Target, VisibilityBatch, VisibilityObserver,
    VisibilityReceiver,
};

/// Observer that records every observation request.
///
/// # Example
///
/// ```ignore
/// use dex_spy::{MockObserver, VisibilityEvent};
///
/// let observer = MockObserver::new();
/// // ... mount a tracker using `&observer` ...
/// observer.deliver(vec![VisibilityEvent::entered("usage")]);
/// assert_eq!(observer.calls().len(), 1);
/// ```
#[derive(Default)]
pub struct MockObserver {
    inner: ChannelObserver,
    unavailable: bool,
    calls: Mutex<Vec<Vec<String>>>,
}

impl MockObserver {
    /// Create an available mock observer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock observer whose host lacks visibility observation.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Send a batch to the live observation.
    ///
    /// Returns `false` if there is no live observation.
    pub fn deliver(&self, batch: VisibilityBatch) -> bool {
        self.inner.deliver(batch)
    }

    /// Target ids of every `observe` call, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether an observation is live.
    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.inner.is_observing()
    }
}

impl<H> VisibilityObserver<H> for MockObserver {
    fn observe(
        &self,
        targets: Vec<Target<H>>,
        band: TriggerBand,
    ) -> Result<(VisibilityReceiver, ObservationHandle), ObserveError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(targets.iter().map(|t| t.id.clone()).collect());
        if self.unavailable {
            return Err(ObserveError::Unavailable("mock host".to_owned()));
        }
        self.inner.observe(targets, band)
    }
}
