//! Visibility observation capability.
//!
//! The host platform supplies two capabilities: a [`HeadingLookup`] that finds
//! mounted heading elements by TOC id, and a [`VisibilityObserver`] that
//! reports when those headings enter or leave the [`TriggerBand`]. Events
//! arrive in batches through a [`VisibilityReceiver`]; the returned
//! [`ObservationHandle`] keeps the observation alive.

use std::sync::{Mutex, PoisonError, mpsc};

use crate::band::TriggerBand;

/// Visibility change of one observed heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityEvent {
    /// TOC id of the heading.
    pub id: String,
    /// Whether the heading now overlaps the band.
    pub visible: bool,
}

impl VisibilityEvent {
    /// Heading entered the band.
    #[must_use]
    pub fn entered(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            visible: true,
        }
    }

    /// Heading left the band.
    #[must_use]
    pub fn left(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            visible: false,
        }
    }
}

/// Events delivered together by the host. Order within a batch is delivery
/// order, which need not match document order.
pub type VisibilityBatch = Vec<VisibilityEvent>;

/// A heading to observe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target<H> {
    /// TOC id.
    pub id: String,
    /// Host handle of the mounted heading.
    pub heading: H,
}

/// Finds mounted heading elements.
pub trait HeadingLookup {
    /// Host handle of a heading element.
    type Heading;

    /// Heading mounted under `id`, or `None` if it has not rendered.
    fn heading(&self, id: &str) -> Option<Self::Heading>;
}

/// Observation could not be started.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ObserveError {
    /// Host has no visibility primitive.
    #[error("visibility observation unavailable: {0}")]
    Unavailable(String),
}

/// Reports heading visibility relative to a trigger band.
pub trait VisibilityObserver<H> {
    /// Start observing `targets`.
    ///
    /// Batches are delivered through the returned receiver until the handle
    /// is dropped.
    ///
    /// # Errors
    ///
    /// Returns `ObserveError::Unavailable` if the host cannot observe.
    fn observe(
        &self,
        targets: Vec<Target<H>>,
        band: TriggerBand,
    ) -> Result<(VisibilityReceiver, ObservationHandle), ObserveError>;
}

impl<O: VisibilityObserver<H> + ?Sized, H> VisibilityObserver<H> for &O {
    fn observe(
        &self,
        targets: Vec<Target<H>>,
        band: TriggerBand,
    ) -> Result<(VisibilityReceiver, ObservationHandle), ObserveError> {
        (**self).observe(targets, band)
    }
}

/// Receiver for visibility batches.
pub struct VisibilityReceiver {
    rx: mpsc::Receiver<VisibilityBatch>,
}

impl VisibilityReceiver {
    /// Wrap a channel receiver.
    #[must_use]
    pub fn new(rx: mpsc::Receiver<VisibilityBatch>) -> Self {
        Self { rx }
    }

    /// Take the next pending batch without blocking.
    ///
    /// Returns `None` if no batch is pending or the sender is gone.
    #[must_use]
    pub fn try_recv(&self) -> Option<VisibilityBatch> {
        self.rx.try_recv().ok()
    }

    /// Iterate over pending batches without blocking.
    pub fn try_iter(&self) -> impl Iterator<Item = VisibilityBatch> + '_ {
        self.rx.try_iter()
    }
}

/// Handle that keeps an observation alive.
///
/// Dropping the handle releases the observation. The observer sees the
/// release as a disconnect of the paired shutdown receiver.
pub struct ObservationHandle {
    _shutdown: Option<mpsc::Sender<()>>,
}

impl ObservationHandle {
    /// Create a handle that signals release by dropping `shutdown`.
    #[must_use]
    pub fn new(shutdown: mpsc::Sender<()>) -> Self {
        Self {
            _shutdown: Some(shutdown),
        }
    }

    /// Release immediately (consumes the handle).
    pub fn release(mut self) {
        self._shutdown.take();
    }

    /// Handle with nothing to release.
    #[must_use]
    pub fn no_op() -> Self {
        Self { _shutdown: None }
    }
}

/// Live observation on the [`ChannelObserver`] side.
struct Session {
    ids: Vec<String>,
    events: mpsc::Sender<VisibilityBatch>,
    shutdown: mpsc::Receiver<()>,
}

impl Session {
    fn is_live(&self) -> bool {
        matches!(
            self.shutdown.try_recv(),
            Err(mpsc::TryRecvError::Empty)
        )
    }
}

/// In-process observer fed by the host through [`deliver`](Self::deliver).
///
/// Suits hosts that compute visibility themselves, for example with
/// [`TriggerBand::intersects`] on scroll. Only the most recent observation
/// receives batches.
#[derive(Default)]
pub struct ChannelObserver {
    session: Mutex<Option<Session>>,
}

impl ChannelObserver {
    /// Create an observer with no observation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Send a batch to the live observation.
    ///
    /// Returns `false` if there is no live observation.
    pub fn deliver(&self, batch: VisibilityBatch) -> bool {
        let guard = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        match guard.as_ref() {
            Some(session) if session.is_live() => session.events.send(batch).is_ok(),
            _ => false,
        }
    }

    /// Ids of the live observation, empty if none.
    #[must_use]
    pub fn observed_ids(&self) -> Vec<String> {
        let guard = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        guard
            .as_ref()
            .filter(|session| session.is_live())
            .map(|session| session.ids.clone())
            .unwrap_or_default()
    }

    /// Whether an observation is live.
    #[must_use]
    pub fn is_observing(&self) -> bool {
        let guard = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        guard.as_ref().is_some_and(Session::is_live)
    }
}

impl<H> VisibilityObserver<H> for ChannelObserver {
    fn observe(
        &self,
        targets: Vec<Target<H>>,
        _band: TriggerBand,
    ) -> Result<(VisibilityReceiver, ObservationHandle), ObserveError> {
        let (events, rx) = mpsc::channel();
        let (shutdown_tx, shutdown) = mpsc::channel();
        let session = Session {
            ids: targets.into_iter().map(|t| t.id).collect(),
            events,
            shutdown,
        };
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = Some(session);
        Ok((
            VisibilityReceiver::new(rx),
            ObservationHandle::new(shutdown_tx),
        ))
    }
}
