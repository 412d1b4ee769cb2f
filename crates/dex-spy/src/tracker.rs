//! Active table-of-contents entry tracking.

use std::collections::HashSet;

use dex_content::TocItem;

use crate::band::TriggerBand;
use crate::observer::{
    HeadingLookup, ObservationHandle, Target, VisibilityEvent, VisibilityObserver,
    VisibilityReceiver,
};

/// Live observation owned by the tracker.
struct Observation {
    ids: HashSet<String>,
    events: VisibilityReceiver,
    _handle: ObservationHandle,
}

/// Tracks which TOC entry the reader is currently looking at.
///
/// The most recent "entered the band" event wins. Headings leaving the band
/// never clear the active entry, so fast scrolling does not flicker. When two
/// headings enter in one batch, the later one in delivery order wins, even if
/// it is earlier in the document.
///
/// Headings that are not mounted when the TOC is set are skipped, and an
/// unavailable observer leaves the tracker inert. Neither is an error.
pub struct ActiveSectionTracker<L, O> {
    lookup: L,
    observer: O,
    band: TriggerBand,
    observation: Option<Observation>,
    active: Option<String>,
}

impl<L, O> ActiveSectionTracker<L, O>
where
    L: HeadingLookup,
    O: VisibilityObserver<L::Heading>,
{
    /// Create an unmounted tracker with the default band.
    pub fn new(lookup: L, observer: O) -> Self {
        Self {
            lookup,
            observer,
            band: TriggerBand::default(),
            observation: None,
            active: None,
        }
    }

    /// Use a custom trigger band for future observations.
    #[must_use]
    pub fn with_band(mut self, band: TriggerBand) -> Self {
        self.band = band;
        self
    }

    /// Start tracking the headings of `toc`.
    pub fn mount(&mut self, toc: &[TocItem]) {
        self.replace_toc(toc);
    }

    /// Switch to a new TOC.
    ///
    /// The previous observation is released before the new one starts. The
    /// active entry survives only if the new TOC still has it.
    pub fn replace_toc(&mut self, toc: &[TocItem]) {
        self.observation = None;
        if self
            .active
            .as_ref()
            .is_some_and(|active| !toc.iter().any(|item| &item.id == active))
        {
            self.active = None;
        }

        let mut targets = Vec::with_capacity(toc.len());
        for item in toc {
            match self.lookup.heading(&item.id) {
                Some(heading) => targets.push(Target {
                    id: item.id.clone(),
                    heading,
                }),
                None => tracing::trace!(id = %item.id, "Heading not mounted, skipping"),
            }
        }
        if targets.is_empty() {
            return;
        }

        let ids = targets.iter().map(|t| t.id.clone()).collect();
        match self.observer.observe(targets, self.band) {
            Ok((events, handle)) => {
                self.observation = Some(Observation {
                    ids,
                    events,
                    _handle: handle,
                });
            }
            Err(e) => tracing::debug!(error = %e, "Section tracking disabled"),
        }
    }

    /// Apply one batch of visibility events.
    pub fn apply(&mut self, batch: &[VisibilityEvent]) {
        let Some(observation) = &self.observation else {
            return;
        };
        if let Some(event) = batch
            .iter()
            .rev()
            .find(|event| event.visible && observation.ids.contains(&event.id))
        {
            self.active = Some(event.id.clone());
        }
    }

    /// Apply every pending batch from the observer. Returns the number of
    /// batches applied.
    pub fn poll(&mut self) -> usize {
        let Some(observation) = &self.observation else {
            return 0;
        };
        let batches: Vec<_> = observation.events.try_iter().collect();
        for batch in &batches {
            self.apply(batch);
        }
        batches.len()
    }

    /// Stop tracking and release the observation.
    pub fn unmount(&mut self) {
        self.observation = None;
        self.active = None;
    }

    /// Id of the active TOC entry.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether an observation is live.
    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.observation.is_some()
    }
}
