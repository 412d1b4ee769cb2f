//! Active-section tracking for rendered dex pages.
//!
//! An [`ActiveSectionTracker`] follows which table-of-contents entry the
//! reader is looking at. It relies on two host capabilities:
//! - [`HeadingLookup`]: finds mounted heading elements by TOC id
//! - [`VisibilityObserver`]: reports headings entering or leaving a
//!   [`TriggerBand`] of the viewport
//!
//! [`ChannelObserver`] is an in-process observer for hosts that compute
//! visibility themselves. [`MockObserver`] (behind the `mock` feature) records
//! observation requests for tests.
//!
//! # Quick Start
//!
//! ```
//! use dex_content::{HeadingLevel, TocItem};
//! use dex_spy::{ActiveSectionTracker, ChannelObserver, HeadingLookup, VisibilityEvent};
//!
//! struct AllMounted;
//!
//! impl HeadingLookup for AllMounted {
//!     type Heading = ();
//!
//!     fn heading(&self, _id: &str) -> Option<()> {
//!         Some(())
//!     }
//! }
//!
//! let observer = ChannelObserver::new();
//! let mut tracker = ActiveSectionTracker::new(AllMounted, &observer);
//! tracker.mount(&[TocItem::new("usage", "Usage", HeadingLevel::H2)]);
//!
//! observer.deliver(vec![VisibilityEvent::entered("usage")]);
//! tracker.poll();
//! assert_eq!(tracker.active(), Some("usage"));
//! ```

mod band;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod observer;
mod tracker;

pub use band::{InvalidBand, TriggerBand};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockObserver;
pub use observer::{
    ChannelObserver, HeadingLookup, ObservationHandle, ObserveError, Target, VisibilityBatch,
    VisibilityEvent, VisibilityObserver, VisibilityReceiver,
};
pub use tracker::ActiveSectionTracker;
