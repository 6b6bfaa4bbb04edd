//! `DeliveryResults` — process-wide accumulator of generated parcels.
//!
//! The same handle is passed to the agent factory, stored in every agent,
//! and handed to the demand generator, so parcels recorded anywhere during a
//! run land in one place.  It is an explicit handle, not a global: separate
//! runs (or tests) use separate instances.
//!
//! `record` takes the internal lock for the whole append, so concurrent
//! demand generation never interleaves partial records.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use pd_core::PersonId;

use crate::{Parcel, ParcelError, ParcelSink};

#[cfg(feature = "fx-hash")]
type RecipientSet = rustc_hash::FxHashSet<PersonId>;
#[cfg(not(feature = "fx-hash"))]
type RecipientSet = std::collections::HashSet<PersonId>;

struct Inner {
    parcels:    Vec<Arc<Parcel>>,
    recipients: RecipientSet,
    sink:       Option<Box<dyn ParcelSink>>,
    last_error: Option<ParcelError>,
}

/// Cheap-to-clone handle to the shared, append-only parcel accumulator.
///
/// Recording is **not** idempotent: recording the same parcel twice counts
/// it twice.  Avoiding double-booking is the caller's job.
#[derive(Clone)]
pub struct DeliveryResults {
    inner: Arc<Mutex<Inner>>,
}

impl Default for DeliveryResults {
    fn default() -> Self {
        Self::new()
    }
}

impl DeliveryResults {
    /// An empty accumulator with no downstream sink.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                parcels:    Vec::new(),
                recipients: RecipientSet::default(),
                sink:       None,
                last_error: None,
            })),
        }
    }

    /// An empty accumulator that forwards every recorded parcel to `sink`.
    pub fn with_sink<S: ParcelSink + 'static>(sink: S) -> Self {
        let results = Self::new();
        results.lock().sink = Some(Box::new(sink));
        results
    }

    /// Append `parcel`, update the recipient set, and forward it to the sink.
    pub fn record(&self, parcel: Arc<Parcel>) {
        let mut inner = self.lock();
        inner.recipients.insert(parcel.recipient);

        let written = inner.sink.as_mut().map(|sink| sink.write_parcel(&parcel));
        if let Some(Err(e)) = written {
            log::warn!("failed to write {parcel}: {e}");
            // Keep only the first error.
            if inner.last_error.is_none() {
                inner.last_error = Some(e);
            }
        }

        inner.parcels.push(parcel);
    }

    /// Number of parcels recorded so far.
    pub fn count(&self) -> usize {
        self.lock().parcels.len()
    }

    /// Number of distinct persons among the recipients of recorded parcels.
    pub fn distinct_recipients(&self) -> usize {
        self.lock().recipients.len()
    }

    /// Snapshot of all recorded parcels, in recording order.
    pub fn parcels(&self) -> Vec<Arc<Parcel>> {
        self.lock().parcels.clone()
    }

    /// Flush the sink (if any).  Errors are stashed like write errors.
    pub fn finish(&self) {
        let mut inner = self.lock();
        let finished = inner.sink.as_mut().map(|sink| sink.finish());
        if let Some(Err(e)) = finished {
            log::warn!("failed to flush parcel sink: {e}");
            if inner.last_error.is_none() {
                inner.last_error = Some(e);
            }
        }
    }

    /// Take the first stored sink error, if any.
    pub fn take_error(&self) -> Option<ParcelError> {
        self.lock().last_error.take()
    }

    /// `true` when both handles point at the same accumulator.
    pub fn same_as(&self, other: &DeliveryResults) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Every append completes before a sink can panic.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for DeliveryResults {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("DeliveryResults")
            .field("parcels", &inner.parcels.len())
            .field("recipients", &inner.recipients.len())
            .field("has_sink", &inner.sink.is_some())
            .finish()
    }
}
