//! Downstream consumers of recorded parcels.

use crate::{Parcel, ParcelResult};

/// Receives every parcel recorded into
/// [`DeliveryResults`][crate::DeliveryResults], in recording order.
///
/// Called while the results lock is held, so calls never interleave.
/// Errors are stashed by the results (first one wins) and never abort
/// recording; see [`DeliveryResults::take_error`][crate::DeliveryResults::take_error].
pub trait ParcelSink: Send {
    fn write_parcel(&mut self, parcel: &Parcel) -> ParcelResult<()>;

    /// Flush buffered output.  Idempotent.
    fn finish(&mut self) -> ParcelResult<()> {
        Ok(())
    }
}

/// A [`ParcelSink`] that discards everything.
pub struct NoopSink;

impl ParcelSink for NoopSink {
    fn write_parcel(&mut self, _parcel: &Parcel) -> ParcelResult<()> {
        Ok(())
    }
}
