//! Batch phases and the end-of-batch summary.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use pd_parcel::Parcel;

/// Where a batch currently is.  Transitions only move forward;
/// `Summarizing` is terminal.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum InitPhase {
    Loading,
    Materializing,
    Summarizing,
}

/// Counts reported once a batch has completed.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct BatchSummary {
    /// Parcels generated in this batch.
    pub parcels:             usize,
    /// Distinct recipients among those parcels.
    pub distinct_recipients: usize,
    /// Persons that passed the filter (= agents created).
    pub eligible_persons:    usize,
}

impl BatchSummary {
    pub fn from_parcels(parcels: &[Arc<Parcel>], eligible_persons: usize) -> Self {
        let recipients: HashSet<_> = parcels.iter().map(|p| p.recipient).collect();
        Self {
            parcels: parcels.len(),
            distinct_recipients: recipients.len(),
            eligible_persons,
        }
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generated {} parcels for {}/{} unique persons.",
            self.parcels, self.distinct_recipients, self.eligible_persons
        )
    }
}
