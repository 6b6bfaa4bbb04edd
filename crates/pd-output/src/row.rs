//! Plain data row types written by the CSV writers.

use pd_init::BatchSummary;
use pd_parcel::Parcel;

/// One parcel, flattened to primitive columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParcelRow {
    pub recipient:           u64,
    pub sequence:            u32,
    pub destination:         &'static str,
    /// Delivery zone; for pack-station parcels this is the station's zone.
    pub zone:                u32,
    pub planned_day:         u32,
    pub size:                &'static str,
    pub distribution_center: u16,
}

impl From<&Parcel> for ParcelRow {
    fn from(p: &Parcel) -> Self {
        Self {
            recipient:           p.recipient.0,
            sequence:            p.sequence,
            destination:         p.destination.as_str(),
            zone:                p.zone.0,
            planned_day:         p.planned_day.0,
            size:                p.size.as_str(),
            distribution_center: p.distribution_center.0,
        }
    }
}

/// Counts for one completed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummaryRow {
    /// Index of the household fraction.
    pub batch:               u32,
    pub parcels:             u64,
    pub distinct_recipients: u64,
    pub eligible_persons:    u64,
}

impl BatchSummaryRow {
    pub fn new(batch: u32, summary: &BatchSummary) -> Self {
        Self {
            batch,
            parcels:             summary.parcels as u64,
            distinct_recipients: summary.distinct_recipients as u64,
            eligible_persons:    summary.eligible_persons as u64,
        }
    }
}
