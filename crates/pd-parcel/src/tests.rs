//! Unit tests for pd-parcel.

use std::sync::{Arc, Mutex};

use pd_core::{Day, DistributionCenterId, PersonId, ZoneId};

use crate::{DeliveryResults, Parcel, ParcelDestination, ParcelError, ParcelResult, ParcelSink, ShipmentSize};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parcel(recipient: u64, sequence: u32) -> Arc<Parcel> {
    Arc::new(Parcel {
        recipient:           PersonId(recipient),
        sequence,
        destination:         ParcelDestination::Home,
        zone:                ZoneId(1),
        planned_day:         Day(0),
        size:                ShipmentSize::Small,
        distribution_center: DistributionCenterId(0),
    })
}

/// Sink that remembers recipients and can be told to fail.
struct RecordingSink {
    seen: Arc<Mutex<Vec<PersonId>>>,
    fail: bool,
}

impl ParcelSink for RecordingSink {
    fn write_parcel(&mut self, parcel: &Parcel) -> ParcelResult<()> {
        if self.fail {
            return Err(ParcelError::Sink(format!("refused {}", parcel.recipient)));
        }
        self.seen.lock().unwrap().push(parcel.recipient);
        Ok(())
    }
}

// ── DeliveryResults ───────────────────────────────────────────────────────────

#[cfg(test)]
mod results_tests {
    use super::*;

    #[test]
    fn empty() {
        let results = DeliveryResults::new();
        assert_eq!(results.count(), 0);
        assert_eq!(results.distinct_recipients(), 0);
        assert!(results.parcels().is_empty());
    }

    #[test]
    fn counts_parcels_and_distinct_recipients() {
        let results = DeliveryResults::new();
        results.record(parcel(1, 0));
        results.record(parcel(1, 1));
        results.record(parcel(3, 0));
        assert_eq!(results.count(), 3);
        assert_eq!(results.distinct_recipients(), 2);
    }

    #[test]
    fn recording_is_not_idempotent() {
        let results = DeliveryResults::new();
        let p = parcel(1, 0);
        results.record(Arc::clone(&p));
        results.record(p);
        assert_eq!(results.count(), 2);
        assert_eq!(results.distinct_recipients(), 1);
    }

    #[test]
    fn clones_share_state() {
        let results = DeliveryResults::new();
        let other = results.clone();
        other.record(parcel(5, 0));
        assert_eq!(results.count(), 1);
        assert!(results.same_as(&other));
        assert!(!results.same_as(&DeliveryResults::new()));
    }

    #[test]
    fn concurrent_records_are_all_kept() {
        let results = DeliveryResults::new();
        std::thread::scope(|s| {
            for t in 0..4u64 {
                let results = results.clone();
                s.spawn(move || {
                    for i in 0..50 {
                        results.record(parcel(t, i));
                    }
                });
            }
        });
        assert_eq!(results.count(), 200);
        assert_eq!(results.distinct_recipients(), 4);
    }

    #[test]
    fn sink_sees_every_parcel_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let results = DeliveryResults::with_sink(RecordingSink { seen: Arc::clone(&seen), fail: false });
        results.record(parcel(2, 0));
        results.record(parcel(1, 0));
        results.finish();
        assert_eq!(*seen.lock().unwrap(), vec![PersonId(2), PersonId(1)]);
        assert!(results.take_error().is_none());
    }

    #[test]
    fn sink_errors_are_stashed_not_fatal() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let results = DeliveryResults::with_sink(RecordingSink { seen, fail: true });
        results.record(parcel(1, 0));
        results.record(parcel(2, 0));
        assert_eq!(results.count(), 2);
        let err = results.take_error().expect("first sink error kept");
        assert!(err.to_string().contains("PersonId(1)"));
        assert!(results.take_error().is_none());
    }
}

#[cfg(test)]
mod parcel_tests {
    use super::*;

    #[test]
    fn display_names_recipient_and_day() {
        let text = parcel(4, 2).to_string();
        assert!(text.contains("PersonId(4)#2"));
        assert!(text.contains("D0"));
    }

    #[test]
    fn labels() {
        assert_eq!(ParcelDestination::PackStation(ZoneId(3)).as_str(), "pack_station");
        assert_eq!(ShipmentSize::ExtraLarge.as_str(), "extra_large");
    }
}
