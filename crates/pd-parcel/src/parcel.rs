//! Parcel order records.

use std::fmt;

use pd_core::{Day, DistributionCenterId, PersonId, ZoneId};

/// Where the recipient wants the parcel delivered.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParcelDestination {
    Home,
    Work,
    /// A parcel locker in the given zone.
    PackStation(ZoneId),
}

impl ParcelDestination {
    pub fn as_str(self) -> &'static str {
        match self {
            ParcelDestination::Home           => "home",
            ParcelDestination::Work           => "work",
            ParcelDestination::PackStation(_) => "pack_station",
        }
    }
}

/// Coarse parcel size class.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipmentSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl ShipmentSize {
    pub const ALL: [ShipmentSize; 4] = [
        ShipmentSize::Small,
        ShipmentSize::Medium,
        ShipmentSize::Large,
        ShipmentSize::ExtraLarge,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShipmentSize::Small      => "small",
            ShipmentSize::Medium     => "medium",
            ShipmentSize::Large      => "large",
            ShipmentSize::ExtraLarge => "extra_large",
        }
    }
}

/// One delivery order.
///
/// Immutable once created.  A parcel is identified by `(recipient,
/// sequence)`: the sequence number counts the recipient's parcels from 0, so
/// identity does not depend on the order in which agents were processed.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parcel {
    pub recipient:           PersonId,
    pub sequence:            u32,
    pub destination:         ParcelDestination,
    /// Zone the parcel is delivered to.
    pub zone:                ZoneId,
    pub planned_day:         Day,
    pub size:                ShipmentSize,
    pub distribution_center: DistributionCenterId,
}

impl fmt::Display for Parcel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parcel {}#{} -> {} {} on {}",
            self.recipient,
            self.sequence,
            self.destination.as_str(),
            self.zone,
            self.planned_day,
        )
    }
}
