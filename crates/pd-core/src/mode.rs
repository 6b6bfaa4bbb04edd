//! Travel modes and the set of modes available in a simulation.

use std::collections::BTreeSet;
use std::str::FromStr;

use crate::CoreError;

/// A means of travel an agent may choose during the run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum Mode {
    /// Driving a private car.
    CarDriver,
    /// Riding along in a private car.
    CarPassenger,
    Pedestrian,
    Bike,
    PublicTransport,
}

impl Mode {
    /// Human-readable label, also used in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::CarDriver       => "car_driver",
            Mode::CarPassenger    => "car_passenger",
            Mode::Pedestrian      => "pedestrian",
            Mode::Bike            => "bike",
            Mode::PublicTransport => "public_transport",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "car_driver"       => Ok(Mode::CarDriver),
            "car_passenger"    => Ok(Mode::CarPassenger),
            "pedestrian"       => Ok(Mode::Pedestrian),
            "bike"             => Ok(Mode::Bike),
            "public_transport" => Ok(Mode::PublicTransport),
            other => Err(CoreError::Parse(format!("unknown mode {other:?}"))),
        }
    }
}

// ── ModeSet ───────────────────────────────────────────────────────────────────

/// The modes configured for a simulation run.  Ordered so iteration is
/// deterministic.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ModeSet(BTreeSet<Mode>);

impl ModeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every mode the framework knows about.
    pub fn all() -> Self {
        [
            Mode::CarDriver,
            Mode::CarPassenger,
            Mode::Pedestrian,
            Mode::Bike,
            Mode::PublicTransport,
        ]
        .into_iter()
        .collect()
    }

    pub fn insert(&mut self, mode: Mode) -> bool {
        self.0.insert(mode)
    }

    pub fn contains(&self, mode: Mode) -> bool {
        self.0.contains(&mode)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Mode> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Mode> for ModeSet {
    fn from_iter<I: IntoIterator<Item = Mode>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
