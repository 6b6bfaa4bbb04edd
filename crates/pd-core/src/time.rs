//! Simulation day model.
//!
//! Parcel demand is planned at day resolution: a parcel is due on some
//! [`Day`] of the simulated period.  `Day(0)` is the first simulated day and
//! falls on [`SimulationDays::first_weekday`].

use std::fmt;

// ── Weekday ───────────────────────────────────────────────────────────────────

/// Day of the week.  Used to skip Sundays when planning deliveries.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Weekday {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// The weekday `n` days after `self`.
    pub fn plus(self, n: u32) -> Weekday {
        Self::ALL[(self as usize + n as usize) % 7]
    }

    pub fn is_sunday(self) -> bool {
        self == Weekday::Sunday
    }
}

// ── Day ───────────────────────────────────────────────────────────────────────

/// Zero-based index of a simulated day.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Day(pub u32);

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.0)
    }
}

// ── SimulationDays ────────────────────────────────────────────────────────────

/// The simulated period: how many days, starting on which weekday.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationDays {
    pub count: u32,
    pub first_weekday: Weekday,
}

impl SimulationDays {
    pub fn new(count: u32, first_weekday: Weekday) -> Self {
        Self { count, first_weekday }
    }

    /// One simulated week, Monday to Sunday.
    pub fn week() -> Self {
        Self::new(7, Weekday::Monday)
    }

    pub fn weekday(&self, day: Day) -> Weekday {
        self.first_weekday.plus(day.0)
    }

    pub fn contains(&self, day: Day) -> bool {
        day.0 < self.count
    }

    /// All simulated days in order.
    pub fn days(&self) -> impl Iterator<Item = Day> + '_ {
        (0..self.count).map(Day)
    }

    /// Simulated days on which parcels are delivered (everything but Sunday).
    pub fn delivery_days(&self) -> Vec<Day> {
        self.days().filter(|d| !self.weekday(*d).is_sunday()).collect()
    }
}

impl Default for SimulationDays {
    fn default() -> Self {
        Self::week()
    }
}
