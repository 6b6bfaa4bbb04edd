//! Person and household records.
//!
//! Both are read-only inputs.  Persons are handed around as `Arc<Person>` so
//! an agent can keep a back-reference to the record it was built from
//! without copying it.

use std::str::FromStr;
use std::sync::Arc;

use pd_core::{HouseholdId, PersonId, ZoneId};

use crate::PopulationError;

// ── Employment ────────────────────────────────────────────────────────────────

/// Occupation status, used by demand models to vary order rates.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Employment {
    FullTime,
    PartTime,
    Student,
    Retired,
    #[default]
    Unemployed,
}

impl Employment {
    pub fn as_str(self) -> &'static str {
        match self {
            Employment::FullTime   => "fulltime",
            Employment::PartTime   => "parttime",
            Employment::Student    => "student",
            Employment::Retired    => "retired",
            Employment::Unemployed => "unemployed",
        }
    }

    /// `true` for persons who commute to a workplace.
    pub fn is_employed(self) -> bool {
        matches!(self, Employment::FullTime | Employment::PartTime)
    }
}

impl FromStr for Employment {
    type Err = PopulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "fulltime"   => Ok(Employment::FullTime),
            "parttime"   => Ok(Employment::PartTime),
            "student"    => Ok(Employment::Student),
            "retired"    => Ok(Employment::Retired),
            "unemployed" => Ok(Employment::Unemployed),
            other => Err(PopulationError::Parse(format!(
                "invalid employment {other:?}: expected fulltime, parttime, student, retired, or unemployed"
            ))),
        }
    }
}

// ── Person ────────────────────────────────────────────────────────────────────

/// Immutable demographic record of one household member.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    /// Stable opaque identifier.
    pub oid:        PersonId,
    pub household:  HouseholdId,
    pub age:        u8,
    pub employment: Employment,
    pub home_zone:  ZoneId,
    /// `None` for persons without a fixed workplace.
    pub work_zone:  Option<ZoneId>,
}

// ── Household ─────────────────────────────────────────────────────────────────

/// An ordered group of persons living together.
#[derive(Clone, Debug)]
pub struct Household {
    pub id:        HouseholdId,
    pub home_zone: ZoneId,
    persons:       Vec<Arc<Person>>,
}

impl Household {
    pub fn new(id: HouseholdId, home_zone: ZoneId) -> Self {
        Self { id, home_zone, persons: Vec::new() }
    }

    /// Append a member.  Members keep insertion order.
    pub fn push(&mut self, person: Person) {
        self.persons.push(Arc::new(person));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with_person(mut self, person: Person) -> Self {
        self.push(person);
        self
    }

    /// Members in intra-household order.
    pub fn persons(&self) -> &[Arc<Person>] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}
