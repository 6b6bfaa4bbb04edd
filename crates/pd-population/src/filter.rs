//! `PersonFilter` — decides which persons are simulated.
//!
//! The initializer asks the filter once per person, before any agent is
//! built.  A person the filter rejects never becomes an agent and never
//! receives a parcel.
//!
//! Any `Fn(&Person) -> bool + Send + Sync` closure is a filter; the stock
//! filters below cover the usual study-area and age restrictions.  Combine
//! them with [`PersonFilterExt::and`] and [`PersonFilterExt::negate`].

use std::collections::BTreeSet;

use pd_core::ZoneId;

use crate::Person;

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Eligibility predicate over person records.
///
/// # Contract
///
/// - Pure: the answer depends only on `person`, so repeated batches with the
///   same inputs select the same persons.
/// - Must not block or perform I/O.
/// - Implementations must be `Send + Sync`.
pub trait PersonFilter: Send + Sync {
    fn eligible(&self, person: &Person) -> bool;
}

impl<F> PersonFilter for F
where
    F: Fn(&Person) -> bool + Send + Sync,
{
    #[inline]
    fn eligible(&self, person: &Person) -> bool {
        self(person)
    }
}

// ── Stock filters ─────────────────────────────────────────────────────────────

/// Admits everyone.
pub struct AcceptAll;

impl PersonFilter for AcceptAll {
    #[inline]
    fn eligible(&self, _person: &Person) -> bool {
        true
    }
}

/// Admits persons at least this old.
pub struct MinimumAge(pub u8);

impl PersonFilter for MinimumAge {
    #[inline]
    fn eligible(&self, person: &Person) -> bool {
        person.age >= self.0
    }
}

/// Admits persons whose home zone lies in the study area.
pub struct InZones(pub BTreeSet<ZoneId>);

impl InZones {
    pub fn new<I: IntoIterator<Item = ZoneId>>(zones: I) -> Self {
        Self(zones.into_iter().collect())
    }
}

impl PersonFilter for InZones {
    #[inline]
    fn eligible(&self, person: &Person) -> bool {
        self.0.contains(&person.home_zone)
    }
}

// ── Combinators ───────────────────────────────────────────────────────────────

/// Admits persons both filters admit.  The second filter is not consulted
/// when the first rejects.
pub struct AndFilter<A: PersonFilter, B: PersonFilter> {
    first:  A,
    second: B,
}

impl<A: PersonFilter, B: PersonFilter> PersonFilter for AndFilter<A, B> {
    fn eligible(&self, person: &Person) -> bool {
        self.first.eligible(person) && self.second.eligible(person)
    }
}

/// Admits exactly the persons the inner filter rejects.
pub struct NotFilter<A: PersonFilter>(A);

impl<A: PersonFilter> PersonFilter for NotFilter<A> {
    fn eligible(&self, person: &Person) -> bool {
        !self.0.eligible(person)
    }
}

/// Extension trait that adds `.and(other)` and `.negate()` to any filter.
pub trait PersonFilterExt: PersonFilter + Sized {
    fn and<B: PersonFilter>(self, other: B) -> AndFilter<Self, B> {
        AndFilter { first: self, second: other }
    }

    fn negate(self) -> NotFilter<Self> {
        NotFilter(self)
    }
}

impl<F: PersonFilter + Sized> PersonFilterExt for F {}
