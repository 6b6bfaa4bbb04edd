//! Household sources and the flattening step of batch initialization.

use std::sync::Arc;

use crate::{Household, Person};

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Anything that can hand out a (lazy) sequence of households.
///
/// # Contract
///
/// - Iteration order must be stable: two calls on the same source yield the
///   same households in the same order, each with its members in the same
///   order.
/// - Implementations must be `Send + Sync` so a source can be shared by
///   batches running on different threads.
pub trait HouseholdSource: Send + Sync {
    fn households(&self) -> Box<dyn Iterator<Item = &Household> + '_>;
}

/// Flatten `source` into persons: household order first, then member order.
pub fn flatten<S: HouseholdSource + ?Sized>(source: &S) -> Vec<Arc<Person>> {
    source
        .households()
        .flat_map(|h| h.persons().iter().cloned())
        .collect()
}

// ── InMemoryPopulation ────────────────────────────────────────────────────────

/// A fully loaded population, kept in input order.
#[derive(Clone, Debug, Default)]
pub struct InMemoryPopulation {
    households: Vec<Household>,
}

impl InMemoryPopulation {
    pub fn new(households: Vec<Household>) -> Self {
        Self { households }
    }

    pub fn household_count(&self) -> usize {
        self.households.len()
    }

    pub fn person_count(&self) -> usize {
        self.households.iter().map(Household::len).sum()
    }

    /// Number of fractions of `size` households (the last may be short).
    pub fn fraction_count(&self, size: usize) -> usize {
        if size == 0 {
            return 0;
        }
        self.households.len().div_ceil(size)
    }

    /// The `index`-th run of `size` consecutive households.
    ///
    /// Out-of-range indices yield an empty fraction.
    pub fn fraction(&self, index: usize, size: usize) -> Fraction<'_> {
        let start = index.saturating_mul(size).min(self.households.len());
        let end = start.saturating_add(size).min(self.households.len());
        Fraction { households: &self.households[start..end] }
    }
}

impl HouseholdSource for InMemoryPopulation {
    fn households(&self) -> Box<dyn Iterator<Item = &Household> + '_> {
        Box::new(self.households.iter())
    }
}

// ── Fraction ──────────────────────────────────────────────────────────────────

/// A borrowed batch of households from an [`InMemoryPopulation`].
#[derive(Clone, Copy, Debug)]
pub struct Fraction<'a> {
    households: &'a [Household],
}

impl Fraction<'_> {
    pub fn len(&self) -> usize {
        self.households.len()
    }

    pub fn is_empty(&self) -> bool {
        self.households.is_empty()
    }
}

impl HouseholdSource for Fraction<'_> {
    fn households(&self) -> Box<dyn Iterator<Item = &Household> + '_> {
        Box::new(self.households.iter())
    }
}
