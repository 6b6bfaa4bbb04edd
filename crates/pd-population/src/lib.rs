//! `pd-population` — households, persons, and eligibility filters.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`person`]    | `Person`, `Employment`, `Household`                        |
//! | [`source`]    | `HouseholdSource` trait, `InMemoryPopulation`, `Fraction`  |
//! | [`loader`]    | `load_population_csv`, `load_population_reader`            |
//! | [`filter`]    | `PersonFilter` trait, stock filters, `PersonFilterExt`     |
//! | [`error`]     | `PopulationError`, `PopulationResult<T>`                   |
//!
//! # Ordering
//!
//! Everything in this crate preserves input order: households in the order
//! they first appear, persons in the order they appear within a household.
//! [`flatten`] walks a source in exactly that order, which is the order the
//! initializer materializes agents in.

pub mod error;
pub mod filter;
pub mod loader;
pub mod person;
pub mod source;

#[cfg(test)]
mod tests;

pub use error::{PopulationError, PopulationResult};
pub use filter::{AcceptAll, AndFilter, InZones, MinimumAge, NotFilter, PersonFilter, PersonFilterExt};
pub use loader::{load_population_csv, load_population_reader};
pub use person::{Employment, Household, Person};
pub use source::{Fraction, HouseholdSource, InMemoryPopulation, flatten};
