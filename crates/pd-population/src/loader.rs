//! CSV population loader.
//!
//! # CSV format
//!
//! One row per person.  Rows of the same household need not be adjacent.
//!
//! ```csv
//! household_id,person_oid,age,employment,home_zone,work_zone
//! 1,10,45,fulltime,3,7
//! 1,11,43,parttime,3,
//! 1,12,12,student,3,
//! 2,20,71,retired,5,
//! ```
//!
//! An empty `work_zone` means the person has no fixed workplace.  Every row
//! of a household must carry the same `home_zone`.
//!
//! Households keep the order in which they first appear; persons keep row
//! order within their household.

use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use pd_core::{HouseholdId, PersonId, ZoneId};

use crate::{Employment, Household, InMemoryPopulation, Person, PopulationError, PopulationResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PersonRecord {
    household_id: u64,
    person_oid:   u64,
    age:          u8,
    employment:   String,
    home_zone:    u32,
    work_zone:    Option<u32>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a population from a CSV file.
pub fn load_population_csv(path: &Path) -> PopulationResult<InMemoryPopulation> {
    let file = std::fs::File::open(path)?;
    load_population_reader(file)
}

/// Like [`load_population_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded data.
pub fn load_population_reader<R: Read>(reader: R) -> PopulationResult<InMemoryPopulation> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut households: Vec<Household> = Vec::new();
    let mut position: HashMap<u64, usize> = HashMap::new();
    let mut seen: HashSet<u64> = HashSet::new();

    for result in csv_reader.deserialize::<PersonRecord>() {
        let row = result.map_err(|e| PopulationError::Parse(e.to_string()))?;

        if !seen.insert(row.person_oid) {
            return Err(PopulationError::DuplicatePerson {
                person:    PersonId(row.person_oid),
                household: HouseholdId(row.household_id),
            });
        }

        let slot = *position.entry(row.household_id).or_insert_with(|| {
            households.push(Household::new(HouseholdId(row.household_id), ZoneId(row.home_zone)));
            households.len() - 1
        });

        let household_zone = households[slot].home_zone;
        if household_zone != ZoneId(row.home_zone) {
            return Err(PopulationError::Parse(format!(
                "person {} lives in zone {} but household {} is in zone {}",
                row.person_oid, row.home_zone, row.household_id, household_zone.0
            )));
        }

        households[slot].push(Person {
            oid:        PersonId(row.person_oid),
            household:  HouseholdId(row.household_id),
            age:        row.age,
            employment: row.employment.parse::<Employment>()?,
            home_zone:  ZoneId(row.home_zone),
            work_zone:  row.work_zone.map(ZoneId),
        });
    }

    Ok(InMemoryPopulation::new(households))
}
