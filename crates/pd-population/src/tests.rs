//! Unit tests for pd-population.

use std::io::Cursor;

use pd_core::{HouseholdId, PersonId, ZoneId};

use crate::{Employment, Household, InMemoryPopulation, Person};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn person(oid: u64, household: u64, age: u8, zone: u32) -> Person {
    Person {
        oid:        PersonId(oid),
        household:  HouseholdId(household),
        age,
        employment: Employment::FullTime,
        home_zone:  ZoneId(zone),
        work_zone:  Some(ZoneId(99)),
    }
}

/// H1{P1,P2} in zone 1, H2{P3} in zone 2.
fn two_households() -> InMemoryPopulation {
    InMemoryPopulation::new(vec![
        Household::new(HouseholdId(1), ZoneId(1))
            .with_person(person(1, 1, 40, 1))
            .with_person(person(2, 1, 9, 1)),
        Household::new(HouseholdId(2), ZoneId(2)).with_person(person(3, 2, 70, 2)),
    ])
}

const POPULATION_CSV: &str = "\
household_id,person_oid,age,employment,home_zone,work_zone\n\
7,70,45,fulltime,3,8\n\
5,50,30,parttime,4,\n\
7,71,12,student,3,\n\
";

// ── Flattening and fractions ──────────────────────────────────────────────────

#[cfg(test)]
mod source_tests {
    use super::*;
    use crate::flatten;

    #[test]
    fn flatten_keeps_household_then_member_order() {
        let oids: Vec<u64> = flatten(&two_households()).iter().map(|p| p.oid.0).collect();
        assert_eq!(oids, vec![1, 2, 3]);
    }

    #[test]
    fn fractions_partition_households() {
        let pop = two_households();
        assert_eq!(pop.fraction_count(1), 2);
        assert_eq!(pop.fraction_count(5), 1);
        assert_eq!(flatten(&pop.fraction(0, 1)).len(), 2);
        assert_eq!(flatten(&pop.fraction(1, 1)).len(), 1);
        assert!(pop.fraction(2, 1).is_empty());
    }

    #[test]
    fn counts() {
        let pop = two_households();
        assert_eq!(pop.household_count(), 2);
        assert_eq!(pop.person_count(), 3);
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader_tests {
    use super::*;
    use crate::{PopulationError, flatten, load_population_reader};

    #[test]
    fn groups_by_household_in_first_seen_order() {
        let pop = load_population_reader(Cursor::new(POPULATION_CSV)).unwrap();
        assert_eq!(pop.household_count(), 2);
        let oids: Vec<u64> = flatten(&pop).iter().map(|p| p.oid.0).collect();
        assert_eq!(oids, vec![70, 71, 50]);
    }

    #[test]
    fn optional_work_zone() {
        let pop = load_population_reader(Cursor::new(POPULATION_CSV)).unwrap();
        let persons = flatten(&pop);
        assert_eq!(persons[0].work_zone, Some(ZoneId(8)));
        assert_eq!(persons[1].work_zone, None);
        assert_eq!(persons[1].employment, Employment::Student);
    }

    #[test]
    fn duplicate_person_rejected() {
        let csv = "household_id,person_oid,age,employment,home_zone,work_zone\n\
                   1,10,30,fulltime,1,\n\
                   2,10,31,fulltime,1,\n";
        let err = load_population_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, PopulationError::DuplicatePerson { person: PersonId(10), .. }));
    }

    #[test]
    fn conflicting_home_zone_rejected() {
        let csv = "household_id,person_oid,age,employment,home_zone,work_zone\n\
                   1,10,30,fulltime,1,\n\
                   1,11,28,parttime,2,\n";
        let err = load_population_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, PopulationError::Parse(ref msg) if msg.contains("household 1")));
    }

    #[test]
    fn bad_employment_is_parse_error() {
        let csv = "household_id,person_oid,age,employment,home_zone,work_zone\n\
                   1,10,30,astronaut,1,\n";
        let err = load_population_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, PopulationError::Parse(_)));
    }
}

// ── Filters ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod filter_tests {
    use super::*;
    use crate::{AcceptAll, InZones, MinimumAge, PersonFilter, PersonFilterExt};

    #[test]
    fn stock_filters() {
        let adult = person(1, 1, 40, 1);
        let child = person(2, 1, 9, 2);
        assert!(AcceptAll.eligible(&child));
        assert!(MinimumAge(18).eligible(&adult));
        assert!(!MinimumAge(18).eligible(&child));
        assert!(InZones::new([ZoneId(2)]).eligible(&child));
        assert!(!InZones::new([ZoneId(2)]).eligible(&adult));
    }

    #[test]
    fn closures_are_filters() {
        let odd = |p: &Person| p.oid.0 % 2 == 1;
        assert!(odd.eligible(&person(1, 1, 40, 1)));
        assert!(!odd.eligible(&person(2, 1, 40, 1)));
    }

    #[test]
    fn combinators() {
        let filter = MinimumAge(18).and(InZones::new([ZoneId(1)]));
        assert!(filter.eligible(&person(1, 1, 40, 1)));
        assert!(!filter.eligible(&person(2, 1, 40, 2)));
        assert!(!filter.eligible(&person(3, 1, 9, 1)));

        let minors = MinimumAge(18).negate();
        assert!(minors.eligible(&person(3, 1, 9, 1)));
    }

    #[test]
    fn filter_is_repeatable() {
        let filter = MinimumAge(18);
        let p = person(1, 1, 18, 1);
        assert_eq!(filter.eligible(&p), filter.eligible(&p));
    }
}
