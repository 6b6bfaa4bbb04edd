use pd_core::{HouseholdId, PersonId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PopulationError {
    #[error("population parse error: {0}")]
    Parse(String),

    #[error("person {person} listed twice (second time in household {household})")]
    DuplicatePerson {
        person:    PersonId,
        household: HouseholdId,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PopulationResult<T> = Result<T, PopulationError>;
