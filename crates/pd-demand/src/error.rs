use pd_core::PersonId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemandError {
    /// The model cannot produce orders for this agent.  Fatal for the batch.
    #[error("cannot generate parcel orders for {person}: {reason}")]
    Generation {
        person: PersonId,
        reason: String,
    },

    #[error("demand model configuration error: {0}")]
    Config(String),
}

pub type DemandResult<T> = Result<T, DemandError>;
