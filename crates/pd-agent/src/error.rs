use pd_core::PersonId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    /// A required collaborator is missing or the parameters are inconsistent.
    /// Fatal configuration error; never retried.
    #[error("cannot construct agent for {person}: {reason}")]
    Construction {
        person: PersonId,
        reason: String,
    },
}

pub type AgentResult<T> = Result<T, AgentError>;
