use pd_agent::AgentError;
use pd_demand::DemandError;
use thiserror::Error;

/// Why a batch was aborted.  Both per-person failures are fatal; the
/// enclosing run decides whether to skip the batch or stop.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("agent construction failed: {0}")]
    Construction(#[from] AgentError),

    #[error("demand generation failed: {0}")]
    DemandGeneration(#[from] DemandError),

    #[error("batch configuration error: {0}")]
    Config(String),
}

pub type InitResult<T> = Result<T, InitError>;
