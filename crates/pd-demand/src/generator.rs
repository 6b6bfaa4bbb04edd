//! The `DemandGenerator` trait — the demand model's interface to the
//! initializer.

use std::sync::Arc;

use pd_agent::DeliveryAgent;
use pd_parcel::{DeliveryResults, Parcel};

use crate::DemandResult;

/// Produces an agent's parcel orders.
///
/// # Contract
///
/// - `agent` is fully constructed.
/// - Every returned parcel has `recipient == agent.person_id()`, has been
///   attached to the agent's order set, and has been recorded into `results`
///   exactly once, all before this call returns.
/// - On error nothing has been attached or recorded for this agent.
/// - No ordering guarantee among one agent's parcels.
/// - Implementations must be `Send + Sync` (called from worker threads with
///   the `parallel` feature of `pd-init`).
pub trait DemandGenerator: Send + Sync {
    fn generate_orders(
        &self,
        agent:   &mut DeliveryAgent,
        results: &DeliveryResults,
    ) -> DemandResult<Vec<Arc<Parcel>>>;
}

/// A [`DemandGenerator`] that never orders anything.
pub struct NoDemand;

impl DemandGenerator for NoDemand {
    fn generate_orders(
        &self,
        _agent:   &mut DeliveryAgent,
        _results: &DeliveryResults,
    ) -> DemandResult<Vec<Arc<Parcel>>> {
        Ok(vec![])
    }
}
