//! `AgentFactory` — turns an eligible person into a [`DeliveryAgent`].

use std::sync::Arc;

use pd_core::{AgentId, Mode};
use pd_parcel::DeliveryResults;
use pd_population::Person;

use crate::{AgentError, AgentResult, DeliveryAgent, SimulationParameters};

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Builds agents from person records.
///
/// # Contract
///
/// - The returned agent is fully initialized and ready to be scheduled.
/// - Construction has no side effects outside the agent: nothing is pushed
///   to the event queue, the listener is not called, nothing is recorded in
///   `results`.
/// - Missing collaborators are an [`AgentError::Construction`]; callers treat
///   it as fatal.
/// - Implementations must be `Send + Sync` (agents may be built on worker
///   threads).
pub trait AgentFactory: Send + Sync {
    fn create(
        &self,
        id:      AgentId,
        person:  Arc<Person>,
        params:  &SimulationParameters,
        results: &DeliveryResults,
    ) -> AgentResult<DeliveryAgent>;
}

// ── DeliveryAgentFactory ──────────────────────────────────────────────────────

/// The stock factory: validates the parameters and captures them.
#[derive(Default)]
pub struct DeliveryAgentFactory;

impl DeliveryAgentFactory {
    pub fn new() -> Self {
        Self
    }
}

impl AgentFactory for DeliveryAgentFactory {
    fn create(
        &self,
        id:      AgentId,
        person:  Arc<Person>,
        params:  &SimulationParameters,
        results: &DeliveryResults,
    ) -> AgentResult<DeliveryAgent> {
        let fail = |reason: &str| AgentError::Construction {
            person: person.oid,
            reason: reason.to_owned(),
        };

        let event_queue = params
            .event_queue
            .clone()
            .ok_or_else(|| fail("no event queue"))?;
        let public_transport = params
            .public_transport
            .clone()
            .ok_or_else(|| fail("no public-transport behaviour"))?;

        if params.modes.is_empty() {
            return Err(fail("no modes in simulation"));
        }
        if params.modes.contains(Mode::PublicTransport) && !public_transport.serves_public_transport() {
            return Err(fail("public transport is a simulated mode but the boarding behaviour serves none"));
        }
        if !params.initial_state.is_valid_initial() {
            return Err(fail(&format!("{:?} is not a valid initial state", params.initial_state)));
        }

        log::trace!("creating {id} for {}", person.oid);

        Ok(DeliveryAgent::new(
            id,
            person,
            event_queue,
            public_transport,
            Arc::clone(&params.listener),
            params.options,
            params.days,
            params.modes.clone(),
            params.initial_state,
            params.seed,
            results.clone(),
        ))
    }
}
