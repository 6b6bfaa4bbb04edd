//! The delivery-capable simulated agent.

use std::sync::Arc;

use pd_core::{AgentId, AgentRng, ModeSet, PersonId, SimulationDays};
use pd_parcel::{DeliveryResults, Parcel};
use pd_population::Person;

use crate::{
    EventQueueHandle, PersonListener, PersonState, PublicTransportBehaviour, SimulationOptions,
};

/// A simulated person able to travel and to receive (or pick up) parcels.
///
/// Created once per eligible person by an
/// [`AgentFactory`][crate::AgentFactory].  Everything it needs for the run
/// is captured at construction; the fields below are read-only afterwards
/// except for the state, the RNG, and the order set.
pub struct DeliveryAgent {
    id:               AgentId,
    person:           Arc<Person>,
    event_queue:      EventQueueHandle,
    public_transport: Arc<dyn PublicTransportBehaviour>,
    listener:         Arc<dyn PersonListener>,
    options:          SimulationOptions,
    days:             SimulationDays,
    modes:            ModeSet,
    state:            PersonState,
    seed:             u64,
    rng:              AgentRng,
    results:          DeliveryResults,
    orders:           Vec<Arc<Parcel>>,
}

impl DeliveryAgent {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id:               AgentId,
        person:           Arc<Person>,
        event_queue:      EventQueueHandle,
        public_transport: Arc<dyn PublicTransportBehaviour>,
        listener:         Arc<dyn PersonListener>,
        options:          SimulationOptions,
        days:             SimulationDays,
        modes:            ModeSet,
        state:            PersonState,
        seed:             u64,
        results:          DeliveryResults,
    ) -> Self {
        let rng = AgentRng::new(seed, person.oid);
        Self {
            id,
            person,
            event_queue,
            public_transport,
            listener,
            options,
            days,
            modes,
            state,
            seed,
            rng,
            results,
            orders: Vec::new(),
        }
    }

    // ── Identity ──────────────────────────────────────────────────────────

    pub fn id(&self) -> AgentId {
        self.id
    }

    /// The person this agent was built from.
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Shared handle to the person record, for callers that need it while
    /// also borrowing the agent mutably.
    pub fn shared_person(&self) -> Arc<Person> {
        Arc::clone(&self.person)
    }

    pub fn person_id(&self) -> PersonId {
        self.person.oid
    }

    // ── Captured parameters ───────────────────────────────────────────────

    pub fn event_queue(&self) -> &EventQueueHandle {
        &self.event_queue
    }

    pub fn public_transport(&self) -> &dyn PublicTransportBehaviour {
        self.public_transport.as_ref()
    }

    pub fn listener(&self) -> &dyn PersonListener {
        self.listener.as_ref()
    }

    pub fn options(&self) -> SimulationOptions {
        self.options
    }

    pub fn days(&self) -> SimulationDays {
        self.days
    }

    pub fn modes(&self) -> &ModeSet {
        &self.modes
    }

    pub fn state(&self) -> PersonState {
        self.state
    }

    /// The batch seed this agent's RNG was derived from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The shared results handle captured at construction.
    pub fn results(&self) -> &DeliveryResults {
        &self.results
    }

    pub fn rng_mut(&mut self) -> &mut AgentRng {
        &mut self.rng
    }

    // ── Orders ────────────────────────────────────────────────────────────

    /// Parcels ordered by this agent, in attachment order.
    pub fn orders(&self) -> &[Arc<Parcel>] {
        &self.orders
    }

    /// Sequence number the next attached parcel should carry.
    pub fn next_order_sequence(&self) -> u32 {
        self.orders.len() as u32
    }

    /// Add `parcel` to the order set and tell the listener.
    ///
    /// Does not record into [`DeliveryResults`]; that is the demand
    /// generator's half of the contract.
    pub fn attach_order(&mut self, parcel: Arc<Parcel>) {
        debug_assert_eq!(parcel.recipient, self.person.oid);
        self.listener.on_parcel_ordered(self.id, &parcel);
        self.orders.push(parcel);
    }
}

impl std::fmt::Debug for DeliveryAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeliveryAgent")
            .field("id", &self.id)
            .field("person", &self.person.oid)
            .field("state", &self.state)
            .field("orders", &self.orders.len())
            .finish()
    }
}
