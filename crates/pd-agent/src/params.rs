//! Simulation-wide parameters threaded into every agent of a batch.

use std::sync::Arc;

use pd_core::{AgentId, InitConfig, ModeSet, SimulationDays};

use crate::{
    EventQueueHandle, NoopListener, PersonListener, PersonState, PublicTransportBehaviour,
    SimulationOptions,
};

/// Everything an [`AgentFactory`][crate::AgentFactory] needs besides the
/// person and the results handle.
///
/// The event queue and boarding behaviour are `Option`s because they are
/// injected by the enclosing run; a factory asked to build an agent without
/// them fails with [`AgentError::Construction`][crate::AgentError::Construction].
#[derive(Clone)]
pub struct SimulationParameters {
    pub event_queue:      Option<EventQueueHandle>,
    pub public_transport: Option<Arc<dyn PublicTransportBehaviour>>,
    pub options:          SimulationOptions,
    pub days:             SimulationDays,
    pub modes:            ModeSet,
    pub initial_state:    PersonState,
    /// Batch-wide seed, identical for every agent of the batch.
    pub seed:             u64,
    pub listener:         Arc<dyn PersonListener>,
    /// Id of the batch's first agent.  Runs that share one event queue or
    /// listener across batches continue from the previous batch's
    /// `next_agent_id` so ids stay unique for the whole run.
    pub first_agent_id:   AgentId,
}

impl SimulationParameters {
    /// Start a builder for a batch seeded with `seed`.
    pub fn builder(seed: u64) -> SimulationParametersBuilder {
        SimulationParametersBuilder::new(seed)
    }
}

impl std::fmt::Debug for SimulationParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationParameters")
            .field("has_event_queue", &self.event_queue.is_some())
            .field("has_public_transport", &self.public_transport.is_some())
            .field("options", &self.options)
            .field("days", &self.days)
            .field("modes", &self.modes)
            .field("initial_state", &self.initial_state)
            .field("seed", &self.seed)
            .field("first_agent_id", &self.first_agent_id)
            .finish()
    }
}

/// Fluent builder for [`SimulationParameters`].
///
/// # Defaults
///
/// | Method                  | Default                        |
/// |-------------------------|--------------------------------|
/// | `.event_queue(q)`       | absent                         |
/// | `.public_transport(b)`  | absent                         |
/// | `.options(o)`           | `SimulationOptions::default()` |
/// | `.days(d)`              | one week from Monday           |
/// | `.modes(m)`             | `ModeSet::all()`               |
/// | `.initial_state(s)`     | `PersonState::Uninitialized`   |
/// | `.listener(l)`          | `NoopListener`                 |
/// | `.first_agent_id(id)`   | `AgentId(0)`                   |
pub struct SimulationParametersBuilder {
    params: SimulationParameters,
}

impl SimulationParametersBuilder {
    pub fn new(seed: u64) -> Self {
        Self {
            params: SimulationParameters {
                event_queue:      None,
                public_transport: None,
                options:          SimulationOptions::default(),
                days:             SimulationDays::week(),
                modes:            ModeSet::all(),
                initial_state:    PersonState::Uninitialized,
                seed,
                listener:         Arc::new(NoopListener),
                first_agent_id:   AgentId(0),
            },
        }
    }

    /// Take days and modes from the run configuration.
    pub fn from_config(config: &InitConfig, seed: u64) -> Self {
        Self::new(seed)
            .days(config.simulation_days)
            .modes(config.modes.clone())
    }

    pub fn event_queue(mut self, queue: EventQueueHandle) -> Self {
        self.params.event_queue = Some(queue);
        self
    }

    pub fn public_transport<B: PublicTransportBehaviour + 'static>(mut self, behaviour: B) -> Self {
        self.params.public_transport = Some(Arc::new(behaviour));
        self
    }

    pub fn options(mut self, options: SimulationOptions) -> Self {
        self.params.options = options;
        self
    }

    pub fn days(mut self, days: SimulationDays) -> Self {
        self.params.days = days;
        self
    }

    pub fn modes(mut self, modes: ModeSet) -> Self {
        self.params.modes = modes;
        self
    }

    pub fn initial_state(mut self, state: PersonState) -> Self {
        self.params.initial_state = state;
        self
    }

    pub fn listener(mut self, listener: Arc<dyn PersonListener>) -> Self {
        self.params.listener = listener;
        self
    }

    pub fn first_agent_id(mut self, id: AgentId) -> Self {
        self.params.first_agent_id = id;
        self
    }

    pub fn build(self) -> SimulationParameters {
        self.params
    }
}
