//! The `BatchInitializer` and its three phases.

use std::sync::Arc;

use pd_agent::{AgentFactory, DeliveryAgent, SimulationParameters};
use pd_core::AgentId;
use pd_demand::DemandGenerator;
use pd_parcel::{DeliveryResults, Parcel};
use pd_population::{HouseholdSource, Person, PersonFilter, flatten};

use crate::{BatchSummary, InitError, InitObserver, InitPhase, InitResult};

/// Everything a completed batch hands back to the enclosing run.
pub struct BatchOutcome {
    /// One agent per eligible person, in flattened person order.  The run
    /// keeps them alive for the rest of the simulation.
    pub agents:  Vec<DeliveryAgent>,
    /// Parcels generated in this batch, grouped by agent in agent order.
    pub parcels: Vec<Arc<Parcel>>,
    pub summary: BatchSummary,
    /// First id not used by this batch; pass it as the next batch's
    /// `first_agent_id`.
    pub next_agent_id: AgentId,
}

/// Initializes batches of households: filter, build agents, attach demand.
///
/// The three collaborators are injected once and reused for every batch of
/// a run.  Per-batch inputs (households, simulation parameters, results
/// handle) are passed to [`initialize`](Self::initialize).
pub struct BatchInitializer<F: AgentFactory, D: DemandGenerator, P: PersonFilter> {
    factory: F,
    demand:  D,
    filter:  P,
}

impl<F: AgentFactory, D: DemandGenerator, P: PersonFilter> BatchInitializer<F, D, P> {
    pub fn new(factory: F, demand: D, filter: P) -> Self {
        Self { factory, demand, filter }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Initialize one batch.
    ///
    /// Every parcel generated lands in `results` (process-wide) and in the
    /// returned [`BatchOutcome::parcels`] (this batch only).  On error the
    /// batch is abandoned: no summary is logged or reported, and whatever
    /// was recorded into `results` before the failure is not authoritative.
    pub fn initialize<S, O>(
        &self,
        source:   &S,
        params:   &SimulationParameters,
        results:  &DeliveryResults,
        observer: &mut O,
    ) -> InitResult<BatchOutcome>
    where
        S: HouseholdSource + ?Sized,
        O: InitObserver,
    {
        // ── Phase 1: loading ──────────────────────────────────────────────
        observer.on_phase(InitPhase::Loading);
        let persons = flatten(source);

        // ── Phase 2: materializing ────────────────────────────────────────
        observer.on_phase(InitPhase::Materializing);
        let eligible: Vec<Arc<Person>> = persons
            .iter()
            .filter(|p| self.filter.eligible(p))
            .cloned()
            .collect();
        log::debug!("{}/{} persons eligible", eligible.len(), persons.len());

        let first = params.first_agent_id;
        let next_agent_id = u32::try_from(eligible.len())
            .ok()
            .and_then(|n| first.0.checked_add(n))
            .map(AgentId)
            .ok_or_else(|| {
                InitError::Config(format!(
                    "{} eligible persons starting at {first} exceed the agent id range",
                    eligible.len()
                ))
            })?;

        // All agents first, so every creation is observed before any demand.
        let mut agents = self.create_agents(&eligible, params, results)?;
        for agent in &agents {
            observer.on_agent_created(agent);
        }

        let per_agent = self.generate_orders(&mut agents, results)?;

        let mut parcels: Vec<Arc<Parcel>> = Vec::with_capacity(per_agent.iter().map(Vec::len).sum());
        for (agent, orders) in agents.iter().zip(per_agent) {
            observer.on_orders_generated(agent, &orders);
            parcels.extend(orders);
        }

        // ── Phase 3: summarizing ──────────────────────────────────────────
        observer.on_phase(InitPhase::Summarizing);
        let summary = BatchSummary::from_parcels(&parcels, agents.len());
        log::info!("{summary}");
        observer.on_summary(&summary);

        Ok(BatchOutcome { agents, parcels, summary, next_agent_id })
    }

    // ── Materialization steps ─────────────────────────────────────────────

    /// Build one agent per eligible person.  `AgentId`s count up from
    /// `params.first_agent_id` in person order.
    fn create_agents(
        &self,
        eligible: &[Arc<Person>],
        params:   &SimulationParameters,
        results:  &DeliveryResults,
    ) -> InitResult<Vec<DeliveryAgent>> {
        let first = params.first_agent_id.0;
        let create = |(i, person): (usize, &Arc<Person>)| {
            // In range: checked against the batch size by the caller.
            let id = AgentId(first + i as u32);
            self.factory
                .create(id, Arc::clone(person), params, results)
                .map_err(InitError::from)
        };

        #[cfg(not(feature = "parallel"))]
        {
            eligible.iter().enumerate().map(create).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // Indexed collect keeps person order.
            eligible.par_iter().enumerate().map(create).collect()
        }
    }

    /// Generate (and record) every agent's orders.  The outer `Vec` follows
    /// agent order.
    ///
    /// With or without `parallel`, `results` ends up holding the parcels of
    /// every agent before the first failing one and nothing after it.
    fn generate_orders(
        &self,
        agents:  &mut [DeliveryAgent],
        results: &DeliveryResults,
    ) -> InitResult<Vec<Vec<Arc<Parcel>>>> {
        let generate = |agent: &mut DeliveryAgent, into: &DeliveryResults| {
            self.demand
                .generate_orders(agent, into)
                .map_err(InitError::from)
        };

        #[cfg(not(feature = "parallel"))]
        {
            // Stops at the first failing agent; later agents are untouched.
            agents.iter_mut().map(|agent| generate(agent, results)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // Each agent records into its own staging accumulator; the shared
            // results receive the parcels afterwards, in agent order.
            let staged: Vec<InitResult<Vec<Arc<Parcel>>>> = agents
                .par_iter_mut()
                .map(|agent| generate(agent, &DeliveryResults::new()))
                .collect();

            let mut per_agent = Vec::with_capacity(staged.len());
            for orders in staged {
                let orders = orders?;
                for parcel in &orders {
                    results.record(Arc::clone(parcel));
                }
                per_agent.push(orders);
            }
            Ok(per_agent)
        }
    }
}
