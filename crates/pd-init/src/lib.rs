//! `pd-init` — initialization of one batch ("fraction") of households.
//!
//! # Three-phase batch
//!
//! ```text
//! ① Loading        — flatten households to persons (household order, then
//!                    member order).
//! ② Materializing  — filter persons; build one agent per eligible person
//!                    (AgentFactory); then, agent by agent in the same order,
//!                    generate and record parcel orders (DemandGenerator).
//! ③ Summarizing    — exactly once, after every agent is done: log
//!                    "Generated N parcels for D/E unique persons."
//! ```
//!
//! Any error in ② aborts the batch before ③: no summary is logged and the
//! observer's `on_summary` is not called.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                       |
//! |------------|--------------------------------------------------------------|
//! | `parallel` | Runs agent construction and order generation on Rayon.       |
//!
//! Observer callbacks, the batch parcel list, and the order in which parcels
//! reach the shared `DeliveryResults` follow person order with or without
//! `parallel`.  Under `parallel` each agent's demand is generated into a
//! staging accumulator and replayed into the shared results after the join,
//! so a failing agent leaves exactly the parcels of the agents before it.
//!
//! # Agent ids
//!
//! Ids count up from `SimulationParameters::first_agent_id`.  A run that
//! initializes several fractions against one event queue feeds each
//! [`BatchOutcome::next_agent_id`] into the next batch's parameters.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pd_agent::{DeliveryAgentFactory, EventQueue, ScheduledBoarding, SimulationParameters};
//! use pd_demand::ParcelOrderModel;
//! use pd_init::{BatchInitializer, NoopObserver};
//! use pd_parcel::DeliveryResults;
//! use pd_population::MinimumAge;
//!
//! let init = BatchInitializer::new(DeliveryAgentFactory::new(), ParcelOrderModel::builder().build()?, MinimumAge(18));
//! let params = SimulationParameters::builder(seed)
//!     .event_queue(EventQueue::handle())
//!     .public_transport(ScheduledBoarding)
//!     .first_agent_id(next_id)
//!     .build();
//! let outcome = init.initialize(&population.fraction(0, 1_000), &params, &results, &mut NoopObserver)?;
//! next_id = outcome.next_agent_id;
//! ```

pub mod error;
pub mod initializer;
pub mod observer;
pub mod summary;

#[cfg(test)]
mod tests;

pub use error::{InitError, InitResult};
pub use initializer::{BatchInitializer, BatchOutcome};
pub use observer::{InitObserver, NoopObserver};
pub use summary::{BatchSummary, InitPhase};
