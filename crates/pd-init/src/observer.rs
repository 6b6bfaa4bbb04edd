//! Initialization observer trait for progress reporting and data collection.

use std::sync::Arc;

use pd_agent::DeliveryAgent;
use pd_parcel::Parcel;

use crate::{BatchSummary, InitPhase};

/// Callbacks invoked by
/// [`BatchInitializer::initialize`][crate::BatchInitializer::initialize] at
/// key points of a batch.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Callbacks always arrive on the calling
/// thread, in flattened person order.
///
/// # Example: creation log
///
/// ```rust,ignore
/// struct CreationLog(Vec<PersonId>);
///
/// impl InitObserver for CreationLog {
///     fn on_agent_created(&mut self, agent: &DeliveryAgent) {
///         self.0.push(agent.person_id());
///     }
/// }
/// ```
pub trait InitObserver {
    /// Called on entering each phase.
    fn on_phase(&mut self, _phase: InitPhase) {}

    /// Called once per created agent, before any demand is generated.
    fn on_agent_created(&mut self, _agent: &DeliveryAgent) {}

    /// Called once per agent after its orders were generated and recorded.
    fn on_orders_generated(&mut self, _agent: &DeliveryAgent, _parcels: &[Arc<Parcel>]) {}

    /// Called once, only for batches that completed.
    fn on_summary(&mut self, _summary: &BatchSummary) {}
}

/// An [`InitObserver`] that does nothing.
pub struct NoopObserver;

impl InitObserver for NoopObserver {}
