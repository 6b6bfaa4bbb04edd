//! `ParcelOrderModel` — the stock demand generator.

use std::sync::Arc;

use pd_agent::DeliveryAgent;
use pd_core::DistributionCenterId;
use pd_parcel::{DeliveryResults, Parcel, ShipmentSize};

use crate::steps::{
    CenterChoice, DeliveryDayStep, DestinationStep, FixedCount, FixedDestination, OrderCountStep,
    SizeChoice, UniformDay,
};
use crate::{DemandError, DemandGenerator, DemandResult};

/// A [`DemandGenerator`] composed of independent steps.
///
/// For each agent: draw the number of parcels, then for each parcel draw the
/// destination, delivery day, size, and distribution center.  All draws come
/// from the agent's own RNG.  Parcels are attached and recorded only after
/// every draw for the agent succeeded.
///
/// Create via [`ParcelOrderModel::builder`].
pub struct ParcelOrderModel {
    count:       Box<dyn OrderCountStep>,
    destination: Box<dyn DestinationStep>,
    day:         Box<dyn DeliveryDayStep>,
    size:        SizeChoice,
    center:      CenterChoice,
}

impl ParcelOrderModel {
    pub fn builder() -> ParcelOrderModelBuilder {
        ParcelOrderModelBuilder::new()
    }
}

impl DemandGenerator for ParcelOrderModel {
    fn generate_orders(
        &self,
        agent:   &mut DeliveryAgent,
        results: &DeliveryResults,
    ) -> DemandResult<Vec<Arc<Parcel>>> {
        let person = agent.shared_person();
        if !person.home_zone.is_valid() {
            return Err(DemandError::Generation {
                person: person.oid,
                reason: "person has no home zone".into(),
            });
        }
        let days = agent.days();

        // ── Draw everything first ─────────────────────────────────────────
        let rng = agent.rng_mut();
        let n = self.count.order_count(&person, rng)?;
        let first_sequence = agent.next_order_sequence();

        let rng = agent.rng_mut();
        let mut drawn = Vec::with_capacity(n as usize);
        for i in 0..n {
            let (destination, zone) = self.destination.destination(&person, rng)?;
            drawn.push(Parcel {
                recipient:           person.oid,
                sequence:            first_sequence + i,
                destination,
                zone,
                planned_day:         self.day.day(&days, rng)?,
                size:                self.size.pick(rng),
                distribution_center: self.center.pick(rng)?,
            });
        }

        // ── Attach and record ─────────────────────────────────────────────
        let parcels: Vec<Arc<Parcel>> = drawn.into_iter().map(Arc::new).collect();
        for parcel in &parcels {
            agent.attach_order(Arc::clone(parcel));
            results.record(Arc::clone(parcel));
        }

        log::debug!("{} ordered {} parcel(s)", person.oid, parcels.len());
        Ok(parcels)
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Fluent builder for [`ParcelOrderModel`].
///
/// | Method                   | Default                                   |
/// |--------------------------|-------------------------------------------|
/// | `.order_count(s)`        | `FixedCount(1)`                           |
/// | `.destination(s)`        | `FixedDestination::home()`                |
/// | `.delivery_day(s)`       | `UniformDay`                              |
/// | `.size(c)`               | `SizeChoice::Fixed(ShipmentSize::Medium)` |
/// | `.distribution_center(c)`| `CenterChoice::Fixed(DistributionCenterId(0))` |
pub struct ParcelOrderModelBuilder {
    count:       Box<dyn OrderCountStep>,
    destination: Box<dyn DestinationStep>,
    day:         Box<dyn DeliveryDayStep>,
    size:        SizeChoice,
    center:      CenterChoice,
}

impl Default for ParcelOrderModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ParcelOrderModelBuilder {
    pub fn new() -> Self {
        Self {
            count:       Box::new(FixedCount(1)),
            destination: Box::new(FixedDestination::home()),
            day:         Box::new(UniformDay),
            size:        SizeChoice::Fixed(ShipmentSize::Medium),
            center:      CenterChoice::Fixed(DistributionCenterId(0)),
        }
    }

    pub fn order_count<S: OrderCountStep + 'static>(mut self, step: S) -> Self {
        self.count = Box::new(step);
        self
    }

    pub fn destination<S: DestinationStep + 'static>(mut self, step: S) -> Self {
        self.destination = Box::new(step);
        self
    }

    pub fn delivery_day<S: DeliveryDayStep + 'static>(mut self, step: S) -> Self {
        self.day = Box::new(step);
        self
    }

    pub fn size(mut self, choice: SizeChoice) -> Self {
        self.size = choice;
        self
    }

    pub fn distribution_center(mut self, choice: CenterChoice) -> Self {
        self.center = choice;
        self
    }

    /// Reject choices that could never produce a parcel.
    pub fn build(self) -> DemandResult<ParcelOrderModel> {
        if let CenterChoice::Uniform(ids) = &self.center {
            if ids.is_empty() {
                return Err(DemandError::Config("no distribution centers configured".into()));
            }
        }
        Ok(ParcelOrderModel {
            count:       self.count,
            destination: self.destination,
            day:         self.day,
            size:        self.size,
            center:      self.center,
        })
    }
}
