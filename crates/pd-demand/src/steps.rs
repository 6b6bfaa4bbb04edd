//! Building blocks of [`ParcelOrderModel`][crate::ParcelOrderModel].
//!
//! Each step answers one question about a person's parcels and draws only
//! from that person's [`AgentRng`], so every step is deterministic given the
//! batch seed and the person oid.
//!
//! | Step                 | Question                          | Stock choices                                 |
//! |----------------------|-----------------------------------|-----------------------------------------------|
//! | [`OrderCountStep`]   | how many parcels?                 | `FixedCount`, `WeightedCount`, `ByEmployment` |
//! | [`DestinationStep`]  | delivered where?                  | `FixedDestination`, `WeightedDestination`     |
//! | [`DeliveryDayStep`]  | on which simulated day?           | `UniformDay`, `FixedDay`                      |
//! | [`SizeChoice`]       | how big?                          | fixed or uniform                              |
//! | [`CenterChoice`]     | from which distribution center?   | fixed or uniform                              |

use rand::Rng;
use rand::distributions::WeightedIndex;

use pd_core::{AgentRng, Day, DistributionCenterId, SimulationDays, ZoneId};
use pd_parcel::{ParcelDestination, ShipmentSize};
use pd_population::Person;

use crate::{DemandError, DemandResult};

// ── Order count ───────────────────────────────────────────────────────────────

/// Decides how many parcels a person orders during the simulated period.
pub trait OrderCountStep: Send + Sync {
    fn order_count(&self, person: &Person, rng: &mut AgentRng) -> DemandResult<u32>;
}

/// Every person orders the same number of parcels.
pub struct FixedCount(pub u32);

impl OrderCountStep for FixedCount {
    fn order_count(&self, _person: &Person, _rng: &mut AgentRng) -> DemandResult<u32> {
        Ok(self.0)
    }
}

/// Draws the count from a discrete distribution: `weights[k]` is the
/// relative weight of ordering exactly `k` parcels.
pub struct WeightedCount {
    dist: WeightedIndex<f64>,
}

impl WeightedCount {
    pub fn new(weights: &[f64]) -> DemandResult<Self> {
        WeightedIndex::new(weights)
            .map(|dist| Self { dist })
            .map_err(|e| DemandError::Config(format!("invalid order count weights: {e}")))
    }
}

impl OrderCountStep for WeightedCount {
    fn order_count(&self, _person: &Person, rng: &mut AgentRng) -> DemandResult<u32> {
        Ok(rng.inner().sample(&self.dist) as u32)
    }
}

/// Uses one step for employed persons and another for everyone else.
pub struct ByEmployment<E: OrderCountStep, O: OrderCountStep> {
    pub employed: E,
    pub other:    O,
}

impl<E: OrderCountStep, O: OrderCountStep> OrderCountStep for ByEmployment<E, O> {
    fn order_count(&self, person: &Person, rng: &mut AgentRng) -> DemandResult<u32> {
        if person.employment.is_employed() {
            self.employed.order_count(person, rng)
        } else {
            self.other.order_count(person, rng)
        }
    }
}

// ── Destination ───────────────────────────────────────────────────────────────

/// Decides where a parcel is delivered and to which zone.
pub trait DestinationStep: Send + Sync {
    fn destination(
        &self,
        person: &Person,
        rng:    &mut AgentRng,
    ) -> DemandResult<(ParcelDestination, ZoneId)>;
}

/// Always the same kind of destination.
///
/// `Work` fails for persons without a work zone.
pub struct FixedDestination(pub ParcelDestination);

impl FixedDestination {
    pub fn home() -> Self {
        Self(ParcelDestination::Home)
    }
}

impl DestinationStep for FixedDestination {
    fn destination(
        &self,
        person: &Person,
        _rng:   &mut AgentRng,
    ) -> DemandResult<(ParcelDestination, ZoneId)> {
        resolve_zone(self.0, person).map(|zone| (self.0, zone))
    }
}

/// Random choice between home, work, and a pack station in the home zone.
///
/// Work is never drawn for persons without a work zone; the remaining
/// weights are renormalized.
pub struct WeightedDestination {
    home:         f64,
    work:         f64,
    pack_station: f64,
}

impl WeightedDestination {
    pub fn new(home: f64, work: f64, pack_station: f64) -> DemandResult<Self> {
        let weights = [home, work, pack_station];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(DemandError::Config(format!(
                "destination weights must be finite and non-negative, got {weights:?}"
            )));
        }
        if weights.iter().sum::<f64>() <= 0.0 {
            return Err(DemandError::Config("destination weights sum to zero".into()));
        }
        Ok(Self { home, work, pack_station })
    }
}

impl DestinationStep for WeightedDestination {
    fn destination(
        &self,
        person: &Person,
        rng:    &mut AgentRng,
    ) -> DemandResult<(ParcelDestination, ZoneId)> {
        let work = if person.work_zone.is_some() { self.work } else { 0.0 };
        let total = self.home + work + self.pack_station;
        if total <= 0.0 {
            return Err(DemandError::Generation {
                person: person.oid,
                reason: "no destination with positive weight".into(),
            });
        }

        let draw = rng.random::<f64>() * total;
        let kind = if draw < self.home {
            ParcelDestination::Home
        } else if draw < self.home + work {
            ParcelDestination::Work
        } else {
            ParcelDestination::PackStation(person.home_zone)
        };
        resolve_zone(kind, person).map(|zone| (kind, zone))
    }
}

fn resolve_zone(kind: ParcelDestination, person: &Person) -> DemandResult<ZoneId> {
    match kind {
        ParcelDestination::Home => Ok(person.home_zone),
        ParcelDestination::Work => person.work_zone.ok_or_else(|| DemandError::Generation {
            person: person.oid,
            reason: "work delivery requested but person has no work zone".into(),
        }),
        ParcelDestination::PackStation(zone) => Ok(zone),
    }
}

// ── Delivery day ──────────────────────────────────────────────────────────────

/// Decides the simulated day a parcel is due.
pub trait DeliveryDayStep: Send + Sync {
    fn day(&self, days: &SimulationDays, rng: &mut AgentRng) -> DemandResult<Day>;
}

/// Uniform over the simulated days that are not Sundays.
pub struct UniformDay;

impl DeliveryDayStep for UniformDay {
    fn day(&self, days: &SimulationDays, rng: &mut AgentRng) -> DemandResult<Day> {
        let candidates = days.delivery_days();
        rng.choose(&candidates)
            .copied()
            .ok_or_else(|| DemandError::Config("simulated period has no delivery day".into()))
    }
}

/// Every parcel is due on the same day.
pub struct FixedDay(pub Day);

impl DeliveryDayStep for FixedDay {
    fn day(&self, days: &SimulationDays, _rng: &mut AgentRng) -> DemandResult<Day> {
        if days.contains(self.0) {
            Ok(self.0)
        } else {
            Err(DemandError::Config(format!(
                "{} lies outside the {}-day simulated period",
                self.0, days.count
            )))
        }
    }
}

// ── Size and distribution center ──────────────────────────────────────────────

#[derive(Clone, Debug)]
pub enum SizeChoice {
    Fixed(ShipmentSize),
    Uniform,
}

impl SizeChoice {
    pub fn pick(&self, rng: &mut AgentRng) -> ShipmentSize {
        match self {
            SizeChoice::Fixed(size) => *size,
            SizeChoice::Uniform => ShipmentSize::ALL[rng.gen_range(0..ShipmentSize::ALL.len())],
        }
    }
}

#[derive(Clone, Debug)]
pub enum CenterChoice {
    Fixed(DistributionCenterId),
    Uniform(Vec<DistributionCenterId>),
}

impl CenterChoice {
    pub fn pick(&self, rng: &mut AgentRng) -> DemandResult<DistributionCenterId> {
        match self {
            CenterChoice::Fixed(id) => Ok(*id),
            CenterChoice::Uniform(ids) => rng
                .choose(ids)
                .copied()
                .ok_or_else(|| DemandError::Config("no distribution centers configured".into())),
        }
    }
}
