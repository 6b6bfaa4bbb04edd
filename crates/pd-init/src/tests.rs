//! Integration tests for pd-init.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use pd_agent::{
    DeliveryAgent, DeliveryAgentFactory, EventQueue, PersonListener, ScheduledBoarding,
    SimulationParameters,
};
use pd_core::{AgentId, AgentRng, HouseholdId, PersonId, ZoneId};
use pd_demand::{
    DemandError, DemandResult, FixedCount, OrderCountStep, ParcelOrderModel, SizeChoice,
    WeightedCount, WeightedDestination,
};
use pd_parcel::{DeliveryResults, Parcel};
use pd_population::{AcceptAll, Employment, Household, InMemoryPopulation, Person};

use crate::{BatchInitializer, BatchSummary, InitError, InitObserver, InitPhase, NoopObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn person(oid: u64, household: u64) -> Person {
    Person {
        oid:        PersonId(oid),
        household:  HouseholdId(household),
        age:        30 + (oid % 50) as u8,
        employment: Employment::FullTime,
        home_zone:  ZoneId(household as u32),
        work_zone:  Some(ZoneId(100)),
    }
}

/// [H1{P1,P2}, H2{P3}].
fn three_persons() -> InMemoryPopulation {
    InMemoryPopulation::new(vec![
        Household::new(HouseholdId(1), ZoneId(1))
            .with_person(person(1, 1))
            .with_person(person(2, 1)),
        Household::new(HouseholdId(2), ZoneId(2)).with_person(person(3, 2)),
    ])
}

/// Five households with one person each, oids 1..=5.
fn five_persons() -> InMemoryPopulation {
    InMemoryPopulation::new(
        (1..=5)
            .map(|i| Household::new(HouseholdId(i), ZoneId(i as u32)).with_person(person(i, i)))
            .collect(),
    )
}

fn params(seed: u64) -> SimulationParameters {
    SimulationParameters::builder(seed)
        .event_queue(EventQueue::handle())
        .public_transport(ScheduledBoarding)
        .build()
}

/// Scripted order counts per person; unknown persons order nothing, the
/// `fail` person makes the model error out.
struct PerPerson {
    counts: HashMap<PersonId, u32>,
    fail:   Option<PersonId>,
}

impl PerPerson {
    fn new(counts: &[(u64, u32)]) -> Self {
        Self {
            counts: counts.iter().map(|&(oid, n)| (PersonId(oid), n)).collect(),
            fail:   None,
        }
    }

    fn failing_on(mut self, oid: u64) -> Self {
        self.fail = Some(PersonId(oid));
        self
    }
}

impl OrderCountStep for PerPerson {
    fn order_count(&self, person: &Person, _rng: &mut AgentRng) -> DemandResult<u32> {
        if self.fail == Some(person.oid) {
            return Err(DemandError::Generation {
                person: person.oid,
                reason: "scripted failure".into(),
            });
        }
        Ok(self.counts.get(&person.oid).copied().unwrap_or(0))
    }
}

fn scripted(step: PerPerson) -> ParcelOrderModel {
    ParcelOrderModel::builder().order_count(step).build().unwrap()
}

#[derive(Default)]
struct RecordingObserver {
    phases:  Vec<InitPhase>,
    created: Vec<(AgentId, PersonId)>,
    orders:  Vec<(PersonId, usize)>,
    summary: Vec<BatchSummary>,
}

impl InitObserver for RecordingObserver {
    fn on_phase(&mut self, phase: InitPhase) {
        self.phases.push(phase);
    }

    fn on_agent_created(&mut self, agent: &DeliveryAgent) {
        self.created.push((agent.id(), agent.person_id()));
    }

    fn on_orders_generated(&mut self, agent: &DeliveryAgent, parcels: &[Arc<Parcel>]) {
        self.orders.push((agent.person_id(), parcels.len()));
    }

    fn on_summary(&mut self, summary: &BatchSummary) {
        self.summary.push(*summary);
    }
}

fn admit(oids: &'static [u64]) -> impl Fn(&Person) -> bool + Send + Sync {
    move |p: &Person| oids.contains(&p.oid.0)
}

// ── Filtering and agent creation ──────────────────────────────────────────────

#[cfg(test)]
mod materialize_tests {
    use super::*;

    #[test]
    fn one_agent_per_eligible_person() {
        let init = BatchInitializer::new(DeliveryAgentFactory::new(), scripted(PerPerson::new(&[])), admit(&[1, 3]));
        let outcome = init
            .initialize(&three_persons(), &params(1), &DeliveryResults::new(), &mut NoopObserver)
            .unwrap();
        assert_eq!(outcome.agents.len(), 2);
        assert_eq!(outcome.summary.eligible_persons, 2);
    }

    #[test]
    fn agents_created_in_person_order() {
        let init = BatchInitializer::new(DeliveryAgentFactory::new(), scripted(PerPerson::new(&[])), admit(&[1, 3]));
        let mut observer = RecordingObserver::default();
        init.initialize(&three_persons(), &params(1), &DeliveryResults::new(), &mut observer)
            .unwrap();
        assert_eq!(
            observer.created,
            vec![(AgentId(0), PersonId(1)), (AgentId(1), PersonId(3))]
        );
    }

    #[test]
    fn every_agent_created_before_any_demand() {
        let init = BatchInitializer::new(
            DeliveryAgentFactory::new(),
            scripted(PerPerson::new(&[(1, 1), (2, 1), (3, 1)])),
            AcceptAll,
        );
        let mut observer = RecordingObserver::default();
        init.initialize(&three_persons(), &params(1), &DeliveryResults::new(), &mut observer)
            .unwrap();
        assert_eq!(observer.created.len(), 3);
        assert_eq!(
            observer.orders,
            vec![(PersonId(1), 1), (PersonId(2), 1), (PersonId(3), 1)]
        );
        assert_eq!(
            observer.phases,
            vec![InitPhase::Loading, InitPhase::Materializing, InitPhase::Summarizing]
        );
    }

    #[test]
    fn filtered_out_person_appears_nowhere() {
        let results = DeliveryResults::new();
        let init = BatchInitializer::new(
            DeliveryAgentFactory::new(),
            scripted(PerPerson::new(&[(1, 1), (2, 4), (3, 1)])),
            admit(&[1, 3]),
        );
        let outcome = init
            .initialize(&three_persons(), &params(1), &results, &mut NoopObserver)
            .unwrap();

        assert!(outcome.agents.iter().all(|a| a.person_id() != PersonId(2)));
        assert!(outcome.parcels.iter().all(|p| p.recipient != PersonId(2)));
        assert!(results.parcels().iter().all(|p| p.recipient != PersonId(2)));
        assert_eq!(outcome.summary, BatchSummary { parcels: 2, distinct_recipients: 2, eligible_persons: 2 });
        assert_eq!(results.count(), 2);
        assert_eq!(results.distinct_recipients(), 2);
    }

    #[test]
    fn construction_error_aborts_before_demand() {
        let results = DeliveryResults::new();
        let no_queue = SimulationParameters::builder(1)
            .public_transport(ScheduledBoarding)
            .build();
        let init = BatchInitializer::new(DeliveryAgentFactory::new(), scripted(PerPerson::new(&[(1, 1)])), AcceptAll);
        let mut observer = RecordingObserver::default();

        let err = init
            .initialize(&three_persons(), &no_queue, &results, &mut observer)
            .err()
            .expect("batch must fail");

        assert!(matches!(err, InitError::Construction(_)));
        assert!(observer.created.is_empty());
        assert!(observer.summary.is_empty());
        assert_eq!(results.count(), 0);
    }

    #[test]
    fn empty_batch_still_summarizes_once() {
        let init = BatchInitializer::new(DeliveryAgentFactory::new(), scripted(PerPerson::new(&[])), AcceptAll);
        let mut observer = RecordingObserver::default();
        let outcome = init
            .initialize(&InMemoryPopulation::default(), &params(1), &DeliveryResults::new(), &mut observer)
            .unwrap();
        assert_eq!(outcome.summary, BatchSummary::default());
        assert_eq!(observer.summary.len(), 1);
    }
}

// ── Aggregation ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod aggregate_tests {
    use super::*;

    #[test]
    fn two_zero_one_gives_three_parcels_two_recipients() {
        let results = DeliveryResults::new();
        let init = BatchInitializer::new(
            DeliveryAgentFactory::new(),
            scripted(PerPerson::new(&[(1, 2), (2, 0), (3, 1)])),
            AcceptAll,
        );
        let mut observer = RecordingObserver::default();
        let outcome = init
            .initialize(&three_persons(), &params(1), &results, &mut observer)
            .unwrap();

        assert_eq!(results.count(), 3);
        assert_eq!(results.distinct_recipients(), 2);
        assert_eq!(outcome.parcels.len(), 3);
        assert_eq!(
            observer.summary,
            vec![BatchSummary { parcels: 3, distinct_recipients: 2, eligible_persons: 3 }]
        );
        assert_eq!(outcome.summary.to_string(), "Generated 3 parcels for 2/3 unique persons.");
    }

    #[test]
    fn distinct_recipients_equal_count_iff_at_most_one_parcel_each() {
        let single = DeliveryResults::new();
        BatchInitializer::new(DeliveryAgentFactory::new(), ParcelOrderModel::builder().order_count(FixedCount(1)).build().unwrap(), AcceptAll)
            .initialize(&three_persons(), &params(1), &single, &mut NoopObserver)
            .unwrap();
        assert_eq!(single.distinct_recipients(), single.count());

        let double = DeliveryResults::new();
        BatchInitializer::new(DeliveryAgentFactory::new(), scripted(PerPerson::new(&[(1, 2), (3, 1)])), AcceptAll)
            .initialize(&three_persons(), &params(1), &double, &mut NoopObserver)
            .unwrap();
        assert!(double.distinct_recipients() < double.count());
    }

    #[test]
    fn batch_parcels_are_union_of_agent_orders() {
        let init = BatchInitializer::new(
            DeliveryAgentFactory::new(),
            scripted(PerPerson::new(&[(1, 2), (2, 3), (3, 1)])),
            AcceptAll,
        );
        let outcome = init
            .initialize(&three_persons(), &params(1), &DeliveryResults::new(), &mut NoopObserver)
            .unwrap();
        let from_agents: Vec<Arc<Parcel>> = outcome
            .agents
            .iter()
            .flat_map(|a| a.orders().iter().cloned())
            .collect();
        assert_eq!(from_agents.len(), outcome.parcels.len());
        for (a, b) in from_agents.iter().zip(&outcome.parcels) {
            assert!(Arc::ptr_eq(a, b));
        }
    }

    #[test]
    fn results_accumulate_across_batches() {
        let results = DeliveryResults::new();
        let population = five_persons();
        let init = BatchInitializer::new(
            DeliveryAgentFactory::new(),
            ParcelOrderModel::builder().order_count(FixedCount(1)).build().unwrap(),
            AcceptAll,
        );
        let first = init
            .initialize(&population.fraction(0, 3), &params(1), &results, &mut NoopObserver)
            .unwrap();
        let second = init
            .initialize(&population.fraction(1, 3), &params(2), &results, &mut NoopObserver)
            .unwrap();
        assert_eq!(first.summary.parcels, 3);
        assert_eq!(second.summary.parcels, 2);
        assert_eq!(results.count(), 5);
        assert_eq!(results.distinct_recipients(), 5);
    }

    #[test]
    fn agent_ids_stay_unique_across_batches() {
        #[derive(Default)]
        struct Ordered(Mutex<Vec<AgentId>>);
        impl PersonListener for Ordered {
            fn on_parcel_ordered(&self, agent: AgentId, _parcel: &Parcel) {
                self.0.lock().unwrap().push(agent);
            }
        }

        let queue = EventQueue::handle();
        let listener = Arc::new(Ordered::default());
        let results = DeliveryResults::new();
        let population = five_persons();
        let init = BatchInitializer::new(
            DeliveryAgentFactory::new(),
            ParcelOrderModel::builder().order_count(FixedCount(1)).build().unwrap(),
            AcceptAll,
        );

        let mut next = AgentId(0);
        let mut ids: Vec<(AgentId, PersonId)> = Vec::new();
        for batch in 0..population.fraction_count(3) {
            let params = SimulationParameters::builder(batch as u64)
                .event_queue(Arc::clone(&queue))
                .public_transport(ScheduledBoarding)
                .listener(listener.clone())
                .first_agent_id(next)
                .build();
            let outcome = init
                .initialize(&population.fraction(batch, 3), &params, &results, &mut NoopObserver)
                .unwrap();
            ids.extend(outcome.agents.iter().map(|a| (a.id(), a.person_id())));
            next = outcome.next_agent_id;
        }

        assert_eq!(
            ids,
            (0..5).map(|i| (AgentId(i), PersonId(i as u64 + 1))).collect::<Vec<_>>()
        );
        assert_eq!(next, AgentId(5));

        let mut notified = listener.0.lock().unwrap().clone();
        notified.sort();
        notified.dedup();
        assert_eq!(notified.len(), 5);
    }

    #[test]
    fn agent_id_range_overflow_is_config_error() {
        let params = SimulationParameters::builder(1)
            .event_queue(EventQueue::handle())
            .public_transport(ScheduledBoarding)
            .first_agent_id(AgentId(u32::MAX - 1))
            .build();
        let init = BatchInitializer::new(DeliveryAgentFactory::new(), scripted(PerPerson::new(&[])), AcceptAll);
        let mut observer = RecordingObserver::default();

        let err = init
            .initialize(&three_persons(), &params, &DeliveryResults::new(), &mut observer)
            .err()
            .expect("ids must not overflow");
        assert!(matches!(err, InitError::Config(_)));
        assert!(observer.created.is_empty());
    }

    #[test]
    fn listener_is_threaded_into_every_agent() {
        #[derive(Default)]
        struct Orders(Mutex<Vec<PersonId>>);
        impl PersonListener for Orders {
            fn on_parcel_ordered(&self, _agent: AgentId, parcel: &Parcel) {
                self.0.lock().unwrap().push(parcel.recipient);
            }
        }

        let listener = Arc::new(Orders::default());
        let params = SimulationParameters::builder(1)
            .event_queue(EventQueue::handle())
            .public_transport(ScheduledBoarding)
            .listener(listener.clone())
            .build();
        BatchInitializer::new(DeliveryAgentFactory::new(), scripted(PerPerson::new(&[(1, 1), (3, 2)])), AcceptAll)
            .initialize(&three_persons(), &params, &DeliveryResults::new(), &mut NoopObserver)
            .unwrap();
        let mut seen = listener.0.lock().unwrap().clone();
        seen.sort();
        assert_eq!(seen, vec![PersonId(1), PersonId(3), PersonId(3)]);
    }
}

// ── Determinism and failure ───────────────────────────────────────────────────

#[cfg(test)]
mod determinism_tests {
    use super::*;

    fn stochastic_model() -> ParcelOrderModel {
        ParcelOrderModel::builder()
            .order_count(WeightedCount::new(&[1.0, 3.0, 2.0, 1.0]).unwrap())
            .destination(WeightedDestination::new(0.6, 0.3, 0.1).unwrap())
            .size(SizeChoice::Uniform)
            .build()
            .unwrap()
    }

    fn parcel_set(seed: u64) -> HashSet<Parcel> {
        let results = DeliveryResults::new();
        BatchInitializer::new(DeliveryAgentFactory::new(), stochastic_model(), AcceptAll)
            .initialize(&five_persons(), &params(seed), &results, &mut NoopObserver)
            .unwrap();
        results.parcels().iter().map(|p| (**p).clone()).collect()
    }

    #[test]
    fn same_inputs_and_seed_same_parcel_set() {
        assert_eq!(parcel_set(17), parcel_set(17));
    }

    #[test]
    fn person_draws_do_not_depend_on_filter() {
        // Person 3's parcels are the same whether or not persons 1 and 2 are
        // simulated alongside.
        let all = DeliveryResults::new();
        BatchInitializer::new(DeliveryAgentFactory::new(), stochastic_model(), AcceptAll)
            .initialize(&five_persons(), &params(5), &all, &mut NoopObserver)
            .unwrap();
        let only_three = DeliveryResults::new();
        BatchInitializer::new(DeliveryAgentFactory::new(), stochastic_model(), admit(&[3]))
            .initialize(&five_persons(), &params(5), &only_three, &mut NoopObserver)
            .unwrap();

        let of_three = |r: &DeliveryResults| -> Vec<Parcel> {
            r.parcels()
                .iter()
                .filter(|p| p.recipient == PersonId(3))
                .map(|p| (**p).clone())
                .collect()
        };
        assert_eq!(of_three(&all), of_three(&only_three));
    }

    #[test]
    fn demand_failure_aborts_without_summary() {
        let results = DeliveryResults::new();
        let init = BatchInitializer::new(
            DeliveryAgentFactory::new(),
            scripted(PerPerson::new(&[(1, 2), (2, 1), (3, 1), (4, 1), (5, 1)]).failing_on(2)),
            AcceptAll,
        );
        let mut observer = RecordingObserver::default();

        let err = init
            .initialize(&five_persons(), &params(1), &results, &mut observer)
            .err()
            .expect("batch must fail");

        assert!(matches!(err, InitError::DemandGeneration(DemandError::Generation { person: PersonId(2), .. })));
        assert!(observer.summary.is_empty());
        assert!(!observer.phases.contains(&InitPhase::Summarizing));
        // Only the agent before the failing one got to record.
        assert_eq!(results.count(), 2);
        assert!(results.parcels().iter().all(|p| p.recipient == PersonId(1)));
    }

    #[test]
    fn large_batch_failure_leaves_only_earlier_agents() {
        let population = InMemoryPopulation::new(
            (1..=400)
                .map(|i| Household::new(HouseholdId(i), ZoneId(i as u32)).with_person(person(i, i)))
                .collect(),
        );
        let counts: Vec<(u64, u32)> = (1..=400).map(|oid| (oid, 1 + (oid % 3) as u32)).collect();
        let results = DeliveryResults::new();
        let init = BatchInitializer::new(
            DeliveryAgentFactory::new(),
            scripted(PerPerson::new(&counts).failing_on(2)),
            AcceptAll,
        );

        assert!(init.initialize(&population, &params(3), &results, &mut NoopObserver).is_err());
        // Person 1 orders 1 + 1 % 3 = 2 parcels; nobody after person 2 records.
        assert_eq!(results.count(), 2);
        assert_eq!(results.distinct_recipients(), 1);
    }
}
