//! fraction — parcel demand for a small embedded town, batch by batch.
//!
//! Loads households (embedded CSV unless `population` is set), splits them
//! into fractions of `init.fraction_size` households, and initializes each
//! fraction with its own derived seed.  Writes `parcels.csv` and
//! `batch_summaries.csv` to the output directory.
//!
//! ```text
//! cargo run -p fraction -- [fraction.toml]
//! PD_LOG_LEVEL=debug cargo run -p fraction
//! ```

mod logger;
mod settings;

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};

use pd_agent::{
    DeliveryAgent, DeliveryAgentFactory, EventQueue, ScheduledBoarding, SimulationParametersBuilder,
};
use pd_core::{AgentId, DistributionCenterId};
use pd_demand::{
    ByEmployment, CenterChoice, ParcelOrderModel, SizeChoice, UniformDay, WeightedCount,
    WeightedDestination,
};
use pd_init::BatchInitializer;
use pd_parcel::DeliveryResults;
use pd_population::{MinimumAge, load_population_csv, load_population_reader};
use pd_output::{CsvParcelWriter, SummaryRecorder, write_summaries_csv};

use settings::Settings;

// ── Population CSV ────────────────────────────────────────────────────────────

// Seven households across four zones.  Zone 9 is the business district.
const POPULATION_CSV: &str = "\
household_id,person_oid,age,employment,home_zone,work_zone\n\
1,101,44,fulltime,1,9\n\
1,102,41,parttime,1,9\n\
1,103,12,student,1,\n\
2,201,67,retired,1,\n\
3,301,29,fulltime,2,9\n\
4,401,35,unemployed,2,\n\
4,402,37,fulltime,2,3\n\
4,403,6,student,2,\n\
4,404,4,student,2,\n\
5,501,23,student,3,\n\
6,601,52,fulltime,4,9\n\
6,602,50,parttime,4,4\n\
7,701,81,retired,4,\n\
";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let settings = Settings::load(std::env::args().nth(1).map(PathBuf::from).as_deref())?;
    logger::init(settings.log_level.as_deref())?;
    let config = &settings.init;
    config.validate()?;

    let population = match &settings.population {
        Some(path) => load_population_csv(path)
            .with_context(|| format!("loading population from {}", path.display()))?,
        None => load_population_reader(Cursor::new(POPULATION_CSV))?,
    };
    log::info!(
        "Population: {} households, {} persons  |  Seed: {}",
        population.household_count(),
        population.person_count(),
        config.seed
    );

    fs::create_dir_all(&settings.output_dir)?;
    let parcels_path = settings.output_dir.join("parcels.csv");
    let results = DeliveryResults::with_sink(CsvParcelWriter::create(&parcels_path)?);

    // Employed persons order more; most parcels go home.
    let demand = ParcelOrderModel::builder()
        .order_count(ByEmployment {
            employed: WeightedCount::new(&[2.0, 4.0, 3.0, 1.0])?,
            other:    WeightedCount::new(&[5.0, 3.0, 1.0])?,
        })
        .destination(WeightedDestination::new(0.7, 0.2, 0.1)?)
        .delivery_day(UniformDay)
        .size(SizeChoice::Uniform)
        .distribution_center(CenterChoice::Uniform(vec![
            DistributionCenterId(0),
            DistributionCenterId(1),
        ]))
        .build()?;
    let initializer = BatchInitializer::new(
        DeliveryAgentFactory::new(),
        demand,
        MinimumAge(settings.min_age),
    );

    let queue = EventQueue::handle();
    let mut recorder = SummaryRecorder::new();
    let mut agents: Vec<DeliveryAgent> = Vec::new();
    let mut next_id = AgentId(0);
    let fractions = population.fraction_count(config.fraction_size);
    let t0 = Instant::now();

    for index in 0..fractions {
        let fraction = population.fraction(index, config.fraction_size);
        let params = SimulationParametersBuilder::from_config(config, config.batch_seed(index as u64))
            .event_queue(queue.clone())
            .public_transport(ScheduledBoarding)
            .first_agent_id(next_id)
            .build();

        recorder.begin_batch(index as u32);
        match initializer.initialize(&fraction, &params, &results, &mut recorder) {
            Ok(outcome) => {
                next_id = outcome.next_agent_id;
                agents.extend(outcome.agents);
            }
            Err(e) => log::error!("fraction {index} ({} households) skipped: {e}", fraction.len()),
        }
    }

    results.finish();
    if let Some(e) = results.take_error() {
        log::warn!("parcel output incomplete: {e}");
    }

    let summaries_path = settings.output_dir.join("batch_summaries.csv");
    write_summaries_csv(&summaries_path, recorder.rows())?;

    log::info!(
        "{} fractions, {} agents, {} parcels for {} recipients in {:.1?}",
        fractions,
        agents.len(),
        results.count(),
        results.distinct_recipients(),
        t0.elapsed()
    );
    log::info!("Wrote {} and {}", parcels_path.display(), summaries_path.display());
    Ok(())
}
