//! `pd-output` — CSV output for the parcel-demand initializer.
//!
//! | Item                   | Writes                                               |
//! |------------------------|------------------------------------------------------|
//! | [`CsvParcelWriter`]    | one row per recorded parcel (a `ParcelSink`)         |
//! | [`SummaryRecorder`]    | collects one row per completed batch (an observer)   |
//! | [`write_summaries_csv`]| the collected batch rows                             |
//!
//! # Usage
//!
//! ```rust,ignore
//! use pd_output::{CsvParcelWriter, SummaryRecorder, write_summaries_csv};
//!
//! let results = DeliveryResults::with_sink(CsvParcelWriter::create(&dir.join("parcels.csv"))?);
//! let mut recorder = SummaryRecorder::new();
//! for (i, fraction) in fractions.enumerate() {
//!     recorder.begin_batch(i as u32);
//!     initializer.initialize(&fraction, &params, &results, &mut recorder)?;
//! }
//! results.finish();
//! write_summaries_csv(&dir.join("batch_summaries.csv"), recorder.rows())?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;


pub use crate::csv::{CsvParcelWriter, PARCEL_HEADER, SUMMARY_HEADER, write_summaries, write_summaries_csv};
pub use error::{OutputError, OutputResult};
pub use observer::SummaryRecorder;
pub use row::{BatchSummaryRow, ParcelRow};
