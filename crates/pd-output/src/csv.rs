//! CSV writers for parcels and batch summaries.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use pd_parcel::{Parcel, ParcelResult, ParcelSink};

use crate::{BatchSummaryRow, OutputResult, ParcelRow};

pub const PARCEL_HEADER: [&str; 7] = [
    "recipient",
    "sequence",
    "destination",
    "zone",
    "planned_day",
    "size",
    "distribution_center",
];

pub const SUMMARY_HEADER: [&str; 4] = ["batch", "parcels", "distinct_recipients", "eligible_persons"];

// ── Parcels ───────────────────────────────────────────────────────────────────

/// A [`ParcelSink`] that appends every recorded parcel to a CSV stream.
///
/// The header is written on construction.  Rows arrive in recording order,
/// which under the `parallel` feature of `pd-init` is not person order.
pub struct CsvParcelWriter<W: Write + Send = File> {
    out:      Writer<W>,
    rows:     u64,
    finished: bool,
}

impl CsvParcelWriter<File> {
    /// Create (or truncate) the CSV file at `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write + Send> CsvParcelWriter<W> {
    pub fn from_writer(inner: W) -> OutputResult<Self> {
        let mut out = Writer::from_writer(inner);
        out.write_record(PARCEL_HEADER)?;
        Ok(Self { out, rows: 0, finished: false })
    }

    /// Rows written so far, header excluded.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    fn write_row(&mut self, row: &ParcelRow) -> OutputResult<()> {
        self.out.write_record(&[
            row.recipient.to_string(),
            row.sequence.to_string(),
            row.destination.to_owned(),
            row.zone.to_string(),
            row.planned_day.to_string(),
            row.size.to_owned(),
            row.distribution_center.to_string(),
        ])?;
        self.rows += 1;
        Ok(())
    }

    fn flush(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        log::debug!("parcel CSV closed after {} rows", self.rows);
        Ok(())
    }
}

impl<W: Write + Send> ParcelSink for CsvParcelWriter<W> {
    fn write_parcel(&mut self, parcel: &Parcel) -> ParcelResult<()> {
        Ok(self.write_row(&ParcelRow::from(parcel))?)
    }

    fn finish(&mut self) -> ParcelResult<()> {
        Ok(self.flush()?)
    }
}

// ── Batch summaries ───────────────────────────────────────────────────────────

/// Write `rows` with a header to the CSV file at `path`.
pub fn write_summaries_csv(path: &Path, rows: &[BatchSummaryRow]) -> OutputResult<()> {
    write_summaries(File::create(path)?, rows)
}

/// Write `rows` with a header to any writer.
pub fn write_summaries<W: Write>(inner: W, rows: &[BatchSummaryRow]) -> OutputResult<()> {
    let mut out = Writer::from_writer(inner);
    out.write_record(SUMMARY_HEADER)?;
    for row in rows {
        out.write_record(&[
            row.batch.to_string(),
            row.parcels.to_string(),
            row.distinct_recipients.to_string(),
            row.eligible_persons.to_string(),
        ])?;
    }
    out.flush()?;
    Ok(())
}
