//! `SummaryRecorder` — collects batch summaries through `InitObserver`.

use pd_init::{BatchSummary, InitObserver};

use crate::BatchSummaryRow;

/// An [`InitObserver`] that keeps one [`BatchSummaryRow`] per completed
/// batch.  Aborted batches leave no row, since they never report a summary.
///
/// Call [`begin_batch`](Self::begin_batch) before each batch so rows carry
/// the fraction index.
#[derive(Debug, Default)]
pub struct SummaryRecorder {
    batch: u32,
    rows:  Vec<BatchSummaryRow>,
}

impl SummaryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_batch(&mut self, batch: u32) {
        self.batch = batch;
    }

    pub fn rows(&self) -> &[BatchSummaryRow] {
        &self.rows
    }

    /// Sum of parcels over all recorded batches.
    pub fn total_parcels(&self) -> u64 {
        self.rows.iter().map(|r| r.parcels).sum()
    }

    pub fn into_rows(self) -> Vec<BatchSummaryRow> {
        self.rows
    }
}

impl InitObserver for SummaryRecorder {
    fn on_summary(&mut self, summary: &BatchSummary) {
        self.rows.push(BatchSummaryRow::new(self.batch, summary));
    }
}
