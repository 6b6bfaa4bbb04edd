//! Run-level initialization configuration.

use crate::{CoreError, CoreResult, ModeSet, SimRng, SimulationDays};

/// Configuration shared by every batch of a run.
///
/// Typically loaded from a TOML file by the application crate (requires the
/// `serde` feature).  Missing keys fall back to [`InitConfig::default`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InitConfig {
    /// Master seed.  The same seed always produces identical parcel sets.
    pub seed: u64,

    /// Simulated period.
    pub simulation_days: SimulationDays,

    /// Modes available to agents.  Must not be empty.
    pub modes: ModeSet,

    /// Households per batch ("fraction of households").
    pub fraction_size: usize,
}

impl Default for InitConfig {
    fn default() -> Self {
        Self {
            seed:            42,
            simulation_days: SimulationDays::week(),
            modes:           ModeSet::all(),
            fraction_size:   1_000,
        }
    }
}

impl InitConfig {
    /// Reject configurations no batch could be initialized with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.modes.is_empty() {
            return Err(CoreError::Config("no modes configured".into()));
        }
        if self.simulation_days.count == 0 {
            return Err(CoreError::Config("simulation must span at least one day".into()));
        }
        if self.fraction_size == 0 {
            return Err(CoreError::Config("fraction_size must be positive".into()));
        }
        Ok(())
    }

    /// The batch-wide seed for fraction number `fraction`.
    ///
    /// Pure function of `(seed, fraction)`, so fractions can be initialized
    /// in any order.
    pub fn batch_seed(&self, fraction: u64) -> u64 {
        SimRng::new(self.seed).child(fraction).next_seed()
    }
}
