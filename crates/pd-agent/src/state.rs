//! Person state and per-run simulation options.

/// Where an agent stands in its daily routine.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PersonState {
    /// Created but not yet scheduled.
    #[default]
    Uninitialized,
    AtActivity,
    Travelling,
    /// Waiting at a stop or pack station.
    Waiting,
    Finished,
}

impl PersonState {
    /// States a freshly built agent may start in.
    pub fn is_valid_initial(self) -> bool {
        matches!(self, PersonState::Uninitialized | PersonState::AtActivity)
    }
}

/// Behavioural switches shared by every agent of a run.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationOptions {
    /// Re-plan remaining activities when an agent runs late.
    pub rescheduling: bool,
    /// Maximum deviation from the planned start before rescheduling kicks in.
    pub max_difference_minutes: u32,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self { rescheduling: true, max_difference_minutes: 120 }
    }
}
