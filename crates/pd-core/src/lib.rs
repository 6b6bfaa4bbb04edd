//! `pd-core` — foundational types for the parcel-demand initializer.
//!
//! Every other `pd-*` crate depends on this one.  It has no `pd-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `PersonId`, `HouseholdId`, `ZoneId`, `DistributionCenterId` |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (per-run)                |
//! | [`time`]        | `Day`, `Weekday`, `SimulationDays`                        |
//! | [`mode`]        | `Mode`, `ModeSet`                                         |
//! | [`config`]      | `InitConfig`                                              |
//! | [`error`]       | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod mode;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::InitConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, DistributionCenterId, HouseholdId, PersonId, ZoneId};
pub use mode::{Mode, ModeSet};
pub use rng::{AgentRng, SimRng};
pub use time::{Day, SimulationDays, Weekday};
