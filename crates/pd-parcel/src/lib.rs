//! `pd-parcel` — parcel orders and the process-wide delivery results.
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`parcel`]    | `Parcel`, `ParcelDestination`, `ShipmentSize`             |
//! | [`results`]   | `DeliveryResults` — shared, append-only accumulator        |
//! | [`sink`]      | `ParcelSink` trait, `NoopSink`                             |
//! | [`error`]     | `ParcelError`, `ParcelResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | FxHash for the distinct-recipient set.                   |
//! | `serde`   | Derives `Serialize`/`Deserialize` on parcel types.       |

pub mod error;
pub mod parcel;
pub mod results;
pub mod sink;

#[cfg(test)]
mod tests;

pub use error::{ParcelError, ParcelResult};
pub use parcel::{Parcel, ParcelDestination, ShipmentSize};
pub use results::DeliveryResults;
pub use sink::{NoopSink, ParcelSink};
