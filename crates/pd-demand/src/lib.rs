//! `pd-demand` — parcel demand attached to agents.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`generator`] | `DemandGenerator` trait, `NoDemand`                           |
//! | [`model`]   | `ParcelOrderModel` — composed stock generator + builder         |
//! | [`steps`]   | order count, destination, delivery day, size, and depot choices |
//! | [`error`]   | `DemandError`, `DemandResult<T>`                                |
//!
//! # Generate-and-record
//!
//! A single [`DemandGenerator::generate_orders`] call both creates an
//! agent's parcels and records them into the shared
//! [`DeliveryResults`][pd_parcel::DeliveryResults].  Callers never record
//! the returned parcels themselves, so a parcel cannot be booked twice.

pub mod error;
pub mod generator;
pub mod model;
pub mod steps;


pub use error::{DemandError, DemandResult};
pub use generator::{DemandGenerator, NoDemand};
pub use model::{ParcelOrderModel, ParcelOrderModelBuilder};
pub use steps::{
    ByEmployment, CenterChoice, DeliveryDayStep, DestinationStep, FixedCount, FixedDay,
    FixedDestination, OrderCountStep, SizeChoice, UniformDay, WeightedCount, WeightedDestination,
};
