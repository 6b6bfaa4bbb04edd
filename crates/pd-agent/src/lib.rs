//! `pd-agent` — delivery-capable simulated agents.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`agent`]      | `DeliveryAgent` — one per eligible person                  |
//! | [`factory`]    | `AgentFactory` trait, `DeliveryAgentFactory`               |
//! | [`params`]     | `SimulationParameters` + fluent builder                    |
//! | [`queue`]      | `EventQueue`, `EventQueueHandle`                           |
//! | [`boarding`]   | `PublicTransportBehaviour` trait, stock behaviours         |
//! | [`listener`]   | `PersonListener` trait, `NoopListener`                     |
//! | [`state`]      | `PersonState`, `SimulationOptions`                         |
//! | [`error`]      | `AgentError`, `AgentResult<T>`                             |
//!
//! # Construction contract
//!
//! Building an agent only touches the agent itself: the event queue is
//! captured but never pushed to, the listener is captured but never called.
//! Scheduling the agent's first activity is the enclosing run's job.

pub mod agent;
pub mod boarding;
pub mod error;
pub mod factory;
pub mod listener;
pub mod params;
pub mod queue;
pub mod state;


pub use agent::DeliveryAgent;
pub use boarding::{NoPublicTransport, PublicTransportBehaviour, ScheduledBoarding};
pub use error::{AgentError, AgentResult};
pub use factory::{AgentFactory, DeliveryAgentFactory};
pub use listener::{NoopListener, PersonListener};
pub use params::{SimulationParameters, SimulationParametersBuilder};
pub use queue::{EventQueue, EventQueueHandle};
pub use state::{PersonState, SimulationOptions};
