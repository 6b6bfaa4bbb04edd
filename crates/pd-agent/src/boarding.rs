//! Public-transport boarding behaviour captured by agents.
//!
//! How an agent boards (or fails to board) a vehicle is decided by the
//! public-transport model of the enclosing run.  This crate only fixes the
//! interface the agent holds on to and the check the factory makes.

/// Pluggable boarding policy.
///
/// Implementations must be `Send + Sync`: one instance is shared by every
/// agent of a batch.
pub trait PublicTransportBehaviour: Send + Sync {
    /// `false` if agents can never board a vehicle under this policy.
    fn serves_public_transport(&self) -> bool;
}

/// Policy for runs without a public-transport supply.
pub struct NoPublicTransport;

impl PublicTransportBehaviour for NoPublicTransport {
    fn serves_public_transport(&self) -> bool {
        false
    }
}

/// Agents board the run's scheduled vehicles.
pub struct ScheduledBoarding;

impl PublicTransportBehaviour for ScheduledBoarding {
    fn serves_public_transport(&self) -> bool {
        true
    }
}
