//! Per-person event listener captured by agents.

use pd_core::AgentId;
use pd_parcel::Parcel;

/// Callbacks an agent invokes about itself.
///
/// One listener is shared by every agent of a batch (and possibly by worker
/// threads), hence `&self` and `Send + Sync`; recording listeners use
/// interior mutability.
pub trait PersonListener: Send + Sync {
    /// A parcel was attached to `agent`'s order set.
    fn on_parcel_ordered(&self, _agent: AgentId, _parcel: &Parcel) {}
}

/// A [`PersonListener`] that does nothing.
pub struct NoopListener;

impl PersonListener for NoopListener {}
