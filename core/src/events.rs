//! Wallet event subscriptions.
//!
//! The only event the page listens to is `chainChanged`. Its single
//! effect is a full state reset; the UI then runs the connection check
//! again, as a fresh page load would.

use crate::session::SessionUpdate;
use crate::types::ChainId;

/// Source of chain-change notifications.
pub trait ChainEvents {
    /// Handle returned by [`ChainEvents::on_chain_changed`]. Dropping it
    /// unregisters the handler.
    type Subscription;

    fn on_chain_changed(&self, handler: Box<dyn Fn(ChainId)>) -> Self::Subscription;
}

/// Effect of switching networks.
pub fn chain_changed(chain_id: ChainId) -> SessionUpdate {
    log::info!("Chain changed to {}, resetting session", chain_id);
    SessionUpdate::Reset
}

/// Subscribe to chain changes, forwarding the reset to `on_update`.
pub fn watch_chain<E, F>(events: &E, on_update: F) -> E::Subscription
where
    E: ChainEvents,
    F: Fn(SessionUpdate) + 'static,
{
    events.on_chain_changed(Box::new(move |chain_id| on_update(chain_changed(chain_id))))
}
