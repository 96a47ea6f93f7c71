//! Session state and its update functions.
//!
//! The state is a plain value owned by the UI. Actions never touch it
//! directly; they return [`SessionUpdate`]s that the UI folds in with
//! [`SessionState::apply`]. Updates are applied in arrival order
//! (last write wins).
//!
//! Long-running work (a mint waiting for its receipt) may finish after the
//! session was reset by a chain change. Such work captures
//! [`SessionState::generation`] when it starts and reports through
//! [`SessionState::apply_from`], which drops results from an older session.

use alloy_primitives::Address;

use crate::types::TxHash;

/// Progress of the mint action.
///
/// ```text
/// Idle ──mint──▶ Mining ──confirmed──▶ Success
///                  │
///                  └────any failure──▶ Error
/// ```
///
/// `Success` and `Error` are terminal until the next mint, which goes
/// straight back to `Mining`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MintStatus {
    #[default]
    Idle,
    Mining,
    Success,
    Error,
}

impl MintStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, MintStatus::Success | MintStatus::Error)
    }

    /// CSS class of the status panel.
    pub fn css_class(self) -> &'static str {
        match self {
            MintStatus::Idle => "idle",
            MintStatus::Mining => "mining",
            MintStatus::Success => "success",
            MintStatus::Error => "error",
        }
    }
}

/// Everything the page knows about the visitor's wallet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Connected account, once known.
    pub account: Option<Address>,
    /// `None` until a network check ran; `Some(true)` shows the banner.
    pub network_mismatch: Option<bool>,
    pub mint_status: MintStatus,
    /// Last value read from `getTotalMinted()`.
    pub minted_count: u64,
    /// Hash of the last confirmed mint.
    pub last_transaction: Option<TxHash>,
    /// Number of resets so far.
    pub generation: u64,
}

/// A single change to [`SessionState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionUpdate {
    /// An account was found on the expected network.
    Connected {
        account: Address,
        network_mismatch: Option<bool>,
    },
    /// The wallet is on another network (or has no account authorized).
    WrongNetwork,
    MintStatus(MintStatus),
    /// Mint confirmed on chain.
    MintConfirmed(TxHash),
    MintedCount(u64),
    /// Back to the initial state (chain changed).
    Reset,
}

impl SessionState {
    /// Fold an update into the state.
    pub fn apply(self, update: SessionUpdate) -> SessionState {
        match update {
            SessionUpdate::Connected {
                account,
                network_mismatch,
            } => SessionState {
                account: Some(account),
                network_mismatch,
                ..self
            },
            SessionUpdate::WrongNetwork => SessionState {
                network_mismatch: Some(true),
                ..self
            },
            SessionUpdate::MintStatus(mint_status) => SessionState {
                mint_status,
                ..self
            },
            SessionUpdate::MintConfirmed(hash) => SessionState {
                mint_status: MintStatus::Success,
                last_transaction: Some(hash),
                ..self
            },
            SessionUpdate::MintedCount(minted_count) => SessionState {
                minted_count,
                ..self
            },
            SessionUpdate::Reset => SessionState {
                generation: self.generation + 1,
                ..SessionState::default()
            },
        }
    }

    /// Fold several updates in order.
    pub fn apply_all(self, updates: impl IntoIterator<Item = SessionUpdate>) -> SessionState {
        updates.into_iter().fold(self, SessionState::apply)
    }

    /// Fold an update produced by work started in session `generation`.
    ///
    /// Updates from before the last reset are discarded.
    pub fn apply_from(self, generation: u64, update: SessionUpdate) -> SessionState {
        if generation != self.generation {
            log::debug!("Discarding {:?} from session {} (now {})", update, generation, self.generation);
            return self;
        }
        self.apply(update)
    }
}
