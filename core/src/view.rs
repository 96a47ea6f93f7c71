//! Render model.
//!
//! [`MintView`] is everything the page shows, derived from the session
//! state and the configuration. Components only read it, which keeps the
//! display rules testable without a browser.

use alloy_primitives::Address;

use crate::config::MintConfig;
use crate::session::{MintStatus, SessionState};

/// Status panel contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusPanel {
    None,
    /// Spinner while the transaction is pending.
    Mining,
    Success {
        marketplace_url: String,
        transaction_url: Option<String>,
    },
    Error {
        message: String,
    },
}

/// What the page renders for a given state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintView {
    pub show_network_banner: bool,
    pub network_banner: String,
    pub show_connect_button: bool,
    pub show_mint_button: bool,
    pub status: StatusPanel,
    /// Tokens left (`max - minted`, never negative).
    pub remaining: u64,
    pub max_supply: u64,
    pub account: Option<Address>,
}

impl MintView {
    pub fn from_state(state: &SessionState, config: &MintConfig) -> Self {
        let status = match state.mint_status {
            MintStatus::Idle => StatusPanel::None,
            MintStatus::Mining => StatusPanel::Mining,
            MintStatus::Success => StatusPanel::Success {
                marketplace_url: state
                    .account
                    .as_ref()
                    .map(|a| config.account_marketplace_url(a))
                    .unwrap_or_else(|| config.collection_url.clone()),
                transaction_url: state.last_transaction.as_ref().map(|h| config.explorer_tx_url(h)),
            },
            MintStatus::Error => StatusPanel::Error {
                message: failure_message(config),
            },
        };

        Self {
            show_network_banner: state.network_mismatch == Some(true),
            network_banner: config.network_banner.clone(),
            show_connect_button: state.account.is_none() && state.mint_status == MintStatus::Idle,
            show_mint_button: state.account.is_some() && state.mint_status != MintStatus::Mining,
            status,
            remaining: remaining_supply(config.max_supply, state.minted_count),
            max_supply: config.max_supply,
            account: state.account,
        }
    }

    /// `"97/102"`.
    pub fn supply_label(&self) -> String {
        format!("{}/{}", self.remaining, self.max_supply)
    }
}

/// Remaining supply; zero if the contract reports more than the maximum.
pub fn remaining_supply(max_supply: u64, minted: u64) -> u64 {
    max_supply.saturating_sub(minted)
}

/// Remediation hint shown after a failed mint.
pub fn failure_message(config: &MintConfig) -> String {
    format!(
        "Transaction failed. Make sure you have at least {} {} in your MetaMask wallet and try again.",
        config.mint_price, config.currency_symbol
    )
}
