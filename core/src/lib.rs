//! # Kakedashi - NFT mint page logic
//!
//! Everything the mint page does, independent of the browser: session
//! state, the wallet and contract capabilities it relies on, the four
//! actions, and the render model.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐  SessionUpdate  ┌──────────────┐  MintView  ┌────────────┐
//! │  actions   │────────────────▶│ SessionState │───────────▶│     UI     │
//! └────────────┘                 └──────────────┘            └────────────┘
//!       │ AccountQuery / NetworkQuery / TransactionSubmission / ReadOnlyQuery
//!       ▼
//! ┌────────────┐  eth_call / eth_sendTransaction  ┌──────────────────────┐
//! │   wallet   │─────────────────────────────────▶│ NFTCollectible (ABI) │
//! └────────────┘                                  └──────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kakedashi::{check_connection, fetch_total_minted, MintConfig, SessionState};
//!
//! let config = MintConfig::default();
//! let contract = config.contract()?;
//! let mut state = SessionState::default();
//! state = state.apply_all(check_connection(wallet.as_ref(), &config).await);
//! if state.account.is_some() {
//!     state = state.apply_all(fetch_total_minted(wallet.as_ref(), &contract).await);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Deployment constants
//! - [`types`] - Chain IDs, wire types, hex helpers
//! - [`session`] - Session state and updates
//! - [`wallet`] - Capability traits
//! - [`events`] - Chain-change subscription
//! - [`abi`] - Contract interface
//! - [`contract`] - Contract call handle
//! - [`actions`] - Connect, check, mint, fetch
//! - [`view`] - Render model

// Core modules
pub mod error;
pub mod config;
pub mod types;

// State
pub mod session;

// Wallet capabilities
pub mod wallet;
pub mod events;

// Contract
pub mod abi;
pub mod contract;

// Actions and rendering
pub mod actions;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    AbiError,
    ActionError,
    ContractError,
    WalletError,
    WalletResult,
};

// =============================================================================
// Re-exports - Configuration and types
// =============================================================================

pub use config::MintConfig;

pub use types::{
    ChainId,
    TxHash,
    TransactionRequest,
    CallRequest,
    TransactionReceipt,
    parse_address,
    parse_accounts,
    parse_quantity,
};

// =============================================================================
// Re-exports - State
// =============================================================================

pub use session::{MintStatus, SessionState, SessionUpdate};

// =============================================================================
// Re-exports - Capabilities
// =============================================================================

pub use wallet::{
    AccountQuery,
    NetworkQuery,
    TransactionSubmission,
    ReadOnlyQuery,
    Notifier,
};

pub use events::{ChainEvents, chain_changed, watch_chain};

// =============================================================================
// Re-exports - Contract
// =============================================================================

pub use abi::{ContractAbi, ContractRef};
pub use contract::{NftContract, PendingTransaction, TxOverrides};

// =============================================================================
// Re-exports - Actions and view
// =============================================================================

pub use actions::{check_connection, connect, mint, fetch_total_minted};
pub use view::{MintView, StatusPanel};

pub use alloy_primitives::Address;
