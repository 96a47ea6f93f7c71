//! Capability traits for the browser wallet.
//!
//! The injected wallet is split into the four things the page asks of it,
//! so each action only requires what it uses and tests can substitute
//! doubles:
//!
//! | Trait                     | EIP-1193 methods                                  |
//! |---------------------------|---------------------------------------------------|
//! | [`AccountQuery`]          | `eth_accounts`, `eth_requestAccounts`             |
//! | [`NetworkQuery`]          | `eth_chainId`                                     |
//! | [`TransactionSubmission`] | `eth_sendTransaction`, `eth_getTransactionReceipt` |
//! | [`ReadOnlyQuery`]         | `eth_call`                                        |
//!
//! The page runs on a single-threaded event loop, so none of these futures
//! are required to be `Send`.

#![allow(async_fn_in_trait)]

use alloy_primitives::Address;

use crate::error::WalletResult;
use crate::types::{CallRequest, ChainId, TransactionReceipt, TransactionRequest, TxHash};

/// Account listing and authorization.
pub trait AccountQuery {
    /// Accounts the site is already authorized for. Never prompts.
    async fn accounts(&self) -> WalletResult<Vec<Address>>;

    /// Ask the user to authorize the site. May open a wallet prompt.
    async fn request_accounts(&self) -> WalletResult<Vec<Address>>;
}

/// Active network.
pub trait NetworkQuery {
    async fn chain_id(&self) -> WalletResult<ChainId>;
}

/// Signed transaction submission.
pub trait TransactionSubmission {
    /// Have the wallet sign and broadcast `tx`.
    async fn send_transaction(&self, tx: TransactionRequest) -> WalletResult<TxHash>;

    /// Resolve once `hash` is mined. No timeout.
    async fn wait_for_receipt(&self, hash: TxHash) -> WalletResult<TransactionReceipt>;
}

/// Read-only contract calls against the latest block.
pub trait ReadOnlyQuery {
    async fn call(&self, request: CallRequest) -> WalletResult<Vec<u8>>;
}

/// Blocking user-facing message (`window.alert`).
pub trait Notifier {
    fn alert(&self, message: &str);
}
