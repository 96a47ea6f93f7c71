//! Error types for the mint page.
//!
//! - [`WalletError`] - failures reported by the injected wallet
//! - [`AbiError`] - contract interface parsing and call encoding
//! - [`ContractError`] - contract calls (wraps the two above)
//! - [`ActionError`] - the four user-facing failure kinds
//!
//! Conversion is automatic via `From` implementations, so `?` works
//! across boundaries. None of these ever leave an action: each action
//! logs them and either drops the update or maps to an error status.

use thiserror::Error;

/// EIP-1193 code for "the user rejected the request".
pub const USER_REJECTED_CODE: i64 = 4001;

// =============================================================================
// Wallet Errors
// =============================================================================

/// Errors from the browser wallet (EIP-1193 provider).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No `window.ethereum` object.
    #[error("No Ethereum wallet found")]
    NotInstalled,

    /// The user dismissed the wallet prompt.
    #[error("Request rejected by user")]
    UserRejected,

    /// The wallet returned an RPC error.
    #[error("Wallet RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The wallet authorized no account.
    #[error("No authorized account")]
    NoAccounts,

    /// The wallet answered with something we cannot read.
    #[error("Invalid wallet response: {0}")]
    InvalidResponse(String),
}

impl WalletError {
    /// Build an error from an EIP-1193 `{ code, message }` pair.
    pub fn from_rpc(code: Option<i64>, message: impl Into<String>) -> Self {
        match code {
            Some(USER_REJECTED_CODE) => WalletError::UserRejected,
            Some(code) => WalletError::Rpc {
                code,
                message: message.into(),
            },
            None => WalletError::InvalidResponse(message.into()),
        }
    }
}

// =============================================================================
// ABI Errors
// =============================================================================

/// Errors while reading the contract interface or encoding calls.
#[derive(Debug, Error)]
pub enum AbiError {
    /// Malformed ABI JSON.
    #[error("Invalid ABI JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Function missing from the ABI.
    #[error("Function not found in ABI: {0}")]
    FunctionNotFound(String),

    /// Parameter type this encoder does not handle.
    #[error("Unsupported ABI type '{kind}' in {function}")]
    UnsupportedType { function: String, kind: String },

    /// Wrong number of arguments.
    #[error("{function} expects {expected} argument(s), got {actual}")]
    ArgumentCount {
        function: String,
        expected: usize,
        actual: usize,
    },

    /// Return data is not valid hex.
    #[error("Invalid hex data: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Return data shorter than one word.
    #[error("Return data too short: {0} byte(s)")]
    ShortReturnData(usize),

    /// Returned integer does not fit the target type.
    #[error("Returned value out of range: {0}")]
    Overflow(String),
}

// =============================================================================
// Contract Errors
// =============================================================================

/// Errors from a contract call handle.
#[derive(Debug, Error)]
pub enum ContractError {
    /// Wallet failure during the call.
    #[error("Wallet error: {0}")]
    Wallet(#[from] WalletError),

    /// Encoding or decoding failure.
    #[error("ABI error: {0}")]
    Abi(#[from] AbiError),

    /// The transaction was mined but reverted.
    #[error("Transaction {tx_hash} reverted")]
    Reverted { tx_hash: String },

    /// The configured payment amount cannot be parsed.
    #[error("Invalid mint price '{price}': {message}")]
    InvalidPrice { price: String, message: String },

    /// The handle has no signer for a state-changing call.
    #[error("No signer bound to contract handle")]
    NoSigner,
}

// =============================================================================
// Action Errors (top-level)
// =============================================================================

/// The four failure kinds a user can run into.
#[derive(Debug, Error)]
pub enum ActionError {
    /// Wallet not installed.
    #[error("Wallet capability absent")]
    CapabilityAbsent,

    /// Wallet is on another chain.
    #[error("Wrong network: expected chain {expected}, wallet is on {actual}")]
    NetworkMismatch { expected: u64, actual: u64 },

    /// Mint call rejected or reverted.
    #[error("Transaction failed: {0}")]
    TransactionFailed(ContractError),

    /// Read-only call failed.
    #[error("Query failed: {0}")]
    QueryFailed(ContractError),

    /// Wallet failure outside a contract call.
    #[error("Wallet error: {0}")]
    Wallet(#[from] WalletError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;

/// Result type for ABI operations.
pub type AbiResult<T> = Result<T, AbiError>;

/// Result type for contract operations.
pub type ContractResult<T> = Result<T, ContractError>;

/// Result type for actions.
pub type ActionResult<T> = Result<T, ActionError>;
