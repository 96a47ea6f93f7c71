//! Common types shared by the wallet, contract and session modules.
//!
//! # Categories
//!
//! - **Identifiers** - chain IDs, addresses, transaction hashes
//! - **Wire Types** - JSON-RPC request/receipt objects (hex quantities)
//! - **Hex Helpers** - quantity and data encoding

use std::fmt;
use std::str::FromStr;

use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{WalletError, WalletResult};

/// Hash of a submitted transaction.
pub type TxHash = B256;

// =============================================================================
// Identifiers
// =============================================================================

/// Numeric identifier of an EVM network.
///
/// Wallets report it as a hex quantity (`"0x89"`); comparison is numeric
/// so `"0x089"` and `"0x89"` are the same chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl ChainId {
    /// Polygon PoS mainnet.
    pub const POLYGON: ChainId = ChainId(137);

    /// Ethereum mainnet.
    pub const ETHEREUM: ChainId = ChainId(1);

    pub fn value(self) -> u64 {
        self.0
    }
}

impl FromStr for ChainId {
    type Err = WalletError;

    /// Accepts hex quantities (`0x89`) and plain decimals (`137`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with("0x") || s.starts_with("0X") {
            parse_quantity(s).map(ChainId)
        } else {
            s.parse::<u64>()
                .map(ChainId)
                .map_err(|e| WalletError::InvalidResponse(format!("chain id '{}': {}", s, e)))
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

/// Parse an account string returned by the wallet.
pub fn parse_address(s: &str) -> WalletResult<Address> {
    Address::from_str(s.trim())
        .map_err(|e| WalletError::InvalidResponse(format!("address '{}': {}", s, e)))
}

/// Parse the account list returned by `eth_accounts` / `eth_requestAccounts`.
pub fn parse_accounts<S: AsRef<str>>(accounts: &[S]) -> WalletResult<Vec<Address>> {
    accounts.iter().map(|a| parse_address(a.as_ref())).collect()
}

// =============================================================================
// Wire Types
// =============================================================================

/// Parameters of `eth_sendTransaction`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    #[serde(serialize_with = "serialize_address")]
    pub from: Address,
    #[serde(serialize_with = "serialize_address")]
    pub to: Address,
    #[serde(serialize_with = "serialize_data")]
    pub data: Vec<u8>,
    /// Gas ceiling.
    #[serde(serialize_with = "serialize_u64_quantity")]
    pub gas: u64,
    /// Payment in wei.
    #[serde(serialize_with = "serialize_u256_quantity")]
    pub value: U256,
}

/// Parameters of `eth_call`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CallRequest {
    #[serde(serialize_with = "serialize_address")]
    pub to: Address,
    #[serde(serialize_with = "serialize_data")]
    pub data: Vec<u8>,
}

/// Subset of `eth_getTransactionReceipt` we read.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    #[serde(deserialize_with = "deserialize_hash")]
    pub transaction_hash: TxHash,
    /// `0x1` on success, `0x0` on revert. Absent on pre-Byzantium chains.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub block_number: Option<String>,
}

impl TransactionReceipt {
    /// Whether execution succeeded.
    pub fn succeeded(&self) -> bool {
        match &self.status {
            Some(status) => parse_quantity(status).map(|s| s == 1).unwrap_or(false),
            None => true,
        }
    }

    pub fn block(&self) -> Option<u64> {
        self.block_number.as_deref().and_then(|b| parse_quantity(b).ok())
    }
}

// =============================================================================
// Hex Helpers
// =============================================================================

/// Parse a JSON-RPC hex quantity (`"0x1a"`).
pub fn parse_quantity(s: &str) -> WalletResult<u64> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .ok_or_else(|| WalletError::InvalidResponse(format!("quantity '{}' lacks 0x prefix", s)))?;
    if digits.is_empty() {
        return Err(WalletError::InvalidResponse(format!("empty quantity '{}'", s)));
    }
    u64::from_str_radix(digits, 16)
        .map_err(|e| WalletError::InvalidResponse(format!("quantity '{}': {}", s, e)))
}

/// Decode `0x`-prefixed call data.
pub fn decode_data(s: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(s.strip_prefix("0x").unwrap_or(s))
}

/// Encode bytes as `0x`-prefixed call data.
pub fn encode_data(data: &[u8]) -> String {
    format!("0x{}", hex::encode(data))
}

fn serialize_address<S: Serializer>(address: &Address, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&address.to_string())
}

fn serialize_data<S: Serializer>(data: &[u8], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&encode_data(data))
}

fn serialize_u64_quantity<S: Serializer>(value: &u64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format!("0x{:x}", value))
}

fn serialize_u256_quantity<S: Serializer>(value: &U256, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format!("0x{:x}", value))
}

fn deserialize_hash<'de, D: Deserializer<'de>>(d: D) -> Result<TxHash, D::Error> {
    let s = String::deserialize(d)?;
    TxHash::from_str(&s).map_err(serde::de::Error::custom)
}
