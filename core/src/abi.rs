//! Contract interface (ABI) handling.
//!
//! Reads the standard Solidity ABI JSON, either a bare array or a build
//! artifact with an `abi` field, and encodes the calls this page makes.
//! Only static `uint` arguments and return values are supported; that is
//! all `mintNFTs(uint256)` and `getTotalMinted()` need.

use alloy_primitives::{keccak256, Address, U256};
use serde::Deserialize;

use crate::error::{AbiError, AbiResult};

/// ABI of the deployed NFTCollectible contract.
const BUNDLED_ABI: &str = include_str!("../abi/NFTCollectible.json");

/// Size of one ABI word.
const WORD: usize = 32;

/// A single ABI parameter.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AbiParam {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl AbiParam {
    /// Canonical type name used in signatures (`uint` -> `uint256`).
    fn canonical_kind(&self) -> String {
        match self.kind.as_str() {
            "uint" => "uint256".to_string(),
            "int" => "int256".to_string(),
            other => other.to_string(),
        }
    }

    fn is_static_uint(&self) -> bool {
        let kind = self.canonical_kind();
        kind.strip_prefix("uint")
            .and_then(|bits| bits.parse::<u16>().ok())
            .is_some_and(|bits| bits > 0 && bits <= 256 && bits % 8 == 0)
    }
}

/// An entry of the ABI array (functions, events, constructor, ...).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiEntry {
    #[serde(rename = "type", default = "default_entry_kind")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<AbiParam>,
    #[serde(default)]
    pub outputs: Vec<AbiParam>,
    #[serde(default)]
    pub state_mutability: Option<String>,
}

fn default_entry_kind() -> String {
    "function".to_string()
}

impl AbiEntry {
    pub fn is_function(&self) -> bool {
        self.kind == "function"
    }

    /// `view` or `pure`.
    pub fn is_read_only(&self) -> bool {
        matches!(self.state_mutability.as_deref(), Some("view") | Some("pure"))
    }

    pub fn is_payable(&self) -> bool {
        self.state_mutability.as_deref() == Some("payable")
    }

    /// Canonical signature, e.g. `mintNFTs(uint256)`.
    pub fn signature(&self) -> String {
        let inputs: Vec<String> = self.inputs.iter().map(AbiParam::canonical_kind).collect();
        format!("{}({})", self.name, inputs.join(","))
    }

    /// First four bytes of the keccak-256 of the signature.
    pub fn selector(&self) -> [u8; 4] {
        let hash = keccak256(self.signature().as_bytes());
        let mut selector = [0u8; 4];
        selector.copy_from_slice(&hash[..4]);
        selector
    }

    /// Encode a call with `uint` arguments.
    pub fn encode_call(&self, args: &[U256]) -> AbiResult<Vec<u8>> {
        if args.len() != self.inputs.len() {
            return Err(AbiError::ArgumentCount {
                function: self.name.clone(),
                expected: self.inputs.len(),
                actual: args.len(),
            });
        }
        if let Some(param) = self.inputs.iter().find(|p| !p.is_static_uint()) {
            return Err(AbiError::UnsupportedType {
                function: self.name.clone(),
                kind: param.kind.clone(),
            });
        }

        let mut data = Vec::with_capacity(4 + WORD * args.len());
        data.extend_from_slice(&self.selector());
        for arg in args {
            data.extend_from_slice(&arg.to_be_bytes::<WORD>());
        }
        Ok(data)
    }

    /// Decode a single `uint` return value.
    pub fn decode_uint(&self, data: &[u8]) -> AbiResult<U256> {
        match self.outputs.first() {
            Some(output) if output.is_static_uint() => {}
            Some(output) => {
                return Err(AbiError::UnsupportedType {
                    function: self.name.clone(),
                    kind: output.kind.clone(),
                })
            }
            None => return Err(AbiError::FunctionNotFound(format!("{} (no outputs)", self.name))),
        }
        if data.len() < WORD {
            return Err(AbiError::ShortReturnData(data.len()));
        }
        Ok(U256::from_be_slice(&data[..WORD]))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AbiDocument {
    Artifact { abi: Vec<AbiEntry> },
    Bare(Vec<AbiEntry>),
}

/// Parsed contract interface.
#[derive(Clone, Debug, PartialEq)]
pub struct ContractAbi {
    entries: Vec<AbiEntry>,
}

impl ContractAbi {
    /// Parse an ABI array or a build artifact.
    pub fn from_json(json: &str) -> AbiResult<Self> {
        let entries = match serde_json::from_str::<AbiDocument>(json)? {
            AbiDocument::Artifact { abi } => abi,
            AbiDocument::Bare(entries) => entries,
        };
        Ok(Self { entries })
    }

    /// The ABI shipped with the crate.
    pub fn bundled() -> AbiResult<Self> {
        Self::from_json(BUNDLED_ABI)
    }

    /// Look up a function by name.
    ///
    /// Overloads are not distinguished; the first match wins.
    pub fn function(&self, name: &str) -> AbiResult<&AbiEntry> {
        self.entries
            .iter()
            .find(|e| e.is_function() && e.name == name)
            .ok_or_else(|| AbiError::FunctionNotFound(name.to_string()))
    }

    pub fn functions(&self) -> impl Iterator<Item = &AbiEntry> {
        self.entries.iter().filter(|e| e.is_function())
    }
}

/// Fixed address plus interface, constant for the page lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct ContractRef {
    pub address: Address,
    pub abi: ContractAbi,
}

impl ContractRef {
    pub fn new(address: Address, abi: ContractAbi) -> Self {
        Self { address, abi }
    }
}
