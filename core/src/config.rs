//! Mint page configuration.
//!
//! Build-time constants for the deployed collection. [`MintConfig`] groups
//! them so they can be passed explicitly into actions (and overridden in
//! tests or from a JSON document).

use std::str::FromStr;

use alloy_primitives::{utils::parse_ether, Address, U256};
use serde::{Deserialize, Deserializer};

use crate::abi::{ContractAbi, ContractRef};
use crate::error::{AbiResult, ContractError, ContractResult};
use crate::types::ChainId;

/// Address of the deployed NFTCollectible contract on Polygon.
pub const CONTRACT_ADDRESS: &str = "0x8d6052ae75fe1068dABb53023a7efBe50563d794";

/// Network the wallet must be on (Polygon PoS, `0x89`).
pub const EXPECTED_CHAIN_ID: ChainId = ChainId::POLYGON;

/// Human-readable network name for banners.
pub const NETWORK_NAME: &str = "Polygon";

/// Banner shown while the wallet is on another network.
pub const NETWORK_BANNER: &str = "Metamask から Polygon に接続してください!";

/// Native currency of the expected network.
pub const CURRENCY_SYMBOL: &str = "MATIC";

/// Maximum supply of the collection.
///
/// Not read from the contract; mirrors the deployed `MAX_SUPPLY`.
pub const MAX_SUPPLY: u64 = 102;

/// Tokens minted per click.
pub const MINT_QUANTITY: u64 = 1;

/// Gas ceiling for `mintNFTs`.
pub const MINT_GAS_LIMIT: u64 = 160_000;

/// Price of one mint, in ether units of the native currency.
pub const MINT_PRICE: &str = "0.01";

/// Collection page on OpenSea.
pub const COLLECTION_URL: &str = "https://opensea.io/collection/kakedashi-mint-collection-1";

/// OpenSea base; the account address is appended for the success link.
pub const MARKETPLACE_URL: &str = "https://opensea.io";

/// Block explorer base for addresses and transactions.
pub const EXPLORER_URL: &str = "https://polygonscan.com";

/// Everything the actions and the render model need to know.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MintConfig {
    #[serde(deserialize_with = "deserialize_address")]
    pub contract_address: Address,
    pub chain_id: ChainId,
    pub network_name: String,
    pub network_banner: String,
    pub currency_symbol: String,
    pub max_supply: u64,
    pub mint_quantity: u64,
    pub gas_limit: u64,
    pub mint_price: String,
    pub collection_url: String,
    pub marketplace_url: String,
    pub explorer_url: String,
}

impl Default for MintConfig {
    fn default() -> Self {
        Self {
            contract_address: Address::from_str(CONTRACT_ADDRESS).unwrap_or_default(),
            chain_id: EXPECTED_CHAIN_ID,
            network_name: NETWORK_NAME.to_string(),
            network_banner: NETWORK_BANNER.to_string(),
            currency_symbol: CURRENCY_SYMBOL.to_string(),
            max_supply: MAX_SUPPLY,
            mint_quantity: MINT_QUANTITY,
            gas_limit: MINT_GAS_LIMIT,
            mint_price: MINT_PRICE.to_string(),
            collection_url: COLLECTION_URL.to_string(),
            marketplace_url: MARKETPLACE_URL.to_string(),
            explorer_url: EXPLORER_URL.to_string(),
        }
    }
}

impl MintConfig {
    /// Contract reference using the bundled ABI.
    pub fn contract(&self) -> AbiResult<ContractRef> {
        Ok(ContractRef::new(self.contract_address, ContractAbi::bundled()?))
    }

    /// Mint price in wei.
    pub fn mint_value(&self) -> ContractResult<U256> {
        parse_ether(&self.mint_price).map_err(|e| ContractError::InvalidPrice {
            price: self.mint_price.clone(),
            message: e.to_string(),
        })
    }

    /// Marketplace page listing the NFTs owned by `account`.
    pub fn account_marketplace_url(&self, account: &Address) -> String {
        format!("{}/{}/", self.marketplace_url.trim_end_matches('/'), account)
    }

    /// Explorer page of an address.
    pub fn explorer_address_url(&self, address: &Address) -> String {
        format!("{}/address/{}", self.explorer_url.trim_end_matches('/'), address)
    }

    /// Explorer page of a transaction.
    pub fn explorer_tx_url(&self, hash: &crate::types::TxHash) -> String {
        format!("{}/tx/{}", self.explorer_url.trim_end_matches('/'), hash)
    }
}

fn deserialize_address<'de, D: Deserializer<'de>>(d: D) -> Result<Address, D::Error> {
    let s = String::deserialize(d)?;
    Address::from_str(&s).map_err(serde::de::Error::custom)
}
