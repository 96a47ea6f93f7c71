//! Transaction submission and read-only calls through the injected wallet.
//!
//! The wallet signs and broadcasts; confirmation is detected by polling
//! `eth_getTransactionReceipt` until the node returns a receipt.

use gloo_timers::future::TimeoutFuture;
use kakedashi::types::decode_data;
use kakedashi::{
    CallRequest, ReadOnlyQuery, TransactionReceipt, TransactionRequest, TransactionSubmission,
    TxHash, WalletError, WalletResult,
};
use serde_json::{json, Value};

use crate::config::RECEIPT_POLL_INTERVAL_MS;
use crate::services::wallet::InjectedWallet;

/// Block tag for read-only calls.
const LATEST_BLOCK: &str = "latest";

fn to_param<T: serde::Serialize>(value: &T) -> WalletResult<Value> {
    serde_json::to_value(value)
        .map_err(|e| WalletError::InvalidResponse(format!("Failed to encode request: {}", e)))
}

impl TransactionSubmission for InjectedWallet {
    async fn send_transaction(&self, tx: TransactionRequest) -> WalletResult<TxHash> {
        log::info!("📤 Sending transaction to {}", tx.to);
        let hash: String = self
            .request("eth_sendTransaction", json!([to_param(&tx)?]))
            .await?;

        hash.parse::<TxHash>()
            .map_err(|e| WalletError::InvalidResponse(format!("transaction hash '{}': {}", hash, e)))
    }

    async fn wait_for_receipt(&self, hash: TxHash) -> WalletResult<TransactionReceipt> {
        let hash = hash.to_string();
        loop {
            let receipt: Option<TransactionReceipt> = self
                .request("eth_getTransactionReceipt", json!([hash]))
                .await?;

            if let Some(receipt) = receipt {
                log::info!("⛏️  Transaction mined in block {:?}", receipt.block());
                return Ok(receipt);
            }
            TimeoutFuture::new(RECEIPT_POLL_INTERVAL_MS).await;
        }
    }
}

impl ReadOnlyQuery for InjectedWallet {
    async fn call(&self, request: CallRequest) -> WalletResult<Vec<u8>> {
        let result: String = self
            .request("eth_call", json!([to_param(&request)?, LATEST_BLOCK]))
            .await?;

        decode_data(&result)
            .map_err(|e| WalletError::InvalidResponse(format!("eth_call result '{}': {}", result, e)))
    }
}
