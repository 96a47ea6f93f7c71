//! Wrapper for the injected EIP-1193 wallet (`window.ethereum`).
//!
//! MetaMask and compatible extensions expose a single `request`
//! function plus `on` / `removeListener` for events. This module covers
//! accounts, network, events and alerts; transaction submission lives in
//! [`crate::services::blockchain`].

use kakedashi::{
    parse_accounts, AccountQuery, Address, ChainEvents, ChainId, NetworkQuery, Notifier,
    WalletError, WalletResult,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Arguments of `ethereum.request`.
#[derive(Serialize)]
struct RequestArguments<'a> {
    method: &'a str,
    params: Value,
}

/// Handle to the injected provider.
#[derive(Clone)]
pub struct InjectedWallet {
    ethereum: JsValue,
}

impl InjectedWallet {
    /// The injected provider, if a wallet extension is installed.
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let ethereum = js_sys::Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;

        if ethereum.is_null() || ethereum.is_undefined() {
            log::warn!("⚠️  No Ethereum wallet found");
            return None;
        }
        Some(Self { ethereum })
    }

    /// Send a JSON-RPC request through `ethereum.request({ method, params })`.
    pub async fn request<T: DeserializeOwned>(&self, method: &str, params: Value) -> WalletResult<T> {
        let request = self
            .function("request")
            .ok_or_else(|| WalletError::InvalidResponse("ethereum.request is not a function".into()))?;

        let args = RequestArguments { method, params }
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| WalletError::InvalidResponse(format!("Failed to encode {}: {}", method, e)))?;

        let promise = request
            .call1(&self.ethereum, &args)
            .map_err(js_error)?
            .dyn_into::<js_sys::Promise>()
            .map_err(|_| WalletError::InvalidResponse(format!("{} did not return a promise", method)))?;

        let result = JsFuture::from(promise).await.map_err(js_error)?;

        serde_wasm_bindgen::from_value(result)
            .map_err(|e| WalletError::InvalidResponse(format!("Failed to parse {} result: {}", method, e)))
    }

    fn function(&self, name: &str) -> Option<js_sys::Function> {
        js_sys::Reflect::get(&self.ethereum, &JsValue::from_str(name))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
    }
}

/// Convert a rejected promise (`{ code, message }`) into a wallet error.
fn js_error(e: JsValue) -> WalletError {
    let code = js_sys::Reflect::get(&e, &"code".into())
        .ok()
        .and_then(|v| v.as_f64())
        .map(|c| c as i64);
    let message = js_sys::Reflect::get(&e, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| e.as_string())
        .unwrap_or_else(|| "Unknown wallet error".to_string());
    WalletError::from_rpc(code, message)
}

impl AccountQuery for InjectedWallet {
    async fn accounts(&self) -> WalletResult<Vec<Address>> {
        let accounts: Vec<String> = self.request("eth_accounts", Value::Array(vec![])).await?;
        parse_accounts(&accounts)
    }

    async fn request_accounts(&self) -> WalletResult<Vec<Address>> {
        log::info!("🔌 Requesting wallet accounts...");
        let accounts: Vec<String> = self
            .request("eth_requestAccounts", Value::Array(vec![]))
            .await?;
        parse_accounts(&accounts)
    }
}

impl NetworkQuery for InjectedWallet {
    async fn chain_id(&self) -> WalletResult<ChainId> {
        let chain_id: String = self.request("eth_chainId", Value::Array(vec![])).await?;
        chain_id.parse()
    }
}

// =============================================================================
// Events
// =============================================================================

/// Registered `chainChanged` listener. Removed on drop.
pub struct ChainSubscription {
    ethereum: JsValue,
    listener: Closure<dyn Fn(JsValue)>,
}

impl Drop for ChainSubscription {
    fn drop(&mut self) {
        let remove = js_sys::Reflect::get(&self.ethereum, &JsValue::from_str("removeListener"))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
        if let Some(remove) = remove {
            let _ = remove.call2(
                &self.ethereum,
                &JsValue::from_str("chainChanged"),
                self.listener.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Chain ID carried by a `chainChanged` event.
pub(crate) fn chain_id_from_event(payload: Option<String>) -> Option<ChainId> {
    payload.and_then(|id| id.parse().ok())
}

impl ChainEvents for InjectedWallet {
    type Subscription = Option<ChainSubscription>;

    fn on_chain_changed(&self, handler: Box<dyn Fn(ChainId)>) -> Self::Subscription {
        let Some(on) = self.function("on") else {
            log::warn!("Wallet does not support events");
            return None;
        };

        let listener = Closure::wrap(Box::new(move |payload: JsValue| {
            match chain_id_from_event(payload.as_string()) {
                Some(chain_id) => handler(chain_id),
                None => log::warn!("Ignoring malformed chainChanged payload: {:?}", payload),
            }
        }) as Box<dyn Fn(JsValue)>);

        if let Err(e) = on.call2(
            &self.ethereum,
            &JsValue::from_str("chainChanged"),
            listener.as_ref().unchecked_ref(),
        ) {
            log::error!("Failed to subscribe to chainChanged: {}", js_error(e));
            return None;
        }

        Some(ChainSubscription {
            ethereum: self.ethereum.clone(),
            listener,
        })
    }
}

// =============================================================================
// Alerts
// =============================================================================

/// `window.alert`.
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
