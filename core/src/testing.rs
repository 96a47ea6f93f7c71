//! Test doubles for the wallet capabilities.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use alloy_primitives::{Address, U256};
use futures::channel::oneshot;

use crate::error::{WalletError, WalletResult};
use crate::events::ChainEvents;
use crate::types::{CallRequest, ChainId, TransactionReceipt, TransactionRequest, TxHash};
use crate::wallet::{AccountQuery, NetworkQuery, Notifier, ReadOnlyQuery, TransactionSubmission};

pub fn account(byte: u8) -> Address {
    Address::repeat_byte(byte)
}

pub fn tx_hash(byte: u8) -> TxHash {
    TxHash::repeat_byte(byte)
}

/// In-memory wallet with scripted answers.
pub struct FakeWallet {
    accounts: Vec<Address>,
    chain_id: ChainId,
    minted: U256,
    receipt_status: &'static str,
    fail_accounts: bool,
    fail_chain_id: bool,
    reject_send: bool,
    fail_call: bool,
    log: RefCell<Vec<&'static str>>,
    sent: RefCell<Vec<TransactionRequest>>,
    calls: RefCell<Vec<CallRequest>>,
    send_gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl FakeWallet {
    pub fn on_chain(chain_id: ChainId, accounts: Vec<Address>) -> Self {
        Self {
            accounts,
            chain_id,
            minted: U256::ZERO,
            receipt_status: "0x1",
            fail_accounts: false,
            fail_chain_id: false,
            reject_send: false,
            fail_call: false,
            log: RefCell::new(Vec::new()),
            sent: RefCell::new(Vec::new()),
            calls: RefCell::new(Vec::new()),
            send_gate: RefCell::new(None),
        }
    }

    pub fn polygon(accounts: Vec<Address>) -> Self {
        Self::on_chain(ChainId::POLYGON, accounts)
    }

    pub fn with_minted(mut self, minted: U256) -> Self {
        self.minted = minted;
        self
    }

    pub fn reverting(mut self) -> Self {
        self.receipt_status = "0x0";
        self
    }

    pub fn failing_accounts(mut self) -> Self {
        self.fail_accounts = true;
        self
    }

    pub fn failing_chain_id(mut self) -> Self {
        self.fail_chain_id = true;
        self
    }

    pub fn rejecting_send(mut self) -> Self {
        self.reject_send = true;
        self
    }

    pub fn failing_call(mut self) -> Self {
        self.fail_call = true;
        self
    }

    /// `send_transaction` stays pending until the sender fires.
    pub fn gated(self) -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        *self.send_gate.borrow_mut() = Some(rx);
        (self, tx)
    }

    /// RPC methods in call order.
    pub fn requests(&self) -> Vec<&'static str> {
        self.log.borrow().clone()
    }

    pub fn sent_transactions(&self) -> Vec<TransactionRequest> {
        self.sent.borrow().clone()
    }

    pub fn read_calls(&self) -> Vec<CallRequest> {
        self.calls.borrow().clone()
    }

    fn record(&self, method: &'static str) {
        self.log.borrow_mut().push(method);
    }

    fn rpc_failure() -> WalletError {
        WalletError::Rpc {
            code: -32603,
            message: "Internal JSON-RPC error.".into(),
        }
    }
}

impl AccountQuery for FakeWallet {
    async fn accounts(&self) -> WalletResult<Vec<Address>> {
        self.record("eth_accounts");
        if self.fail_accounts {
            return Err(Self::rpc_failure());
        }
        Ok(self.accounts.clone())
    }

    async fn request_accounts(&self) -> WalletResult<Vec<Address>> {
        self.record("eth_requestAccounts");
        if self.fail_accounts {
            return Err(WalletError::UserRejected);
        }
        Ok(self.accounts.clone())
    }
}

impl NetworkQuery for FakeWallet {
    async fn chain_id(&self) -> WalletResult<ChainId> {
        self.record("eth_chainId");
        if self.fail_chain_id {
            return Err(Self::rpc_failure());
        }
        Ok(self.chain_id)
    }
}

impl TransactionSubmission for FakeWallet {
    async fn send_transaction(&self, tx: TransactionRequest) -> WalletResult<TxHash> {
        self.record("eth_sendTransaction");
        let gate = self.send_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if self.reject_send {
            return Err(WalletError::UserRejected);
        }
        self.sent.borrow_mut().push(tx);
        Ok(tx_hash(0x42))
    }

    async fn wait_for_receipt(&self, hash: TxHash) -> WalletResult<TransactionReceipt> {
        self.record("eth_getTransactionReceipt");
        Ok(TransactionReceipt {
            transaction_hash: hash,
            status: Some(self.receipt_status.to_string()),
            block_number: Some("0x1".to_string()),
        })
    }
}

impl ReadOnlyQuery for FakeWallet {
    async fn call(&self, request: CallRequest) -> WalletResult<Vec<u8>> {
        self.record("eth_call");
        self.calls.borrow_mut().push(request);
        if self.fail_call {
            return Err(Self::rpc_failure());
        }
        Ok(self.minted.to_be_bytes::<32>().to_vec())
    }
}

/// Collects alerts instead of blocking.
#[derive(Default)]
pub struct FakeNotifier {
    alerts: RefCell<Vec<String>>,
}

impl FakeNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Notifier for FakeNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

/// Chain-change source fired by hand.
#[derive(Default)]
pub struct FakeChainEvents {
    handler: RefCell<Option<Rc<dyn Fn(ChainId)>>>,
    active: Rc<Cell<bool>>,
}

/// Unregisters on drop.
pub struct FakeSubscription {
    active: Rc<Cell<bool>>,
}

impl Drop for FakeSubscription {
    fn drop(&mut self) {
        self.active.set(false);
    }
}

impl FakeChainEvents {
    pub fn emit(&self, chain_id: ChainId) {
        let handler = self.handler.borrow().clone();
        if let Some(handler) = handler {
            if self.active.get() {
                handler(chain_id);
            }
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.active.get()
    }
}

impl ChainEvents for FakeChainEvents {
    type Subscription = FakeSubscription;

    fn on_chain_changed(&self, handler: Box<dyn Fn(ChainId)>) -> FakeSubscription {
        *self.handler.borrow_mut() = Some(Rc::from(handler));
        self.active.set(true);
        FakeSubscription {
            active: self.active.clone(),
        }
    }
}
