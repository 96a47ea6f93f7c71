//! Wallet and blockchain services.
//!
//! This module implements the `kakedashi` capability traits on top of the
//! browser wallet:
//!
//! # Services
//!
//! - [`wallet`] - `window.ethereum` requests, accounts, network, events, alerts
//! - [`blockchain`] - transaction submission, receipt polling, `eth_call`
//!
//! # JavaScript Bindings
//!
//! No bundled JavaScript: everything goes through `js_sys::Reflect` on the
//! injected provider object.

pub mod wallet;
pub mod blockchain;

pub use wallet::*;
