//! UI Components for the mint page.
//!
//! # Layout Components
//! - [`Header`] - Title and OpenSea collection link
//! - [`Hero`] - Banner image
//! - [`Footer`] - Contract address
//!
//! # Feature Components
//! - [`NetworkBanner`] - Wrong-network warning
//! - [`MintPanel`] - Connect/mint buttons, transaction status, supply
//! - [`ConnectedAddress`] - Connected account
//! - [`LogsPanel`] - Activity log

mod header;
mod hero;
mod network_banner;
mod mint_panel;
mod account;
mod footer;
mod logs;

pub use header::*;
pub use hero::*;
pub use network_banner::*;
pub use mint_panel::*;
pub use account::*;
pub use footer::*;
pub use logs::*;
