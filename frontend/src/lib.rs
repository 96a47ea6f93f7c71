//! Kakedashi Mint - Frontend Rust/Leptos Application
//!
//! A WebAssembly page that connects MetaMask, checks the wallet is on
//! Polygon and mints a Kakedashi NFT.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  NetworkBanner (wrong network)                               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (OpenSea collection link)                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MintPage                                                    │
//! │  ├── Hero (banner image)                                     │
//! │  ├── MintPanel (connect / mint / status / supply)            │
//! │  ├── ConnectedAddress                                        │
//! │  └── LogsPanel (when there is activity)                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer (contract address)                                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session lives in a single signal. Actions from the `kakedashi`
//! crate return updates which are folded into it; the render model is a
//! memo over the session.
//!
//! # Modules
//!
//! - [`types`] - Activity log types
//! - [`components`] - UI components
//! - [`services`] - `window.ethereum` integration

use kakedashi::{
    check_connection, connect, fetch_total_minted, mint, watch_chain, MintConfig, MintStatus,
    MintView, SessionState, SessionUpdate,
};
use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{LogEntry, LogLevel};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_TITLE/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MintPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Look for an authorized account and fold the result into the session.
async fn refresh_connection(config: MintConfig, apply: impl Fn(SessionUpdate)) {
    let wallet = InjectedWallet::detect();
    if let Some(update) = check_connection(wallet.as_ref(), &config).await {
        apply(update);
    }
}

#[component]
fn MintPage() -> impl IntoView {
    let config = store_value(MintConfig::default());
    let contract = store_value(match config.with_value(MintConfig::contract) {
        Ok(contract) => Some(contract),
        Err(e) => {
            log::error!("❌ Invalid contract ABI: {}", e);
            None
        }
    });

    // Session state, replaced on every update
    let (session, set_session) = create_signal(SessionState::default());
    let (logs, set_logs) = create_signal(Vec::<LogEntry>::new());

    let apply = move |update: SessionUpdate| {
        set_session.update(|state| *state = std::mem::take(state).apply(update));
    };
    // Results of work started before a chain change are dropped
    let apply_from = move |generation: u64, update: SessionUpdate| {
        set_session.update(|state| *state = std::mem::take(state).apply_from(generation, update));
    };
    let generation = move || session.with_untracked(|state| state.generation);

    let mint_view = create_memo(move |_| {
        session.with(|state| config.with_value(|config| MintView::from_state(state, config)))
    });
    let account = create_memo(move |_| session.with(|state| state.account));

    // Check for an authorized account on load
    spawn_local(refresh_connection(config.get_value(), apply));

    // Refresh the minted count whenever an account becomes known
    create_effect(move |_| {
        if account.get().is_none() {
            return;
        }
        let started = generation();
        spawn_local(async move {
            let Some(contract) = contract.get_value() else {
                return;
            };
            let wallet = InjectedWallet::detect();
            if let Some(update) = fetch_total_minted(wallet.as_ref(), &contract).await {
                apply_from(started, update);
            }
        });
    });

    // Switching networks resets everything, then checks again
    if let Some(wallet) = InjectedWallet::detect() {
        let subscription = watch_chain(&wallet, move |update| {
            apply(update);
            spawn_local(refresh_connection(config.get_value(), apply));
        });
        on_cleanup(move || drop(subscription));
    }

    let on_connect = Callback::new(move |_: ()| {
        log::info!("🔑 Attempting to connect wallet...");
        spawn_local(async move {
            let wallet = InjectedWallet::detect();
            if let Some(update) = connect(wallet.as_ref(), &BrowserAlert, &config.get_value()).await {
                apply(update);
            }
        });
    });

    let on_mint = Callback::new(move |_: ()| {
        add_log(set_logs, LogLevel::Info, "Initialize payment");
        let started = generation();
        spawn_local(async move {
            let config = config.get_value();
            let update = match contract.get_value() {
                Some(contract) => {
                    let wallet = InjectedWallet::detect();
                    mint(wallet.as_ref(), &config, &contract, |pending| {
                        apply_from(started, pending);
                        add_log(set_logs, LogLevel::Info, "Waiting for wallet confirmation...");
                    })
                    .await
                }
                None => SessionUpdate::MintStatus(MintStatus::Error),
            };

            match &update {
                _ if generation() != started => {
                    add_log(set_logs, LogLevel::Warning, "Network changed, mint result discarded");
                }
                SessionUpdate::MintConfirmed(hash) => {
                    add_log(set_logs, LogLevel::Success, &format!("Mined, see transaction: {}", hash));
                }
                _ => add_log(set_logs, LogLevel::Error, "Transaction failed"),
            }
            apply_from(started, update);
        });
    });

    let collection_url = config.with_value(|c| c.collection_url.clone());
    let contract_address = config.with_value(|c| c.contract_address.to_string());
    let contract_url = config.with_value(|c| c.explorer_address_url(&c.contract_address));

    view! {
        <NetworkBanner mint_view=mint_view/>
        <div class="App">
            <div class="container">
                <Header collection_url=collection_url/>
                <div class="header-container">
                    <Hero/>
                    <MintPanel mint_view=mint_view on_connect=on_connect on_mint=on_mint/>
                </div>
                <ConnectedAddress mint_view=mint_view/>
                <Show
                    when=move || !logs.with(Vec::is_empty)
                    fallback=|| view! { }
                >
                    <LogsPanel logs=logs set_logs=set_logs/>
                </Show>
                <Footer contract_address=contract_address contract_url=contract_url/>
            </div>
        </div>
    }
}
