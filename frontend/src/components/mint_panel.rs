//! Mint controls: connect/mint buttons, transaction status, supply counter.

use kakedashi::{MintView, StatusPanel};
use leptos::*;

#[component]
pub fn MintPanel(
    mint_view: Memo<MintView>,
    /// "Connect to Wallet" clicked
    on_connect: Callback<()>,
    /// "Mint" clicked
    on_mint: Callback<()>,
) -> impl IntoView {
    view! {
        <Show
            when=move || mint_view.with(|v| v.show_mint_button)
            fallback=|| view! { }
        >
            <button class="cta-button connect-wallet-button" on:click=move |_| on_mint.call(())>
                "Mint a Polygon Kakedashi NFT"
            </button>
        </Show>

        <Show
            when=move || mint_view.with(|v| v.show_connect_button)
            fallback=|| view! { }
        >
            <button class="cta-button connect-wallet-button" on:click=move |_| on_connect.call(())>
                "Connect to Wallet"
            </button>
        </Show>

        <div class="mine-submission">
            {move || status_panel(mint_view.with(|v| v.status.clone()))}
        </div>

        <div class="nft-info">
            <p>"NFTs: " {move || mint_view.with(MintView::supply_label)}</p>
        </div>
    }
}

fn status_panel(status: StatusPanel) -> View {
    match status {
        StatusPanel::None => ().into_view(),
        StatusPanel::Mining => view! {
            <div class="mining">
                <div class="loader"></div>
                <span>"Transaction is mining"</span>
            </div>
        }
        .into_view(),
        StatusPanel::Success {
            marketplace_url,
            transaction_url,
        } => view! {
            <div class="success">
                <p>"NFT minting successful!"</p>
                <p class="success-link">
                    <a href=marketplace_url target="_blank" rel="noreferrer">"Click here"</a>
                    <span>" to view your NFT on OpenSea."</span>
                </p>
                {transaction_url.map(|url| view! {
                    <p class="tx-link">
                        <a href=url target="_blank" rel="noreferrer">"View transaction"</a>
                    </p>
                })}
            </div>
        }
        .into_view(),
        StatusPanel::Error { message } => view! {
            <div class="error">
                <p>{message}</p>
            </div>
        }
        .into_view(),
    }
}
