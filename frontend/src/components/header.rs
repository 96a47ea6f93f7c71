use leptos::*;

use crate::config::APP_TITLE;

#[component]
pub fn Header(
    /// OpenSea collection page
    #[prop(into)]
    collection_url: String,
) -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">{APP_TITLE}</a>
            </div>
            <div class="header-right">
                <a href=collection_url class="opensea-button" target="_blank" rel="noreferrer">
                    "🌊 View Collection on OpenSea"
                </a>
            </div>
        </header>
    }
}
