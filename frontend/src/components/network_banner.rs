//! Wrong-network banner

use kakedashi::MintView;
use leptos::*;

#[component]
pub fn NetworkBanner(mint_view: Memo<MintView>) -> impl IntoView {
    view! {
        <Show
            when=move || mint_view.with(|v| v.show_network_banner)
            fallback=|| view! { }
        >
            <div class="metamask-error">{move || mint_view.with(|v| v.network_banner.clone())}</div>
        </Show>
    }
}
