//! Connected address display

use kakedashi::MintView;
use leptos::*;

#[component]
pub fn ConnectedAddress(mint_view: Memo<MintView>) -> impl IntoView {
    let account = move || mint_view.with(|v| v.account.map(|a| a.to_string()));

    view! {
        <Show
            when=move || account().is_some()
            fallback=|| view! { }
        >
            <div class="show-user-address">
                <p>
                    "Your address being connected: "
                    <br/>
                    <span>
                        <a class="user-address" target="_blank" rel="noreferrer">
                            {move || account().unwrap_or_default()}
                        </a>
                    </span>
                </p>
            </div>
        </Show>
    }
}
