//! Footer component

use leptos::*;

#[component]
pub fn Footer(
    /// Contract address as displayed
    #[prop(into)]
    contract_address: String,
    /// Block explorer page of the contract
    #[prop(into)]
    contract_url: String,
) -> impl IntoView {
    view! {
        <footer>
            <div>"Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <span>"Contract: "</span>
                <a href=contract_url class="footer-link" target="_blank" rel="noreferrer">
                    {contract_address}
                </a>
            </div>
        </footer>
    }
}
