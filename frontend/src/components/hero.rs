//! Banner image

use leptos::*;

use crate::config::{BANNER_ALT, BANNER_IMAGE};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="banner-img">
            <img src=BANNER_IMAGE alt=BANNER_ALT/>
        </div>
    }
}
