//! Lab logo image.

use leptos::prelude::*;

use crate::content::{LAB_NAME, LOGO_SRC};

#[component]
pub fn Logo(#[prop(default = 80)] size: u32, #[prop(optional)] animated: bool) -> impl IntoView {
    let style = format!("width: {size}px; height: {size}px;");
    view! {
        <img
            class="logo"
            class:logo--animated=animated
            src=LOGO_SRC
            alt=format!("{LAB_NAME} Logo")
            style=style
        />
    }
}
