//! Shared page frame: navbar, content, footer.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;

#[component]
pub fn PageLayout(children: Children) -> impl IntoView {
    view! {
        <div class="page">
            <Navbar/>
            <main class="page__main">{children()}</main>
            <Footer/>
        </div>
    }
}
