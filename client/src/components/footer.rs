//! Site footer.

use leptos::prelude::*;

use crate::components::logo::Logo;
use crate::components::reveal::Reveal;
use crate::content::{COPYRIGHT, LAB_NAME};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <Reveal class="container footer__inner">
                <div class="footer__brand">
                    <Logo size=32/>
                    <div>
                        <p class="footer__name">{LAB_NAME}</p>
                        <p class="footer__copyright">{COPYRIGHT}</p>
                    </div>
                </div>
                <div class="footer__links">
                    <a href="/contact">"Contact"</a>
                    <a href="/team">"Team"</a>
                    <a href="#">"Privacy"</a>
                    <a href="#">"Terms"</a>
                </div>
            </Reveal>
        </footer>
    }
}
