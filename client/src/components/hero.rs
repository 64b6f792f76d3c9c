//! Landing hero with animated background shapes.

use leptos::prelude::*;

use crate::content::home::{HERO_SUBTITLE, HERO_TITLE_ACCENT, HERO_TITLE_LEAD};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero__background" aria-hidden="true">
                <div class="hero__shape hero__shape--one"></div>
                <div class="hero__shape hero__shape--two"></div>
                <div class="hero__shape hero__shape--three"></div>
                <div class="hero__grid"></div>
            </div>

            <div class="container hero__content">
                <h1 class="hero__title intro intro--delay-1">
                    {HERO_TITLE_LEAD}
                    " "
                    <span class="hero__title-accent">{HERO_TITLE_ACCENT}</span>
                </h1>
                <p class="hero__subtitle intro intro--delay-2">{HERO_SUBTITLE}</p>
                <div class="hero__actions intro intro--delay-3">
                    <a href="/solutions" class="btn btn--primary btn--lg">"Explore Our Work"</a>
                    <a href="/contact" class="btn btn--outline btn--lg">"Get in Touch"</a>
                </div>
            </div>
        </section>
    }
}
