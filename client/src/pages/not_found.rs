use leptos::prelude::*;

use crate::components::page_layout::PageLayout;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageLayout>
            <section class="section not-found">
                <div class="container">
                    <h1 class="not-found__code">"404"</h1>
                    <p class="not-found__message">"This page drifted out of the lab."</p>
                    <a href="/" class="btn btn--primary">"Back to Home"</a>
                </div>
            </section>
        </PageLayout>
    }
}
