//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    blog::BlogPage, contact::ContactPage, home::HomePage, not_found::NotFoundPage, open_source::OpenSourcePage,
    resources::ResourcesPage, solutions::SolutionsPage, team::TeamPage,
};
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the chrome state and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Restore the theme once the page is live in the browser.
    Effect::new(move || {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/alkebulant-labs.css"/>
        <Link rel="icon" href="/logo.svg"/>
        <Title text="Alkebulant Labs"/>
        <Meta
            name="description"
            content="An innovation lab exploring AI, Web3, privacy and edge computing, building prototypes in the open."
        />

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("solutions") view=SolutionsPage/>
                <Route path=StaticSegment("blog") view=BlogPage/>
                <Route path=StaticSegment("open-source") view=OpenSourcePage/>
                <Route path=StaticSegment("resources") view=ResourcesPage/>
                <Route path=StaticSegment("team") view=TeamPage/>
                <Route path=StaticSegment("contact") view=ContactPage/>
            </Routes>
        </Router>
    }
}
