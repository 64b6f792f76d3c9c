//! Open-source repository catalog with search and category filter.

use leptos::prelude::*;

use crate::catalog::{CatalogItem, FilterState, filter_labels, source_index};
use crate::components::catalog_controls::CatalogControls;
use crate::components::page_layout::PageLayout;
use crate::components::repo_card::RepoCard;
use crate::components::reveal::Reveal;
use crate::components::section_title::SectionTitle;
use crate::content::repositories::{CATEGORY_MAP, GITHUB_ORG_URL, REPOSITORIES};

#[component]
pub fn OpenSourcePage() -> impl IntoView {
    let filter_state = RwSignal::new(FilterState::default());
    let visible = Memo::new(move |_| filter_state.with(|state| state.apply(&REPOSITORIES, &CATEGORY_MAP)));

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let (search, label) = filter_state.with(|s| (s.search_term.clone(), s.selected_filter.clone()));
        log::debug!(
            "open-source filter: search={search:?} label={label:?} shown={} of {}",
            visible.with(Vec::len),
            REPOSITORIES.len()
        );
    });

    view! {
        <PageLayout>
            <section class="section">
                <div class="container">
                    <SectionTitle
                        title="Open Source"
                        subtitle="Tools and experiments we share with the community. Built with love, maintained with care. Contributions welcome!"
                    />

                    <Reveal class="section__cta section__cta--top">
                        <a href=GITHUB_ORG_URL class="btn btn--outline btn--lg" target="_blank" rel="noopener noreferrer">
                            "View All on GitHub"
                        </a>
                    </Reveal>

                    <CatalogControls
                        state=filter_state
                        labels=filter_labels(&CATEGORY_MAP)
                        placeholder="Search repositories..."
                        shown=Signal::derive(move || visible.with(Vec::len))
                        total=REPOSITORIES.len()
                        noun="repositories"
                    />

                    <div class="card-grid card-grid--two">
                        <For
                            each=move || visible.get()
                            key=|repo| repo.id()
                            children=|repo| view! { <RepoCard repo=repo index=source_index(&REPOSITORIES, repo)/> }
                        />
                    </div>

                    <Show when=move || visible.with(Vec::is_empty)>
                        <p class="catalog-empty">"No repositories match your search."</p>
                    </Show>
                </div>
            </section>
        </PageLayout>
    }
}
