//! Solutions catalog with search and category filter.

use leptos::prelude::*;

use crate::catalog::{CatalogItem, FilterState, filter_labels, source_index};
use crate::components::catalog_controls::CatalogControls;
use crate::components::page_layout::PageLayout;
use crate::components::section_title::SectionTitle;
use crate::components::solution_card::SolutionCard;
use crate::content::solutions::{CATEGORY_MAP, SOLUTIONS};

#[component]
pub fn SolutionsPage() -> impl IntoView {
    let filter_state = RwSignal::new(FilterState::default());
    let visible = Memo::new(move |_| filter_state.with(|state| state.apply(&SOLUTIONS, &CATEGORY_MAP)));

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let (search, label) = filter_state.with(|s| (s.search_term.clone(), s.selected_filter.clone()));
        log::debug!(
            "solutions filter: search={search:?} label={label:?} shown={} of {}",
            visible.with(Vec::len),
            SOLUTIONS.len()
        );
    });

    view! {
        <PageLayout>
            <section class="section">
                <div class="container">
                    <SectionTitle
                        title="Live Prototypes & Experiments"
                        subtitle="Exploring the frontiers of technology through hands-on experimentation and rapid prototyping. Each project represents our commitment to pushing boundaries."
                    />

                    <CatalogControls
                        state=filter_state
                        labels=filter_labels(&CATEGORY_MAP)
                        placeholder="Search solutions..."
                        shown=Signal::derive(move || visible.with(Vec::len))
                        total=SOLUTIONS.len()
                        noun="solutions"
                    />

                    <div class="card-grid card-grid--three">
                        <For
                            each=move || visible.get()
                            key=|solution| solution.id()
                            children=|solution| {
                                view! { <SolutionCard solution=solution index=source_index(&SOLUTIONS, solution)/> }
                            }
                        />
                    </div>

                    <Show when=move || visible.with(Vec::is_empty)>
                        <p class="catalog-empty">"No solutions match your search."</p>
                    </Show>
                </div>
            </section>
        </PageLayout>
    }
}
