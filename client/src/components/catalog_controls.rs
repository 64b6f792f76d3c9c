//! Search field and category selector for catalog pages.

#[cfg(test)]
#[path = "catalog_controls_test.rs"]
mod catalog_controls_test;

use leptos::prelude::*;

use crate::catalog::FilterState;

/// "Showing 3 of 6" style summary for the current result.
#[must_use]
pub fn result_summary(shown: usize, total: usize, noun: &str) -> String {
    if shown == total {
        format!("Showing all {total} {noun}")
    } else {
        format!("Showing {shown} of {total} {noun}")
    }
}

/// Binds a text input and a single-select control to `state`.
#[component]
pub fn CatalogControls(
    state: RwSignal<FilterState>,
    labels: Vec<&'static str>,
    placeholder: &'static str,
    #[prop(into)] shown: Signal<usize>,
    total: usize,
    noun: &'static str,
) -> impl IntoView {
    view! {
        <div class="catalog-controls">
            <input
                class="catalog-controls__search"
                type="search"
                placeholder=placeholder
                aria-label=placeholder
                prop:value=move || state.with(|s| s.search_term.clone())
                on:input=move |ev| state.update(|s| s.set_search(event_target_value(&ev)))
            />
            <select
                class="catalog-controls__select"
                aria-label="Filter by category"
                prop:value=move || state.with(|s| s.selected_filter.clone())
                on:change=move |ev| state.update(|s| s.set_filter(event_target_value(&ev)))
            >
                {labels
                    .into_iter()
                    .map(|label| {
                        view! {
                            <option value=label>{label}</option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
            <Show when=move || !state.with(FilterState::is_default)>
                <button class="btn btn--ghost catalog-controls__clear" on:click=move |_| state.update(FilterState::reset)>
                    "Clear"
                </button>
            </Show>
            <span class="catalog-controls__summary">{move || result_summary(shown.get(), total, noun)}</span>
        </div>
    }
}
