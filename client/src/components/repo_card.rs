//! Card for one open-source repository.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::repositories::{Repository, format_count};
use crate::util::reveal::{RevealVariant, stagger_delay_ms};

#[component]
pub fn RepoCard(repo: &'static Repository, index: usize) -> impl IntoView {
    let url = repo.url();
    let swatch = format!("background-color: {};", repo.language_color);
    view! {
        <Reveal variant=RevealVariant::ZoomIn delay_ms=stagger_delay_ms(index, 100) class="repo-card">
            <div class="repo-card__header">
                <span class="repo-card__icon" aria-hidden="true">"⑂"</span>
                <h3 class="repo-card__name">{repo.name}</h3>
                <a href=url.clone() class="repo-card__external" target="_blank" rel="noopener noreferrer" aria-label="Open repository">
                    "↗"
                </a>
            </div>
            <p class="repo-card__description">{repo.description}</p>
            <div class="tag-list">
                {repo.topics.iter().map(|topic| view! { <span class="tag tag--muted">{*topic}</span> }).collect::<Vec<_>>()}
            </div>
            <div class="repo-card__footer">
                <div class="repo-card__stats">
                    <span class="repo-card__language">
                        <span class="repo-card__swatch" style=swatch></span>
                        {repo.language}
                    </span>
                    <span class="repo-card__stars">"★ " {format_count(repo.stars)}</span>
                    <span class="repo-card__forks">"⑂ " {format_count(repo.forks)}</span>
                </div>
                <a href=url class="btn btn--outline btn--sm" target="_blank" rel="noopener noreferrer">
                    "View Repo"
                </a>
            </div>
        </Reveal>
    }
}
