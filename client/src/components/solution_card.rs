//! Card for one solution prototype.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::solutions::Solution;
use crate::util::reveal::stagger_delay_ms;

#[component]
pub fn SolutionCard(solution: &'static Solution, index: usize) -> impl IntoView {
    let status = solution.status;
    view! {
        <Reveal delay_ms=stagger_delay_ms(index, 100) class="solution-card">
            <div class="solution-card__media">
                <img src=solution.image alt=solution.title loading="lazy"/>
                <span class=status.badge_class()>{status.label()}</span>
            </div>
            <div class="solution-card__body">
                <div class="tag-list">
                    {solution.tags.iter().map(|tag| view! { <span class="tag">{*tag}</span> }).collect::<Vec<_>>()}
                </div>
                <h3 class="solution-card__title">{solution.title}</h3>
                <p class="solution-card__description">{solution.description}</p>
                <a href="#" class="btn btn--outline btn--block">"View Demo ↗"</a>
            </div>
        </Reveal>
    }
}
