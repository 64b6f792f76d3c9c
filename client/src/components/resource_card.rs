//! Card linking to a paper, doc, video or download.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::resources::Resource;
use crate::util::reveal::stagger_delay_ms;

#[component]
pub fn ResourceCard(resource: &'static Resource, index: usize) -> impl IntoView {
    let kind = resource.kind;
    view! {
        <Reveal delay_ms=stagger_delay_ms(index, 50) class="resource-card">
            <a href=resource.link class="resource-card__link">
                <div class="resource-card__header">
                    <span class="resource-card__icon" aria-hidden="true">{kind.icon()}</span>
                    <span class="resource-card__type">{kind.label()}</span>
                    {resource.date.map(|date| view! { <span class="resource-card__date">{date}</span> })}
                </div>
                <h3 class="resource-card__title">{resource.title}</h3>
                <p class="resource-card__description">{resource.description}</p>
                <span class="link-arrow">"Open ↗"</span>
            </a>
        </Reveal>
    }
}
