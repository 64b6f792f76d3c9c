//! Page and section heading with optional subtitle.

#[cfg(test)]
#[path = "section_title_test.rs"]
mod section_title_test;

use leptos::prelude::*;

use crate::components::reveal::Reveal;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

impl Align {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Left => "section-title section-title--left",
            Self::Center => "section-title section-title--center",
            Self::Right => "section-title section-title--right",
        }
    }
}

#[component]
pub fn SectionTitle(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(optional)] align: Align,
) -> impl IntoView {
    view! {
        <Reveal class=align.class()>
            <h2 class="section-title__heading">{title}</h2>
            {subtitle.map(|text| view! { <p class="section-title__subtitle">{text}</p> })}
        </Reveal>
    }
}
