//! Landing page: hero, mission, technologies, highlights, call to action.

use leptos::prelude::*;

use crate::components::hero::Hero;
use crate::components::page_layout::PageLayout;
use crate::components::reveal::Reveal;
use crate::content::home::{
    BANNER_CAPTION, BANNER_IMAGE, COMPARISONS, CTA_BODY, CTA_TITLE, HIGHLIGHTS, MISSION_BODY, MISSION_TITLE,
    TECHNOLOGIES,
};
use crate::util::reveal::{RevealVariant, stagger_delay_ms};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageLayout>
            <Hero/>

            <section class="section section--gradient">
                <div class="container about">
                    <Reveal variant=RevealVariant::SlideRight delay_ms=200 class="about__comparison">
                        {COMPARISONS
                            .iter()
                            .map(|item| {
                                view! {
                                    <div class="comparison-card" class:comparison-card--highlighted=item.highlighted>
                                        <h4 class="comparison-card__name">{item.name}</h4>
                                        <ul class="comparison-card__points">
                                            {item.points.iter().map(|point| view! { <li>{*point}</li> }).collect::<Vec<_>>()}
                                        </ul>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </Reveal>
                    <Reveal variant=RevealVariant::SlideLeft delay_ms=100 class="about__mission">
                        <h2 class="about__title">{MISSION_TITLE}</h2>
                        <p class="about__body">{MISSION_BODY}</p>
                    </Reveal>
                </div>
            </section>

            <section id="solutions" class="section section--muted">
                <div class="container">
                    <Reveal class="banner">
                        <img src=BANNER_IMAGE alt="Labs Technology Experiments" class="banner__image"/>
                        <div class="banner__overlay"></div>
                        <h2 class="banner__caption">{BANNER_CAPTION}</h2>
                    </Reveal>

                    <div class="tech-grid">
                        {TECHNOLOGIES
                            .iter()
                            .enumerate()
                            .map(|(index, (name, modifier))| {
                                view! {
                                    <Reveal delay_ms=stagger_delay_ms(index, 100) class=format!("tech-tile {modifier}")>
                                        <h4 class="tech-tile__name">{*name}</h4>
                                    </Reveal>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <Reveal variant=RevealVariant::FadeIn delay_ms=800 class="section__cta">
                        <a href="/solutions" class="btn btn--primary btn--lg">"See Our Experiments →"</a>
                    </Reveal>
                </div>
            </section>

            <section class="section">
                <div class="container highlight-grid">
                    {HIGHLIGHTS
                        .iter()
                        .enumerate()
                        .map(|(index, highlight)| {
                            view! {
                                <Reveal delay_ms=stagger_delay_ms(index, 100) class="highlight-card">
                                    <span class="highlight-card__icon" aria-hidden="true">{highlight.icon}</span>
                                    <h3 class="highlight-card__title">{highlight.title}</h3>
                                    <p class="highlight-card__description">{highlight.description}</p>
                                    <a href=highlight.link class="link-arrow">{highlight.link_text} " →"</a>
                                </Reveal>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <Reveal variant=RevealVariant::ZoomIn class="cta">
                        <h2 class="cta__title">{CTA_TITLE}</h2>
                        <p class="cta__body">{CTA_BODY}</p>
                        <a href="/contact" class="btn btn--primary btn--lg">"Let's Talk →"</a>
                    </Reveal>
                </div>
            </section>
        </PageLayout>
    }
}
