//! Team roster page.

use leptos::prelude::*;

use crate::components::page_layout::PageLayout;
use crate::components::section_title::SectionTitle;
use crate::components::team_card::TeamCard;
use crate::content::team::TEAM;

#[component]
pub fn TeamPage() -> impl IntoView {
    view! {
        <PageLayout>
            <section class="section">
                <div class="container">
                    <SectionTitle
                        title="The Builders"
                        subtitle="A diverse team of researchers, engineers, and creators pushing the boundaries of technology together."
                    />
                    <div class="card-grid card-grid--three">
                        {TEAM
                            .iter()
                            .enumerate()
                            .map(|(index, member)| view! { <TeamCard member=member index=index/> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </section>
        </PageLayout>
    }
}
