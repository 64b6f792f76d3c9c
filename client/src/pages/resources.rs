//! Resource library.

use leptos::prelude::*;

use crate::components::page_layout::PageLayout;
use crate::components::resource_card::ResourceCard;
use crate::components::section_title::SectionTitle;
use crate::content::resources::RESOURCES;

#[component]
pub fn ResourcesPage() -> impl IntoView {
    view! {
        <PageLayout>
            <section class="section">
                <div class="container">
                    <SectionTitle
                        title="Resources"
                        subtitle="Documentation, research papers, tutorials, and tools to help you explore and build with our technology."
                    />
                    <div class="card-grid card-grid--four">
                        {RESOURCES
                            .iter()
                            .enumerate()
                            .map(|(index, resource)| view! { <ResourceCard resource=resource index=index/> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </section>
        </PageLayout>
    }
}
