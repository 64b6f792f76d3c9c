//! Blog index: featured post followed by the post grid.

use leptos::prelude::*;

use crate::components::blog_card::{BlogCard, FeaturedPost};
use crate::components::page_layout::PageLayout;
use crate::components::section_title::SectionTitle;
use crate::content::blog::{BLOG_POSTS, split_featured};

#[component]
pub fn BlogPage() -> impl IntoView {
    let (featured, regular) = split_featured(&BLOG_POSTS);

    view! {
        <PageLayout>
            <section class="section">
                <div class="container">
                    <SectionTitle
                        title="Insights & Research"
                        subtitle="Deep dives into emerging technologies, tutorials, and lessons from our experiments. Join us on our journey of discovery."
                    />

                    {featured.map(|post| view! { <FeaturedPost post=post/> })}

                    <div class="card-grid card-grid--three">
                        {regular
                            .into_iter()
                            .enumerate()
                            .map(|(index, post)| view! { <BlogCard post=post index=index/> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </section>
        </PageLayout>
    }
}
