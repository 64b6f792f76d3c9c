//! Blog post cards: the wide featured layout and the grid layout.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::blog::BlogPost;
use crate::util::reveal::stagger_delay_ms;

#[component]
pub fn FeaturedPost(post: &'static BlogPost) -> impl IntoView {
    view! {
        <Reveal class="featured-post">
            <article class="featured-post__inner">
                <div class="featured-post__media">
                    <img src=post.image alt=post.title loading="lazy"/>
                </div>
                <div class="featured-post__body">
                    <div class="featured-post__badges">
                        <span class="badge badge--primary">"Featured"</span>
                        <span class="badge">{post.category}</span>
                    </div>
                    <h2 class="featured-post__title">{post.title}</h2>
                    <p class="featured-post__excerpt">{post.excerpt}</p>
                    <PostMeta post=post/>
                    <span class="link-arrow">"Read Article →"</span>
                </div>
            </article>
        </Reveal>
    }
}

#[component]
pub fn BlogCard(post: &'static BlogPost, index: usize) -> impl IntoView {
    view! {
        <Reveal delay_ms=stagger_delay_ms(index, 100) class="blog-card">
            <article>
                <div class="blog-card__media">
                    <img src=post.image alt=post.title loading="lazy"/>
                    <span class="badge blog-card__category">{post.category}</span>
                </div>
                <PostMeta post=post/>
                <h3 class="blog-card__title">{post.title}</h3>
                <p class="blog-card__excerpt">{post.excerpt}</p>
                <span class="link-arrow">"Read More →"</span>
            </article>
        </Reveal>
    }
}

#[component]
fn PostMeta(post: &'static BlogPost) -> impl IntoView {
    view! {
        <div class="post-meta">
            <span class="post-meta__date">"📅 " {post.date}</span>
            <span class="post-meta__read-time">"⏱ " {post.read_time}</span>
        </div>
    }
}
