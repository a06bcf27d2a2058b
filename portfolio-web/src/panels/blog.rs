//! # Blog Panel
//!
//! Published post cards. Both an absent section and an empty list show the
//! same placeholder message.

use leptos::prelude::*;
use shared::utils::split_tags;
use shared::BlogPost;

use crate::state::portfolio::use_portfolio_context;
use crate::utils::format::format_datetime_day;

#[component]
pub fn BlogPanel() -> impl IntoView {
    let portfolio = use_portfolio_context();

    let posts = move || {
        portfolio
            .data
            .with(|data| data.as_ref().and_then(|d| d.blog_posts.clone()))
            .unwrap_or_default()
    };

    view! {
        <div class="blog">
            <h2 class="section-title">"Blog"</h2>
            <div class="blog-grid">
                {move || {
                    let posts = posts();
                    if posts.is_empty() {
                        view! { <p class="empty-message">"Posts are being updated."</p> }
                            .into_any()
                    } else {
                        posts.into_iter().map(blog_card).collect_view().into_any()
                    }
                }}
            </div>
        </div>
    }
}

fn blog_card(post: BlogPost) -> impl IntoView {
    let date = post
        .published_at
        .or(post.created_at)
        .map(format_datetime_day);
    let tags = post
        .tags
        .as_deref()
        .map(split_tags)
        .unwrap_or_default();
    let href = format!("/blog/{}", post.slug);

    view! {
        <article class="blog-card">
            {post.image.map(|src| view! { <img class="blog-image" src=src alt=post.title.clone()/> })}
            <h3 class="blog-title">{post.title}</h3>
            {date.map(|d| view! { <span class="blog-date">{d}</span> })}
            {post.excerpt.map(|e| view! { <p class="blog-excerpt">{e}</p> })}
            <div class="blog-tags">
                {tags
                    .into_iter()
                    .map(|t| view! { <span class="tag">{t}</span> })
                    .collect_view()}
            </div>
            <a class="blog-link" href=href>"Read more"</a>
        </article>
    }
}
