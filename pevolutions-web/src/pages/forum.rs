use pevolutions_core::{ForumBoard, ForumCategory, format_post_count, format_thousands};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ForumPageProps {
    pub board: ForumBoard,
}

fn category_row(category: &ForumCategory) -> Html {
    html! {
        <article class="forum-category" key={category.id}>
            <div class={classes!("category-icon", category.accent.clone())}></div>
            <div class="category-body">
                <h3>{ &category.title }</h3>
                <p>{ &category.description }</p>
            </div>
            <dl class="category-counts">
                <dt>{ "Topics" }</dt>
                <dd>{ category.topics }</dd>
                <dt>{ "Posts" }</dt>
                <dd>{ format_post_count(category.posts) }</dd>
            </dl>
            if let Some(latest) = &category.latest_post {
                <div class="latest-post">
                    <span class="latest-title">{ &latest.title }</span>
                    <span class="latest-meta">{ format!("by {} · {}", latest.author, latest.date) }</span>
                </div>
            }
        </article>
    }
}

#[function_component(ForumPage)]
pub fn forum_page(p: &ForumPageProps) -> Html {
    let stats = p.board.stats;
    let counters = [
        ("Topics", stats.topics),
        ("Posts", stats.posts),
        ("Members", stats.members),
        ("Online", stats.online),
    ];
    html! {
        <section class="forum">
            <header>
                <h1>{ "Community Forum" }</h1>
                <p>{ "Discuss strategies, share your captures and meet other trainers." }</p>
            </header>
            <div class="forum-categories">
                { for p.board.categories.iter().map(category_row) }
            </div>
            <div class="forum-stats">
                { for counters.iter().map(|(label, value)| html! {
                    <div class="stat">
                        <span class="stat-value">{ format_thousands(*value) }</span>
                        <span class="stat-label">{ *label }</span>
                    </div>
                }) }
            </div>
        </section>
    }
}
