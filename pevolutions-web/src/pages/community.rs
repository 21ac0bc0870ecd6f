use pevolutions_core::{CommunityHub, EventTag};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CommunityPageProps {
    pub hub: CommunityHub,
}

const fn tag_class(tag: EventTag) -> &'static str {
    match tag {
        EventTag::Contest => "tag-contest",
        EventTag::Tournament => "tag-tournament",
        EventTag::Update => "tag-update",
    }
}

#[function_component(CommunityPage)]
pub fn community_page(p: &CommunityPageProps) -> Html {
    html! {
        <section class="community">
            <header>
                <h1>{ "Community" }</h1>
                <p>{ "Join the conversation wherever you hang out." }</p>
            </header>
            <div class="socials">
                { for p.hub.socials.iter().map(|social| html! {
                    <a key={social.name.clone()} class={classes!("social", social.color.clone())} href={social.url.clone()}>
                        <span class="social-name">{ &social.name }</span>
                        <span class="social-members">{ &social.members }</span>
                    </a>
                }) }
            </div>
            <h2>{ "Upcoming Events" }</h2>
            <ul class="events">
                { for p.hub.events.iter().map(|event| html! {
                    <li key={event.title.clone()} class="event">
                        <span class={classes!("event-tag", tag_class(event.tag))}>{ event.tag.label() }</span>
                        <h3>{ &event.title }</h3>
                        <time>{ &event.date }</time>
                        <p>{ &event.description }</p>
                    </li>
                }) }
            </ul>
        </section>
    }
}
