use pevolutions_core::Player;
use yew::prelude::*;

use crate::components::{LoginBox, RequirementsCard, RouteLink, ServerInfo, TopPlayers};
use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct HomePageProps {
    pub logged_in: bool,
    pub top_players: Vec<Player>,
    pub online: usize,
}

const HIGHLIGHTS: [(&str, &str); 2] = [
    (
        "Optimized map",
        "to explore the entire Kanto region without limits.",
    ),
    (
        "Optimized map based on the Kanto region",
        "with unique features.",
    ),
];

#[function_component(HomePage)]
pub fn home_page(p: &HomePageProps) -> Html {
    html! {
        <div class="home-layout">
            <section class="hero panel">
                <h1>{ "PEvolutions " }<span class="accent">{ "BETA" }</span></h1>
                <h2>{ "Welcome to the PEvolutions BETA!" }</h2>
                <p>
                    { "The World meets its latest adventure in the Kanto region. Join thousands of trainers in this new journey." }
                </p>
                <ul class="highlights">
                    { for HIGHLIGHTS.iter().map(|(lead, rest)| html! {
                        <li><strong>{ *lead }</strong>{ format!(" {rest}") }</li>
                    }) }
                </ul>
                <RouteLink to={Route::Downloads} class={classes!("btn-primary")}>{ "Download" }</RouteLink>
            </section>
            <aside class="sidebar">
                if !p.logged_in {
                    <LoginBox />
                }
                <TopPlayers players={p.top_players.clone()} />
                <ServerInfo online={p.online} />
                <RequirementsCard />
            </aside>
        </div>
    }
}
