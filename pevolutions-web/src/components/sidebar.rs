//! Home page sidebar cards.
use pevolutions_core::Player;
use yew::prelude::*;

use crate::components::RouteLink;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct SidebarCardProps {
    pub title: AttrValue,
    #[prop_or(true)]
    pub default_expanded: bool,
    #[prop_or_default]
    pub children: Html,
}

/// Collapsible card; the header button toggles the body.
#[function_component(SidebarCard)]
pub fn sidebar_card(p: &SidebarCardProps) -> Html {
    let open = use_state(|| p.default_expanded);
    let toggle = {
        let open = open.clone();
        Callback::from(move |_| open.set(!*open))
    };
    html! {
        <section class="sidebar-card">
            <button type="button" class="sidebar-card-header" aria-expanded={open.to_string()} onclick={toggle}>
                <h3>{ p.title.clone() }</h3>
            </button>
            if *open {
                <div class="sidebar-card-body">{ p.children.clone() }</div>
            }
        </section>
    }
}

#[function_component(LoginBox)]
pub fn login_box() -> Html {
    html! {
        <SidebarCard title="Login / Register">
            <RouteLink to={Route::Login} class={classes!("login-link")}>{ "Login" }</RouteLink>
            <div class="account-links">
                <RouteLink to={Route::Register}>{ "New Account" }</RouteLink>
                <a href="#">{ "Account Recovery" }</a>
            </div>
        </SidebarCard>
    }
}

#[derive(Properties, PartialEq)]
pub struct TopPlayersProps {
    /// Already ranked, best first.
    pub players: Vec<Player>,
}

#[function_component(TopPlayers)]
pub fn top_players(p: &TopPlayersProps) -> Html {
    html! {
        <SidebarCard title="Top 5 Players">
            <ol class="top-players">
                { for p.players.iter().enumerate().map(|(i, player)| html! {
                    <li key={player.id}>
                        <span class="rank">{ i + 1 }</span>
                        <span class="name">{ &player.name }</span>
                        <span class="level">{ format!("Lv. {}", player.level) }</span>
                    </li>
                }) }
            </ol>
        </SidebarCard>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServerInfoProps {
    pub online: usize,
}

#[function_component(ServerInfo)]
pub fn server_info(p: &ServerInfoProps) -> Html {
    html! {
        <SidebarCard title="Server Info">
            <div class="server-status">
                <span>{ "Status" }</span>
                <span class="online">{ "ONLINE" }</span>
            </div>
            <RouteLink to={Route::OnlinePlayers} class={classes!("players-online")}>
                <span>{ "Players Online:" }</span>
                <span class="count">{ format!("{:02}", p.online) }</span>
            </RouteLink>
        </SidebarCard>
    }
}

const REQUIREMENTS: [(&str, &str); 4] = [
    ("OS", "Windows 7/8/10/11"),
    ("RAM", "2GB (Recommended 4GB)"),
    ("Disk Space", "500MB"),
    ("Graphics", "DirectX 9.0c equivalent"),
];

#[function_component(RequirementsCard)]
pub fn requirements_card() -> Html {
    html! {
        <SidebarCard title="System Requirements">
            <dl class="requirements">
                { for REQUIREMENTS.iter().map(|(label, value)| html! {
                    <>
                        <dt>{ format!("{label}:") }</dt>
                        <dd>{ *value }</dd>
                    </>
                }) }
            </dl>
        </SidebarCard>
    }
}
