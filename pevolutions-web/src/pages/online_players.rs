use pevolutions_core::{PlayerRoster, PlayerSort};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct OnlinePlayersPageProps {
    pub roster: PlayerRoster,
    #[prop_or_default]
    pub initial_query: AttrValue,
    #[prop_or_default]
    pub initial_sort: PlayerSort,
}

#[function_component(OnlinePlayersPage)]
pub fn online_players_page(p: &OnlinePlayersPageProps) -> Html {
    let query = use_state(|| p.initial_query.to_string());
    let sort = use_state(|| p.initial_sort);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let sort_buttons = PlayerSort::ALL.iter().map(|&option| {
        let active = *sort == option;
        let onclick = {
            let sort = sort.clone();
            Callback::from(move |_| sort.set(option))
        };
        html! {
            <button
                type="button"
                class={classes!("sort-button", active.then_some("active"))}
                aria-pressed={active.to_string()}
                {onclick}
            >
                { option.label() }
            </button>
        }
    });

    let players = p.roster.filter_and_sort(&query, *sort);

    html! {
        <section class="online-players">
            <header>
                <h1>{ "Online Players" }</h1>
                <p>{ format!("{} trainers online", p.roster.len()) }</p>
            </header>
            <div class="player-controls">
                <input
                    type="search"
                    class="player-search"
                    placeholder="Search trainer..."
                    aria-label="Search trainer"
                    value={(*query).clone()}
                    oninput={on_search}
                />
                <div class="sort-buttons" role="group" aria-label="Sort by">
                    { for sort_buttons }
                </div>
            </div>
            if players.is_empty() {
                <p class="empty">{ "No players found" }</p>
            } else {
                <table class="player-table">
                    <thead>
                        <tr>
                            <th>{ "#" }</th>
                            <th>{ "Trainer" }</th>
                            <th>{ "Level" }</th>
                            <th>{ "Captures" }</th>
                            <th>{ "Fishing" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for players.iter().enumerate().map(|(i, player)| html! {
                            <tr key={player.id} class="player-row">
                                <td>{ i + 1 }</td>
                                <td class="trainer">
                                    <img src={player.avatar.clone()} alt="" loading="lazy" />
                                    <span class="player-name">{ &player.name }</span>
                                    <span class="gender">{ player.gender.label() }</span>
                                </td>
                                <td>{ player.level }</td>
                                <td>{ player.captures }</td>
                                <td>{ player.fishing_level }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            }
        </section>
    }
}
