use yew::prelude::*;

use crate::components::RouteLink;
use crate::router::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <nav aria-label="Footer">
                <RouteLink to={Route::Support}>{ "Support" }</RouteLink>
                <RouteLink to={Route::OnlinePlayers}>{ "Online Players" }</RouteLink>
                <RouteLink to={Route::Downloads}>{ "Downloads" }</RouteLink>
            </nav>
            <p>{ "PEvolutions is a non-profit fan project." }</p>
        </footer>
    }
}
