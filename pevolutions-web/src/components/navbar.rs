use yew::prelude::*;

use crate::components::RouteLink;
use crate::nav::{is_active, nav_links};
use crate::paths::asset_path;
use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct NavbarProps {
    pub logged_in: bool,
    /// Path of the page being shown, without the deployment base.
    pub current_path: AttrValue,
}

fn link_class(active: bool) -> &'static str {
    if active { "nav-link active" } else { "nav-link" }
}

#[function_component(Navbar)]
pub fn navbar(p: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let links = nav_links(p.logged_in);
    let render_links = |class_prefix: &'static str| -> Html {
        links
            .iter()
            .map(|link| {
                let href = link.href();
                let active = is_active(&p.current_path, &href);
                html! {
                    <RouteLink
                        key={link.label}
                        to={link.route.clone()}
                        class={classes!(class_prefix, link_class(active))}
                        aria_current={active.then_some(AttrValue::from("page"))}
                    >
                        { link.label }
                    </RouteLink>
                }
            })
            .collect()
    };

    html! {
        <nav class="navbar" aria-label="Main">
            <RouteLink to={Route::Home} class={classes!("brand")}>
                <img src={asset_path("static/img/logo.svg")} alt="" width="32" height="32" />
                <span class="brand-name">{ "PEvolutions" }</span>
            </RouteLink>
            <div class="nav-links desktop">
                { render_links("desktop") }
            </div>
            <button
                type="button"
                class="menu-toggle"
                aria-expanded={menu_open.to_string()}
                aria-controls="mobile-menu"
                onclick={toggle_menu}
            >
                { "Menu" }
            </button>
            if *menu_open {
                <div id="mobile-menu" class="nav-links mobile">
                    { render_links("mobile") }
                </div>
            }
        </nav>
    }
}
