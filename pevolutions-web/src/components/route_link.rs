//! In-app link: a real `href` for crawlers and new tabs, router navigation for
//! plain clicks.
use yew::prelude::*;
use yew_router::prelude::*;

use crate::paths::route_href;
use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct RouteLinkProps {
    pub to: Route,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub aria_current: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

/// Whether a click should stay inside the app. Modified or non-primary clicks
/// are left to the browser.
#[must_use]
pub const fn is_plain_click(button: i16, ctrl: bool, meta: bool, shift: bool, alt: bool) -> bool {
    button == 0 && !ctrl && !meta && !shift && !alt
}

#[function_component(RouteLink)]
pub fn route_link(p: &RouteLinkProps) -> Html {
    let navigator = use_navigator();
    let onclick = {
        let to = p.to.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(nav) = navigator.as_ref() else {
                return;
            };
            if is_plain_click(e.button(), e.ctrl_key(), e.meta_key(), e.shift_key(), e.alt_key()) {
                e.prevent_default();
                nav.push(&to);
            }
        })
    };
    html! {
        <a
            href={route_href(&p.to.to_path())}
            class={p.class.clone()}
            aria-current={p.aria_current.clone()}
            {onclick}
        >
            { p.children.clone() }
        </a>
    }
}
