//! Application shell: router, session context, and the containers that wire
//! the auth controller into the account pages.
use pevolutions_core::{AccountError, AuthError};

use crate::router::Route;

#[cfg(target_arch = "wasm32")]
use {
    crate::components::{Footer, Navbar},
    crate::data,
    crate::pages::{
        account::AccountPage,
        community::CommunityPage,
        downloads::DownloadsPage,
        forum::ForumPage,
        home::HomePage,
        login::{LoginAttempt, LoginPage},
        not_found::NotFound,
        online_players::OnlinePlayersPage,
        register::RegisterPage,
        support::SupportPage,
    },
    crate::storage::browser_auth,
    pevolutions_core::{ProfileUpdate, RegisterForm, SiteContent},
    std::rc::Rc,
    yew::prelude::*,
    yew_router::prelude::*,
};

#[cfg(target_arch = "wasm32")]
const TOP_PLAYERS: usize = 5;

/// Where a visitor should be sent instead of `route`, if anywhere.
#[must_use]
pub fn redirect_for(route: &Route, logged_in: bool) -> Option<Route> {
    if route.requires_session() && !logged_in {
        Some(Route::Login)
    } else if route.guest_only() && logged_in {
        Some(Route::Account)
    } else {
        None
    }
}

/// Browser tab title for `route`.
#[must_use]
pub fn page_title(route: &Route) -> String {
    format!("{} | PEvolutions", route.title())
}

/// Whether a failed operation means the stored session is gone.
#[must_use]
pub const fn ends_session(err: &AccountError) -> bool {
    matches!(
        err,
        AccountError::Auth(AuthError::NotSignedIn | AuthError::NoAccount)
    )
}

/// Login state shared with every route, plus a hook to re-read it from
/// storage after the controller changed it.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub logged_in: bool,
    pub refresh: Callback<()>,
}

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let logged_in = use_state(|| browser_auth().is_logged_in());
    let content = use_state(|| Rc::new(data::site_content()));
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    use_effect_with(route.clone(), |route| {
        if let Some(doc) = crate::dom::document() {
            doc.set_title(&page_title(route));
        }
    });

    let refresh = {
        let logged_in = logged_in.clone();
        Callback::from(move |()| logged_in.set(browser_auth().is_logged_in()))
    };
    let session = SessionContext {
        logged_in: *logged_in,
        refresh,
    };

    let render = {
        let content = Rc::clone(&content);
        let logged_in = *logged_in;
        move |route: Route| switch(route, &content, logged_in)
    };

    html! {
        <ContextProvider<SessionContext> context={session}>
            <a href="#main" class="sr-only">{ "Skip to content" }</a>
            <Navbar logged_in={*logged_in} current_path={route.to_path()} />
            <main id="main" role="main">
                <Switch<Route> render={render} />
            </main>
            <Footer />
        </ContextProvider<SessionContext>>
    }
}

#[cfg(target_arch = "wasm32")]
fn switch(route: Route, content: &SiteContent, logged_in: bool) -> Html {
    if let Some(target) = redirect_for(&route, logged_in) {
        return html! { <Redirect<Route> to={target} /> };
    }
    match route {
        Route::Home => {
            let top_players = content
                .players
                .top(TOP_PLAYERS)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>();
            html! {
                <HomePage {logged_in} {top_players} online={content.players.len()} />
            }
        }
        Route::Downloads => html! { <DownloadsPage catalog={content.downloads.clone()} /> },
        Route::Forum => html! { <ForumPage board={content.forum.clone()} /> },
        Route::Community => html! { <CommunityPage hub={content.community.clone()} /> },
        Route::Support => html! { <SupportPage desk={content.support.clone()} /> },
        Route::OnlinePlayers => html! { <OnlinePlayersPage roster={content.players.clone()} /> },
        Route::Login => html! { <LoginRoute /> },
        Route::Register => html! { <RegisterRoute /> },
        Route::Account => html! { <AccountRoute /> },
        Route::NotFound => html! { <NotFoundRoute /> },
    }
}

#[cfg(target_arch = "wasm32")]
fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| SessionContext {
        logged_in: false,
        refresh: Callback::noop(),
    })
}

#[cfg(target_arch = "wasm32")]
#[function_component(LoginRoute)]
fn login_route() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let error = use_state(|| None::<AttrValue>);

    let on_submit = {
        let error = error.clone();
        Callback::from(move |attempt: LoginAttempt| {
            let mut auth = browser_auth();
            match auth.login(&attempt.username, &attempt.password) {
                Ok(_) => {
                    error.set(None);
                    session.refresh.emit(());
                    if let Some(nav) = navigator.as_ref() {
                        nav.push(&Route::Account);
                    }
                }
                Err(err) => error.set(Some(err.to_string().into())),
            }
        })
    };

    html! { <LoginPage error={(*error).clone()} {on_submit} /> }
}

#[cfg(target_arch = "wasm32")]
#[function_component(RegisterRoute)]
fn register_route() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let error = use_state(|| None::<AttrValue>);

    let on_submit = {
        let error = error.clone();
        Callback::from(move |form: RegisterForm| {
            let mut auth = browser_auth();
            match auth.register(form) {
                Ok(_) => {
                    error.set(None);
                    session.refresh.emit(());
                    if let Some(nav) = navigator.as_ref() {
                        nav.push(&Route::Account);
                    }
                }
                Err(err) => error.set(Some(err.to_string().into())),
            }
        })
    };

    html! { <RegisterPage error={(*error).clone()} {on_submit} /> }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AccountRoute)]
fn account_route() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let notice = use_state(|| None::<AttrValue>);
    let error = use_state(|| None::<AttrValue>);

    let Some(user) = browser_auth().current_user() else {
        return html! { <Redirect<Route> to={Route::Login} /> };
    };

    let on_save = {
        let notice = notice.clone();
        let error = error.clone();
        let refresh = session.refresh.clone();
        Callback::from(move |update: ProfileUpdate| {
            let mut auth = browser_auth();
            match auth.update_profile(update) {
                Ok(_) => {
                    error.set(None);
                    notice.set(Some(AttrValue::from("Profile updated")));
                }
                Err(err) => {
                    notice.set(None);
                    error.set(Some(err.to_string().into()));
                    if ends_session(&err) {
                        refresh.emit(());
                    }
                }
            }
        })
    };
    let on_logout = {
        let refresh = session.refresh;
        Callback::from(move |()| {
            browser_auth().logout();
            refresh.emit(());
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::Home);
            }
        })
    };

    html! {
        <AccountPage
            {user}
            notice={(*notice).clone()}
            error={(*error).clone()}
            {on_save}
            {on_logout}
        />
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(NotFoundRoute)]
fn not_found_route() -> Html {
    let navigator = use_navigator();
    let on_go_home = Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Home);
        }
    });
    html! { <NotFound {on_go_home} /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pevolutions_core::ValidationError;

    #[test]
    fn account_requires_a_session() {
        assert_eq!(redirect_for(&Route::Account, false), Some(Route::Login));
        assert_eq!(redirect_for(&Route::Account, true), None);
    }

    #[test]
    fn auth_forms_bounce_signed_in_visitors() {
        assert_eq!(redirect_for(&Route::Login, true), Some(Route::Account));
        assert_eq!(redirect_for(&Route::Register, true), Some(Route::Account));
        assert_eq!(redirect_for(&Route::Login, false), None);
        assert_eq!(redirect_for(&Route::Forum, true), None);
        assert_eq!(redirect_for(&Route::Home, false), None);
    }

    #[test]
    fn page_titles_name_the_site() {
        assert_eq!(page_title(&Route::Account), "Dashboard | PEvolutions");
        assert_eq!(page_title(&Route::NotFound), "Not Found | PEvolutions");
    }

    #[test]
    fn only_session_loss_ends_the_session() {
        assert!(ends_session(&AccountError::from(AuthError::NotSignedIn)));
        assert!(ends_session(&AccountError::from(AuthError::NoAccount)));
        assert!(!ends_session(&AccountError::from(
            AuthError::InvalidCredentials
        )));
        assert!(!ends_session(&AccountError::from(
            ValidationError::MissingField("Email")
        )));
    }
}
