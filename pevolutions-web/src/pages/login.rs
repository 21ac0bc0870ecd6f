use yew::prelude::*;

use crate::components::RouteLink;
use crate::router::Route;

/// Credentials typed into the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginAttempt {
    pub username: String,
    pub password: String,
}

#[derive(Properties, PartialEq, Clone)]
pub struct LoginPageProps {
    /// Message from the last rejected attempt.
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_submit: Callback<LoginAttempt>,
}

/// `oninput` handler mirroring a text field into `state`.
pub(crate) fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

#[function_component(LoginPage)]
pub fn login_page(p: &LoginPageProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let cb = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(LoginAttempt {
                username: (*username).clone(),
                password: (*password).clone(),
            });
        })
    };

    html! {
        <section class="auth-card login">
            <h1>{ "Login" }</h1>
            if let Some(error) = &p.error {
                <p class="form-error" role="alert">{ error.clone() }</p>
            }
            <form {onsubmit}>
                <label for="login-username">{ "Username" }</label>
                <input
                    id="login-username"
                    name="username"
                    type="text"
                    required=true
                    placeholder="Enter your username"
                    value={(*username).clone()}
                    oninput={bind_input(&username)}
                />
                <label for="login-password">{ "Password" }</label>
                <input
                    id="login-password"
                    name="password"
                    type="password"
                    required=true
                    placeholder="••••••••"
                    value={(*password).clone()}
                    oninput={bind_input(&password)}
                />
                <a class="forgot" href="#">{ "Forgot password?" }</a>
                <button type="submit" class="btn-primary">{ "Login" }</button>
            </form>
            <p class="switch">
                { "No account yet? " }
                <RouteLink to={Route::Register}>{ "Create one" }</RouteLink>
            </p>
        </section>
    }
}
