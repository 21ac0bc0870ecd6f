use pevolutions_core::RegisterForm;
use yew::prelude::*;

use super::login::bind_input;
use crate::components::{CountrySelector, RouteLink};
use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct RegisterPageProps {
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_submit: Callback<RegisterForm>,
}

#[function_component(RegisterPage)]
pub fn register_page(p: &RegisterPageProps) -> Html {
    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let country = use_state(String::new);

    let on_country = {
        let country = country.clone();
        Callback::from(move |code: String| country.set(code))
    };

    let onsubmit = {
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let country = country.clone();
        let cb = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(RegisterForm {
                username: (*username).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
                confirm_password: (*confirm).clone(),
                country: Some((*country).clone()).filter(|c| !c.is_empty()),
            });
        })
    };

    html! {
        <section class="auth-card register">
            <h1>{ "Create Account" }</h1>
            if let Some(error) = &p.error {
                <p class="form-error" role="alert">{ error.clone() }</p>
            }
            <form {onsubmit}>
                <label for="register-username">{ "Username" }</label>
                <input
                    id="register-username"
                    name="username"
                    type="text"
                    required=true
                    placeholder="Enter your username"
                    value={(*username).clone()}
                    oninput={bind_input(&username)}
                />
                <label for="register-email">{ "Email Address" }</label>
                <input
                    id="register-email"
                    name="email"
                    type="email"
                    required=true
                    placeholder="example@email.com"
                    value={(*email).clone()}
                    oninput={bind_input(&email)}
                />
                <label for="register-password">{ "Password" }</label>
                <input
                    id="register-password"
                    name="password"
                    type="password"
                    required=true
                    placeholder="••••••••"
                    value={(*password).clone()}
                    oninput={bind_input(&password)}
                />
                <label for="register-confirm">{ "Confirm Password" }</label>
                <input
                    id="register-confirm"
                    name="confirm_password"
                    type="password"
                    required=true
                    placeholder="••••••••"
                    value={(*confirm).clone()}
                    oninput={bind_input(&confirm)}
                />
                <CountrySelector
                    label="Country"
                    value={AttrValue::from((*country).clone())}
                    on_change={on_country}
                />
                <button type="submit" class="btn-primary">{ "Register" }</button>
            </form>
            <p class="switch">
                { "Already a trainer? " }
                <RouteLink to={Route::Login}>{ "Login" }</RouteLink>
            </p>
        </section>
    }
}
