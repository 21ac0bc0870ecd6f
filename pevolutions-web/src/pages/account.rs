use pevolutions_core::{CountryCode, ProfileUpdate, UserRecord};
use yew::prelude::*;

use super::login::bind_input;
use crate::components::CountrySelector;

#[derive(Properties, PartialEq, Clone)]
pub struct AccountPageProps {
    pub user: UserRecord,
    /// Confirmation after a successful save.
    #[prop_or_default]
    pub notice: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_save: Callback<ProfileUpdate>,
    pub on_logout: Callback<()>,
}

const DASHBOARD_STATS: [(&str, &str); 3] = [
    ("Total Playing", "12h 45m"),
    ("Pokémon Caught", "1,240"),
    ("World Ranking", "#4,520"),
];

const RECENT_ACTIVITY: [(&str, &str); 3] = [
    ("Caught a Shiny Charizard", "2 hours ago"),
    ("Reached Level 85", "5 hours ago"),
    ("Traded with MistyTrainer", "1 day ago"),
];

/// Only fields that differ from the stored record end up in the update.
/// A cleared email is still sent so the controller can reject it.
#[must_use]
pub fn changed_fields(user: &UserRecord, email: &str, country: &str) -> ProfileUpdate {
    let email = (email.trim() != user.email).then(|| email.to_string());
    let current = user.country.as_ref().map_or("", CountryCode::as_str);
    let country = if country.is_empty() || country.eq_ignore_ascii_case(current) {
        None
    } else {
        CountryCode::parse(country).ok()
    };
    ProfileUpdate { email, country }
}

#[function_component(AccountPage)]
pub fn account_page(p: &AccountPageProps) -> Html {
    let user = &p.user;
    let email = use_state(|| user.email.clone());
    let country = use_state(|| {
        user.country
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    });

    let on_country = {
        let country = country.clone();
        Callback::from(move |code: String| country.set(code))
    };
    let onsubmit = {
        let email = email.clone();
        let country = country.clone();
        let user = user.clone();
        let cb = p.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(changed_fields(&user, &email, &country));
        })
    };
    let logout = {
        let cb = p.on_logout.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let country_name = user
        .country
        .as_ref()
        .and_then(CountryCode::country)
        .map_or("Unknown", |c| c.name);

    html! {
        <section class="account">
            <header class="account-header">
                <h1>{ "Account" }</h1>
                <button type="button" class="btn-secondary" onclick={logout}>{ "Logout" }</button>
            </header>
            <article class="profile-card">
                <h2 class="profile-name">{ &user.username }</h2>
                <p class="profile-email">{ &user.email }</p>
                <dl>
                    <dt>{ "Type" }</dt>
                    <dd>{ "Trainer" }</dd>
                    <dt>{ "Country" }</dt>
                    <dd>{ country_name }</dd>
                    <dt>{ "Joined" }</dt>
                    <dd>{ "Jan 2026" }</dd>
                </dl>
            </article>
            <div class="dashboard-stats">
                { for DASHBOARD_STATS.iter().map(|(label, value)| html! {
                    <div class="stat">
                        <span class="stat-value">{ *value }</span>
                        <span class="stat-label">{ *label }</span>
                    </div>
                }) }
            </div>
            <h3>{ "Recent Activity" }</h3>
            <ul class="activity">
                { for RECENT_ACTIVITY.iter().map(|(action, when)| html! {
                    <li>
                        <span>{ *action }</span>
                        <time>{ *when }</time>
                    </li>
                }) }
            </ul>
            <form class="settings" {onsubmit}>
                <h3>{ "Settings" }</h3>
                if let Some(notice) = &p.notice {
                    <p class="form-notice" role="status">{ notice.clone() }</p>
                }
                if let Some(error) = &p.error {
                    <p class="form-error" role="alert">{ error.clone() }</p>
                }
                <label for="account-email">{ "Email Address" }</label>
                <input
                    id="account-email"
                    name="email"
                    type="email"
                    value={(*email).clone()}
                    oninput={bind_input(&email)}
                />
                <CountrySelector
                    label="Country"
                    value={AttrValue::from((*country).clone())}
                    on_change={on_country}
                />
                <button type="submit" class="btn-primary">{ "Save changes" }</button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ash() -> UserRecord {
        UserRecord {
            username: "Ash".into(),
            email: "ash@example.com".into(),
            password: "p1".into(),
            country: CountryCode::parse("JP").ok(),
        }
    }

    #[test]
    fn unchanged_form_yields_empty_update() {
        assert!(changed_fields(&ash(), "ash@example.com", "JP").is_empty());
        assert!(changed_fields(&ash(), " ash@example.com ", "jp").is_empty());
    }

    #[test]
    fn only_edited_fields_are_sent() {
        let update = changed_fields(&ash(), "ash@pallet.town", "JP");
        assert_eq!(update.email.as_deref(), Some("ash@pallet.town"));
        assert_eq!(update.country, None);

        let update = changed_fields(&ash(), "ash@example.com", "BR");
        assert_eq!(update.email, None);
        assert_eq!(update.country, CountryCode::parse("BR").ok());
    }

    #[test]
    fn cleared_email_is_forwarded() {
        let update = changed_fields(&ash(), "", "JP");
        assert_eq!(update.email.as_deref(), Some(""));
    }
}
