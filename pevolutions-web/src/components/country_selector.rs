use pevolutions_core::countries::{self, Country, flag_url};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CountrySelectorProps {
    /// Selected country code, empty when nothing is chosen.
    pub value: AttrValue,
    pub on_change: Callback<String>,
    pub label: AttrValue,
    #[prop_or_else(|| AttrValue::from("Select..."))]
    pub placeholder: AttrValue,
    #[prop_or_else(|| AttrValue::from("Search country..."))]
    pub search_placeholder: AttrValue,
    #[prop_or_default]
    pub initially_open: bool,
}

fn flag(country: &Country) -> Html {
    html! {
        <img
            src={flag_url(country.code, 40)}
            srcset={format!("{} 2x", flag_url(country.code, 80))}
            width="20"
            height="15"
            alt={country.name}
            loading="lazy"
        />
    }
}

/// Searchable dropdown over the country catalog.
#[function_component(CountrySelector)]
pub fn country_selector(p: &CountrySelectorProps) -> Html {
    let open = use_state(|| p.initially_open);
    let query = use_state(String::new);

    let selected = countries::find(&p.value);

    let toggle = {
        let open = open.clone();
        let query = query.clone();
        Callback::from(move |_| {
            if *open {
                query.set(String::new());
            }
            open.set(!*open);
        })
    };
    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let options = if *open {
        let matches = countries::search(&query);
        let list = if matches.is_empty() {
            html! { <div class="country-empty">{ "No countries found" }</div> }
        } else {
            matches
                .into_iter()
                .map(|country| {
                    let chosen = selected.is_some_and(|s| s.code == country.code);
                    let on_pick = {
                        let on_change = p.on_change.clone();
                        let open = open.clone();
                        let query = query.clone();
                        let code = country.code;
                        Callback::from(move |_| {
                            on_change.emit(code.to_string());
                            query.set(String::new());
                            open.set(false);
                        })
                    };
                    html! {
                        <button
                            type="button"
                            key={country.code}
                            data-code={country.code}
                            class={classes!("country-option", chosen.then_some("selected"))}
                            aria-selected={chosen.to_string()}
                            role="option"
                            onclick={on_pick}
                        >
                            { flag(country) }
                            <span>{ country.name }</span>
                        </button>
                    }
                })
                .collect::<Html>()
        };
        html! {
            <div class="country-dropdown">
                <input
                    type="text"
                    class="country-search"
                    value={(*query).clone()}
                    placeholder={p.search_placeholder.clone()}
                    oninput={on_search}
                />
                <div class="country-options" role="listbox">{ list }</div>
            </div>
        }
    } else {
        Html::default()
    };

    html! {
        <div class="country-selector">
            <label>{ p.label.clone() }</label>
            <button type="button" class="country-toggle" aria-expanded={open.to_string()} onclick={toggle}>
                if let Some(country) = selected {
                    <span class="country-current">
                        { flag(country) }
                        <span>{ country.name }</span>
                    </span>
                } else {
                    <span class="placeholder">{ p.placeholder.clone() }</span>
                }
            </button>
            { options }
        </div>
    }
}
