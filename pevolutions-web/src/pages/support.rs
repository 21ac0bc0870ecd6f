use pevolutions_core::SupportDesk;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SupportPageProps {
    pub desk: SupportDesk,
}

#[function_component(SupportPage)]
pub fn support_page(p: &SupportPageProps) -> Html {
    html! {
        <section class="support">
            <header>
                <h1>{ "Support Center" }</h1>
                <p>{ "Need a hand? Reach the staff through any of these channels." }</p>
            </header>
            <div class="support-channels">
                { for p.desk.channels.iter().map(|channel| html! {
                    <a key={channel.name.clone()} class="support-channel" href={channel.url.clone()}>
                        <span class="channel-icon" aria-hidden="true">{ &channel.icon }</span>
                        <h3>{ &channel.name }</h3>
                        <p>{ &channel.description }</p>
                    </a>
                }) }
            </div>
            <h2>{ "Support Team" }</h2>
            <div class="support-staff">
                { for p.desk.staff.iter().map(|member| html! {
                    <article key={member.name.clone()} class="staff-card">
                        <img src={member.avatar.clone()} alt={member.name.clone()} loading="lazy" />
                        <h3>{ &member.name }</h3>
                        <p class="role">{ &member.role }</p>
                        <p class="availability">{ &member.availability }</p>
                        <ul class="languages">
                            { for member.languages.iter().map(|lang| html! { <li>{ lang }</li> }) }
                        </ul>
                    </article>
                }) }
            </div>
        </section>
    }
}
