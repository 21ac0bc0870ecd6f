use pevolutions_core::DownloadSource;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DownloadCardProps {
    pub source: DownloadSource,
}

#[function_component(DownloadCard)]
pub fn download_card(p: &DownloadCardProps) -> Html {
    let source = &p.source;
    html! {
        <article class={classes!("download-card", source.recommended.then_some("recommended"))}>
            if source.recommended {
                <span class="badge">{ "Recommended" }</span>
            }
            <h3>{ &source.name }</h3>
            <p>{ &source.description }</p>
            <a class="btn-primary" href={source.url.clone()}>{ "Download" }</a>
        </article>
    }
}
