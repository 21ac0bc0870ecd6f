use pevolutions_core::DownloadCatalog;
use yew::prelude::*;

use crate::components::DownloadCard;

#[derive(Properties, PartialEq, Clone)]
pub struct DownloadsPageProps {
    pub catalog: DownloadCatalog,
}

#[function_component(DownloadsPage)]
pub fn downloads_page(p: &DownloadsPageProps) -> Html {
    html! {
        <section class="downloads">
            <header>
                <h1>{ "Download PEvolutions" }</h1>
                <p>{ "Choose a mirror and follow the steps below to start playing." }</p>
            </header>
            <div class="download-grid">
                { for p.catalog.sources.iter().map(|source| html! {
                    <DownloadCard key={source.name.clone()} source={source.clone()} />
                }) }
            </div>
            if !p.catalog.install_steps.is_empty() {
                <ol class="install-steps" aria-label="Installation">
                    { for p.catalog.numbered_steps().map(|(number, step)| html! {
                        <li key={number.clone()}>
                            <span class="step-number">{ number }</span>
                            <span>{ step }</span>
                        </li>
                    }) }
                </ol>
            }
        </section>
    }
}
