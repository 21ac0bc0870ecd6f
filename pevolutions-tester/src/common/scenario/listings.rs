//! Static listing scenarios.
use anyhow::{Context, Result, ensure};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thirtyfour::prelude::*;

use pevolutions_core::{
    CommunityHub, DownloadCatalog, ForumBoard, PlayerRoster, PlayerSort, SupportDesk,
};

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};

const PLAYERS: &str = include_str!("../../../../pevolutions-web/static/assets/data/players.json");
const FORUM: &str = include_str!("../../../../pevolutions-web/static/assets/data/forum.json");
const SUPPORT: &str = include_str!("../../../../pevolutions-web/static/assets/data/support.json");
const DOWNLOADS: &str =
    include_str!("../../../../pevolutions-web/static/assets/data/downloads.json");
const COMMUNITY: &str =
    include_str!("../../../../pevolutions-web/static/assets/data/community.json");

/// Route path and the heading it must render.
const PAGES: &[(&str, &str)] = &[
    ("/", "PEvolutions BETA"),
    ("/downloads", "Download PEvolutions"),
    ("/forum", "Community Forum"),
    ("/community", "Community"),
    ("/support", "Support Center"),
    ("/online-players", "Online Players"),
    ("/login", "Login"),
    ("/register", "Create Account"),
    ("/no-such-page", "Page not found"),
];

fn roster() -> Result<PlayerRoster> {
    PlayerRoster::from_json(PLAYERS).context("bundled players.json")
}

/// Every bundled listing parses and is non-empty.
pub fn bundled_content(_seed: u64) -> Result<()> {
    ensure!(!roster()?.is_empty(), "roster is empty");
    let forum = ForumBoard::from_json(FORUM).context("bundled forum.json")?;
    ensure!(!forum.categories.is_empty(), "forum has no categories");
    let support = SupportDesk::from_json(SUPPORT).context("bundled support.json")?;
    ensure!(!support.staff.is_empty(), "support has no staff");
    let downloads = DownloadCatalog::from_json(DOWNLOADS).context("bundled downloads.json")?;
    ensure!(
        downloads.recommended().is_some(),
        "no recommended download source"
    );
    let community = CommunityHub::from_json(COMMUNITY).context("bundled community.json")?;
    ensure!(!community.events.is_empty(), "community has no events");
    Ok(())
}

pub fn roster_ordering(seed: u64) -> Result<()> {
    let roster = roster()?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let sort = PlayerSort::ALL[rng.gen_range(0..PlayerSort::ALL.len())];

    let pick = &roster.0[rng.gen_range(0..roster.len())].name;
    let start = rng.gen_range(0..pick.len());
    let end = rng.gen_range(start..=pick.len());
    let query = pick.get(start..end).unwrap_or_default().to_uppercase();

    let hits = roster.filter_and_sort(&query, sort);
    ensure!(
        hits.iter().any(|p| &p.name == pick),
        "{pick} missing for query {query:?}"
    );
    let needle = query.to_lowercase();
    ensure!(
        hits.iter().all(|p| p.name.to_lowercase().contains(&needle)),
        "query {query:?} let through a non-match"
    );
    ensure!(
        hits.windows(2).all(|w| sort.key(w[0]) >= sort.key(w[1])),
        "{} order is not descending",
        sort.label()
    );
    Ok(())
}

pub struct SmokeScenario;

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, _driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let site = &ctx.site;
        site.open("/").await?;
        site.clear_storage().await?;
        for (path, heading) in PAGES {
            site.open(path).await?;
            let text = site.text_of("#main h1").await?;
            ensure!(
                text.split_whitespace().eq(heading.split_whitespace()),
                "{path} rendered heading {text:?}"
            );
            if ctx.verbose {
                println!("  🌐 {path} ok");
            }
        }
        Ok(())
    }
}

impl CombinedScenario for SmokeScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Bundled Content", bundled_content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_a_heading() {
        assert!(PAGES.iter().all(|(path, h)| path.starts_with('/') && !h.is_empty()));
    }

    #[test]
    fn roster_checks_cover_every_sort() {
        for seed in 0..64 {
            roster_ordering(seed).unwrap();
        }
    }
}
