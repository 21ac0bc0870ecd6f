use anyhow::Result;
use thirtyfour::prelude::*;

use crate::browser::SiteDriver;

pub mod account;
pub mod listings;

pub struct ScenarioCtx<'a> {
    pub seed: u64,
    pub site: SiteDriver<'a>,
    pub verbose: bool,
}

/// A seed-driven check against the core crate.
pub type LogicCheck = fn(u64) -> Result<()>;

#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub check: LogicCheck,
}

impl TestScenario {
    #[must_use]
    pub fn new(name: impl Into<String>, check: LogicCheck) -> Self {
        Self {
            name: name.into(),
            check,
        }
    }
}

#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

pub trait CombinedScenario: BrowserScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario>;
}

/// Scenario that only exists as a logic check.
#[derive(Clone)]
pub struct LogicOnlyScenario {
    name: &'static str,
    check: LogicCheck,
}

impl LogicOnlyScenario {
    pub const fn new(name: &'static str, check: LogicCheck) -> Self {
        Self { name, check }
    }
}

#[async_trait::async_trait]
impl BrowserScenario for LogicOnlyScenario {
    async fn run_browser(&self, _driver: &WebDriver, _ctx: &ScenarioCtx<'_>) -> Result<()> {
        anyhow::bail!("{} has no browser flow", self.name)
    }
}

impl CombinedScenario for LogicOnlyScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(self.name, self.check))
    }
}

/// Keys expanded by `--scenarios all`, in run order.
pub const ALL_SCENARIOS: &[&str] = &[
    "smoke",
    "round-trip",
    "password-mismatch",
    "empty-store-login",
    "profile-merge",
    "logout-persistence",
    "stale-flag",
    "roster-ordering",
];

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    match name.to_lowercase().as_str() {
        "smoke" | "pages" => Some(Box::new(listings::SmokeScenario)),
        "round-trip" | "register-login" => Some(Box::new(account::RoundTripScenario)),
        "password-mismatch" | "mismatch" => Some(Box::new(account::PasswordMismatchScenario)),
        "empty-store-login" | "empty-login" => Some(Box::new(LogicOnlyScenario::new(
            "Empty Store Login",
            account::empty_store_login,
        ))),
        "profile-merge" | "profile" => Some(Box::new(account::ProfileMergeScenario)),
        "logout-persistence" | "logout" => Some(Box::new(LogicOnlyScenario::new(
            "Logout Persistence",
            account::logout_persistence,
        ))),
        "stale-flag" => Some(Box::new(account::StaleFlagScenario)),
        "roster-ordering" | "roster" => Some(Box::new(LogicOnlyScenario::new(
            "Roster Ordering",
            listings::roster_ordering,
        ))),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    vec![
        ("smoke", "Every page renders inside the app shell"),
        ("round-trip", "Register, log out, log back in"),
        ("password-mismatch", "Mismatched confirmation leaves storage untouched"),
        ("empty-store-login", "Login with no stored account is rejected"),
        ("profile-merge", "Profile update keeps untouched fields"),
        ("logout-persistence", "Logout keeps the account for the next login"),
        ("stale-flag", "A session flag without a record reads as logged out"),
        ("roster-ordering", "Online players filter and sort descending"),
    ]
}
