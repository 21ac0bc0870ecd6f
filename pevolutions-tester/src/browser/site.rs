//! Page-level helpers over a WebDriver session pointed at the portal.
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::time::Duration;
use thirtyfour::prelude::*;

use pevolutions_core::{LOGGED_IN_KEY, USER_KEY, UserRecord, countries};

const SETTLE: Duration = Duration::from_millis(250);

#[derive(Debug, Clone)]
pub struct SiteDriver<'a> {
    driver: &'a WebDriver,
    base_url: String,
}

impl<'a> SiteDriver<'a> {
    pub fn new(driver: &'a WebDriver, base_url: &str) -> Self {
        Self {
            driver,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn open(&self, path: &str) -> Result<()> {
        let url = self.url_for(path);
        self.driver
            .goto(&url)
            .await
            .with_context(|| format!("navigating to {url}"))?;
        self.driver
            .find(By::Css("#main"))
            .await
            .with_context(|| format!("{url} did not render the app shell"))?;
        Ok(())
    }

    /// Path of the current page, e.g. `/account`.
    pub async fn current_path(&self) -> Result<String> {
        let url = self.driver.current_url().await?;
        Ok(url.path().to_string())
    }

    pub async fn expect_path(&self, expected: &str) -> Result<()> {
        tokio::time::sleep(SETTLE).await;
        let path = self.current_path().await?;
        if !path.ends_with(expected) {
            bail!("expected to land on {expected}, but the browser is on {path}");
        }
        Ok(())
    }

    pub async fn fill(&self, css: &str, value: &str) -> Result<()> {
        let input = self
            .driver
            .find(By::Css(css))
            .await
            .with_context(|| format!("input {css} not found"))?;
        input.clear().await?;
        input.send_keys(value).await?;
        Ok(())
    }

    pub async fn click(&self, css: &str) -> Result<()> {
        self.driver
            .find(By::Css(css))
            .await
            .with_context(|| format!("element {css} not found"))?
            .click()
            .await?;
        Ok(())
    }

    pub async fn submit_form(&self) -> Result<()> {
        self.click("form button[type='submit']").await
    }

    /// Open the country dropdown, search for `code`'s name and pick it.
    pub async fn pick_country(&self, code: &str) -> Result<()> {
        let query = countries::find(code).map_or(code, |c| c.name);
        self.click(".country-toggle").await?;
        self.fill(".country-search", query).await?;
        self.click(&format!(".country-option[data-code='{}']", code.to_uppercase()))
            .await
    }

    pub async fn text_of(&self, css: &str) -> Result<String> {
        let element = self
            .driver
            .find(By::Css(css))
            .await
            .with_context(|| format!("element {css} not found"))?;
        Ok(element.text().await?)
    }

    pub async fn storage_item(&self, key: &str) -> Result<Option<String>> {
        let ret = self
            .driver
            .execute(
                "return window.localStorage.getItem(arguments[0]);",
                vec![Value::from(key)],
            )
            .await?;
        Ok(ret.json().as_str().map(str::to_string))
    }

    pub async fn set_storage_item(&self, key: &str, value: &str) -> Result<()> {
        self.driver
            .execute(
                "window.localStorage.setItem(arguments[0], arguments[1]);",
                vec![Value::from(key), Value::from(value)],
            )
            .await?;
        Ok(())
    }

    pub async fn clear_storage(&self) -> Result<()> {
        self.driver
            .execute("window.localStorage.clear();", vec![])
            .await?;
        Ok(())
    }

    /// Every `localStorage` entry, for failure artifacts.
    pub async fn storage_snapshot(&self) -> Result<Value> {
        let ret = self
            .driver
            .execute(
                "const out = {}; for (let i = 0; i < localStorage.length; i++) { const k = localStorage.key(i); out[k] = localStorage.getItem(k); } return out;",
                vec![],
            )
            .await?;
        Ok(ret.json().clone())
    }

    pub async fn stored_user(&self) -> Result<Option<UserRecord>> {
        let Some(raw) = self.storage_item(USER_KEY).await? else {
            return Ok(None);
        };
        let record = serde_json::from_str(&raw).context("stored user record is not valid JSON")?;
        Ok(Some(record))
    }

    pub async fn session_flag(&self) -> Result<bool> {
        Ok(self
            .storage_item(LOGGED_IN_KEY)
            .await?
            .is_some_and(|v| v == "true"))
    }
}
