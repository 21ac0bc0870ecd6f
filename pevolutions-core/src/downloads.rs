use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadSource {
    pub name: String,
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub recommended: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadCatalog {
    pub sources: Vec<DownloadSource>,
    /// Installation guide, in order.
    #[serde(default)]
    pub install_steps: Vec<String>,
}

impl DownloadCatalog {
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a catalog.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// First source flagged as recommended.
    #[must_use]
    pub fn recommended(&self) -> Option<&DownloadSource> {
        self.sources.iter().find(|s| s.recommended)
    }

    /// Steps paired with their two-digit labels (`01`, `02`, ...).
    pub fn numbered_steps(&self) -> impl Iterator<Item = (String, &str)> {
        self.install_steps
            .iter()
            .enumerate()
            .map(|(i, step)| (format!("{:02}", i + 1), step.as_str()))
    }
}
