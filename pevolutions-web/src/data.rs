//! Static listings bundled into the wasm binary.
use pevolutions_core::{DataLoader, SiteContent};
use serde::de::DeserializeOwned;

/// Loader over the JSON documents in `static/assets/data`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebDataLoader;

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("Unknown config: {0}")]
    UnknownConfig(String),
    #[error("JSON parsing error in {name}: {source}")]
    Json {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

impl DataLoader for WebDataLoader {
    type Error = WebDataError;

    fn load_config<T>(&self, config_name: &str) -> Result<T, Self::Error>
    where
        T: DeserializeOwned,
    {
        let json = match config_name {
            "players" => include_str!("../static/assets/data/players.json"),
            "forum" => include_str!("../static/assets/data/forum.json"),
            "support" => include_str!("../static/assets/data/support.json"),
            "downloads" => include_str!("../static/assets/data/downloads.json"),
            "community" => include_str!("../static/assets/data/community.json"),
            _ => return Err(WebDataError::UnknownConfig(config_name.to_string())),
        };
        serde_json::from_str(json).map_err(|source| WebDataError::Json {
            name: config_name.to_string(),
            source,
        })
    }
}

/// Load every listing, falling back to empty listings on a bad bundle.
#[must_use]
pub fn site_content() -> SiteContent {
    SiteContent::load(&WebDataLoader).unwrap_or_else(|err| {
        log::error!("failed to load bundled site content: {err}");
        SiteContent::default()
    })
}
