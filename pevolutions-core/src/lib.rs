//! PEvolutions portal core
//!
//! Platform-agnostic account and listing logic for the PEvolutions community
//! site. Nothing here touches the DOM: platforms plug in through
//! [`KeyValueStore`] for session storage and [`DataLoader`] for static content.

pub mod auth;
pub mod community;
pub mod countries;
pub mod downloads;
pub mod error;
pub mod forum;
pub mod players;
pub mod store;
pub mod support;
pub mod user;

// Re-export commonly used types
pub use auth::{AuthController, AuthState};
pub use community::{CommunityEvent, CommunityHub, EventTag, SocialLink};
pub use countries::{COUNTRIES, Country, CountryCode};
pub use downloads::{DownloadCatalog, DownloadSource};
pub use error::{AccountError, AuthError, ValidationError};
pub use forum::{ForumBoard, ForumCategory, ForumStats, LatestPost, format_post_count, format_thousands};
pub use players::{Gender, Player, PlayerRoster, PlayerSort};
pub use store::{
    KeyValueStore, LOGGED_IN_KEY, MemoryStorage, SessionKeys, SessionStore, SessionStoreAdapter,
    USER_KEY, memory_session,
};
pub use support::{SupportChannel, SupportDesk, SupportMember};
pub use user::{ProfileUpdate, RegisterForm, UserRecord};

/// Trait for abstracting static content loading
/// Platform-specific implementations should provide this
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load a named JSON document (`players`, `forum`, ...)
    ///
    /// # Errors
    ///
    /// Returns an error if the document is unknown or cannot be parsed.
    fn load_config<T>(&self, config_name: &str) -> Result<T, Self::Error>
    where
        T: serde::de::DeserializeOwned;
}

/// Every static listing the site renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteContent {
    pub players: PlayerRoster,
    pub forum: ForumBoard,
    pub support: SupportDesk,
    pub downloads: DownloadCatalog,
    pub community: CommunityHub,
}

impl SiteContent {
    /// Load all listings through `loader`.
    ///
    /// # Errors
    ///
    /// Returns the first loader error encountered.
    pub fn load<L: DataLoader>(loader: &L) -> Result<Self, L::Error> {
        Ok(Self {
            players: loader.load_config("players")?,
            forum: loader.load_config("forum")?,
            support: loader.load_config("support")?,
            downloads: loader.load_config("downloads")?,
            community: loader.load_config("community")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::DeserializeOwned;
    use std::fmt;

    #[derive(Debug)]
    struct Missing(String);

    impl fmt::Display for Missing {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "missing {}", self.0)
        }
    }

    impl std::error::Error for Missing {}

    struct FixtureLoader {
        skip: &'static str,
    }

    impl DataLoader for FixtureLoader {
        type Error = Missing;

        fn load_config<T>(&self, config_name: &str) -> Result<T, Self::Error>
        where
            T: DeserializeOwned,
        {
            if config_name == self.skip {
                return Err(Missing(config_name.to_string()));
            }
            let json = match config_name {
                "players" => "[]",
                "forum" => r#"{"categories":[],"stats":{"topics":1,"posts":2,"members":3,"online":4}}"#,
                "support" => r#"{"channels":[],"staff":[]}"#,
                "downloads" => r#"{"sources":[]}"#,
                "community" => r#"{"socials":[],"events":[]}"#,
                other => return Err(Missing(other.to_string())),
            };
            serde_json::from_str(json).map_err(|e| Missing(e.to_string()))
        }
    }

    #[test]
    fn site_content_loads_every_listing() {
        let content = SiteContent::load(&FixtureLoader { skip: "" }).unwrap();
        assert!(content.players.is_empty());
        assert_eq!(content.forum.stats.online, 4);
    }

    #[test]
    fn site_content_propagates_loader_errors() {
        let err = SiteContent::load(&FixtureLoader { skip: "support" }).unwrap_err();
        assert_eq!(err.to_string(), "missing support");
    }
}
