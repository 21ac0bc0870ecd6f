use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    /// Audience blurb, e.g. `12k Followers`.
    pub members: String,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventTag {
    Contest,
    Tournament,
    Update,
}

impl EventTag {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Contest => "Contest",
            Self::Tournament => "Tournament",
            Self::Update => "Update",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityEvent {
    pub title: String,
    pub date: String,
    pub description: String,
    pub tag: EventTag,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityHub {
    pub socials: Vec<SocialLink>,
    pub events: Vec<CommunityEvent>,
}

impl CommunityHub {
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a hub.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn events_tagged(&self, tag: EventTag) -> Vec<&CommunityEvent> {
        self.events.iter().filter(|e| e.tag == tag).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tags_and_filters() {
        let hub = CommunityHub::from_json(
            r##"{
                "socials": [{"name":"Discord","url":"#","members":"5,000+ Online","color":"bg-[#5865F2]"}],
                "events": [
                    {"title":"Crystal League","date":"Jan 20, 2026","description":"PvP","tag":"Tournament"},
                    {"title":"Patch","date":"Jan 10, 2026","description":"Economy","tag":"Update"}
                ]
            }"##,
        )
        .unwrap();
        let tournaments = hub.events_tagged(EventTag::Tournament);
        assert_eq!(tournaments.len(), 1);
        assert_eq!(tournaments[0].tag.label(), "Tournament");
        assert!(hub.events_tagged(EventTag::Contest).is_empty());
    }
}
