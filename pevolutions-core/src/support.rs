use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportMember {
    pub name: String,
    pub role: String,
    pub avatar: String,
    /// Human-readable UTC window, e.g. `10:00 - 22:00 UTC`.
    pub availability: String,
    /// Language tags such as `EN`, `ES`, `PT`.
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportChannel {
    pub name: String,
    pub url: String,
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportDesk {
    pub channels: Vec<SupportChannel>,
    pub staff: Vec<SupportMember>,
}

impl SupportDesk {
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a support desk.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Staff members who list `lang` among their languages.
    #[must_use]
    pub fn speaks(&self, lang: &str) -> Vec<&SupportMember> {
        let lang = lang.trim();
        self.staff
            .iter()
            .filter(|m| m.languages.iter().any(|l| l.eq_ignore_ascii_case(lang)))
            .collect()
    }

    /// The channel reachable by email, if one is listed.
    #[must_use]
    pub fn email_channel(&self) -> Option<&SupportChannel> {
        self.channels.iter().find(|c| c.url.starts_with("mailto:"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESK: &str = r##"{
        "channels": [
            {"name":"Discord","url":"#","icon":"💬","description":"Live chat"},
            {"name":"Email","url":"mailto:support@pevolutions.com","icon":"✉️","description":"support@pevolutions.com"}
        ],
        "staff": [
            {"name":"Admin_Sylarnal","role":"Head Administrator","avatar":"a.gif","availability":"10:00 - 22:00 UTC","languages":["ES","EN"]},
            {"name":"MistyTrainer","role":"Support Moderator","avatar":"b.gif","availability":"14:00 - 02:00 UTC","languages":["EN","PT"]},
            {"name":"BrockSolid","role":"Technical Support","avatar":"c.gif","availability":"08:00 - 18:00 UTC","languages":["ES","PT"]}
        ]
    }"##;

    #[test]
    fn filters_staff_by_language() {
        let desk = SupportDesk::from_json(DESK).unwrap();
        let pt: Vec<_> = desk.speaks("pt").iter().map(|m| m.name.as_str()).collect();
        assert_eq!(pt, ["MistyTrainer", "BrockSolid"]);
        assert!(desk.speaks("JA").is_empty());
    }

    #[test]
    fn finds_mail_channel() {
        let desk = SupportDesk::from_json(DESK).unwrap();
        assert_eq!(desk.email_channel().map(|c| c.name.as_str()), Some("Email"));
    }
}
