//! Online players directory.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Boy,
    Girl,
}

impl Gender {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Boy => "Boy",
            Self::Girl => "Girl",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub level: u32,
    pub captures: u32,
    pub fishing_level: u32,
    pub avatar: String,
    pub gender: Gender,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerSort {
    #[default]
    Level,
    Captures,
    FishingLevel,
}

impl PlayerSort {
    pub const ALL: [Self; 3] = [Self::Level, Self::Captures, Self::FishingLevel];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Level => "Level",
            Self::Captures => "Captures",
            Self::FishingLevel => "Fishing",
        }
    }

    #[must_use]
    pub const fn key(self, player: &Player) -> u32 {
        match self {
            Self::Level => player.level,
            Self::Captures => player.captures,
            Self::FishingLevel => player.fishing_level,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerRoster(pub Vec<Player>);

impl PlayerRoster {
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Load the roster from a JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a list of players.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Players whose name contains `query` (ignoring case and surrounding
    /// whitespace), highest `sort` key first. Ties keep roster order.
    #[must_use]
    pub fn filter_and_sort(&self, query: &str, sort: PlayerSort) -> Vec<&Player> {
        let needle = query.trim().to_lowercase();
        let mut hits: Vec<&Player> = self
            .0
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect();
        hits.sort_by(|a, b| sort.key(b).cmp(&sort.key(a)));
        hits
    }

    /// Highest-level players, for the sidebar leaderboard.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<&Player> {
        let mut ranked = self.filter_and_sort("", PlayerSort::Level);
        ranked.truncate(n);
        ranked
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a PlayerRoster {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> PlayerRoster {
        PlayerRoster::from_json(
            r#"[
                {"id":1,"name":"Sylarnal","level":85,"captures":120,"fishing_level":45,"avatar":"a.gif","gender":"boy"},
                {"id":2,"name":"Zaps","level":72,"captures":340,"fishing_level":89,"avatar":"b.gif","gender":"boy"},
                {"id":3,"name":"MistyTrainer","level":45,"captures":85,"fishing_level":99,"avatar":"c.gif","gender":"girl"},
                {"id":4,"name":"AshKetchum","level":99,"captures":1500,"fishing_level":12,"avatar":"d.gif","gender":"boy"},
                {"id":5,"name":"Bruno","level":72,"captures":12,"fishing_level":5,"avatar":"e.gif","gender":"boy"}
            ]"#,
        )
        .unwrap()
    }

    fn names(players: &[&Player]) -> Vec<String> {
        players.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn sorts_descending_by_selected_stat() {
        let roster = roster();
        assert_eq!(
            names(&roster.filter_and_sort("", PlayerSort::Captures)),
            ["AshKetchum", "Zaps", "Sylarnal", "MistyTrainer", "Bruno"]
        );
        assert_eq!(
            names(&roster.filter_and_sort("", PlayerSort::FishingLevel))[0],
            "MistyTrainer"
        );
    }

    #[test]
    fn level_ties_keep_roster_order() {
        let roster = roster();
        let by_level = names(&roster.filter_and_sort("", PlayerSort::Level));
        assert_eq!(by_level, ["AshKetchum", "Sylarnal", "Zaps", "Bruno", "MistyTrainer"]);
    }

    #[test]
    fn search_ignores_case() {
        let roster = roster();
        assert_eq!(
            names(&roster.filter_and_sort("ASH", PlayerSort::Level)),
            ["AshKetchum"]
        );
        assert!(roster.filter_and_sort("gary", PlayerSort::Level).is_empty());
    }

    #[test]
    fn search_ignores_surrounding_whitespace() {
        let roster = roster();
        assert_eq!(
            names(&roster.filter_and_sort("  zaps ", PlayerSort::Level)),
            ["Zaps"]
        );
        assert_eq!(roster.filter_and_sort("   ", PlayerSort::Level).len(), roster.len());
    }

    #[test]
    fn top_truncates_level_ranking() {
        let roster = roster();
        assert_eq!(names(&roster.top(2)), ["AshKetchum", "Sylarnal"]);
        assert_eq!(roster.top(10).len(), roster.len());
    }

    #[test]
    fn gender_parses_lowercase() {
        let roster = roster();
        assert_eq!(roster.0[2].gender, Gender::Girl);
        assert_eq!(Gender::Girl.label(), "Girl");
    }
}
