//! Forum board listing.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestPost {
    pub title: String,
    pub author: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumCategory {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub topics: u32,
    pub posts: u32,
    /// Gradient classes for the category icon.
    pub accent: String,
    #[serde(default)]
    pub latest_post: Option<LatestPost>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumStats {
    pub topics: u32,
    pub posts: u32,
    pub members: u32,
    pub online: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumBoard {
    pub categories: Vec<ForumCategory>,
    pub stats: ForumStats,
}

impl ForumBoard {
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a board.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn category(&self, id: u32) -> Option<&ForumCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Category with the most posts.
    #[must_use]
    pub fn busiest(&self) -> Option<&ForumCategory> {
        self.categories.iter().max_by_key(|c| c.posts)
    }
}

/// Compact post count: `15600` becomes `"15.6k"`; counts up to 1000 are shown
/// as-is. Halves round up, so `1250` is `"1.3k"`.
#[must_use]
pub fn format_post_count(posts: u32) -> String {
    if posts > 1000 {
        let tenths = (u64::from(posts) + 50) / 100;
        format!("{}.{}k", tenths / 10, tenths % 10)
    } else {
        posts.to_string()
    }
}

/// Digits grouped by commas: `68520` becomes `"68,520"`.
#[must_use]
pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
