use serde::{Deserialize, Serialize};

use super::Tone;

/// How long the reader would like the book to feel
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LengthPreference {
    #[serde(alias = "짧게")]
    Short,
    #[default]
    #[serde(alias = "보통")]
    Medium,
    #[serde(alias = "길게")]
    Long,
}

impl LengthPreference {
    pub fn label(&self) -> &'static str {
        match self {
            LengthPreference::Short => "짧게",
            LengthPreference::Medium => "보통",
            LengthPreference::Long => "길게",
        }
    }
}

/// Reading preferences collected for a single request
///
/// Only `genres`, `tone` and `recent_only` influence scoring. The avoid list,
/// liked books and length preference are carried through to the prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserPreferences {
    /// Requested genres; empty means no preference
    #[serde(default)]
    pub genres: Vec<String>,
    /// Requested mood; `None` means no preference
    #[serde(default)]
    pub tone: Option<Tone>,
    /// Restrict results to recently published books
    #[serde(default)]
    pub recent_only: bool,
    /// Content the reader wants to stay away from
    #[serde(default)]
    pub avoid: Vec<String>,
    /// Titles the reader enjoyed recently
    #[serde(default)]
    pub liked_books: Vec<String>,
    #[serde(default)]
    pub length: LengthPreference,
}

impl UserPreferences {
    /// Creates preferences with no stated opinion on anything
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genres(mut self, genres: &[&str]) -> Self {
        self.genres = genres.iter().map(|g| g.to_string()).collect();
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    pub fn recent_only(mut self, recent_only: bool) -> Self {
        self.recent_only = recent_only;
        self
    }
}
