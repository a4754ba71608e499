use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::error::{AppError, AppResult};

/// Mood label attached to a book and optionally requested by the reader
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[serde(alias = "잔잔")]
    Calm,
    #[serde(alias = "유머")]
    Humorous,
    #[serde(alias = "진지")]
    Serious,
    #[serde(alias = "스릴")]
    Thrilling,
    #[serde(alias = "모험")]
    Adventurous,
    #[serde(alias = "따뜻함")]
    Warm,
    #[serde(alias = "어둡고 무거움")]
    Dark,
}

impl Tone {
    /// Korean label shown in the preference form and the generated prompt
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Calm => "잔잔",
            Tone::Humorous => "유머",
            Tone::Serious => "진지",
            Tone::Thrilling => "스릴",
            Tone::Adventurous => "모험",
            Tone::Warm => "따뜻함",
            Tone::Dark => "어둡고 무거움",
        }
    }
}

impl Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub tone: Tone,
    /// Display order is preserved; matching treats the list as a set
    pub genres: Vec<String>,
    /// 0.0 (obscure) ..= 1.0 (famous)
    pub popularity: f64,
}

impl BookRecord {
    pub fn new(
        title: &str,
        author: &str,
        year: i32,
        tone: Tone,
        genres: &[&str],
        popularity: f64,
    ) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year,
            tone,
            genres: genres.iter().map(|g| g.to_string()).collect(),
            popularity,
        }
    }

    /// Checks the record invariants a loaded catalog has to satisfy
    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::Catalog("book title must not be empty".to_string()));
        }
        if self.author.trim().is_empty() {
            return Err(AppError::Catalog(format!(
                "author of '{}' must not be empty",
                self.title
            )));
        }
        if self.genres.is_empty() {
            return Err(AppError::Catalog(format!(
                "'{}' must have at least one genre",
                self.title
            )));
        }
        if !(0.0..=1.0).contains(&self.popularity) {
            return Err(AppError::Catalog(format!(
                "popularity of '{}' must be within [0, 1], got {}",
                self.title, self.popularity
            )));
        }
        Ok(())
    }
}
