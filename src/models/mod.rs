mod book;
mod ranking;
mod user_preferences;

pub use book::{BookRecord, Tone};
pub use ranking::{ModeKind, RankingMode, Rationale, ScoredCandidate};
pub use user_preferences::{LengthPreference, UserPreferences};
