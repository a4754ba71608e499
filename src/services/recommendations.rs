use std::collections::HashSet;

use crate::models::{BookRecord, RankingMode, Rationale, ScoredCandidate, UserPreferences};

/// Window, in years, that counts as "recent"
pub const RECENT_YEARS: i32 = 5;
/// Discovery strength applied when the reader does not move the slider
pub const DEFAULT_EXPLORE_STRENGTH: f64 = 0.6;
/// Number of recommendations shown by default
pub const DEFAULT_RESULT_COUNT: usize = 5;

const W_GENRE: f64 = 0.55;
const W_TONE: f64 = 0.30;
const W_RECENT: f64 = 0.15;

// Midpoints substituted when the reader states no preference
const NEUTRAL_GENRE: f64 = 0.2;
const NEUTRAL_TONE: f64 = 0.5;

const TONE_MATCH: f64 = 1.0;
const TONE_MISMATCH: f64 = 0.2;
const RECENT_BONUS: f64 = 1.0;
const OLDER_BONUS: f64 = 0.5;

/// Scores and re-ranks a catalog against reader preferences
///
/// Stateless apart from the reference year, so one instance can be shared by
/// every request.
#[derive(Debug, Clone, Copy)]
pub struct Recommender {
    current_year: i32,
    recent_years: i32,
}

impl Recommender {
    pub fn new(current_year: i32) -> Self {
        Self {
            current_year,
            recent_years: RECENT_YEARS,
        }
    }

    pub fn with_recent_years(mut self, recent_years: i32) -> Self {
        self.recent_years = recent_years;
        self
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    pub fn recent_years(&self) -> i32 {
        self.recent_years
    }

    /// Oldest publication year still considered recent
    pub fn cutoff_year(&self) -> i32 {
        self.current_year.saturating_sub(self.recent_years)
    }

    /// Produces at most `k` recommendations, best first
    ///
    /// 1. Drops books older than the cutoff when `recent_only` is set.
    /// 2. Scores every remaining book and sorts by score, descending. The sort
    ///    is stable, so equal scores keep catalog order.
    /// 3. Picks greedily while skipping authors already picked. The skip is
    ///    lifted for the last free slot so a repeated author can fill it.
    ///
    /// Never fails: an empty catalog, a filter nobody passes or `k == 0` all
    /// give an empty result.
    pub fn recommend(
        &self,
        catalog: &[BookRecord],
        prefs: &UserPreferences,
        mode: RankingMode,
        k: usize,
    ) -> Vec<ScoredCandidate> {
        if k == 0 {
            return Vec::new();
        }

        let mut scored: Vec<ScoredCandidate> = catalog
            .iter()
            .filter(|book| !prefs.recent_only || book.year >= self.cutoff_year())
            .map(|book| self.score(book, prefs, mode))
            .collect();

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));

        let candidate_count = scored.len();
        let picks = pick_diverse_authors(scored, k);

        tracing::debug!(
            catalog_size = catalog.len(),
            candidates = candidate_count,
            picked = picks.len(),
            mode = ?mode.kind(),
            k,
            "Scored catalog"
        );

        picks
    }

    /// Composite score and rationale for a single book
    pub fn score(&self, book: &BookRecord, prefs: &UserPreferences, mode: RankingMode) -> ScoredCandidate {
        let genre = genre_overlap(&prefs.genres, &book.genres);
        let tone = match prefs.tone {
            Some(wanted) if wanted == book.tone => TONE_MATCH,
            Some(_) => TONE_MISMATCH,
            None => NEUTRAL_TONE,
        };
        let recency = if book.year >= self.cutoff_year() {
            RECENT_BONUS
        } else {
            OLDER_BONUS
        };

        let (alpha, beta) = mode.coefficients();
        let popularity = alpha * book.popularity + beta * (1.0 - book.popularity);

        let score = W_GENRE * genre + W_TONE * tone + W_RECENT * recency + popularity;

        let mut reasons = Vec::with_capacity(4);
        if genre > 0.0 {
            reasons.push(Rationale::GenreMatch);
        }
        if tone == TONE_MATCH {
            reasons.push(Rationale::ToneMatch);
        }
        if prefs.recent_only {
            reasons.push(Rationale::RecentFilter);
        }
        reasons.push(mode.rationale());

        ScoredCandidate {
            book: book.clone(),
            score,
            reasons,
        }
    }
}

/// Share of the requested genres the book carries
///
/// Divides by the number of distinct requested genres, not by the union.
/// Comparison ignores case.
pub fn genre_overlap(requested: &[String], book_genres: &[String]) -> f64 {
    let wanted: HashSet<String> = requested.iter().map(|g| g.to_lowercase()).collect();
    if wanted.is_empty() {
        return NEUTRAL_GENRE;
    }

    let offered: HashSet<String> = book_genres.iter().map(|g| g.to_lowercase()).collect();
    wanted.intersection(&offered).count() as f64 / wanted.len() as f64
}

/// Walks candidates in score order, one book per author except for the final slot
fn pick_diverse_authors(sorted: Vec<ScoredCandidate>, k: usize) -> Vec<ScoredCandidate> {
    let mut picked: Vec<ScoredCandidate> = Vec::with_capacity(k.min(sorted.len()));
    let mut seen_authors: HashSet<String> = HashSet::new();

    for candidate in sorted {
        if seen_authors.contains(&candidate.book.author) && picked.len() + 1 < k {
            continue;
        }
        seen_authors.insert(candidate.book.author.clone());
        picked.push(candidate);
        if picked.len() >= k {
            break;
        }
    }

    picked
}
