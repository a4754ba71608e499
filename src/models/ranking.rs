use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::BookRecord;

/// Wire representation of the ranking mode selector
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ModeKind {
    #[default]
    Famous,
    Balanced,
    Discover,
}

/// Trade-off between well-known titles and discoveries
///
/// Each mode carries its popularity coefficients: α rewards popularity and
/// β rewards its complement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RankingMode {
    Famous,
    Balanced,
    Discover { explore_strength: f64 },
}

impl RankingMode {
    /// Builds a mode from the selector plus the slider value.
    /// The strength is only kept for `Discover`.
    pub fn new(kind: ModeKind, explore_strength: f64) -> Self {
        match kind {
            ModeKind::Famous => RankingMode::Famous,
            ModeKind::Balanced => RankingMode::Balanced,
            ModeKind::Discover => RankingMode::Discover {
                explore_strength: clamp_unit(explore_strength),
            },
        }
    }

    pub fn kind(&self) -> ModeKind {
        match self {
            RankingMode::Famous => ModeKind::Famous,
            RankingMode::Balanced => ModeKind::Balanced,
            RankingMode::Discover { .. } => ModeKind::Discover,
        }
    }

    /// Returns `(alpha, beta)`
    pub fn coefficients(&self) -> (f64, f64) {
        match self {
            RankingMode::Famous => (0.30, 0.00),
            RankingMode::Balanced => (0.15, 0.10),
            RankingMode::Discover { explore_strength } => (0.00, clamp_unit(*explore_strength)),
        }
    }

    /// Discovery strength actually applied, `None` outside discover mode
    pub fn explore_strength(&self) -> Option<f64> {
        match self {
            RankingMode::Discover { explore_strength } => Some(clamp_unit(*explore_strength)),
            _ => None,
        }
    }

    pub fn rationale(&self) -> Rationale {
        match self {
            RankingMode::Famous => Rationale::PopularityBoost,
            RankingMode::Balanced => Rationale::BalancedBoost,
            RankingMode::Discover { .. } => Rationale::DiscoveryBoost,
        }
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Human-readable reason attached to a scored book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rationale {
    #[serde(rename = "genre match")]
    GenreMatch,
    #[serde(rename = "tone match")]
    ToneMatch,
    #[serde(rename = "recent-years filter")]
    RecentFilter,
    #[serde(rename = "discovery boost")]
    DiscoveryBoost,
    #[serde(rename = "popularity boost")]
    PopularityBoost,
    #[serde(rename = "balanced boost")]
    BalancedBoost,
}

impl Rationale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rationale::GenreMatch => "genre match",
            Rationale::ToneMatch => "tone match",
            Rationale::RecentFilter => "recent-years filter",
            Rationale::DiscoveryBoost => "discovery boost",
            Rationale::PopularityBoost => "popularity boost",
            Rationale::BalancedBoost => "balanced boost",
        }
    }
}

impl Display for Rationale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A book paired with its composite score for one recommendation call
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub book: BookRecord,
    pub score: f64,
    pub reasons: Vec<Rationale>,
}
