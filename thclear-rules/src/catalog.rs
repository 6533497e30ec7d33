//! Game catalog: the title identities fed to the rule resolver.
//!
//! Catalog rows come from the games REST endpoint in production; the
//! bundled asset mirrors that data so rule fixtures and the QA tester can
//! run without a backend.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::conditions::SPECIAL_RULES;
use crate::series::SeriesNumber;

const DEFAULT_CATALOG_DATA: &str = include_str!("../assets/games.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameCategory {
    MainSeries,
    SpinOffStg,
    Fighting,
    Photography,
    Mixed,
    Versus,
}

impl GameCategory {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MainSeries => "本編STG",
            Self::SpinOffStg => "外伝STG",
            Self::Fighting => "格闘ゲーム",
            Self::Photography => "撮影STG",
            Self::Mixed => "格闘+STG",
            Self::Versus => "対戦型STG",
        }
    }

    /// Head-to-head titles have no spell-card-collection mechanic.
    #[must_use]
    pub const fn is_versus(self) -> bool {
        matches!(self, Self::Versus)
    }
}

/// A single title. Immutable input to the resolver; `series_number` is the
/// rule-lookup key, `id` is only the catalog row key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: u32,
    pub title: String,
    pub series_number: SeriesNumber,
    pub release_year: u16,
    #[serde(rename = "game_type")]
    pub category: GameCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GameCatalog {
    pub games: Vec<Game>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate game id {0} in catalog")]
    DuplicateId(u32),
    #[error("duplicate series number {0} in catalog")]
    DuplicateSeries(SeriesNumber),
    #[error("special rule for series {0} references a title missing from the catalog")]
    UnknownSpecialSeries(SeriesNumber),
    #[error("special rule for series {series} expects catalog id {expected}, catalog has {found}")]
    SpecialRuleKeyMismatch {
        series: SeriesNumber,
        expected: u32,
        found: u32,
    },
}

impl GameCatalog {
    /// Create an empty catalog (useful for tests)
    #[must_use]
    pub const fn empty() -> Self {
        Self { games: Vec::new() }
    }

    /// Load catalog data from JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid catalog data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load the bundled catalog asset. Falls back to an empty catalog if the
    /// asset is malformed; the web layer supplies live data in production.
    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_CATALOG_DATA).unwrap_or_else(|e| {
            log::error!("bundled game catalog failed to parse: {e}");
            Self::empty()
        })
    }

    #[must_use]
    pub fn by_id(&self, id: u32) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    #[must_use]
    pub fn by_series(&self, series: SeriesNumber) -> Option<&Game> {
        self.games.iter().find(|g| g.series_number == series)
    }

    #[must_use]
    pub fn series_for_id(&self, id: u32) -> Option<SeriesNumber> {
        self.by_id(id).map(|g| g.series_number)
    }

    /// Check the id↔series-number correspondence the rule tables rely on:
    /// both keys must be unique across the catalog, and every special-rule
    /// row's `(series, game_id)` pair must match the catalog row it names.
    ///
    /// A new title added with mismatched keys would otherwise resolve
    /// through the fail-open default and nobody would notice.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn verify_key_bijection(&self) -> Result<(), CatalogError> {
        for (i, game) in self.games.iter().enumerate() {
            for other in &self.games[i + 1..] {
                if game.id == other.id {
                    return Err(CatalogError::DuplicateId(game.id));
                }
                if game.series_number == other.series_number {
                    return Err(CatalogError::DuplicateSeries(game.series_number));
                }
            }
        }
        for rule in SPECIAL_RULES {
            let Some(game) = self.by_series(rule.series) else {
                return Err(CatalogError::UnknownSpecialSeries(rule.series));
            };
            if game.id != rule.game_id {
                return Err(CatalogError::SpecialRuleKeyMismatch {
                    series: rule.series,
                    expected: rule.game_id,
                    found: game.id,
                });
            }
        }
        Ok(())
    }
}
