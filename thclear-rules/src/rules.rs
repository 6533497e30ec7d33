//! The rule resolver: one call combining a title identity and an optional
//! play mode into everything the record forms need.
//!
//! Every function here is total. Unknown titles degrade to the most
//! permissive generic ruleset instead of erroring, so a freshly cataloged
//! title is usable before its exception rows land. The flip side is that a
//! forgotten exception row looks exactly like "no exceptions"; the golden
//! catalog sweep exists to catch that.
use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::{Game, GameCategory};
use crate::conditions::{ClearCondition, ConditionList, clear_conditions_for, special_rule};
use crate::difficulty::{Difficulty, DifficultyList, difficulty_order_for};
use crate::mode::{PlayMode, mode_available};
use crate::series::SeriesNumber;

/// Title-specific label pair for a filled special slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpecialConditionInfo {
    pub label: &'static str,
    pub description: &'static str,
}

/// Everything the resolver derives for one title + mode. Recomputed on every
/// call; cheap enough to build per render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleResolution {
    pub series_number: Option<SeriesNumber>,
    pub mode: PlayMode,
    pub difficulties: DifficultyList,
    pub clear_conditions: ConditionList,
    /// Only slots the title actually fills; a slot absent here must not be
    /// rendered.
    pub special_labels: BTreeMap<ClearCondition, SpecialConditionInfo>,
    pub full_spell_card_available: bool,
    pub mode_available: bool,
}

impl RuleResolution {
    /// Whether the no-continue condition exists for a difficulty under this
    /// resolution's title and mode.
    #[must_use]
    pub fn continue_available(&self, difficulty: Difficulty) -> bool {
        match self.series_number {
            Some(series) => continue_available(series, self.mode, difficulty),
            None => !difficulty.is_single_credit(),
        }
    }
}

/// Resolve the complete ruleset for a title. `None` yields the permissive
/// default ruleset (base difficulties plus Extra, the five universal
/// conditions, no specials).
#[must_use]
pub fn resolve(game: Option<&Game>, mode: PlayMode) -> RuleResolution {
    let series = game.map(|g| g.series_number);
    let clear_conditions = match game {
        Some(game) => clear_conditions_for(game.category, game.series_number),
        None => ConditionList::from_slice(&ClearCondition::UNIVERSAL),
    };
    let special_labels = series.map_or_else(BTreeMap::new, |series| {
        clear_conditions
            .iter()
            .filter_map(|&slot| {
                special_rule(series, slot).map(|rule| {
                    (
                        slot,
                        SpecialConditionInfo {
                            label: rule.label,
                            description: rule.description,
                        },
                    )
                })
            })
            .collect()
    });
    // Derived from list membership so the versus rule is encoded exactly once.
    let full_spell_card_available = clear_conditions.contains(&ClearCondition::FullSpellCard);
    RuleResolution {
        series_number: series,
        mode,
        difficulties: difficulty_order_for(game, mode),
        clear_conditions,
        special_labels,
        full_spell_card_available,
        mode_available: series.is_some_and(mode_available),
    }
}

/// Whether continuing exists at all for this title/mode/difficulty.
/// Pointdevice replaces continues with checkpoint restarts, and Extra-class
/// stages are single-credit everywhere.
#[must_use]
pub fn continue_available(series: SeriesNumber, mode: PlayMode, difficulty: Difficulty) -> bool {
    if series == SeriesNumber::LOLK && mode == PlayMode::Pointdevice {
        return false;
    }
    !difficulty.is_single_credit()
}

/// Whether the full-spell-card condition is offered. Derived from the
/// resolved condition list; must never disagree with it.
#[must_use]
pub fn full_spell_card_available(category: GameCategory, series: SeriesNumber) -> bool {
    clear_conditions_for(category, series).contains(&ClearCondition::FullSpellCard)
}
