//! Presentation metadata for resolver output: badge classes and tab rows.
//! Ordering comes straight from the resolvers and is never re-sorted here.
use serde::Serialize;
use smallvec::SmallVec;

use crate::catalog::{Game, GameCategory};
use crate::conditions::{
    ClearCondition, clear_conditions_for, special_description_for, special_label_for, special_rule,
};
use crate::difficulty::{Difficulty, difficulty_order_for};
use crate::mode::PlayMode;
use crate::series::SeriesNumber;

/// One difficulty tab, in resolver order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DifficultyTab {
    pub difficulty: Difficulty,
    pub label: &'static str,
    pub color: &'static str,
}

/// One clear-condition column with its title-specific labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConditionColumn {
    pub condition: ClearCondition,
    pub label: &'static str,
    pub description: &'static str,
    pub class: &'static str,
    /// False only for special slots the title does not fill; such columns
    /// must not be rendered.
    pub available: bool,
}

/// Badge text class per condition (Tailwind classes consumed by the UI).
#[must_use]
pub const fn condition_badge_class(condition: ClearCondition) -> &'static str {
    match condition {
        ClearCondition::Cleared => "text-blue-600",
        ClearCondition::NoContinue => "text-green-600",
        ClearCondition::NoBomb => "text-orange-600",
        ClearCondition::NoMiss => "text-red-600",
        ClearCondition::FullSpellCard => "text-purple-600",
        ClearCondition::Special1 => "text-cyan-600",
        ClearCondition::Special2 => "text-pink-600",
        ClearCondition::Special3 => "text-indigo-600",
    }
}

/// Badge text class per difficulty, derived from its color tag.
#[must_use]
pub const fn difficulty_badge_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "text-green-600",
        Difficulty::Normal => "text-blue-600",
        Difficulty::Hard => "text-orange-600",
        Difficulty::Lunatic => "text-red-600",
        Difficulty::Extra | Difficulty::Phantasm => "text-purple-600",
    }
}

/// Difficulty tab row for a title, in resolver order.
#[must_use]
pub fn difficulty_tabs(game: Option<&Game>, mode: PlayMode) -> SmallVec<[DifficultyTab; 6]> {
    difficulty_order_for(game, mode)
        .into_iter()
        .map(|difficulty| DifficultyTab {
            difficulty,
            label: difficulty.label(),
            color: difficulty.color(),
        })
        .collect()
}

/// Condition columns for a title, universal conditions first, special slots
/// last with their title-specific labels.
#[must_use]
pub fn condition_columns(
    category: GameCategory,
    series: SeriesNumber,
) -> SmallVec<[ConditionColumn; 8]> {
    clear_conditions_for(category, series)
        .into_iter()
        .map(|condition| condition_column(series, condition))
        .collect()
}

/// Column metadata for a single condition, usable for arbitrary slots (a
/// form rendering all record fields checks `available` before showing one).
#[must_use]
pub fn condition_column(series: SeriesNumber, condition: ClearCondition) -> ConditionColumn {
    let available = condition.special_slot().is_none() || special_rule(series, condition).is_some();
    ConditionColumn {
        condition,
        label: special_label_for(series, condition),
        description: special_description_for(series, condition),
        class: condition_badge_class(condition),
        available,
    }
}
