//! Clear conditions: the five universal flags plus per-title special slots.
//!
//! One static table carries every special-condition rule, keyed canonically
//! by series number and carrying the catalog row id alongside, so the
//! id-keyed lookups the record forms use are thin adapters over the same
//! rows. `GameCatalog::verify_key_bijection` checks the pairs against the
//! live catalog.
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::GameCategory;
use crate::series::SeriesNumber;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearCondition {
    Cleared,
    NoContinue,
    NoBomb,
    NoMiss,
    FullSpellCard,
    #[serde(rename = "special_clear_1")]
    Special1,
    #[serde(rename = "special_clear_2")]
    Special2,
    #[serde(rename = "special_clear_3")]
    Special3,
}

/// Ordered condition list as returned by the resolver.
pub type ConditionList = SmallVec<[ClearCondition; 8]>;

impl ClearCondition {
    /// The five conditions common to all titles, in display order.
    pub const UNIVERSAL: [Self; 5] = [
        Self::Cleared,
        Self::NoContinue,
        Self::NoBomb,
        Self::NoMiss,
        Self::FullSpellCard,
    ];

    /// 1-based slot index for special conditions, `None` for universal ones.
    #[must_use]
    pub const fn special_slot(self) -> Option<u8> {
        match self {
            Self::Special1 => Some(1),
            Self::Special2 => Some(2),
            Self::Special3 => Some(3),
            _ => None,
        }
    }

    /// Generic display label. Special slots get a placeholder here; the
    /// title-specific label comes from [`special_label_for`] and the
    /// placeholder must not reach production rendering.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cleared => "クリア",
            Self::NoContinue => "ノーコンティニュー",
            Self::NoBomb => "ノーボム",
            Self::NoMiss => "ノーミス",
            Self::FullSpellCard => "フルスペカ",
            Self::Special1 => "特殊条件1",
            Self::Special2 => "特殊条件2",
            Self::Special3 => "特殊条件3",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Cleared => "通常クリア",
            Self::NoContinue => "コンティニューなしでクリア",
            Self::NoBomb => "ボムを使わずにクリア",
            Self::NoMiss => "被弾なしでクリア",
            Self::FullSpellCard => "全スペルカード取得",
            Self::Special1 => "特殊クリア条件1",
            Self::Special2 => "特殊クリア条件2",
            Self::Special3 => "特殊クリア条件3",
        }
    }
}

/// One special-condition rule: which slot a title fills and how to label it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpecialRule {
    pub series: SeriesNumber,
    /// Catalog row id of the same title, kept here so id-keyed lookups
    /// cannot drift from the series-keyed ones.
    pub game_id: u32,
    pub slot: ClearCondition,
    pub label: &'static str,
    pub description: &'static str,
}

const fn rule(
    series: SeriesNumber,
    game_id: u32,
    slot: ClearCondition,
    label: &'static str,
    description: &'static str,
) -> SpecialRule {
    SpecialRule {
        series,
        game_id,
        slot,
        label,
        description,
    }
}

/// Every per-title special clear condition. Rows are ordered by series and
/// slot; WBaWC is the only title with two slots.
pub static SPECIAL_RULES: &[SpecialRule] = &[
    rule(
        SeriesNumber::PCB,
        2,
        ClearCondition::Special1,
        "ノー結界",
        "結界を使用せずにクリア",
    ),
    rule(
        SeriesNumber::UFO,
        7,
        ClearCondition::Special1,
        "ノーベントラー",
        "ベントラーを使用せずにクリア",
    ),
    rule(
        SeriesNumber::FW,
        8,
        ClearCondition::Special1,
        "ノーアイス",
        "アイスバリアを使用せずにクリア",
    ),
    rule(
        SeriesNumber::TD,
        9,
        ClearCondition::Special1,
        "ノートランス",
        "トランスを使用せずにクリア",
    ),
    rule(
        SeriesNumber::HSIFS,
        12,
        ClearCondition::Special1,
        "ノー季節解放",
        "シーズンリリースを使用せずにクリア",
    ),
    rule(
        SeriesNumber::WBAWC,
        13,
        ClearCondition::Special1,
        "ノー暴走",
        "ロアリングモードを使用せずにクリア",
    ),
    rule(
        SeriesNumber::WBAWC,
        13,
        ClearCondition::Special2,
        "ノー霊撃",
        "霊撃を使用せずにクリア",
    ),
    rule(
        SeriesNumber::UM,
        14,
        ClearCondition::Special1,
        "ノーカード",
        "アビリティカードを使用せずにクリア",
    ),
    rule(
        SeriesNumber::UDOKJ,
        16,
        ClearCondition::Special1,
        "ノー異変石",
        "異変石を装備せずにクリア",
    ),
];

#[must_use]
pub fn special_rule(series: SeriesNumber, slot: ClearCondition) -> Option<&'static SpecialRule> {
    SPECIAL_RULES
        .iter()
        .find(|r| r.series == series && r.slot == slot)
}

#[must_use]
pub fn special_rule_for_id(game_id: u32, slot: ClearCondition) -> Option<&'static SpecialRule> {
    SPECIAL_RULES
        .iter()
        .find(|r| r.game_id == game_id && r.slot == slot)
}

/// Special slots a title actually fills, in slot order. Lookup miss means
/// "no specials", never an error.
#[must_use]
pub fn special_conditions_for(series: SeriesNumber) -> ConditionList {
    SPECIAL_RULES
        .iter()
        .filter(|r| r.series == series)
        .map(|r| r.slot)
        .collect()
}

#[must_use]
pub fn special_conditions_for_id(game_id: u32) -> ConditionList {
    SPECIAL_RULES
        .iter()
        .filter(|r| r.game_id == game_id)
        .map(|r| r.slot)
        .collect()
}

/// Title-specific label for a special slot, falling back to the generic
/// placeholder when the title fills no such slot.
#[must_use]
pub fn special_label_for(series: SeriesNumber, slot: ClearCondition) -> &'static str {
    special_rule(series, slot).map_or_else(|| slot.label(), |r| r.label)
}

#[must_use]
pub fn special_description_for(series: SeriesNumber, slot: ClearCondition) -> &'static str {
    special_rule(series, slot).map_or_else(|| slot.description(), |r| r.description)
}

#[must_use]
pub fn special_label_for_id(game_id: u32, slot: ClearCondition) -> &'static str {
    special_rule_for_id(game_id, slot).map_or_else(|| slot.label(), |r| r.label)
}

#[must_use]
pub fn special_description_for_id(game_id: u32, slot: ClearCondition) -> &'static str {
    special_rule_for_id(game_id, slot).map_or_else(|| slot.description(), |r| r.description)
}

// The versus exception lives here and nowhere else; the
// full-spell-card predicate is derived from the resulting list.
fn universal_conditions(category: GameCategory) -> ConditionList {
    ClearCondition::UNIVERSAL
        .iter()
        .copied()
        .filter(|&c| !(category.is_versus() && c == ClearCondition::FullSpellCard))
        .collect()
}

/// Ordered clear-condition list for a title: the universal five (minus
/// full-spell-card for versus titles), then any special slots in slot order.
#[must_use]
pub fn clear_conditions_for(category: GameCategory, series: SeriesNumber) -> ConditionList {
    let mut conditions = universal_conditions(category);
    conditions.extend(special_conditions_for(series));
    conditions
}

/// Id-keyed adapter over [`clear_conditions_for`].
#[must_use]
pub fn clear_conditions_for_id(category: GameCategory, game_id: u32) -> ConditionList {
    let mut conditions = universal_conditions(category);
    conditions.extend(special_conditions_for_id(game_id));
    conditions
}
