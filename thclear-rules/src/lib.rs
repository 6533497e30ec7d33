//! thclear rules engine
//!
//! Platform-agnostic game-rule resolution for the thclear clear-achievement
//! tracker: which difficulties, clear conditions, and modes a title actually
//! offers, with fifteen-plus years of one-off design exceptions in one
//! place. Keep this crate free of IO and platform concerns.

pub mod catalog;
pub mod conditions;
pub mod difficulty;
pub mod display;
pub mod mode;
pub mod rules;
pub mod series;

// Re-export commonly used types
pub use catalog::{CatalogError, Game, GameCatalog, GameCategory};
pub use conditions::{
    ClearCondition, ConditionList, SPECIAL_RULES, SpecialRule, clear_conditions_for,
    clear_conditions_for_id, special_conditions_for, special_conditions_for_id,
    special_description_for, special_description_for_id, special_label_for, special_label_for_id,
};
pub use difficulty::{
    Difficulty, DifficultyList, default_difficulty_order, difficulty_order_for,
    difficulty_order_for_series,
};
pub use display::{
    ConditionColumn, DifficultyTab, condition_badge_class, condition_column, condition_columns,
    difficulty_badge_class, difficulty_tabs,
};
pub use mode::{PlayMode, available_modes, mode_available};
pub use rules::{
    RuleResolution, SpecialConditionInfo, continue_available, full_spell_card_available, resolve,
};
pub use series::SeriesNumber;
