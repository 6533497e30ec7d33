//! Play modes. Only one title in the catalog has mutually exclusive
//! ruleset variants; everything else runs the implicit normal mode.
use serde::{Deserialize, Serialize};

use crate::series::SeriesNumber;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayMode {
    #[default]
    Normal,
    /// LoLK only: conventional lives-and-continues ruleset.
    Legacy,
    /// LoLK only: checkpoint-restart ruleset. Removes Extra and the whole
    /// notion of continuing.
    Pointdevice,
}

impl PlayMode {
    /// Parse a mode tag. Unknown tags degrade to `Normal` rather than
    /// failing, matching the fail-open behavior of the rest of the engine.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "legacy" => Self::Legacy,
            "pointdevice" => Self::Pointdevice,
            _ => Self::Normal,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Legacy => "legacy",
            Self::Pointdevice => "pointdevice",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "通常",
            Self::Legacy => "レガシーモード",
            Self::Pointdevice => "完全無欠モード",
        }
    }
}

/// Whether the UI should offer a mode selector at all.
#[must_use]
pub fn mode_available(series: SeriesNumber) -> bool {
    series == SeriesNumber::LOLK
}

#[must_use]
pub fn available_modes(series: SeriesNumber) -> &'static [PlayMode] {
    if mode_available(series) {
        &[PlayMode::Legacy, PlayMode::Pointdevice]
    } else {
        &[PlayMode::Normal]
    }
}
