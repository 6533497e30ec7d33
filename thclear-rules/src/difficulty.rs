//! Difficulty catalog and the per-title difficulty resolver.
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::catalog::Game;
use crate::mode::PlayMode;
use crate::series::SeriesNumber;

/// The full difficulty universe, in display order. `Extra` and `Phantasm`
/// are conditionally present but never reordered relative to the base four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Lunatic,
    Extra,
    Phantasm,
}

/// Ordered difficulty list as returned by the resolver. Tab order and badge
/// order both derive from this; callers must not re-sort.
pub type DifficultyList = SmallVec<[Difficulty; 6]>;

impl Difficulty {
    /// The four difficulties every title shares.
    pub const BASE: [Self; 4] = [Self::Easy, Self::Normal, Self::Hard, Self::Lunatic];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
            Self::Lunatic => "Lunatic",
            Self::Extra => "Extra",
            Self::Phantasm => "Phantasm",
        }
    }

    /// Badge color tag consumed by the display adapter.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Easy => "green",
            Self::Normal => "blue",
            Self::Hard => "orange",
            Self::Lunatic => "red",
            Self::Extra | Self::Phantasm => "purple",
        }
    }

    /// Extra-class stages are single-credit by series convention, so the
    /// no-continue condition does not exist for them.
    #[must_use]
    pub const fn is_single_credit(self) -> bool {
        matches!(self, Self::Extra | Self::Phantasm)
    }
}

/// Difficulty order when no specific title is known: the permissive default.
#[must_use]
pub fn default_difficulty_order() -> DifficultyList {
    smallvec![
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Lunatic,
        Difficulty::Extra,
    ]
}

/// Resolve the ordered difficulty list for a title. `None` means "no
/// specific title known" and yields the permissive default, not an error.
#[must_use]
pub fn difficulty_order_for(game: Option<&Game>, mode: PlayMode) -> DifficultyList {
    match game {
        Some(game) => difficulty_order_for_series(game.series_number, mode),
        None => default_difficulty_order(),
    }
}

/// Series-keyed difficulty resolution. Priority order; the first matching
/// rule wins:
///
/// 1. LoLK in a recognized mode uses that mode's fixed list (Pointdevice has
///    no Extra at all); any other mode falls through.
/// 2. Start from the base four.
/// 3. Append Extra unless the title is UDoALG, which has no Extra stage.
/// 4. Append Phantasm for PCB, the only title with a fifth tier.
#[must_use]
pub fn difficulty_order_for_series(series: SeriesNumber, mode: PlayMode) -> DifficultyList {
    if series == SeriesNumber::LOLK {
        match mode {
            PlayMode::Legacy => return default_difficulty_order(),
            PlayMode::Pointdevice => return SmallVec::from_slice(&Difficulty::BASE),
            PlayMode::Normal => {}
        }
    }

    let mut order = SmallVec::from_slice(&Difficulty::BASE);
    if series != SeriesNumber::UDOALG {
        order.push(Difficulty::Extra);
    }
    if series == SeriesNumber::PCB {
        order.push(Difficulty::Phantasm);
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(series: SeriesNumber, mode: PlayMode) -> Vec<Difficulty> {
        difficulty_order_for_series(series, mode).to_vec()
    }

    #[test]
    fn ordinary_titles_get_base_four_plus_extra() {
        use Difficulty::*;
        for series in [
            SeriesNumber::EOSD,
            SeriesNumber::IN,
            SeriesNumber::POFV,
            SeriesNumber::FW,
            SeriesNumber::UDOKJ,
        ] {
            for mode in [PlayMode::Normal, PlayMode::Legacy, PlayMode::Pointdevice] {
                assert_eq!(
                    order(series, mode),
                    vec![Easy, Normal, Hard, Lunatic, Extra],
                    "series {series} mode {}",
                    mode.as_str()
                );
            }
        }
    }

    #[test]
    fn pcb_is_the_only_title_with_phantasm() {
        assert_eq!(
            order(SeriesNumber::PCB, PlayMode::Normal).last(),
            Some(&Difficulty::Phantasm)
        );
        assert_eq!(order(SeriesNumber::PCB, PlayMode::Normal).len(), 6);
        for tenths in (60..=200).step_by(2) {
            let series = SeriesNumber::from_tenths(tenths);
            if series == SeriesNumber::PCB {
                continue;
            }
            assert!(
                !order(series, PlayMode::Normal).contains(&Difficulty::Phantasm),
                "series {series}"
            );
        }
    }

    #[test]
    fn udoalg_never_gets_extra() {
        for mode in [PlayMode::Normal, PlayMode::Legacy, PlayMode::Pointdevice] {
            let order = order(SeriesNumber::UDOALG, mode);
            assert_eq!(order, Difficulty::BASE.to_vec());
            assert!(!order.contains(&Difficulty::Extra));
        }
    }

    #[test]
    fn lolk_modes_differ_only_in_extra() {
        let legacy = order(SeriesNumber::LOLK, PlayMode::Legacy);
        let pointdevice = order(SeriesNumber::LOLK, PlayMode::Pointdevice);
        assert_eq!(legacy.len(), 5);
        assert_eq!(pointdevice.len(), 4);
        assert!(legacy.contains(&Difficulty::Extra));
        assert!(!pointdevice.contains(&Difficulty::Extra));
        assert_eq!(&legacy[..4], &pointdevice[..]);
    }

    #[test]
    fn lolk_unrecognized_mode_falls_through_to_default() {
        assert_eq!(
            order(SeriesNumber::LOLK, PlayMode::Normal),
            default_difficulty_order().to_vec()
        );
    }

    #[test]
    fn missing_game_uses_permissive_default() {
        assert_eq!(
            difficulty_order_for(None, PlayMode::Normal),
            default_difficulty_order()
        );
    }

    #[test]
    fn base_order_is_stable() {
        use Difficulty::*;
        assert_eq!(Difficulty::BASE, [Easy, Normal, Hard, Lunatic]);
        assert!(Extra < Phantasm);
    }
}
