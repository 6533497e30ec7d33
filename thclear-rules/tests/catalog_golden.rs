//! Golden resolution fixture for every cataloged title.
//!
//! The engine fails open: a title missing from the exception tables resolves
//! to a plausible generic ruleset with no error anywhere. This sweep pins
//! the expected resolution of each title so a forgotten table row shows up
//! as a test failure instead of a silently wrong form.
use thclear_rules::{Difficulty, GameCatalog, PlayMode, resolve};

struct Golden {
    series_tenths: u16,
    difficulties: usize,
    has_extra: bool,
    conditions: usize,
    full_spell_card: bool,
    special_labels: &'static [&'static str],
}

const fn golden(
    series_tenths: u16,
    difficulties: usize,
    has_extra: bool,
    conditions: usize,
    full_spell_card: bool,
    special_labels: &'static [&'static str],
) -> Golden {
    Golden {
        series_tenths,
        difficulties,
        has_extra,
        conditions,
        full_spell_card,
        special_labels,
    }
}

/// One row per catalog title, normal mode.
static GOLDEN: &[Golden] = &[
    golden(60, 5, true, 5, true, &[]),
    golden(70, 6, true, 6, true, &["ノー結界"]),
    golden(80, 5, true, 5, true, &[]),
    golden(90, 5, true, 4, false, &[]),
    golden(100, 5, true, 5, true, &[]),
    golden(110, 5, true, 5, true, &[]),
    golden(120, 5, true, 6, true, &["ノーベントラー"]),
    golden(128, 5, true, 6, true, &["ノーアイス"]),
    golden(130, 5, true, 6, true, &["ノートランス"]),
    golden(140, 5, true, 5, true, &[]),
    golden(150, 5, true, 5, true, &[]),
    golden(160, 5, true, 6, true, &["ノー季節解放"]),
    golden(170, 5, true, 7, true, &["ノー暴走", "ノー霊撃"]),
    golden(180, 5, true, 6, true, &["ノーカード"]),
    golden(190, 4, false, 4, false, &[]),
    golden(200, 5, true, 6, true, &["ノー異変石"]),
];

#[test]
fn bundled_catalog_keys_are_bijective() {
    GameCatalog::load_from_static()
        .verify_key_bijection()
        .expect("catalog ids and series numbers must pair 1:1 with the rule tables");
}

#[test]
fn every_title_matches_its_golden_resolution() {
    let catalog = GameCatalog::load_from_static();
    assert_eq!(
        catalog.games.len(),
        GOLDEN.len(),
        "new title added: extend the golden fixture with its expected rules"
    );
    for expected in GOLDEN {
        let game = catalog
            .games
            .iter()
            .find(|g| g.series_number.tenths() == expected.series_tenths)
            .unwrap_or_else(|| panic!("series {} missing from catalog", expected.series_tenths));
        let resolution = resolve(Some(game), PlayMode::Normal);

        assert_eq!(
            resolution.difficulties.len(),
            expected.difficulties,
            "{}: difficulty count",
            game.title
        );
        assert_eq!(
            resolution.difficulties.contains(&Difficulty::Extra),
            expected.has_extra,
            "{}: Extra presence",
            game.title
        );
        assert_eq!(
            resolution.clear_conditions.len(),
            expected.conditions,
            "{}: condition count",
            game.title
        );
        assert_eq!(
            resolution.full_spell_card_available,
            expected.full_spell_card,
            "{}: full spell card",
            game.title
        );

        let labels: Vec<&str> = resolution
            .special_labels
            .values()
            .map(|info| info.label)
            .collect();
        assert_eq!(
            labels, expected.special_labels,
            "{}: special labels",
            game.title
        );
    }
}
