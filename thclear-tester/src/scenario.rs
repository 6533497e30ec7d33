//! Named QA scenarios over the rule engine. Each check records pass/fail
//! with a detail string instead of panicking, so one sweep reports every
//! regression at once.
use serde::Serialize;
use thclear_rules::{
    ClearCondition, Difficulty, GameCatalog, PlayMode, SeriesNumber, clear_conditions_for,
    continue_available, difficulty_order_for, full_spell_card_available, mode_available, resolve,
    special_conditions_for_id, special_label_for_id,
};

pub const SCENARIOS: &[(&str, &str)] = &[
    ("catalog", "key bijection and per-title resolution sanity"),
    ("difficulty-matrix", "difficulty order across all titles and modes"),
    ("conditions", "clear-condition lists, specials, and predicate consistency"),
];

#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub scenario: String,
    pub checks: Vec<CheckResult>,
}

impl ScenarioReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    fn check(&mut self, name: impl Into<String>, passed: bool, detail: impl Into<String>) {
        let detail = detail.into();
        self.checks.push(CheckResult {
            name: name.into(),
            passed,
            detail: (!passed && !detail.is_empty()).then_some(detail),
        });
    }
}

#[must_use]
pub fn run_scenario(name: &str, catalog: &GameCatalog) -> Option<ScenarioReport> {
    let mut report = ScenarioReport {
        scenario: name.to_string(),
        checks: Vec::new(),
    };
    match name {
        "catalog" => run_catalog(catalog, &mut report),
        "difficulty-matrix" => run_difficulty_matrix(catalog, &mut report),
        "conditions" => run_conditions(catalog, &mut report),
        _ => return None,
    }
    Some(report)
}

fn run_catalog(catalog: &GameCatalog, report: &mut ScenarioReport) {
    report.check(
        "catalog-not-empty",
        !catalog.games.is_empty(),
        "catalog has no titles",
    );
    match catalog.verify_key_bijection() {
        Ok(()) => report.check("key-bijection", true, ""),
        Err(e) => report.check("key-bijection", false, e.to_string()),
    }
    for game in &catalog.games {
        let resolution = resolve(Some(game), PlayMode::Normal);
        report.check(
            format!("resolves/{}", game.series_number),
            !resolution.difficulties.is_empty() && !resolution.clear_conditions.is_empty(),
            format!("{} resolved to an empty ruleset", game.title),
        );
        report.check(
            format!("idempotent/{}", game.series_number),
            resolution == resolve(Some(game), PlayMode::Normal),
            format!("{} resolution is not stable across calls", game.title),
        );
    }
}

fn run_difficulty_matrix(catalog: &GameCatalog, report: &mut ScenarioReport) {
    for game in &catalog.games {
        let series = game.series_number;
        for mode in [PlayMode::Normal, PlayMode::Legacy, PlayMode::Pointdevice] {
            let order = difficulty_order_for(Some(game), mode);
            let name = format!("order/{}/{}", series, mode.as_str());

            let base_ok = order.len() >= 4 && order[..4] == Difficulty::BASE;
            report.check(
                format!("{name}/base"),
                base_ok,
                format!("base four reordered or truncated: {order:?}"),
            );

            let extra_expected = series != SeriesNumber::UDOALG
                && !(series == SeriesNumber::LOLK && mode == PlayMode::Pointdevice);
            report.check(
                format!("{name}/extra"),
                order.contains(&Difficulty::Extra) == extra_expected,
                format!("Extra presence wrong: {order:?}"),
            );

            report.check(
                format!("{name}/phantasm"),
                order.contains(&Difficulty::Phantasm) == (series == SeriesNumber::PCB),
                format!("Phantasm presence wrong: {order:?}"),
            );
        }
        report.check(
            format!("mode-gate/{series}"),
            mode_available(series) == (series == SeriesNumber::LOLK),
            "mode selector offered for the wrong title",
        );
    }
}

fn run_conditions(catalog: &GameCatalog, report: &mut ScenarioReport) {
    let slots = [
        ClearCondition::Special1,
        ClearCondition::Special2,
        ClearCondition::Special3,
    ];
    for game in &catalog.games {
        let series = game.series_number;
        let conditions = clear_conditions_for(game.category, series);

        report.check(
            format!("versus-consistency/{series}"),
            full_spell_card_available(game.category, series)
                == conditions.contains(&ClearCondition::FullSpellCard),
            format!("{}: predicate and condition list diverge", game.title),
        );
        report.check(
            format!("versus-rule/{series}"),
            conditions.contains(&ClearCondition::FullSpellCard) != game.category.is_versus(),
            format!("{}: full spell card offered to a versus title", game.title),
        );

        let specials = special_conditions_for_id(game.id);
        let labeled = slots
            .iter()
            .filter(|&&slot| special_label_for_id(game.id, slot) != slot.label())
            .count();
        report.check(
            format!("special-slots/{series}"),
            specials.len() == labeled,
            format!(
                "{}: {} slots offered but {} have real labels",
                game.title,
                specials.len(),
                labeled
            ),
        );

        report.check(
            format!("single-credit/{series}"),
            !continue_available(series, PlayMode::Normal, Difficulty::Extra),
            "continue offered on a single-credit stage",
        );
    }
}
