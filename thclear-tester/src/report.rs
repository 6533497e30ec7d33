//! Report rendering for scenario sweeps.
use colored::Colorize;
use serde::Serialize;

use crate::scenario::ScenarioReport;

#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub scenarios: Vec<ScenarioReport>,
}

impl SweepReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.scenarios.iter().all(ScenarioReport::passed)
    }

    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.scenarios
            .iter()
            .flat_map(|s| &s.checks)
            .filter(|c| !c.passed)
            .count()
    }

    /// Render to JSON for machine consumption.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Render a colored console summary: failures in full, passes as counts.
    #[must_use]
    pub fn to_console(&self) -> String {
        let mut out = String::new();
        for scenario in &self.scenarios {
            let passed = scenario.checks.iter().filter(|c| c.passed).count();
            let total = scenario.checks.len();
            let header = if scenario.passed() {
                format!("PASS {} ({passed}/{total})", scenario.scenario).green()
            } else {
                format!("FAIL {} ({passed}/{total})", scenario.scenario).red()
            };
            out.push_str(&header.to_string());
            out.push('\n');
            for check in scenario.checks.iter().filter(|c| !c.passed) {
                out.push_str(&format!(
                    "  {} {}",
                    "✗".red(),
                    check.name.as_str().yellow()
                ));
                if let Some(detail) = &check.detail {
                    out.push_str(&format!(": {detail}"));
                }
                out.push('\n');
            }
        }
        let footer = if self.passed() {
            "all scenarios passed".green().to_string()
        } else {
            format!("{} check(s) failed", self.failure_count())
                .red()
                .to_string()
        };
        out.push_str(&footer);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::CheckResult;

    fn sweep(passed: bool) -> SweepReport {
        SweepReport {
            scenarios: vec![ScenarioReport {
                scenario: "catalog".to_string(),
                checks: vec![CheckResult {
                    name: "key-bijection".to_string(),
                    passed,
                    detail: (!passed).then(|| "duplicate game id 3".to_string()),
                }],
            }],
        }
    }

    #[test]
    fn console_report_surfaces_failures() {
        let report = sweep(false);
        let text = report.to_console();
        assert!(text.contains("key-bijection"));
        assert!(text.contains("duplicate game id 3"));
        assert!(!report.passed());
        assert_eq!(report.failure_count(), 1);
    }

    #[test]
    fn json_report_serializes() {
        let json = sweep(true).to_json().unwrap();
        assert!(json.contains("\"scenario\": \"catalog\""));
    }
}
