use crate::config::ReportSettings;
use crate::core::sort_rules;
use crate::models::{Finding, Report, Summary};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct JsonRule<'a> {
    pub rule_id: &'a str,
    pub department: &'a str,
    pub findings: &'a [Finding],
}

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub summary: Summary,
    pub files: &'a [String],
    pub rules: Vec<JsonRule<'a>>,
}

/// Same ordering as the HTML report.
pub fn generate_json_report<'a>(report: &'a Report, settings: &ReportSettings) -> JsonReport<'a> {
    let rules = sort_rules(report, &settings.order)
        .into_iter()
        .map(|group| JsonRule {
            rule_id: group.rule_id,
            department: group.department(),
            findings: group.findings,
        })
        .collect();

    JsonReport {
        generated_at: report.generated_at(),
        summary: report.summary(),
        files: report.files(),
        rules,
    }
}
