use crate::config::ReportSettings;
use crate::core::{department, sort_rules};
use crate::models::{Report, Severity};
use fnv::FnvHasher;
use serde_sarif::sarif::{
    self, ArtifactLocation, Message, MultiformatMessageString, PhysicalLocation,
    ReportingDescriptor, Result as SarifResult, ResultLevel, Run, Sarif, ToolComponent, Version,
    SCHEMA_URL,
};
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

fn severity_to_level(severity: Severity) -> ResultLevel {
    match severity {
        Severity::Error | Severity::Fatal => ResultLevel::Error,
        Severity::Warning => ResultLevel::Warning,
        Severity::Refactor | Severity::Convention => ResultLevel::Note,
    }
}

/// Stable across runs and Rust versions, hence FNV rather than DefaultHasher.
fn generate_fingerprint(rule_id: &str, file: &str, line: usize, source_line: &str) -> String {
    let mut hasher = FnvHasher::default();
    rule_id.hash(&mut hasher);
    file.hash(&mut hasher);
    line.hash(&mut hasher);
    source_line.trim().hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}

pub fn generate_sarif_report(report: &Report, settings: &ReportSettings) -> Sarif {
    let groups = sort_rules(report, &settings.order);
    let mut rules: Vec<ReportingDescriptor> = Vec::with_capacity(groups.len());
    let mut results: Vec<SarifResult> = Vec::with_capacity(report.offense_count());

    for (rule_index, group) in groups.iter().enumerate() {
        let help_text = settings
            .description(department(group.rule_id))
            .unwrap_or(group.rule_id);

        rules.push(
            ReportingDescriptor::builder()
                .id(group.rule_id)
                .name(group.rule_id)
                .help(MultiformatMessageString::builder().text(help_text).build())
                .build(),
        );

        for finding in group.findings {
            let file_path = finding
                .file_path
                .strip_prefix("./")
                .unwrap_or(&finding.file_path);
            let artifact_location = ArtifactLocation::builder().uri(file_path).build();

            // SARIF columns are 1-based
            let region = sarif::Region::builder()
                .start_line(finding.first_line as i64)
                .start_column(finding.highlight_begin as i64 + 1)
                .end_line(finding.last_line as i64)
                .snippet(
                    sarif::ArtifactContent::builder()
                        .text(&finding.source_line)
                        .build(),
                )
                .build();

            let physical_location = PhysicalLocation::builder()
                .artifact_location(artifact_location)
                .region(region)
                .build();

            let location = sarif::Location::builder()
                .physical_location(physical_location)
                .build();

            let mut partial_fingerprints = BTreeMap::new();
            partial_fingerprints.insert(
                "primaryLocationLineHash".to_string(),
                generate_fingerprint(
                    group.rule_id,
                    &finding.file_path,
                    finding.first_line,
                    &finding.source_line,
                ),
            );

            results.push(
                SarifResult::builder()
                    .rule_id(group.rule_id)
                    .rule_index(rule_index as i64)
                    .level(severity_to_level(finding.severity))
                    .message(Message::builder().text(&finding.message).build())
                    .locations(vec![location])
                    .partial_fingerprints(partial_fingerprints)
                    .build(),
            );
        }
    }

    let tool_component = ToolComponent::builder()
        .name("offense-report")
        .semantic_version(env!("CARGO_PKG_VERSION"))
        .rules(rules)
        .build();

    let run = Run::builder()
        .tool(tool_component)
        .results(results)
        .build();

    Sarif::builder()
        .version(Version::V2_1_0.to_string())
        .schema(SCHEMA_URL)
        .runs(vec![run])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Aggregator;
    use crate::models::finding::test_support::finding;

    #[test]
    fn test_sarif_generation_basic() {
        let mut aggregator = Aggregator::new();
        aggregator
            .record_findings(
                "./src/main.rb",
                vec![
                    finding("SketchupBugs/B", "x = 1", 0, 1),
                    finding("SketchupRequirements/A", "exit", 0, 4),
                ],
            )
            .unwrap();
        let report = aggregator.finish();

        let sarif = generate_sarif_report(&report, &ReportSettings::builtin());

        assert_eq!(sarif.version, "2.1.0");
        assert_eq!(sarif.runs.len(), 1);
        let run = &sarif.runs[0];
        assert_eq!(run.tool.driver.name, "offense-report");

        let rules = run.tool.driver.rules.as_ref().unwrap();
        assert_eq!(rules[0].id, "SketchupRequirements/A");
        assert_eq!(rules[1].id, "SketchupBugs/B");
        assert_eq!(run.results.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_severity_mapping() {
        assert!(matches!(severity_to_level(Severity::Fatal), ResultLevel::Error));
        assert!(matches!(severity_to_level(Severity::Error), ResultLevel::Error));
        assert!(matches!(
            severity_to_level(Severity::Warning),
            ResultLevel::Warning
        ));
        assert!(matches!(
            severity_to_level(Severity::Convention),
            ResultLevel::Note
        ));
        assert!(matches!(
            severity_to_level(Severity::Refactor),
            ResultLevel::Note
        ));
    }

    #[test]
    fn test_fingerprint_ignores_surrounding_whitespace() {
        assert_eq!(
            generate_fingerprint("A/b", "x.rb", 3, "  foo  "),
            generate_fingerprint("A/b", "x.rb", 3, "foo")
        );
        assert_ne!(
            generate_fingerprint("A/b", "x.rb", 3, "foo"),
            generate_fingerprint("A/b", "x.rb", 4, "foo")
        );
    }

    #[test]
    fn test_sarif_empty_report() {
        let report = Aggregator::new().finish();
        let sarif = generate_sarif_report(&report, &ReportSettings::builtin());

        assert!(sarif.runs[0].results.as_ref().unwrap().is_empty());
    }
}
