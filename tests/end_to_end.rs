use offense_report::config::ReportSettings;
use offense_report::core::{Aggregator, DepartmentOrder, RunListener};
use offense_report::input::FindingsDocument;
use offense_report::models::{Finding, Severity};
use offense_report::output::html::render_html;
use offense_report::output::{write_report, ReportFormat};
use pretty_assertions::assert_eq;

fn finding(rule_id: &str, source_line: &str, begin: usize, end: usize) -> Finding {
    Finding {
        rule_id: rule_id.to_string(),
        file_path: String::new(),
        severity: Severity::Convention,
        message: format!("`{}` offense", rule_id),
        source_line: source_line.to_string(),
        highlight_begin: begin,
        highlight_end: end,
        first_line: 7,
        last_line: 7,
    }
}

fn render(report: &offense_report::models::Report, settings: &ReportSettings) -> String {
    let mut out = Vec::new();
    render_html(report, settings, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_requirements_section_comes_before_performance() {
    let files = vec!["perf.rb".to_string(), "reqs.rb".to_string()];
    let mut aggregator = Aggregator::new();
    aggregator.run_started(&files);
    aggregator
        .file_finished(
            "perf.rb",
            vec![finding("SketchupPerformance/TypeCheck", "e.typename == 'Face'", 0, 10)],
        )
        .unwrap();
    aggregator
        .file_finished("reqs.rb", vec![finding("SketchupRequirements/Foo", "foo", 0, 3)])
        .unwrap();
    let report = aggregator.run_finished(&files).unwrap();

    let summary = report.summary();
    assert_eq!(summary.offense_count, 2);
    assert_eq!(summary.inspected_files, 2);

    let html = render(&report, &ReportSettings::builtin());
    let requirements = html
        .find(r#"<h2 class="department">SketchupRequirements"#)
        .unwrap();
    let performance = html
        .find(r#"<h2 class="department">SketchupPerformance"#)
        .unwrap();
    assert!(requirements < performance);
    assert!(html.contains(r#"<span class="offense-count">2</span>"#));
    assert!(html.contains(r#"<span class="inspected-files">2</span>"#));
    assert!(html.contains("perf.rb:7"));
    assert!(html.contains("data:image/png;base64,iVBORw0KGgo"));
}

#[test]
fn test_custom_priority_order() {
    let mut settings = ReportSettings::builtin();
    settings.order = DepartmentOrder::new(["A", "B"]);

    let mut aggregator = Aggregator::new();
    aggregator
        .file_finished(
            "x.rb",
            vec![
                finding("B/a", "x", 0, 1),
                finding("A/z", "x", 0, 1),
                finding("A/a", "x", 0, 1),
            ],
        )
        .unwrap();
    let report = aggregator.run_finished(&[]).unwrap();
    let html = render(&report, &settings);

    let positions: Vec<usize> = ["offense_a_a", "offense_a_z", "offense_b_a"]
        .iter()
        .map(|anchor| html.find(&format!(r#"id="{}""#, anchor)).unwrap())
        .collect();
    assert!(positions[0] < positions[1]);
    assert!(positions[1] < positions[2]);
}

#[test]
fn test_rendering_twice_gives_same_sections() {
    let mut aggregator = Aggregator::new();
    aggregator
        .file_finished(
            "x.rb",
            vec![
                finding("SketchupBugs/A", "x", 0, 1),
                finding("SketchupBugs/B", "x", 0, 1),
                finding("SketchupSuggestions/C", "x", 0, 1),
            ],
        )
        .unwrap();
    let report = aggregator.run_finished(&[]).unwrap();
    let settings = ReportSettings::builtin();

    let first = render(&report, &settings);
    let second = render(&report, &settings);
    assert_eq!(first, second);
    assert_eq!(first.matches(r#"<h2 class="department">"#).count(), 2);
}

#[test]
fn test_document_replay_to_json() {
    let document: FindingsDocument = serde_json::from_str(
        r#"{
            "files": [
                { "path": "a.rb", "findings": [{
                    "rule_id": "SketchupDeprecations/OperationNextTransparent",
                    "severity": "error",
                    "message": "Use `true` instead.",
                    "source_line": "model.start_operation('x', true, true)",
                    "highlight_begin": 33,
                    "highlight_end": 37,
                    "first_line": 1,
                    "last_line": 2
                }]}
            ]
        }"#,
    )
    .unwrap();
    let report = document.replay(Aggregator::new()).unwrap();

    let mut out = Vec::new();
    write_report(&report, &ReportSettings::builtin(), ReportFormat::Json, &mut out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(value["summary"]["error"], 1);
    assert_eq!(value["summary"]["inspected_files"], 1);
    assert_eq!(
        value["rules"][0]["rule_id"],
        "SketchupDeprecations/OperationNextTransparent"
    );
}
