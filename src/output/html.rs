use crate::config::ReportSettings;
use crate::core::{sort_rules, version, RuleGroup};
use crate::error::Result;
use crate::models::{Report, Severity};
use crate::output::presenter::{
    anchor_id, decorated_message, escape, highlighted_source_line, location_label, Presenter,
    SeenDepartments,
};
use std::io::Write;
use tracing::info;

const BASE_CSS: &str = r#"
* { box-sizing: border-box; }
body {
    margin: 0;
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    line-height: 1.5;
    color: #333;
    background: #f6f6f6;
}
header {
    display: flex;
    align-items: center;
    gap: 1rem;
    padding: 1.5rem 2rem;
    color: #fff;
    background: #2c2c2c;
}
header img { height: 56px; }
header h1 { margin: 0; font-size: 1.5rem; }
header .summary { margin: 0; color: #ccc; }
main { max-width: 1100px; margin: 0 auto; padding: 1rem 2rem 3rem; }
nav ul { list-style: none; padding-left: 1rem; }
nav .department { font-weight: 600; margin-top: 0.5rem; }
h2.department { margin-top: 2.5rem; border-bottom: 2px solid #ddd; }
.department-count { font-size: 0.9rem; color: #777; font-weight: normal; }
.description { color: #555; }
.offense-group { margin: 1.5rem 0; background: #fff; border: 1px solid #ddd; border-radius: 4px; }
.offense-group h3 { margin: 0; padding: 0.75rem 1rem; background: #fafafa; border-bottom: 1px solid #ddd; }
.offense { padding: 0.75rem 1rem; border-bottom: 1px solid #eee; }
.offense:last-child { border-bottom: none; }
.location { font-family: monospace; color: #555; }
.severity { display: inline-block; padding: 0 0.4rem; border-radius: 3px; color: #fff; font-size: 0.8rem; text-transform: uppercase; }
.message code, pre code { font-family: Menlo, Consolas, monospace; }
.message code { padding: 0 0.2rem; background: #f0f0f0; border-radius: 2px; }
pre { margin: 0.5rem 0 0; padding: 0.5rem; overflow-x: auto; background: #fbfbfb; border: 1px solid #eee; }
.highlight { border-radius: 2px; }
.extra-code { color: #999; }
footer { padding: 1rem 2rem; color: #999; font-size: 0.8rem; text-align: center; }
"#;

/// Per-severity rules built from the color table.
fn severity_css(presenter: &Presenter<'_>) -> String {
    let mut css = String::new();
    for severity in Severity::ALL {
        let color = presenter.severity_color(severity);
        css.push_str(&format!(
            ".severity.{name} {{ background-color: {solid}; }}\n\
             .highlight.{name} {{ background-color: {fill}; border: 1px solid {border}; }}\n",
            name = severity.name(),
            solid = color,
            fill = color.fade_out(0.85),
            border = color.fade_out(0.5),
        ));
    }
    css
}

/// Render the whole report as one HTML document into `sink`.
///
/// The logo is encoded before anything is written, so an unreadable asset
/// aborts the pass without touching the sink.
pub fn render_html<W: Write>(report: &Report, settings: &ReportSettings, sink: &mut W) -> Result<()> {
    let presenter = Presenter::new(report, settings);
    let logo = presenter.encoded_logo()?;
    let groups = sort_rules(report, &settings.order);

    write_head(&presenter, &logo, sink)?;
    write_navigation(&presenter, &groups, sink)?;

    let mut seen = SeenDepartments::new();
    for group in &groups {
        if seen.is_new_department(group.rule_id) {
            write_department_header(&presenter, group, sink)?;
        }
        write_rule(group, sink)?;
    }

    if groups.is_empty() {
        writeln!(sink, "<p>No offenses detected.</p>")?;
    }

    write_footer(report, sink)?;
    sink.flush()?;

    info!(
        "Rendered {} offenses in {} rules",
        report.offense_count(),
        groups.len()
    );
    Ok(())
}

fn write_head<W: Write>(presenter: &Presenter<'_>, logo: &str, sink: &mut W) -> Result<()> {
    let report = presenter.report();
    let summary = report.summary();
    let title = escape(&presenter.settings().title);

    write!(
        sink,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{base}{severities}</style>
</head>
<body>
<header>
<img src="data:image/png;base64,{logo}" alt="logo">
<div>
<h1>{title}</h1>
<p class="summary"><span class="inspected-files">{files}</span> files inspected, <span class="offense-count">{count}</span> offenses detected</p>
</div>
</header>
<main>
"#,
        title = title,
        base = BASE_CSS,
        severities = severity_css(presenter),
        logo = logo,
        files = summary.inspected_files,
        count = summary.offense_count,
    )?;

    Ok(())
}

fn write_navigation<W: Write>(
    presenter: &Presenter<'_>,
    groups: &[RuleGroup<'_>],
    sink: &mut W,
) -> Result<()> {
    if groups.is_empty() {
        return Ok(());
    }

    writeln!(sink, "<nav>\n<h2>Contents</h2>\n<ul>")?;
    let mut seen = SeenDepartments::new();
    for group in groups {
        if seen.is_new_department(group.rule_id) {
            let department = presenter.department(group.rule_id);
            writeln!(
                sink,
                r#"<li class="department">{} <span class="department-count">({})</span></li>"#,
                escape(department),
                presenter.department_offense_count(department)
            )?;
        }
        writeln!(
            sink,
            r##"<li><a href="#{}">{}</a> ({})</li>"##,
            anchor_id(group.rule_id),
            escape(group.rule_id),
            group.findings.len()
        )?;
    }
    writeln!(sink, "</ul>\n</nav>")?;

    Ok(())
}

fn write_department_header<W: Write>(
    presenter: &Presenter<'_>,
    group: &RuleGroup<'_>,
    sink: &mut W,
) -> Result<()> {
    let department = presenter.department(group.rule_id);
    writeln!(
        sink,
        r#"<h2 class="department">{} <span class="department-count">{} offenses</span></h2>
<div class="description">
{}
</div>"#,
        escape(department),
        presenter.department_offense_count(department),
        presenter.department_description(group.rule_id)
    )?;

    Ok(())
}

fn write_rule<W: Write>(group: &RuleGroup<'_>, sink: &mut W) -> Result<()> {
    writeln!(
        sink,
        r#"<div class="offense-group" id="{}">
<h3>{} <span class="department-count">{}</span></h3>"#,
        anchor_id(group.rule_id),
        escape(group.rule_id),
        group.findings.len()
    )?;

    for finding in group.findings {
        writeln!(
            sink,
            r#"<div class="offense">
<div class="location">{location} <span class="severity {severity}">{severity}</span></div>
<div class="message">{message}</div>
<pre><code>{source}</code></pre>
</div>"#,
            location = escape(&location_label(finding)),
            severity = finding.severity.name(),
            message = decorated_message(finding),
            source = highlighted_source_line(finding)?,
        )?;
    }

    writeln!(sink, "</div>")?;
    Ok(())
}

fn write_footer<W: Write>(report: &Report, sink: &mut W) -> Result<()> {
    write!(
        sink,
        r#"</main>
<footer>Generated by offense-report {} on {}</footer>
</body>
</html>
"#,
        version(),
        report.generated_at().format("%Y-%m-%d %H:%M:%S UTC")
    )?;

    Ok(())
}
