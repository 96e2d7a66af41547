//! Display helpers used while rendering a report.
//!
//! Everything the HTML template needs beyond static markup is derived here,
//! one finding or one department at a time. The only pass-scoped state is
//! [`SeenDepartments`], which the renderer owns and threads through its loop.

use crate::config::{Color, ReportSettings, LOGO_PNG};
use crate::core::ordering;
use crate::error::{ReportError, Result};
use crate::models::{Finding, Report, Severity};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::sync::OnceLock;
use tracing::warn;

pub const MISSING_DESCRIPTION: &str = "MISSING DESCRIPTION";
pub const ANCHOR_PREFIX: &str = "offense_";
pub const ELLIPSIS: &str = r#" <span class="extra-code">...</span>"#;

fn paragraph_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{2,}").expect("valid paragraph regex"))
}

fn code_span() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"`(.+?)`").expect("valid code span regex"))
}

/// Departments already announced during the current render pass.
#[derive(Debug, Default)]
pub struct SeenDepartments {
    seen: HashSet<String>,
}

impl SeenDepartments {
    pub fn new() -> Self {
        Self::default()
    }

    /// True the first time a rule from a given department is seen.
    pub fn is_new_department(&mut self, rule_id: &str) -> bool {
        self.seen.insert(ordering::department(rule_id).to_string())
    }
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Split on blank lines and wrap each escaped paragraph in `<p>`.
/// `\r\n`, `\r` and `\n` all count as one line break.
pub fn format_plain_text(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    paragraph_break()
        .split(&text)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(|paragraph| format!("<p>{}</p>", escape(paragraph)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// In-page anchor for a rule. Ids differing only in case, or in `/`
/// versus `_`, map to the same anchor; rule ids are unique CamelCase
/// names in practice.
pub fn anchor_id(rule_id: &str) -> String {
    format!("{}{}", ANCHOR_PREFIX, rule_id.to_lowercase().replace('/', "_"))
}

/// Escape the message and turn each backtick pair into inline code.
pub fn decorated_message(finding: &Finding) -> String {
    let message = &finding.message;
    let mut decorated = String::with_capacity(message.len());
    let mut last = 0;

    for caps in code_span().captures_iter(message) {
        let (Some(whole), Some(code)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        decorated.push_str(&escape(&message[last..whole.start()]));
        decorated.push_str("<code>");
        decorated.push_str(&escape(code.as_str()));
        decorated.push_str("</code>");
        last = whole.end();
    }
    decorated.push_str(&escape(&message[last..]));

    decorated
}

/// Source line with the offending span wrapped in a severity-classed
/// `<span>`. Multi-line findings get a trailing ellipsis.
pub fn highlighted_source_line(finding: &Finding) -> Result<String> {
    let line = &finding.source_line;
    let (begin, end) = (finding.highlight_begin, finding.highlight_end);
    let (Some(highlight), Some(before), Some(after)) = (
        finding.highlighted_area(),
        line.get(..begin),
        line.get(end..),
    ) else {
        return Err(ReportError::MalformedHighlight {
            rule_id: finding.rule_id.clone(),
            file: finding.file_path.clone(),
            begin,
            end,
            len: line.len(),
        });
    };

    let mut html = escape(before);
    html.push_str(&format!(
        r#"<span class="highlight {}">{}</span>"#,
        finding.severity.name(),
        escape(highlight)
    ));
    html.push_str(&escape(after));
    if finding.is_multiline() {
        html.push_str(ELLIPSIS);
    }

    Ok(html)
}

pub fn location_label(finding: &Finding) -> String {
    if finding.is_multiline() {
        format!(
            "{}:{}-{}",
            finding.file_path, finding.first_line, finding.last_line
        )
    } else {
        format!("{}:{}", finding.file_path, finding.first_line)
    }
}

/// Base64 text of the asset at `path`.
pub fn encode_asset(path: &std::path::Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| ReportError::AssetRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(STANDARD.encode(bytes))
}

/// Helpers bound to one report and the static settings.
pub struct Presenter<'a> {
    report: &'a Report,
    settings: &'a ReportSettings,
}

impl<'a> Presenter<'a> {
    pub fn new(report: &'a Report, settings: &'a ReportSettings) -> Self {
        Self { report, settings }
    }

    pub fn report(&self) -> &'a Report {
        self.report
    }

    pub fn settings(&self) -> &'a ReportSettings {
        self.settings
    }

    pub fn department<'r>(&self, rule_id: &'r str) -> &'r str {
        ordering::department(rule_id)
    }

    pub fn department_description(&self, rule_id: &str) -> String {
        let department = ordering::department(rule_id);
        match self.settings.description(department) {
            Some(text) => format_plain_text(text),
            None => {
                warn!("No description for department '{}'", department);
                format_plain_text(MISSING_DESCRIPTION)
            }
        }
    }

    /// Scans every rule; membership is only known once the run is over.
    pub fn department_offense_count(&self, department: &str) -> usize {
        self.report
            .rules()
            .filter(|(rule_id, _)| ordering::department(rule_id) == department)
            .map(|(_, findings)| findings.len())
            .sum()
    }

    pub fn severity_color(&self, severity: Severity) -> Color {
        self.settings.color(severity)
    }

    pub fn encoded_logo(&self) -> Result<String> {
        match &self.settings.logo_path {
            Some(path) => encode_asset(path),
            None => Ok(STANDARD.encode(LOGO_PNG)),
        }
    }
}
