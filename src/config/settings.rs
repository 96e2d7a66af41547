use crate::core::DepartmentOrder;
use crate::models::Severity;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// Departments in the order their sections appear in a report.
pub const DEPARTMENT_PRIORITY: &[&str] = &[
    "SketchupRequirements",
    "SketchupDeprecations",
    "SketchupPerformance",
    "SketchupBugs",
    "SketchupSuggestions",
];

pub const DEPARTMENT_DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "SketchupRequirements",
        "Requirements are technical rules an extension must follow before it \
can be published on Extension Warehouse.\n\n\
Breaking them usually means the extension interferes with SketchUp itself \
or with other extensions installed alongside it.",
    ),
    (
        "SketchupDeprecations",
        "Deprecations flag API usage that has been superseded.\n\n\
The code still works today but is expected to stop working, or to behave \
differently, in a future SketchUp release.",
    ),
    (
        "SketchupPerformance",
        "Performance offenses point at patterns known to be slow in the \
SketchUp API.\n\n\
Each one is cheap to fix and can make a large difference on big models.",
    ),
    (
        "SketchupBugs",
        "Bugs are known pitfalls in the SketchUp API that produce wrong \
results without raising an error.",
    ),
    (
        "SketchupSuggestions",
        "Suggestions are general advice for a better user experience.\n\n\
They are not required, but following them makes an extension behave the \
way users expect.",
    ),
];

/// RGBA color with an independently adjustable alpha channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f32,
}

impl Color {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// Same hue, lowered alpha. Never drops below fully transparent.
    pub fn fade_out(self, amount: f32) -> Self {
        Self {
            alpha: (self.alpha - amount).max(0.0),
            ..self
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red,
            self.green,
            self.blue,
            (self.alpha * 100.0).round() / 100.0
        )
    }
}

pub fn default_severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Refactor | Severity::Convention => Color::rgb(0xED, 0x9C, 0x28),
        Severity::Warning => Color::rgb(0x96, 0x28, 0xEF),
        Severity::Error | Severity::Fatal => Color::rgb(0xD2, 0x32, 0x2D),
    }
}

/// Logo compiled into the binary so an installed copy renders without the
/// source tree.
pub const LOGO_PNG: &[u8] = include_bytes!("../../assets/logo.png");

/// Static lookup tables consumed by the renderer. Built once at startup and
/// only ever shared by reference.
#[derive(Debug, Clone)]
pub struct ReportSettings {
    pub order: DepartmentOrder,
    pub descriptions: HashMap<String, String>,
    pub severity_colors: HashMap<Severity, Color>,
    /// Replaces the embedded logo when set.
    pub logo_path: Option<PathBuf>,
    pub title: String,
}

impl ReportSettings {
    pub fn builtin() -> Self {
        Self {
            order: DepartmentOrder::new(DEPARTMENT_PRIORITY.iter().copied()),
            descriptions: DEPARTMENT_DESCRIPTIONS
                .iter()
                .map(|(department, text)| (department.to_string(), text.to_string()))
                .collect(),
            severity_colors: Severity::ALL
                .iter()
                .map(|severity| (*severity, default_severity_color(*severity)))
                .collect(),
            logo_path: None,
            title: "SketchUp Extension Offense Report".to_string(),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn description(&self, department: &str) -> Option<&str> {
        self.descriptions.get(department).map(String::as_str)
    }

    pub fn color(&self, severity: Severity) -> Color {
        self.severity_colors
            .get(&severity)
            .copied()
            .unwrap_or_else(|| default_severity_color(severity))
    }
}
