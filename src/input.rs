//! Findings documents written by the analysis engine.
//!
//! ```json
//! {
//!   "target_files": ["main.rb"],
//!   "files": [{ "path": "main.rb", "findings": [ ... ] }],
//!   "inspected_files": ["main.rb"]
//! }
//! ```

use crate::core::RunListener;
use crate::error::{ReportError, Result};
use crate::models::{Finding, Report};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileFindings {
    pub path: String,
    #[serde(default)]
    pub findings: Vec<Finding>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FindingsDocument {
    #[serde(default)]
    pub target_files: Vec<String>,
    #[serde(default)]
    pub files: Vec<FileFindings>,
    #[serde(default)]
    pub inspected_files: Vec<String>,
}

impl FindingsDocument {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ReportError::Input {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| ReportError::Input {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Feed the document to `listener` the way a live run would.
    pub fn replay<L: RunListener>(self, mut listener: L) -> Result<Report> {
        listener.run_started(&self.target_files);
        for file in self.files {
            listener.file_finished(&file.path, file.findings)?;
        }
        listener.run_finished(&self.inspected_files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Aggregator;

    const DOCUMENT: &str = r#"{
        "target_files": ["a.rb", "b.rb", "c.rb"],
        "files": [
            {
                "path": "a.rb",
                "findings": [{
                    "rule_id": "SketchupBugs/UniformScaling",
                    "severity": "warning",
                    "message": "Use `Geom::Transformation.scaling` instead.",
                    "source_line": "tr = Geom::Transformation.new(2)",
                    "highlight_begin": 5,
                    "highlight_end": 32,
                    "first_line": 3,
                    "last_line": 3
                }]
            },
            { "path": "b.rb" }
        ],
        "inspected_files": ["a.rb", "b.rb"]
    }"#;

    #[test]
    fn test_load_and_replay() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("findings.json");
        fs::write(&path, DOCUMENT).unwrap();

        let report = FindingsDocument::load(&path)
            .unwrap()
            .replay(Aggregator::new())
            .unwrap();

        assert_eq!(report.offense_count(), 1);
        assert_eq!(report.files(), ["a.rb", "b.rb"]);
        assert_eq!(report.target_files().len(), 3);
        let finding = &report.findings_for("SketchupBugs/UniformScaling")[0];
        assert_eq!(finding.file_path, "a.rb");
        assert_eq!(finding.highlighted_area(), Some("Geom::Transformation.new(2)"));
    }

    #[test]
    fn test_missing_input_file() {
        let result = FindingsDocument::load(Path::new("/nonexistent/findings.json"));
        assert!(matches!(result, Err(ReportError::Input { .. })));
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("findings.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            FindingsDocument::load(&path),
            Err(ReportError::Input { .. })
        ));
    }
}
