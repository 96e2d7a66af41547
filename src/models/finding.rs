use crate::error::{ReportError, Result};
use crate::models::severity::Severity;
use serde::{Deserialize, Serialize};

/// One rule violation reported by the analysis engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Namespaced as `Department/RuleName`.
    pub rule_id: String,
    #[serde(default)]
    pub file_path: String,
    pub severity: Severity,
    pub message: String,
    /// Full text of the first offending line.
    pub source_line: String,
    /// Byte offsets into `source_line`.
    pub highlight_begin: usize,
    pub highlight_end: usize,
    pub first_line: usize,
    pub last_line: usize,
}

impl Finding {
    pub fn is_multiline(&self) -> bool {
        self.first_line != self.last_line
    }

    /// The highlighted span, or `None` when the offsets do not select a
    /// valid slice of the source line.
    pub fn highlighted_area(&self) -> Option<&str> {
        if self.highlight_begin > self.highlight_end {
            return None;
        }
        self.source_line
            .get(self.highlight_begin..self.highlight_end)
    }

    pub fn validate(&self) -> Result<()> {
        match self.highlighted_area() {
            Some(_) => Ok(()),
            None => Err(ReportError::MalformedHighlight {
                rule_id: self.rule_id.clone(),
                file: self.file_path.clone(),
                begin: self.highlight_begin,
                end: self.highlight_end,
                len: self.source_line.len(),
            }),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn finding(rule_id: &str, source_line: &str, begin: usize, end: usize) -> Finding {
        Finding {
            rule_id: rule_id.to_string(),
            file_path: String::new(),
            severity: Severity::Warning,
            message: format!("{} violated", rule_id),
            source_line: source_line.to_string(),
            highlight_begin: begin,
            highlight_end: end,
            first_line: 1,
            last_line: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::finding;
    use super::*;

    #[test]
    fn test_highlighted_area() {
        let f = finding("SketchupBugs/Foo", "x = foo(1)", 4, 10);
        assert_eq!(f.highlighted_area(), Some("foo(1)"));
        assert!(f.validate().is_ok());
    }

    #[test]
    fn test_empty_highlight_is_valid() {
        let f = finding("SketchupBugs/Foo", "abc", 3, 3);
        assert_eq!(f.highlighted_area(), Some(""));
    }

    #[test]
    fn test_reversed_offsets_are_rejected() {
        let f = finding("SketchupBugs/Foo", "abcdef", 4, 2);
        assert!(matches!(
            f.validate(),
            Err(ReportError::MalformedHighlight { begin: 4, end: 2, .. })
        ));
    }

    #[test]
    fn test_offsets_past_line_end_are_rejected() {
        let f = finding("SketchupBugs/Foo", "abc", 1, 9);
        assert!(f.validate().is_err());
    }

    #[test]
    fn test_offset_inside_multibyte_char_is_rejected() {
        // 'é' occupies bytes 1..3
        let f = finding("SketchupBugs/Foo", "héllo", 2, 4);
        assert!(f.validate().is_err());
    }
}
