use crate::models::finding::Finding;
use crate::models::severity::Severity;
use chrono::{DateTime, Utc};
use fnv::FnvHashMap;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub refactor: usize,
    pub convention: usize,
    pub warning: usize,
    pub error: usize,
    pub fatal: usize,
    pub offense_count: usize,
    pub inspected_files: usize,
    pub target_files: usize,
}

/// Finalized, read-only result of one run. Built by
/// [`Aggregator::finish`](crate::core::Aggregator::finish).
#[derive(Debug, Clone)]
pub struct Report {
    pub(crate) offenses: FnvHashMap<String, Vec<Finding>>,
    pub(crate) files: Vec<String>,
    pub(crate) target_files: Vec<String>,
    pub(crate) offense_count: usize,
    pub(crate) generated_at: DateTime<Utc>,
}

impl Report {
    pub fn offense_count(&self) -> usize {
        self.offense_count
    }

    /// Distinct inspected file paths, sorted.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn target_files(&self) -> &[String] {
        &self.target_files
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn findings_for(&self, rule_id: &str) -> &[Finding] {
        self.offenses
            .get(rule_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn rule_ids(&self) -> impl Iterator<Item = &str> {
        self.offenses.keys().map(String::as_str)
    }

    pub fn rules(&self) -> impl Iterator<Item = (&str, &[Finding])> {
        self.offenses
            .iter()
            .map(|(rule_id, findings)| (rule_id.as_str(), findings.as_slice()))
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary {
            offense_count: self.offense_count,
            inspected_files: self.files.len(),
            target_files: self.target_files.len(),
            ..Summary::default()
        };

        for finding in self.offenses.values().flatten() {
            match finding.severity {
                Severity::Refactor => summary.refactor += 1,
                Severity::Convention => summary.convention += 1,
                Severity::Warning => summary.warning += 1,
                Severity::Error => summary.error += 1,
                Severity::Fatal => summary.fatal += 1,
            }
        }

        summary
    }
}
