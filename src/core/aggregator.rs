use crate::error::Result;
use crate::models::{Finding, Report};
use chrono::Utc;
use fnv::FnvHashMap;
use tracing::{debug, info};

/// Input boundary of a run, driven by the analysis engine.
pub trait RunListener {
    fn run_started(&mut self, target_files: &[String]);

    /// Called once per analyzed file, in whatever order files complete.
    fn file_finished(&mut self, path: &str, findings: Vec<Finding>) -> Result<()>;

    fn run_finished(self, inspected_files: &[String]) -> Result<Report>;
}

/// Collects findings keyed by rule id while a run is in progress.
#[derive(Debug, Default)]
pub struct Aggregator {
    findings_by_rule: FnvHashMap<String, Vec<Finding>>,
    files: Vec<String>,
    target_files: Vec<String>,
    offense_count: usize,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_file(&mut self, path: &str) {
        self.files.push(path.to_string());
    }

    /// Store every finding under its rule id, in arrival order.
    ///
    /// Findings are validated first so that a malformed one is rejected
    /// before anything from this file is stored.
    pub fn record_findings(&mut self, path: &str, mut findings: Vec<Finding>) -> Result<()> {
        for finding in &mut findings {
            finding.file_path = path.to_string();
            finding.validate()?;
        }

        self.offense_count += findings.len();
        for finding in findings {
            self.findings_by_rule
                .entry(finding.rule_id.clone())
                .or_default()
                .push(finding);
        }

        Ok(())
    }

    pub fn total_findings(&self) -> usize {
        self.offense_count
    }

    /// Freeze the collected data. Consumes the aggregator, so no further
    /// findings can be recorded into the returned report.
    pub fn finish(self) -> Report {
        let mut files = self.files;
        files.sort();
        files.dedup();

        info!(
            "Collected {} offenses across {} rules from {} files",
            self.offense_count,
            self.findings_by_rule.len(),
            files.len()
        );

        Report {
            offenses: self.findings_by_rule,
            files,
            target_files: self.target_files,
            offense_count: self.offense_count,
            generated_at: Utc::now(),
        }
    }
}

impl RunListener for Aggregator {
    fn run_started(&mut self, target_files: &[String]) {
        debug!("Run started with {} target files", target_files.len());
        self.target_files = target_files.to_vec();
    }

    fn file_finished(&mut self, path: &str, findings: Vec<Finding>) -> Result<()> {
        debug!("{}: {} offenses", path, findings.len());
        self.record_file(path);
        self.record_findings(path, findings)
    }

    fn run_finished(mut self, inspected_files: &[String]) -> Result<Report> {
        for path in inspected_files {
            self.record_file(path);
        }
        Ok(self.finish())
    }
}
