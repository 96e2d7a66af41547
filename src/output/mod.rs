pub mod html;
pub mod json;
pub mod presenter;
pub mod sarif;

use crate::config::ReportSettings;
use crate::error::Result;
use crate::models::Report;
use serde::Deserialize;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Html,
    Json,
    Sarif,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" | "htm" => Ok(ReportFormat::Html),
            "json" => Ok(ReportFormat::Json),
            "sarif" => Ok(ReportFormat::Sarif),
            _ => Err(format!("Invalid report format: {}", s)),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Html => write!(f, "Html"),
            ReportFormat::Json => write!(f, "Json"),
            ReportFormat::Sarif => write!(f, "Sarif"),
        }
    }
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Html => "html",
            ReportFormat::Json => "json",
            ReportFormat::Sarif => "sarif",
        }
    }
}

/// Render `report` in `format` into `sink`.
pub fn write_report<W: Write>(
    report: &Report,
    settings: &ReportSettings,
    format: ReportFormat,
    sink: &mut W,
) -> Result<()> {
    match format {
        ReportFormat::Html => html::render_html(report, settings, sink)?,
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *sink, &json::generate_json_report(report, settings))?;
            writeln!(sink)?;
        }
        ReportFormat::Sarif => {
            serde_json::to_writer_pretty(&mut *sink, &sarif::generate_sarif_report(report, settings))?;
            writeln!(sink)?;
        }
    }
    sink.flush()?;
    Ok(())
}

/// Write to `output` (extension set from the format) or to stdout.
/// Returns the path written, if any.
pub fn generate_report(
    report: &Report,
    settings: &ReportSettings,
    format: ReportFormat,
    output: Option<&Path>,
) -> Result<Option<PathBuf>> {
    match output {
        Some(path) => {
            let path_with_extension = path.with_extension(format.extension());
            let mut file = BufWriter::new(File::create(&path_with_extension)?);
            write_report(report, settings, format, &mut file)?;
            info!("Report written to '{}'", path_with_extension.display());
            Ok(Some(path_with_extension))
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_report(report, settings, format, &mut handle)?;
            Ok(None)
        }
    }
}
