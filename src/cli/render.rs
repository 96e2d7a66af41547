use crate::config::{load_config, ReportSettings};
use crate::core::Aggregator;
use crate::error::ReportError;
use crate::input::FindingsDocument;
use crate::output;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

/// Which half of the pipeline failed.
#[derive(Debug)]
pub enum Phase {
    Configuration,
    Accumulation,
    Rendering,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Configuration => write!(f, "loading configuration"),
            Phase::Accumulation => write!(f, "accumulating findings"),
            Phase::Rendering => write!(f, "rendering report"),
        }
    }
}

pub fn handle_render_command(
    input: &Path,
    format: Option<String>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<(), (Phase, ReportError)> {
    let config =
        load_config(format, output, config_path).map_err(|e| (Phase::Configuration, e))?;

    let mut settings = ReportSettings::builtin();
    if let Some(title) = &config.title {
        settings = settings.with_title(title);
    }

    let report = FindingsDocument::load(input)
        .and_then(|document| document.replay(Aggregator::new()))
        .map_err(|e| (Phase::Accumulation, e))?;

    info!(
        "Rendering {} offenses from {} files as {}",
        report.offense_count(),
        report.files().len(),
        config.format
    );

    output::generate_report(&report, &settings, config.format, config.output.as_deref())
        .map_err(|e| (Phase::Rendering, e))?;

    Ok(())
}
