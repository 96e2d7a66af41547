mod settings;

pub use settings::{
    default_severity_color, Color, ReportSettings, DEPARTMENT_DESCRIPTIONS, DEPARTMENT_PRIORITY,
    LOGO_PNG,
};

use crate::error::{ReportError, Result};
use crate::output::ReportFormat;
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const DEFAULT_CONFIG_FILE: &str = "offense-report.toml";

pub const DEFAULT_CONFIG_CONTENT: &str = r#"# offense-report.toml

# Output format for the report.
# Options: "html", "json", "sarif"
# If omitted, it defaults to "html".
# format = "html"

# File to write the report to. The extension is set from the format.
# If omitted, the report is written to stdout.
# output = "offenses"

# Title shown at the top of the HTML report.
# title = "SketchUp Extension Offense Report"
"#;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub format: ReportFormat,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Read the config file (if any) and let CLI values override it.
pub fn load_config(
    format: Option<String>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<Config> {
    let config_path = config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    let config = if !config_path.exists() {
        Config::default()
    } else {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str::<Config>(&content).map_err(|source| ReportError::Config {
            path: config_path.clone(),
            source,
        })?
    };

    Ok(Config {
        format: format.map_or(config.format, |s| {
            s.parse().unwrap_or_else(|e| {
                warn!("{}. Using default format.", e);
                ReportFormat::default()
            })
        }),
        output: output.or(config.output),
        title: config.title,
    })
}

pub fn initialize_config_file(config_path_override: Option<&Path>) -> Result<()> {
    let config_path = config_path_override.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));

    if config_path.exists() {
        info!("'{}' already exists.", config_path.display());
        return Ok(());
    }

    let mut file = fs::File::create(config_path)?;
    file.write_all(DEFAULT_CONFIG_CONTENT.as_bytes())?;
    info!(
        "Created default '{}' configuration file.",
        config_path.display()
    );
    Ok(())
}
