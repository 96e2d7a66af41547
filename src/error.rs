use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(
        "Malformed highlight offsets for '{rule_id}' in '{file}': {begin}..{end} does not fit a source line of {len} bytes"
    )]
    MalformedHighlight {
        rule_id: String,
        file: String,
        begin: usize,
        end: usize,
        len: usize,
    },

    #[error("Unable to read report asset '{}': {source}", .path.display())]
    AssetRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unable to read findings from '{}': {message}", .path.display())]
    Input { path: PathBuf, message: String },

    #[error("Error parsing config file '{}': {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
