pub mod departments;
pub mod init;
pub mod render;

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Create a default offense-report.toml in the current directory
    Init,
    /// Render a report from a findings document
    Render {
        /// JSON findings document produced by the analysis engine
        input: PathBuf,

        #[arg(short, long)]
        format: Option<String>,

        #[arg(short, long, value_name = "REPORT_FILE_NAME")]
        output: Option<PathBuf>,

        #[arg(short, long, value_name = "PATH_TO_CONFIG")]
        config: Option<PathBuf>,
    },
    /// List departments in report order
    Departments {
        /// Print the full description of one department
        #[arg(short, long)]
        details: Option<String>,
    },
}
