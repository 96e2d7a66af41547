//! Aggregates static-analysis findings by rule and department and renders
//! them as a single navigable report.
//!
//! ```no_run
//! use offense_report::config::ReportSettings;
//! use offense_report::core::Aggregator;
//! use offense_report::output::html::render_html;
//!
//! let mut aggregator = Aggregator::new();
//! aggregator.record_file("main.rb");
//! let report = aggregator.finish();
//! render_html(&report, &ReportSettings::builtin(), &mut std::io::stdout()).unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod models;
pub mod output;

pub use error::{ReportError, Result};
