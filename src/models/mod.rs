pub mod finding;
pub mod report;
pub mod severity;

pub use finding::Finding;
pub use report::{Report, Summary};
pub use severity::Severity;
