pub mod aggregator;
pub mod ordering;

pub use aggregator::{Aggregator, RunListener};
pub use ordering::{department, rule_name, sort_rules, DepartmentOrder, RuleGroup};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
