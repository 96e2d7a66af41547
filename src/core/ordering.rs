use crate::models::{Finding, Report};
use std::cmp::Ordering;

const SEPARATOR: char = '/';

/// Part of the rule id before the first separator. A rule id without a
/// separator is its own department.
pub fn department(rule_id: &str) -> &str {
    rule_id
        .split_once(SEPARATOR)
        .map_or(rule_id, |(department, _)| department)
}

pub fn rule_name(rule_id: &str) -> &str {
    rule_id
        .split_once(SEPARATOR)
        .map_or(rule_id, |(_, name)| name)
}

/// Fixed priority of departments; earlier entries are reported first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentOrder {
    priority: Vec<String>,
}

impl DepartmentOrder {
    pub fn new<I, S>(priority: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            priority: priority.into_iter().map(Into::into).collect(),
        }
    }

    pub fn rank(&self, department: &str) -> Option<usize> {
        self.priority.iter().position(|d| d == department)
    }

    pub fn departments(&self) -> &[String] {
        &self.priority
    }

    /// Ranked departments first, unknown ones after them by name, then
    /// rule names ascending. The full rule id breaks the remaining tie
    /// between `X` and `X/X`.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let (dept_a, dept_b) = (department(a), department(b));
        let rank_a = self.rank(dept_a).unwrap_or(usize::MAX);
        let rank_b = self.rank(dept_b).unwrap_or(usize::MAX);

        rank_a
            .cmp(&rank_b)
            .then_with(|| dept_a.cmp(dept_b))
            .then_with(|| rule_name(a).cmp(rule_name(b)))
            .then_with(|| a.cmp(b))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RuleGroup<'a> {
    pub rule_id: &'a str,
    pub findings: &'a [Finding],
}

impl<'a> RuleGroup<'a> {
    pub fn department(&self) -> &'a str {
        department(self.rule_id)
    }
}

/// Order every rule of the report once for a whole render pass.
pub fn sort_rules<'a>(report: &'a Report, order: &DepartmentOrder) -> Vec<RuleGroup<'a>> {
    let mut groups: Vec<RuleGroup<'a>> = report
        .rules()
        .map(|(rule_id, findings)| RuleGroup { rule_id, findings })
        .collect();

    groups.sort_by(|a, b| {
        let ordering = order.compare(a.rule_id, b.rule_id);
        debug_assert!(
            ordering != Ordering::Equal,
            "distinct rule ids '{}' and '{}' compared equal",
            a.rule_id,
            b.rule_id
        );
        ordering
    });

    groups
}
