use crate::config::ReportSettings;
use crate::output::presenter::MISSING_DESCRIPTION;
use tracing::error;

/// Full description of one department, or `None` if it is not known.
pub fn department_details(settings: &ReportSettings, department: &str) -> Option<String> {
    settings
        .description(department)
        .map(|text| format!("{}\n\n{}", department, text))
}

/// One line per department, in report order.
pub fn department_listing(settings: &ReportSettings) -> String {
    let departments = settings.order.departments();
    let mut listing = format!(
        "\nDepartments in report order (Total: {}):\n",
        departments.len()
    );
    for (rank, department) in departments.iter().enumerate() {
        let summary = settings
            .description(department)
            .and_then(|text| text.lines().next())
            .unwrap_or(MISSING_DESCRIPTION);
        listing.push_str(&format!("{}. {}: {}\n", rank + 1, department, summary));
    }
    listing
}

pub fn handle_departments_command(details: Option<String>) {
    let settings = ReportSettings::builtin();

    match details {
        Some(department) => match department_details(&settings, &department) {
            Some(text) => println!("{}", text),
            None => {
                error!("Department '{}' not found.", department);
                std::process::exit(1);
            }
        },
        None => print!("{}", department_listing(&settings)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_details() {
        let settings = ReportSettings::builtin();

        let details = department_details(&settings, "SketchupBugs").unwrap();
        assert!(details.starts_with("SketchupBugs\n\nBugs are"));
        assert!(department_details(&settings, "Nonexistent").is_none());
    }

    #[test]
    fn test_department_listing_follows_priority() {
        let listing = department_listing(&ReportSettings::builtin());

        assert!(listing.contains("(Total: 5)"));
        let requirements = listing.find("1. SketchupRequirements:").unwrap();
        let suggestions = listing.find("5. SketchupSuggestions:").unwrap();
        assert!(requirements < suggestions);
    }
}
