//! Embedded portfolio knowledge document

/// Assistant persona, response guidelines and portfolio facts, compiled into the binary.
pub const PORTFOLIO_KNOWLEDGE: &str = include_str!("portfolio.md");

const PROJECTS_HEADER: &str = "PROJECT PORTFOLIO:";
const SKILLS_HEADER: &str = "TECHNICAL SKILLS:";

/// Names of the projects listed in a knowledge document, in document order.
///
/// Projects are the numbered top-level lines (`1. Meeting House`) between the
/// project portfolio and technical skills headers. A trailing parenthesized
/// note such as `(Real Time Project)` is dropped.
pub fn project_names(document: &str) -> Vec<String> {
    let Some(start) = document.find(PROJECTS_HEADER) else {
        return Vec::new();
    };
    let section = &document[start + PROJECTS_HEADER.len()..];
    let section = match section.find(SKILLS_HEADER) {
        Some(end) => &section[..end],
        None => section,
    };

    section
        .lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .filter_map(|line| {
            let (number, rest) = line.split_once(". ")?;
            if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            let name = match rest.find(" (") {
                Some(idx) => &rest[..idx],
                None => rest,
            };
            Some(name.trim().to_string())
        })
        .filter(|name| !name.is_empty())
        .collect()
}

/// Find a project by case-insensitive name, returning its canonical spelling
pub fn find_project<'a>(projects: &'a [String], name: &str) -> Option<&'a str> {
    let wanted = name.trim().to_lowercase();
    projects
        .iter()
        .find(|p| p.to_lowercase() == wanted)
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_document_lists_projects() {
        let projects = project_names(PORTFOLIO_KNOWLEDGE);
        assert_eq!(projects.len(), 9);
        assert_eq!(projects[0], "Meeting House");
        assert_eq!(projects[1], "Shri Vagdevi Construction");
        assert!(projects.contains(&"Path Finder".to_string()));
    }

    #[test]
    fn test_project_names_ignores_other_numbered_lists() {
        let doc = "EDUCATION:\n1. SCHOOL\n\nPROJECT PORTFOLIO:\n\n1. Alpha\n   - Technology: Rust\n2. Beta (Side Project)\n\nTECHNICAL SKILLS:\n1. Not a project\n";
        assert_eq!(project_names(doc), vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_project_names_without_section() {
        assert!(project_names("no projects here").is_empty());
    }

    #[test]
    fn test_find_project_case_insensitive() {
        let projects = vec!["Quick Eats".to_string(), "C-Tutor".to_string()];
        assert_eq!(find_project(&projects, "quick eats"), Some("Quick Eats"));
        assert_eq!(find_project(&projects, " c-tutor "), Some("C-Tutor"));
        assert_eq!(find_project(&projects, "unknown"), None);
    }
}
