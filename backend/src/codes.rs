//! Human-readable codes the server assigns: student enrollments
//! (`20250001`) and teacher registries (`COMP-001`).
//!
//! Both are "prefix + next sequence", where the next sequence is one past the
//! highest sequence already issued under that prefix.

/// Department part of a registry: upper-cased, spaces removed, at most four
/// characters. `None` when nothing is left.
pub fn department_code(department: &str) -> Option<String> {
    let code: String = department
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .take(4)
        .collect();
    if code.is_empty() {
        None
    } else {
        Some(code)
    }
}

/// Next registry for `code`, given the registries already issued for it.
pub fn next_registry<'a>(code: &str, existing: impl IntoIterator<Item = &'a str>) -> String {
    let prefix = format!("{}-", code);
    let next = next_sequence(existing.into_iter().filter_map(|r| r.strip_prefix(&prefix)));
    format!("{}{:03}", prefix, next)
}

/// Next enrollment for `year`, given the enrollments already issued.
pub fn next_enrollment<'a>(year: i32, existing: impl IntoIterator<Item = &'a str>) -> String {
    let prefix = year.to_string();
    let next = next_sequence(existing.into_iter().filter_map(|e| e.strip_prefix(&prefix)));
    format!("{}{:04}", prefix, next)
}

fn next_sequence<'a>(suffixes: impl Iterator<Item = &'a str>) -> u32 {
    suffixes
        .filter_map(|s| s.parse::<u32>().ok())
        .max()
        .map_or(1, |last| last + 1)
}
