use crate::models::{ProblemQuery, ProblemRecord};

const ALL: &str = "All";

/// Applies the list filters and orders the result newest day first.
pub fn filter_problems(problems: &[ProblemRecord], query: &ProblemQuery) -> Vec<ProblemRecord> {
    let search = query
        .search
        .as_deref()
        .map(|value| value.trim().to_lowercase())
        .unwrap_or_default();
    let difficulty = active_filter(query.difficulty.as_deref());
    let platform = active_filter(query.platform.as_deref());

    let mut matches: Vec<ProblemRecord> = problems
        .iter()
        .filter(|problem| matches_search(problem, &search))
        .filter(|problem| difficulty.is_none_or(|value| problem.difficulty == value))
        .filter(|problem| platform.is_none_or(|value| problem.platform == value))
        .cloned()
        .collect();

    matches.sort_by(|a, b| b.date.cmp(&a.date));
    matches
}

fn active_filter(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty() && *value != ALL)
}

fn matches_search(problem: &ProblemRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    problem.title.to_lowercase().contains(needle)
        || problem
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}
