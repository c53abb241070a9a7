use crate::errors::AppError;
use crate::models::{AppData, DEFAULT_PLATFORM, Difficulty, NewProblemRequest, ProblemRecord};
use crate::stats::{date_key, parse_day};
use chrono::NaiveDate;
use uuid::Uuid;

/// Validates a create request and turns it into a record with a fresh id.
/// `today` fills in the solve date when the request has none.
pub fn build_record(request: NewProblemRequest, today: NaiveDate) -> Result<ProblemRecord, AppError> {
    let title = request.title.trim();
    if title.is_empty() {
        return Err(AppError::bad_request("title must not be empty"));
    }

    let difficulty = match non_empty(request.difficulty) {
        Some(value) => Difficulty::parse(&value).ok_or_else(|| {
            AppError::bad_request("difficulty must be one of Easy, Medium, Hard")
        })?,
        None => Difficulty::Easy,
    };

    let date = match non_empty(request.date) {
        Some(value) => {
            let day = parse_day(&value)
                .ok_or_else(|| AppError::bad_request("date must be formatted as YYYY-MM-DD"))?;
            date_key(day)
        }
        None => date_key(today),
    };

    Ok(ProblemRecord {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        platform: non_empty(request.platform).unwrap_or_else(|| DEFAULT_PLATFORM.to_string()),
        difficulty: difficulty.as_str().to_string(),
        tags: split_tags(&request.tags),
        date,
        link: non_empty(request.link),
    })
}

pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Newest entries go first.
pub fn insert_problem(data: &mut AppData, record: ProblemRecord) {
    data.problems.insert(0, record);
}

/// Removes every record carrying `id`; returns how many were removed.
pub fn remove_problem(data: &mut AppData, id: &str) -> usize {
    let before = data.problems.len();
    data.problems.retain(|problem| problem.id != id);
    before - data.problems.len()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
