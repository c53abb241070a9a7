use crate::errors::AppError;
use crate::models::{KNOWN_PLATFORMS, NewProblemRequest, ProblemQuery, ProblemRecord, Stats};
use crate::query::filter_problems;
use crate::records::{build_record, insert_problem, remove_problem};
use crate::state::AppState;
use crate::stats::compute_stats_at;
use crate::storage::persist_data;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::info;

pub async fn list_problems(
    State(state): State<AppState>,
    Query(query): Query<ProblemQuery>,
) -> Result<Json<Vec<ProblemRecord>>, AppError> {
    let data = state.problems.lock().await;
    Ok(Json(filter_problems(&data.problems, &query)))
}

pub async fn create_problem(
    State(state): State<AppState>,
    Json(payload): Json<NewProblemRequest>,
) -> Result<(StatusCode, Json<ProblemRecord>), AppError> {
    let record = build_record(payload, state.today())?;

    let mut data = state.problems.lock().await;
    let mut updated = data.clone();
    insert_problem(&mut updated, record.clone());
    persist_data(&state.data_path, &updated).await?;
    *data = updated;

    info!(id = %record.id, title = %record.title, date = %record.date, "problem logged");
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn delete_problem(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.problems.lock().await;
    let mut updated = data.clone();
    if remove_problem(&mut updated, &id) == 0 {
        return Err(AppError::not_found(format!("no problem with id '{id}'")));
    }
    persist_data(&state.data_path, &updated).await?;
    *data = updated;

    info!(%id, "problem deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<Stats>, AppError> {
    let today = state.today();
    let data = state.problems.lock().await;
    Ok(Json(compute_stats_at(today, &data.problems)))
}

pub async fn list_platforms() -> Json<Vec<&'static str>> {
    Json(KNOWN_PLATFORMS.to_vec())
}
