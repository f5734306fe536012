use crate::catalog::{self, Exercise};
use crate::errors::AppError;
use crate::models::{LogRequest, ProgressResponse, Record};
use crate::state::AppState;
use crate::stats::summarize;
use crate::storage::{append_record, exercise_log};
use crate::ui::{render_exercise, render_picker};
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form, Json,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub exercise: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProgressQuery {
    pub exercise: String,
}

/// `/` renders the exercise picker, or the detail view when a known
/// `?exercise=<slug>` is given. An unknown slug falls back to the picker.
pub async fn index(Query(query): Query<PageQuery>) -> Html<String> {
    match query.exercise.as_deref().and_then(catalog::find_by_slug) {
        Some(exercise) => Html(render_exercise(exercise, &today_string())),
        None => Html(render_picker()),
    }
}

pub async fn list_exercises() -> Json<&'static [Exercise]> {
    Json(catalog::EXERCISES)
}

pub async fn get_progress(
    State(state): State<AppState>,
    Query(query): Query<ProgressQuery>,
) -> Result<Json<ProgressResponse>, AppError> {
    let exercise = catalog::find_by_slug(&query.exercise)
        .ok_or_else(|| AppError::not_found("unknown exercise"))?;

    let _guard = state.store_lock.lock().await;
    let records = exercise_log(&state.data_path, exercise.name).await;

    Ok(Json(to_progress(exercise, records)))
}

pub async fn log_record(
    State(state): State<AppState>,
    Json(payload): Json<LogRequest>,
) -> Result<Json<ProgressResponse>, AppError> {
    let (exercise, record) = validate(&payload)?;

    let _guard = state.store_lock.lock().await;
    let records = append_record(&state.data_path, exercise.name, record).await?;

    Ok(Json(to_progress(exercise, records)))
}

/// Form-post fallback for the detail page; lands back on the same view.
pub async fn log_record_form(
    State(state): State<AppState>,
    Form(payload): Form<LogRequest>,
) -> Result<Redirect, AppError> {
    let (exercise, record) = validate(&payload)?;

    let _guard = state.store_lock.lock().await;
    append_record(&state.data_path, exercise.name, record).await?;

    Ok(Redirect::to(&format!("/?exercise={}", exercise.slug)))
}

fn validate(payload: &LogRequest) -> Result<(&'static Exercise, Record), AppError> {
    let exercise = catalog::find_by_slug(payload.exercise.trim())
        .ok_or_else(|| AppError::bad_request("unknown exercise"))?;

    let date = NaiveDate::parse_from_str(payload.date.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("date must be a valid YYYY-MM-DD date"))?;

    if !payload.weight.is_finite() || payload.weight < 0.0 {
        return Err(AppError::bad_request("weight must be a non-negative number"));
    }

    Ok((
        exercise,
        Record {
            date,
            weight: payload.weight,
        },
    ))
}

fn to_progress(exercise: &Exercise, records: Vec<Record>) -> ProgressResponse {
    ProgressResponse {
        exercise: exercise.name.to_string(),
        slug: exercise.slug.to_string(),
        summary: summarize(&records),
        records,
    }
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
