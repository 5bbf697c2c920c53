use crate::errors::AppError;
use crate::models::{Schedule, TodayResponse};
use crate::state::AppState;
use crate::tracker::load_schedule;
use crate::ui::{render_failure, render_index};
use axum::{extract::State, http::StatusCode, response::Html, Json};
use chrono::{Local, NaiveDate};

pub async fn index(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    match load_schedule(&state.config, &state.client, today()).await {
        Ok(schedule) => (
            StatusCode::OK,
            Html(render_index(
                &schedule,
                state.config.start_date,
                state.config.max_days,
            )),
        ),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, Html(render_failure())),
    }
}

pub async fn get_schedule(State(state): State<AppState>) -> Result<Json<Schedule>, AppError> {
    let schedule = load_schedule(&state.config, &state.client, today()).await?;
    Ok(Json(schedule))
}

pub async fn get_today(State(state): State<AppState>) -> Result<Json<TodayResponse>, AppError> {
    let date = today();
    let schedule = load_schedule(&state.config, &state.client, date).await?;

    Ok(Json(TodayResponse {
        date: date.to_string(),
        start_date: state.config.start_date.to_string(),
        current_day: schedule.current_day,
        max_days: state.config.max_days,
        today: schedule.today().cloned(),
    }))
}

pub async fn healthz() -> &'static str {
    "ok"
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
