use crate::errors::AppError;
use crate::models::{
    DailySnapshot, HabitKey, SideQuestKey, StepsRequest, ToggleRequest, TodayResponse,
    WaterRequest, WATER_GOAL,
};
use crate::progress::{main_protocol_percent, side_quest_percent};
use crate::state::AppState;
use crate::storage::{persist_snapshot, today_string};
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use tracing::{error, info};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let snapshot = current(&state).await;
    Html(render_index(&to_response(&snapshot)))
}

pub async fn get_today(State(state): State<AppState>) -> Json<TodayResponse> {
    let snapshot = current(&state).await;
    Json(to_response(&snapshot))
}

pub async fn set_steps(
    State(state): State<AppState>,
    Json(payload): Json<StepsRequest>,
) -> Json<TodayResponse> {
    Json(apply(&state, |snapshot| snapshot.set_steps(payload.target)).await)
}

pub async fn set_water(
    State(state): State<AppState>,
    Json(payload): Json<WaterRequest>,
) -> Result<Json<TodayResponse>, AppError> {
    if payload.glass == 0 || payload.glass > WATER_GOAL {
        return Err(AppError::bad_request(format!(
            "glass must be between 1 and {WATER_GOAL}"
        )));
    }

    Ok(Json(apply(&state, |snapshot| snapshot.set_water(payload.glass)).await))
}

pub async fn toggle_habit(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<TodayResponse>, AppError> {
    let key = HabitKey::parse(payload.key.trim())
        .ok_or_else(|| AppError::bad_request(format!("unknown habit key '{}'", payload.key)))?;

    Ok(Json(apply(&state, |snapshot| snapshot.toggle_habit(key)).await))
}

pub async fn toggle_side_quest(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<TodayResponse>, AppError> {
    let key = SideQuestKey::parse(payload.key.trim()).ok_or_else(|| {
        AppError::bad_request(format!("unknown side quest key '{}'", payload.key))
    })?;

    Ok(Json(apply(&state, |snapshot| snapshot.toggle_side_quest(key)).await))
}

pub async fn reset(State(state): State<AppState>) -> Json<TodayResponse> {
    Json(apply(&state, DailySnapshot::reset).await)
}

/// Runs one mutation against the live snapshot and mirrors it to storage.
/// The snapshot is rolled to today first, so a mutation landing after
/// midnight starts from a clean day instead of touching stale state.
async fn apply<F>(state: &AppState, op: F) -> TodayResponse
where
    F: FnOnce(&mut DailySnapshot),
{
    let today = today_string();
    let mut snapshot = state.snapshot.lock().await;
    if snapshot.roll_over(&today) {
        info!("day changed, starting a fresh snapshot for {today}");
    }
    op(&mut snapshot);
    save(state, &snapshot).await;
    to_response(&snapshot)
}

/// Read path with the same validity rule: a stale snapshot is reset (and the
/// reset persisted) before anything is reported.
async fn current(state: &AppState) -> DailySnapshot {
    let today = today_string();
    let mut snapshot = state.snapshot.lock().await;
    if snapshot.roll_over(&today) {
        info!("day changed, starting a fresh snapshot for {today}");
        save(state, &snapshot).await;
    }
    snapshot.clone()
}

/// A failed write degrades the session to non-persistent; the in-memory
/// snapshot stays authoritative, so the error is only logged.
async fn save(state: &AppState, snapshot: &DailySnapshot) {
    if let Err(err) = persist_snapshot(&state.data_path, snapshot).await {
        error!("failed to persist snapshot: {err}");
    }
}

fn to_response(snapshot: &DailySnapshot) -> TodayResponse {
    TodayResponse {
        main_protocol_percent: main_protocol_percent(snapshot),
        side_quest_percent: side_quest_percent(snapshot),
        date: snapshot.date.clone(),
        water_count: snapshot.water_count,
        steps: snapshot.steps,
        daily_habits: snapshot.daily_habits,
        side_quests: snapshot.side_quests,
    }
}
