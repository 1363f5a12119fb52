use crate::models::DailySnapshot;
use chrono::Local;
use serde_json::Value;
use std::{env, io, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info};

/// Identifier for the current local calendar day, `%Y-%m-%d`.
pub fn today_string() -> String {
    Local::now().date_naive().to_string()
}

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/state.json"))
}

/// Startup load-or-reset. A missing or unreadable slot yields a fresh
/// snapshot without writing anything; a slot recorded on a different day is
/// replaced by a fresh snapshot which is persisted immediately.
pub async fn load_snapshot(path: &Path) -> DailySnapshot {
    let today = today_string();

    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return DailySnapshot::fresh(today);
        }
        Err(err) => {
            error!("failed to read snapshot file: {err}");
            return DailySnapshot::fresh(today);
        }
    };

    let stored: Value = match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(err) => {
            error!("failed to parse snapshot file: {err}");
            return DailySnapshot::fresh(today);
        }
    };

    match DailySnapshot::restore(&stored, &today) {
        Some(snapshot) => snapshot,
        None => {
            info!("stored snapshot is not from today, starting fresh");
            let fresh = DailySnapshot::fresh(today);
            if let Err(err) = persist_snapshot(path, &fresh).await {
                error!("failed to persist reset snapshot: {err}");
            }
            fresh
        }
    }
}

/// Overwrites the durable slot wholesale. Called after every mutation; the
/// caller decides whether a failure is fatal (it never is for the tracker,
/// which keeps serving from memory).
pub async fn persist_snapshot(path: &Path, snapshot: &DailySnapshot) -> Result<(), io::Error> {
    let payload = serde_json::to_vec_pretty(snapshot).map_err(io::Error::other)?;
    fs::write(path, payload).await
}
