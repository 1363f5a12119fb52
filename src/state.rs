use crate::models::DailySnapshot;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub snapshot: Arc<Mutex<DailySnapshot>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, snapshot: DailySnapshot) -> Self {
        Self {
            data_path,
            snapshot: Arc::new(Mutex::new(snapshot)),
        }
    }
}
