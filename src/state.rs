use crate::models::AppData;
use chrono::{Local, NaiveDate};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Source of the current local calendar day.
pub type Clock = fn() -> NaiveDate;

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub problems: Arc<Mutex<AppData>>,
    clock: Clock,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData) -> Self {
        Self::with_clock(data_path, data, local_today)
    }

    pub fn with_clock(data_path: PathBuf, data: AppData, clock: Clock) -> Self {
        Self {
            data_path,
            problems: Arc::new(Mutex::new(data)),
            clock,
        }
    }

    /// Read once per request and reused for the whole computation.
    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }
}
