use crate::accounts::AccountDirectory;
use crate::dose_log::DoseLog;
use crate::registry::MedicineRegistry;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
pub struct Tracker {
    pub registry: MedicineRegistry,
    pub log: DoseLog,
    pub accounts: AccountDirectory,
}

#[derive(Clone, Default)]
pub struct AppState {
    pub tracker: Arc<Mutex<Tracker>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
