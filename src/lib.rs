pub mod accounts;
pub mod app;
pub mod config;
pub mod dose_log;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod registry;
pub mod reminders;
pub mod state;
pub mod stats;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use reminders::spawn_reminder_loop;
pub use state::AppState;
