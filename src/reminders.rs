use crate::models::{DoseEvent, Medicine};
use crate::state::AppState;
use chrono::{DateTime, Local, Timelike};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

/// Medicines scheduled for `now`'s exact hour and minute that have no dose
/// logged against them on `now`'s calendar day.
pub fn check_due_reminders<'a>(
    medicines: &'a [Medicine],
    events: &[DoseEvent],
    now: DateTime<Local>,
) -> Vec<&'a Medicine> {
    let today = now.date_naive();
    medicines
        .iter()
        .filter(|medicine| {
            medicine.time.hour() == now.hour() && medicine.time.minute() == now.minute()
        })
        .filter(|medicine| {
            !events.iter().any(|event| {
                event.medicine_id == medicine.id && event.recorded_at.date_naive() == today
            })
        })
        .collect()
}

/// Medicines whose scheduled time is still ahead of `now` today.
pub fn pending_schedule(medicines: &[Medicine], now: DateTime<Local>) -> Vec<&Medicine> {
    let current = (now.hour(), now.minute());
    medicines
        .iter()
        .filter(|medicine| (medicine.time.hour(), medicine.time.minute()) > current)
        .collect()
}

pub fn spawn_reminder_loop(state: AppState, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            let now = Local::now();
            let tracker = state.tracker.lock().await;
            let due = check_due_reminders(tracker.registry.list(), tracker.log.list(), now);
            if due.is_empty() {
                debug!("no reminders due at {}", now.format("%H:%M"));
            }
            for medicine in due {
                info!(
                    medicine_id = medicine.id,
                    name = %medicine.name,
                    dosage = %medicine.dosage,
                    "time to take {} {}",
                    medicine.name,
                    medicine.dosage
                );
            }
        }
    })
}
