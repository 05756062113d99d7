use crate::models::{DoseEvent, DoseStatus, HistoryFilter, Medicine};
use crate::registry::IdClock;
use chrono::{DateTime, Local};

/// Append-only record of taken and missed doses.
#[derive(Debug, Default)]
pub struct DoseLog {
    events: Vec<DoseEvent>,
    ids: IdClock,
}

impl DoseLog {
    pub fn append(
        &mut self,
        medicine: &Medicine,
        status: DoseStatus,
        now: DateTime<Local>,
    ) -> DoseEvent {
        let event = DoseEvent {
            id: self.ids.next(now),
            medicine_id: medicine.id,
            medicine_name: medicine.name.clone(),
            dosage: medicine.dosage.clone(),
            time: medicine.time,
            status,
            recorded_at: now,
        };
        self.events.push(event.clone());
        event
    }

    pub fn list(&self) -> &[DoseEvent] {
        &self.events
    }

    pub fn history(&self, filter: HistoryFilter) -> Vec<DoseEvent> {
        let mut entries: Vec<DoseEvent> = self
            .events
            .iter()
            .filter(|event| filter.matches(event.status))
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        entries
    }
}
