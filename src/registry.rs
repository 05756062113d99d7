use crate::models::{Medicine, NewMedicine};
use chrono::{DateTime, Local};

/// Hands out ids from the creation instant in milliseconds, bumped past the
/// last id so two records created in the same millisecond still differ.
#[derive(Debug, Default)]
pub(crate) struct IdClock {
    last: u64,
}

impl IdClock {
    pub(crate) fn next(&mut self, now: DateTime<Local>) -> u64 {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = millis.max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}

#[derive(Debug, Default)]
pub struct MedicineRegistry {
    medicines: Vec<Medicine>,
    ids: IdClock,
}

impl MedicineRegistry {
    pub fn add(&mut self, input: NewMedicine, now: DateTime<Local>) -> Medicine {
        let medicine = Medicine {
            id: self.ids.next(now),
            name: input.name.trim().to_string(),
            dosage: input.dosage.trim().to_string(),
            time: input.time,
            frequency: input.frequency,
            created_at: now,
        };
        self.medicines.push(medicine.clone());
        medicine
    }

    pub fn list(&self) -> &[Medicine] {
        &self.medicines
    }

    pub fn get(&self, id: u64) -> Option<&Medicine> {
        self.medicines.iter().find(|medicine| medicine.id == id)
    }

    pub fn remove(&mut self, id: u64) -> Option<Medicine> {
        let index = self.medicines.iter().position(|medicine| medicine.id == id)?;
        Some(self.medicines.remove(index))
    }

    /// Edits are a delete followed by a fresh add, so the replacement gets a
    /// new id and logged doses keep pointing at the old one.
    pub fn replace(
        &mut self,
        id: u64,
        input: NewMedicine,
        now: DateTime<Local>,
    ) -> Option<Medicine> {
        self.remove(id)?;
        Some(self.add(input, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Frequency;
    use chrono::{NaiveTime, TimeZone};

    fn input(name: &str) -> NewMedicine {
        NewMedicine {
            name: name.to_string(),
            dosage: "10mg".to_string(),
            time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            frequency: Frequency::Daily,
        }
    }

    #[test]
    fn ids_stay_unique_within_one_millisecond() {
        let now = Local.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap();
        let mut registry = MedicineRegistry::default();
        let first = registry.add(input("A"), now);
        let second = registry.add(input("B"), now);
        assert!(second.id > first.id);
        assert_eq!(registry.list().len(), 2);
        assert_eq!(registry.list()[0].name, "A");
    }

    #[test]
    fn duplicate_names_are_accepted() {
        let now = Local.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap();
        let mut registry = MedicineRegistry::default();
        registry.add(input("Aspirin"), now);
        registry.add(input("Aspirin"), now);
        assert_eq!(registry.list().len(), 2);
    }

    #[test]
    fn remove_returns_the_medicine_once() {
        let now = Local.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap();
        let mut registry = MedicineRegistry::default();
        let medicine = registry.add(input("A"), now);
        assert!(registry.remove(medicine.id).is_some());
        assert!(registry.remove(medicine.id).is_none());
        assert!(registry.list().is_empty());
    }

    #[test]
    fn replace_assigns_a_new_id() {
        let now = Local.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap();
        let mut registry = MedicineRegistry::default();
        let original = registry.add(input("A"), now);
        let edited = registry.replace(original.id, input("A2"), now).unwrap();
        assert_ne!(edited.id, original.id);
        assert!(registry.get(original.id).is_none());
        assert_eq!(registry.get(edited.id).unwrap().name, "A2");
        assert!(registry.replace(original.id, input("X"), now).is_none());
    }
}
