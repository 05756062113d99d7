use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    Daily,
    TwiceDaily,
    ThriceDaily,
    Weekly,
    AsNeeded,
}

impl Frequency {
    pub fn tag(self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::TwiceDaily => "twice-daily",
            Frequency::ThriceDaily => "thrice-daily",
            Frequency::Weekly => "weekly",
            Frequency::AsNeeded => "as-needed",
        }
    }

    /// Display form of the tag: `twice-daily` becomes `Twice daily`.
    pub fn label(self) -> String {
        let spaced = self.tag().replacen('-', " ", 1);
        let mut chars = spaced.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoseStatus {
    Taken,
    Missed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medicine {
    pub id: u64,
    pub name: String,
    pub dosage: String,
    #[serde(with = "hh_mm")]
    pub time: NaiveTime,
    pub frequency: Frequency,
    pub created_at: DateTime<Local>,
}

/// One taken/missed record. Name, dosage and time are copied from the
/// medicine when the dose is marked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoseEvent {
    pub id: u64,
    pub medicine_id: u64,
    pub medicine_name: String,
    pub dosage: String,
    #[serde(with = "hh_mm")]
    pub time: NaiveTime,
    pub status: DoseStatus,
    pub recorded_at: DateTime<Local>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewMedicine {
    pub name: String,
    pub dosage: String,
    #[serde(with = "hh_mm")]
    pub time: NaiveTime,
    pub frequency: Frequency,
}

#[derive(Debug, Deserialize)]
pub struct MarkDoseRequest {
    pub status: DoseStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryFilter {
    #[default]
    All,
    Taken,
    Missed,
}

impl HistoryFilter {
    pub fn matches(self, status: DoseStatus) -> bool {
        match self {
            HistoryFilter::All => true,
            HistoryFilter::Taken => status == DoseStatus::Taken,
            HistoryFilter::Missed => status == DoseStatus::Missed,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub status: HistoryFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdherenceSummary {
    pub taken_count: u64,
    pub missed_count: u64,
    pub adherence_rate: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Counts,
    Rate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BucketValue {
    Counts { taken: u64, missed: u64 },
    Rate { adherence_rate: u8 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyBucket {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub value: BucketValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyCount {
    pub frequency: Frequency,
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsightKind {
    Excellent,
    Good,
    NeedsImprovement,
    GetStarted,
    AddFirstMedicine,
    OrganizeByTime,
    SameTimeTip,
    RemindersTip,
}

impl InsightKind {
    pub fn is_rate_tier(self) -> bool {
        matches!(
            self,
            InsightKind::Excellent
                | InsightKind::Good
                | InsightKind::NeedsImprovement
                | InsightKind::GetStarted
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    pub summary: AdherenceSummary,
    pub active_medicines: usize,
    pub weekly_trend: Vec<DailyBucket>,
    pub adherence_trend: Vec<DailyBucket>,
    pub frequency_distribution: Vec<FrequencyCount>,
    pub insights: Vec<Insight>,
}

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Deserialize)]
pub struct LogInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(raw.trim(), FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_label_capitalizes_and_spaces() {
        assert_eq!(Frequency::TwiceDaily.label(), "Twice daily");
        assert_eq!(Frequency::Daily.label(), "Daily");
        assert_eq!(Frequency::AsNeeded.label(), "As needed");
    }

    #[test]
    fn new_medicine_parses_hh_mm() {
        let parsed: NewMedicine = serde_json::from_str(
            r#"{"name":"Aspirin","dosage":"1 pill","time":"08:30","frequency":"twice-daily"}"#,
        )
        .unwrap();
        assert_eq!(parsed.time, NaiveTime::from_hms_opt(8, 30, 0).unwrap());
        assert_eq!(parsed.frequency, Frequency::TwiceDaily);
    }

    #[test]
    fn new_medicine_rejects_malformed_time() {
        let parsed = serde_json::from_str::<NewMedicine>(
            r#"{"name":"Aspirin","dosage":"1 pill","time":"8 o'clock","frequency":"daily"}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn buckets_serialize_flat() {
        let bucket = DailyBucket {
            date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            value: BucketValue::Counts { taken: 2, missed: 1 },
        };
        let json = serde_json::to_value(&bucket).unwrap();
        assert_eq!(json["date"], "2026-01-05");
        assert_eq!(json["taken"], 2);
        assert_eq!(json["missed"], 1);
    }
}
