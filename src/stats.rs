use crate::models::{
    AdherenceSummary, AnalyticsResponse, BucketValue, DailyBucket, DoseEvent, DoseStatus,
    FrequencyCount, Granularity, Insight, InsightKind, Medicine,
};
use chrono::{Duration, Local, NaiveDate};

const WEEKLY_WINDOW_DAYS: u32 = 7;
const ADHERENCE_WINDOW_DAYS: u32 = 14;
const CROWDED_SCHEDULE: usize = 5;

pub fn build_analytics(medicines: &[Medicine], events: &[DoseEvent]) -> AnalyticsResponse {
    build_analytics_at(Local::now().date_naive(), medicines, events)
}

pub fn build_analytics_at(
    today: NaiveDate,
    medicines: &[Medicine],
    events: &[DoseEvent],
) -> AnalyticsResponse {
    let summary = compute_summary(events);

    AnalyticsResponse {
        summary,
        active_medicines: medicines.len(),
        weekly_trend: compute_daily_buckets(events, today, WEEKLY_WINDOW_DAYS, Granularity::Counts),
        adherence_trend: compute_daily_buckets(
            events,
            today,
            ADHERENCE_WINDOW_DAYS,
            Granularity::Rate,
        ),
        frequency_distribution: compute_frequency_distribution(medicines),
        insights: generate_insights(&summary, medicines.len()),
    }
}

pub fn compute_summary(events: &[DoseEvent]) -> AdherenceSummary {
    let (taken, missed) = tally(events.iter());
    AdherenceSummary {
        taken_count: taken,
        missed_count: missed,
        adherence_rate: adherence_rate(taken, missed),
    }
}

/// One bucket per local calendar day, oldest first, ending at `reference`.
pub fn compute_daily_buckets(
    events: &[DoseEvent],
    reference: NaiveDate,
    window_days: u32,
    granularity: Granularity,
) -> Vec<DailyBucket> {
    let mut buckets = Vec::with_capacity(window_days as usize);
    for offset in (0..window_days).rev() {
        let date = reference - Duration::days(i64::from(offset));
        let (taken, missed) = tally(
            events
                .iter()
                .filter(|event| event.recorded_at.date_naive() == date),
        );
        let value = match granularity {
            Granularity::Counts => BucketValue::Counts { taken, missed },
            Granularity::Rate => BucketValue::Rate {
                adherence_rate: adherence_rate(taken, missed),
            },
        };
        buckets.push(DailyBucket { date, value });
    }
    buckets
}

pub fn compute_frequency_distribution(medicines: &[Medicine]) -> Vec<FrequencyCount> {
    let mut counts: Vec<FrequencyCount> = Vec::new();
    for medicine in medicines {
        match counts
            .iter_mut()
            .find(|entry| entry.frequency == medicine.frequency)
        {
            Some(entry) => entry.count += 1,
            None => counts.push(FrequencyCount {
                frequency: medicine.frequency,
                label: medicine.frequency.label(),
                count: 1,
            }),
        }
    }
    counts
}

pub fn generate_insights(summary: &AdherenceSummary, medicine_count: usize) -> Vec<Insight> {
    let rate = summary.adherence_rate;
    let mut insights = Vec::with_capacity(4);

    let tier = if rate >= 90 {
        insight(
            InsightKind::Excellent,
            "🌟",
            "Excellent Adherence!",
            format!("You're doing amazing with {rate}% adherence rate. Keep up the great work!"),
        )
    } else if rate >= 70 {
        insight(
            InsightKind::Good,
            "👍",
            "Good Progress",
            format!("Your {rate}% adherence is good. Try to be more consistent to reach 90%+."),
        )
    } else if rate > 0 {
        insight(
            InsightKind::NeedsImprovement,
            "💪",
            "Room for Improvement",
            format!(
                "Your {rate}% adherence needs attention. Set reminders to help you stay on track."
            ),
        )
    } else {
        insight(
            InsightKind::GetStarted,
            "🎯",
            "Let's Get Started",
            "Start tracking your medicines to see your adherence insights here!".to_string(),
        )
    };
    insights.push(tier);

    if medicine_count == 0 {
        insights.push(insight(
            InsightKind::AddFirstMedicine,
            "💊",
            "Add Your First Medicine",
            "Start by adding a medicine to build your daily schedule.".to_string(),
        ));
    } else if medicine_count > CROWDED_SCHEDULE {
        insights.push(insight(
            InsightKind::OrganizeByTime,
            "🗂️",
            "Organize by Time",
            format!(
                "You're tracking {medicine_count} medicines. Group them by time of day to keep your schedule manageable."
            ),
        ));
    }

    insights.push(insight(
        InsightKind::SameTimeTip,
        "⏰",
        "Same Time, Every Day",
        "Taking your medicines at the same time each day makes the habit stick.".to_string(),
    ));
    insights.push(insight(
        InsightKind::RemindersTip,
        "🔔",
        "Enable Reminders",
        "Allow notifications so you get a nudge when a dose is due.".to_string(),
    ));

    insights
}

fn insight(kind: InsightKind, icon: &str, title: &str, description: String) -> Insight {
    Insight {
        kind,
        icon: icon.to_string(),
        title: title.to_string(),
        description,
    }
}

fn tally<'a>(events: impl Iterator<Item = &'a DoseEvent>) -> (u64, u64) {
    events.fold((0, 0), |(taken, missed), event| match event.status {
        DoseStatus::Taken => (taken + 1, missed),
        DoseStatus::Missed => (taken, missed + 1),
    })
}

/// Percentage taken, rounded half up. Zero when nothing was logged.
fn adherence_rate(taken: u64, missed: u64) -> u8 {
    let total = taken + missed;
    if total == 0 {
        return 0;
    }
    ((taken * 200 + total) / (total * 2)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Frequency;
    use chrono::{DateTime, NaiveTime, TimeZone};

    fn event(status: DoseStatus, at: DateTime<Local>) -> DoseEvent {
        DoseEvent {
            id: 1,
            medicine_id: 1,
            medicine_name: "Aspirin".to_string(),
            dosage: "1 pill".to_string(),
            time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            status,
            recorded_at: at,
        }
    }

    fn medicine(id: u64, frequency: Frequency) -> Medicine {
        Medicine {
            id,
            name: format!("med-{id}"),
            dosage: "5mg".to_string(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            frequency,
            created_at: Local.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap(),
        }
    }

    fn noon(day: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 1, day, 12, 0, 0).unwrap()
    }

    fn summary_of(taken: u64, missed: u64) -> AdherenceSummary {
        AdherenceSummary {
            taken_count: taken,
            missed_count: missed,
            adherence_rate: adherence_rate(taken, missed),
        }
    }

    #[test]
    fn summary_two_taken_one_missed() {
        let events = vec![
            event(DoseStatus::Taken, noon(5)),
            event(DoseStatus::Taken, noon(5)),
            event(DoseStatus::Missed, noon(5)),
        ];
        let summary = compute_summary(&events);
        assert_eq!(summary.taken_count, 2);
        assert_eq!(summary.missed_count, 1);
        assert_eq!(summary.adherence_rate, 67);
    }

    #[test]
    fn summary_without_events_is_zero() {
        let summary = compute_summary(&[]);
        assert_eq!(summary, summary_of(0, 0));
        assert_eq!(summary.adherence_rate, 0);
    }

    #[test]
    fn summary_counts_cover_every_event_and_rate_stays_in_range() {
        for taken in 0..6u64 {
            for missed in 0..6u64 {
                let mut events = Vec::new();
                events.extend((0..taken).map(|_| event(DoseStatus::Taken, noon(3))));
                events.extend((0..missed).map(|_| event(DoseStatus::Missed, noon(4))));
                let summary = compute_summary(&events);
                assert_eq!((summary.taken_count + summary.missed_count) as usize, events.len());
                assert!(summary.adherence_rate <= 100);
            }
        }
    }

    #[test]
    fn rate_rounds_half_up() {
        assert_eq!(adherence_rate(1, 7), 13);
        assert_eq!(adherence_rate(1, 1), 50);
        assert_eq!(adherence_rate(1, 2), 33);
        assert_eq!(adherence_rate(3, 0), 100);
    }

    #[test]
    fn weekly_buckets_are_oldest_first() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
        let events = vec![
            event(DoseStatus::Taken, noon(8)),
            event(DoseStatus::Missed, noon(8)),
            event(DoseStatus::Taken, noon(10)),
            event(DoseStatus::Taken, noon(1)),
        ];

        let buckets = compute_daily_buckets(&events, today, 7, Granularity::Counts);
        assert_eq!(buckets.len(), 7);
        assert_eq!(buckets[0].date, NaiveDate::from_ymd_opt(2026, 1, 4).unwrap());
        assert_eq!(buckets[6].date, today);
        assert_eq!(buckets[4].value, BucketValue::Counts { taken: 1, missed: 1 });
        assert_eq!(buckets[6].value, BucketValue::Counts { taken: 1, missed: 0 });
        assert_eq!(buckets[0].value, BucketValue::Counts { taken: 0, missed: 0 });
    }

    #[test]
    fn day_boundaries_land_in_exactly_one_bucket() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
        let midnight = Local.with_ymd_and_hms(2026, 1, 9, 0, 0, 0).unwrap();
        let last_moment = Local.with_ymd_and_hms(2026, 1, 8, 23, 59, 59).unwrap()
            + Duration::milliseconds(999);
        let events = vec![
            event(DoseStatus::Taken, midnight),
            event(DoseStatus::Missed, last_moment),
        ];

        let buckets = compute_daily_buckets(&events, today, 7, Granularity::Counts);
        let total: u64 = buckets
            .iter()
            .map(|bucket| match bucket.value {
                BucketValue::Counts { taken, missed } => taken + missed,
                BucketValue::Rate { .. } => 0,
            })
            .sum();
        assert_eq!(total, 2);
        assert_eq!(buckets[4].value, BucketValue::Counts { taken: 0, missed: 1 });
        assert_eq!(buckets[5].value, BucketValue::Counts { taken: 1, missed: 0 });
    }

    #[test]
    fn rate_buckets_default_to_zero() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
        let events = vec![
            event(DoseStatus::Taken, noon(14)),
            event(DoseStatus::Taken, noon(14)),
            event(DoseStatus::Missed, noon(14)),
        ];

        let buckets = compute_daily_buckets(&events, today, 14, Granularity::Rate);
        assert_eq!(buckets.len(), 14);
        assert_eq!(buckets[13].value, BucketValue::Rate { adherence_rate: 67 });
        assert!(buckets[..13]
            .iter()
            .all(|bucket| bucket.value == BucketValue::Rate { adherence_rate: 0 }));
    }

    #[test]
    fn frequency_distribution_keeps_first_occurrence_order() {
        let medicines = vec![
            medicine(1, Frequency::TwiceDaily),
            medicine(2, Frequency::Daily),
            medicine(3, Frequency::TwiceDaily),
        ];
        let distribution = compute_frequency_distribution(&medicines);
        assert_eq!(distribution.len(), 2);
        assert_eq!(distribution[0].frequency, Frequency::TwiceDaily);
        assert_eq!(distribution[0].count, 2);
        assert_eq!(distribution[0].label, "Twice daily");
        assert_eq!(distribution[1].frequency, Frequency::Daily);
        assert_eq!(distribution[1].count, 1);
        assert!(compute_frequency_distribution(&[]).is_empty());
    }

    fn kinds(insights: &[Insight]) -> Vec<InsightKind> {
        insights.iter().map(|insight| insight.kind).collect()
    }

    #[test]
    fn insights_pick_one_rate_tier() {
        let cases = [
            (summary_of(9, 1), InsightKind::Excellent),
            (summary_of(7, 3), InsightKind::Good),
            (summary_of(1, 2), InsightKind::NeedsImprovement),
            (summary_of(0, 0), InsightKind::GetStarted),
            (summary_of(0, 4), InsightKind::GetStarted),
            (summary_of(1, 300), InsightKind::GetStarted),
            (summary_of(1, 199), InsightKind::NeedsImprovement),
        ];
        for (summary, expected) in cases {
            let insights = generate_insights(&summary, 1);
            assert!(insights.len() >= 3);
            let tiers: Vec<_> = kinds(&insights)
                .into_iter()
                .filter(|kind| kind.is_rate_tier())
                .collect();
            assert_eq!(tiers, vec![expected]);
            assert_eq!(insights[0].kind, expected);
        }
    }

    #[test]
    fn insights_schedule_advice_depends_on_medicine_count() {
        let summary = summary_of(0, 0);
        assert_eq!(
            kinds(&generate_insights(&summary, 0)),
            vec![
                InsightKind::GetStarted,
                InsightKind::AddFirstMedicine,
                InsightKind::SameTimeTip,
                InsightKind::RemindersTip,
            ]
        );
        assert_eq!(
            kinds(&generate_insights(&summary, 3)),
            vec![
                InsightKind::GetStarted,
                InsightKind::SameTimeTip,
                InsightKind::RemindersTip,
            ]
        );
        assert_eq!(kinds(&generate_insights(&summary, 6))[1], InsightKind::OrganizeByTime);
        assert_eq!(generate_insights(&summary, 5).len(), 3);
    }

    #[test]
    fn analytics_bundles_every_series() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
        let medicines = vec![medicine(1, Frequency::Daily)];
        let events = vec![event(DoseStatus::Taken, noon(10))];

        let analytics = build_analytics_at(today, &medicines, &events);
        assert_eq!(analytics.active_medicines, 1);
        assert_eq!(analytics.summary.adherence_rate, 100);
        assert_eq!(analytics.weekly_trend.len(), 7);
        assert_eq!(analytics.adherence_trend.len(), 14);
        assert_eq!(analytics.frequency_distribution.len(), 1);
        assert_eq!(analytics.insights[0].kind, InsightKind::Excellent);
    }
}
