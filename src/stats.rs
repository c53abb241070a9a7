use crate::models::{ActivityPoint, Difficulty, DifficultySlice, ProblemRecord, Stats};
use chrono::{Duration, Local, NaiveDate};
use std::collections::BTreeSet;
use tracing::debug;

const ACTIVITY_DAYS: i64 = 7;

pub fn compute_stats(records: &[ProblemRecord]) -> Stats {
    compute_stats_at(Local::now().date_naive(), records)
}

pub fn compute_stats_at(today: NaiveDate, records: &[ProblemRecord]) -> Stats {
    let stats = Stats {
        total_solved: records.len() as u64,
        difficulty_distribution: difficulty_distribution(records),
        current_streak: current_streak(today, records),
        activity_data: activity_data(today, records),
    };

    debug!(
        total = stats.total_solved,
        streak = stats.current_streak,
        %today,
        "computed stats"
    );
    stats
}

/// Always Easy, Medium, Hard. Records with any other difficulty are not
/// counted.
fn difficulty_distribution(records: &[ProblemRecord]) -> Vec<DifficultySlice> {
    Difficulty::ALL
        .iter()
        .map(|difficulty| DifficultySlice {
            name: difficulty.as_str().to_string(),
            value: records
                .iter()
                .filter(|record| record.difficulty() == Some(*difficulty))
                .count() as u64,
            color_token: difficulty.color_token().to_string(),
        })
        .collect()
}

/// Consecutive active days ending at the most recent one, which must be
/// today or yesterday.
///
/// Active days are walked newest first by their `YYYY-MM-DD` text. A day
/// that fails to parse never extends the chain: as the newest day it yields
/// 0, further back it ends the walk.
pub fn current_streak(today: NaiveDate, records: &[ProblemRecord]) -> u32 {
    let active_days: BTreeSet<&str> = records.iter().map(|record| record.date.as_str()).collect();
    let mut days = active_days.into_iter().rev();

    let Some(last_active) = days.next().and_then(parse_day) else {
        return 0;
    };
    if (today - last_active).num_days() > 1 {
        return 0;
    }

    let mut streak = 1;
    let mut previous = last_active;
    for day in days {
        match parse_day(day) {
            Some(date) if (previous - date).num_days() == 1 => {
                streak += 1;
                previous = date;
            }
            _ => break,
        }
    }

    streak
}

fn activity_data(today: NaiveDate, records: &[ProblemRecord]) -> Vec<ActivityPoint> {
    let mut points = Vec::with_capacity(ACTIVITY_DAYS as usize);
    for offset in (0..ACTIVITY_DAYS).rev() {
        let date = today - Duration::days(offset);
        let key = date_key(date);
        let count = records.iter().filter(|record| record.date == key).count() as u64;
        points.push(ActivityPoint {
            day_label: date.format("%a").to_string(),
            date_key: key,
            count,
        });
    }
    points
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_day(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn record(id: &str, difficulty: &str, date: &str) -> ProblemRecord {
        ProblemRecord {
            id: id.to_string(),
            title: format!("Problem {id}"),
            platform: "LeetCode".to_string(),
            difficulty: difficulty.to_string(),
            tags: Vec::new(),
            date: date.to_string(),
            link: None,
        }
    }

    fn on_days(dates: &[&str]) -> Vec<ProblemRecord> {
        dates
            .iter()
            .enumerate()
            .map(|(idx, date)| record(&idx.to_string(), "Easy", date))
            .collect()
    }

    #[test]
    fn empty_collection_yields_zeroed_stats() {
        let stats = compute_stats_at(today(), &[]);
        assert_eq!(stats.total_solved, 0);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.activity_data.len(), 7);
        assert!(stats.activity_data.iter().all(|point| point.count == 0));
        let values: Vec<u64> = stats.difficulty_distribution.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![0, 0, 0]);
    }

    #[test]
    fn distribution_is_ordered_and_skips_unknown_difficulty() {
        let records = vec![
            record("1", "Hard", "2024-06-10"),
            record("2", "Hard", "2024-06-10"),
            record("3", "Easy", "2024-06-09"),
            record("4", "Expert", "2024-06-09"),
            record("5", "medium", "2024-06-09"),
        ];
        let stats = compute_stats_at(today(), &records);

        assert_eq!(stats.total_solved, 5);
        let names: Vec<&str> = stats
            .difficulty_distribution
            .iter()
            .map(|slice| slice.name.as_str())
            .collect();
        assert_eq!(names, vec!["Easy", "Medium", "Hard"]);
        let values: Vec<u64> = stats.difficulty_distribution.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![1, 0, 2]);
        assert_eq!(stats.difficulty_distribution[2].color_token, "var(--accent-danger)");
    }

    #[test]
    fn duplicate_ids_are_counted_separately() {
        let records = vec![
            record("same", "Easy", "2024-06-10"),
            record("same", "Easy", "2024-06-10"),
        ];
        let stats = compute_stats_at(today(), &records);
        assert_eq!(stats.total_solved, 2);
        assert_eq!(stats.difficulty_distribution[0].value, 2);
        assert_eq!(stats.activity_data[6].count, 2);
    }

    #[test]
    fn streak_single_solve_today() {
        assert_eq!(current_streak(today(), &on_days(&["2024-06-10"])), 1);
    }

    #[test]
    fn streak_alive_when_last_solve_was_yesterday() {
        assert_eq!(current_streak(today(), &on_days(&["2024-06-09"])), 1);
    }

    #[test]
    fn streak_broken_after_two_idle_days() {
        assert_eq!(current_streak(today(), &on_days(&["2024-06-08"])), 0);
        assert_eq!(
            current_streak(today(), &on_days(&["2024-06-08", "2024-06-07", "2024-06-06"])),
            0
        );
    }

    #[test]
    fn streak_counts_consecutive_days_with_repeats() {
        let records = on_days(&[
            "2024-06-08",
            "2024-06-10",
            "2024-06-09",
            "2024-06-10",
            "2024-06-08",
        ]);
        assert_eq!(current_streak(today(), &records), 3);
    }

    #[test]
    fn streak_stops_at_first_gap() {
        let records = on_days(&["2024-06-10", "2024-06-09", "2024-06-07", "2024-06-06"]);
        assert_eq!(current_streak(today(), &records), 2);
    }

    #[test]
    fn streak_crosses_month_boundary() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let records = on_days(&["2024-03-02", "2024-03-01", "2024-02-29", "2024-02-28"]);
        assert_eq!(current_streak(today, &records), 4);
    }

    #[test]
    fn streak_ignores_unparseable_newest_day() {
        // "not-a-date" sorts after every ISO date, so it is the newest entry.
        let records = on_days(&["not-a-date", "2024-06-10"]);
        assert_eq!(current_streak(today(), &records), 0);
    }

    #[test]
    fn streak_ends_at_unparseable_day() {
        let records = on_days(&["2024-06-10", "2024-06-09", "2024-06-08x", "2024-06-08"]);
        assert_eq!(current_streak(today(), &records), 2);
    }

    #[test]
    fn activity_covers_trailing_week_with_labels() {
        let records = on_days(&[
            "2024-06-04",
            "2024-06-05",
            "2024-06-06",
            "2024-06-07",
            "2024-06-08",
            "2024-06-09",
            "2024-06-10",
        ]);
        let stats = compute_stats_at(today(), &records);

        let labels: Vec<&str> = stats
            .activity_data
            .iter()
            .map(|point| point.day_label.as_str())
            .collect();
        assert_eq!(labels, vec!["Tue", "Wed", "Thu", "Fri", "Sat", "Sun", "Mon"]);
        assert!(stats.activity_data.iter().all(|point| point.count == 1));
        assert_eq!(stats.activity_data[0].date_key, "2024-06-04");
        assert_eq!(stats.activity_data[6].date_key, "2024-06-10");
        assert_eq!(stats.current_streak, 7);
    }

    #[test]
    fn activity_ignores_days_outside_window() {
        let records = on_days(&["2024-06-03", "2024-06-11", "2024-06-07", "2024-06-07"]);
        let stats = compute_stats_at(today(), &records);

        let counts: Vec<u64> = stats.activity_data.iter().map(|point| point.count).collect();
        assert_eq!(counts, vec![0, 0, 0, 2, 0, 0, 0]);
    }

    #[test]
    fn local_clock_variant_counts_every_record() {
        let before = Local::now().date_naive();
        let stats = compute_stats(&on_days(&["2000-01-01", "2000-01-02"]));
        let after = Local::now().date_naive();

        assert_eq!(stats.total_solved, 2);
        assert_eq!(stats.current_streak, 0);
        // The call may straddle midnight.
        let newest = &stats.activity_data[6].date_key;
        assert!(*newest == date_key(before) || *newest == date_key(after));
    }

    #[test]
    fn stats_serialize_with_camel_case_keys() {
        let stats = compute_stats_at(today(), &on_days(&["2024-06-10"]));
        let value = serde_json::to_value(&stats).unwrap();

        assert_eq!(value["totalSolved"], 1);
        assert_eq!(value["currentStreak"], 1);
        assert_eq!(value["difficultyDistribution"][0]["colorToken"], "var(--accent-success)");
        assert_eq!(value["activityData"][6]["dateKey"], "2024-06-10");
        assert_eq!(value["activityData"][6]["dayLabel"], "Mon");
    }
}
