use chrono::NaiveDateTime;

use crate::models::Week;

/// Picks the week a reader lands on when no week is requested explicitly.
///
/// Only weeks with a `week_number` are eligible; they are considered in
/// ascending number order (input order among equal numbers). The first rule
/// that matches wins:
///
/// 1. a week whose `start_date..=end_date` contains the day of `now`;
/// 2. before the season, the first week when its start lies after `now`;
/// 3. otherwise the last week.
///
/// `now` is wall-clock time in the season's time zone. Returns `None` only
/// when no week is eligible.
pub fn resolve_current_week(weeks: &[Week], now: NaiveDateTime) -> Option<&Week> {
    let mut scheduled: Vec<&Week> = weeks
        .iter()
        .filter(|week| week.week_number.is_some())
        .collect();
    scheduled.sort_by_key(|week| week.week_number);

    let first = *scheduled.first()?;
    let today = now.date();

    if let Some(week) = scheduled
        .iter()
        .copied()
        .find(|week| contains_day(week, today))
    {
        return Some(week);
    }

    if first.start_date.is_some_and(|start| today < start) {
        return Some(first);
    }

    scheduled.last().copied()
}

fn contains_day(week: &Week, day: chrono::NaiveDate) -> bool {
    week.date_range()
        .is_some_and(|(start, end)| start <= day && day <= end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn day(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
    }

    fn at(raw: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn week(number: Option<i32>, start: Option<&str>, end: Option<&str>) -> Week {
        Week {
            id: Uuid::new_v4(),
            week_number: number,
            label: None,
            start_date: start.map(day),
            end_date: end.map(day),
            tournament_name: None,
            logo_url: None,
            winner_player_name: None,
        }
    }

    #[test]
    fn test_no_weeks() {
        assert_eq!(resolve_current_week(&[], at("2024-01-10 12:00:00")), None);
    }

    #[test]
    fn test_unscheduled_weeks_are_not_eligible() {
        let weeks = vec![week(None, Some("2024-01-01"), Some("2024-01-07"))];
        assert_eq!(resolve_current_week(&weeks, at("2024-01-03 12:00:00")), None);
    }

    #[test]
    fn test_in_range_selection() {
        let weeks = vec![
            week(Some(1), Some("2024-01-01"), Some("2024-01-07")),
            week(Some(2), Some("2024-01-08"), Some("2024-01-14")),
        ];

        let current = resolve_current_week(&weeks, at("2024-01-10 09:30:00")).unwrap();
        assert_eq!(current.week_number, Some(2));
    }

    #[test]
    fn test_range_bounds_are_whole_days() {
        let weeks = vec![
            week(Some(1), Some("2024-01-01"), Some("2024-01-07")),
            week(Some(2), Some("2024-01-08"), Some("2024-01-14")),
            week(Some(3), Some("2024-01-15"), Some("2024-01-21")),
        ];

        let start_of_day = resolve_current_week(&weeks, at("2024-01-08 00:00:00")).unwrap();
        assert_eq!(start_of_day.week_number, Some(2));

        let end_of_day = resolve_current_week(&weeks, at("2024-01-14 23:59:59")).unwrap();
        assert_eq!(end_of_day.week_number, Some(2));
    }

    #[test]
    fn test_pre_season_returns_first_week() {
        let weeks = vec![week(Some(1), Some("2024-03-01"), Some("2024-03-07"))];

        let current = resolve_current_week(&weeks, at("2024-01-01 08:00:00")).unwrap();
        assert_eq!(current.week_number, Some(1));
    }

    #[test]
    fn test_post_season_returns_latest_sequence() {
        let weeks = vec![
            week(Some(2), Some("2024-01-08"), Some("2024-01-14")),
            week(Some(1), Some("2024-01-01"), Some("2024-06-30")),
        ];

        let current = resolve_current_week(&weeks, at("2024-12-31 12:00:00")).unwrap();
        assert_eq!(current.week_number, Some(2));
    }

    #[test]
    fn test_unsorted_input_is_ordered_by_number() {
        let weeks = vec![
            week(Some(3), Some("2024-02-01"), Some("2024-02-07")),
            week(Some(1), Some("2024-03-01"), Some("2024-03-07")),
            week(None, Some("2023-01-01"), Some("2023-01-07")),
        ];

        // Week 1 starts after now, so the pre-season rule applies even though
        // week 3 is earlier in the input.
        let current = resolve_current_week(&weeks, at("2024-01-15 12:00:00")).unwrap();
        assert_eq!(current.week_number, Some(1));
    }

    #[test]
    fn test_half_dated_week_is_never_in_range() {
        let weeks = vec![
            week(Some(1), Some("2024-01-01"), None),
            week(Some(2), None, Some("2024-01-14")),
            week(Some(3), Some("2024-01-15"), Some("2024-01-21")),
        ];

        let current = resolve_current_week(&weeks, at("2024-01-03 12:00:00")).unwrap();
        assert_eq!(current.week_number, Some(3));
    }

    #[test]
    fn test_first_week_without_start_skips_pre_season() {
        let weeks = vec![
            week(Some(1), None, None),
            week(Some(2), Some("2024-03-01"), Some("2024-03-07")),
        ];

        let current = resolve_current_week(&weeks, at("2024-01-01 12:00:00")).unwrap();
        assert_eq!(current.week_number, Some(2));
    }

    #[test]
    fn test_overlapping_ranges_pick_lowest_number() {
        let weeks = vec![
            week(Some(2), Some("2024-01-05"), Some("2024-01-12")),
            week(Some(1), Some("2024-01-01"), Some("2024-01-07")),
        ];

        let current = resolve_current_week(&weeks, at("2024-01-06 12:00:00")).unwrap();
        assert_eq!(current.week_number, Some(1));
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let weeks = vec![
            week(Some(1), Some("2024-01-01"), Some("2024-01-07")),
            week(Some(2), Some("2024-01-08"), Some("2024-01-14")),
        ];
        let now = at("2024-01-09 12:00:00");

        assert_eq!(
            resolve_current_week(&weeks, now),
            resolve_current_week(&weeks, now)
        );
    }
}
