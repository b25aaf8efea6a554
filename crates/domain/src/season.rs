//! Season resolution for tariff lookups.

use crate::types::Season;
use time::Date;

/// Returns the active seasons covering a date, highest priority first.
///
/// Ties on priority fall back to the earlier start date, so repeated
/// resolution over unchanged data is stable.
///
/// # Arguments
///
/// * `seasons` - The configured seasons
/// * `date` - The calendar date to resolve (typically the check-in day)
#[must_use]
pub fn seasons_covering<'a>(seasons: &'a [Season], date: Date) -> Vec<&'a Season> {
    let mut covering: Vec<&Season> = seasons
        .iter()
        .filter(|season| season.active && season.covers(date))
        .collect();
    covering.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| a.date_start.cmp(&b.date_start))
    });
    covering
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use time::Month;

    fn date(year: i32, month: Month, day: u8) -> Date {
        Date::from_calendar_date(year, month, day).unwrap()
    }

    fn season(id: i64, name: &str, start: Date, end: Date, priority: i32) -> Season {
        Season::new(id, name, start, end, priority)
    }

    #[test]
    fn test_returns_empty_when_no_season_covers_date() {
        let seasons: Vec<Season> = vec![season(
            1,
            "Summer",
            date(2025, Month::June, 1),
            date(2025, Month::August, 31),
            10,
        )];

        let covering: Vec<&Season> = seasons_covering(&seasons, date(2025, Month::December, 25));
        assert!(covering.is_empty());
    }

    #[test]
    fn test_higher_priority_season_comes_first() {
        let seasons: Vec<Season> = vec![
            season(
                1,
                "Summer",
                date(2025, Month::June, 1),
                date(2025, Month::August, 31),
                10,
            ),
            season(
                2,
                "Festival week",
                date(2025, Month::July, 1),
                date(2025, Month::July, 7),
                20,
            ),
        ];

        let covering: Vec<&Season> = seasons_covering(&seasons, date(2025, Month::July, 3));
        assert_eq!(covering.len(), 2);
        assert_eq!(covering[0].id, 2);
        assert_eq!(covering[1].id, 1);
    }

    #[test]
    fn test_inactive_seasons_are_ignored() {
        let mut inactive: Season = season(
            1,
            "Summer",
            date(2025, Month::June, 1),
            date(2025, Month::August, 31),
            10,
        );
        inactive.active = false;

        let inactive_seasons = [inactive];
        let covering: Vec<&Season> = seasons_covering(&inactive_seasons, date(2025, Month::July, 3));
        assert!(covering.is_empty());
    }

    #[test]
    fn test_boundary_days_are_covered() {
        let seasons: Vec<Season> = vec![season(
            1,
            "Summer",
            date(2025, Month::June, 1),
            date(2025, Month::August, 31),
            10,
        )];

        assert_eq!(
            seasons_covering(&seasons, date(2025, Month::June, 1)).len(),
            1
        );
        assert_eq!(
            seasons_covering(&seasons, date(2025, Month::August, 31)).len(),
            1
        );
    }

    #[test]
    fn test_priority_tie_breaks_on_start_date() {
        let seasons: Vec<Season> = vec![
            season(
                1,
                "Late",
                date(2025, Month::July, 1),
                date(2025, Month::July, 31),
                10,
            ),
            season(
                2,
                "Early",
                date(2025, Month::June, 1),
                date(2025, Month::July, 31),
                10,
            ),
        ];

        let covering: Vec<&Season> = seasons_covering(&seasons, date(2025, Month::July, 15));
        assert_eq!(covering[0].id, 2);
    }
}
