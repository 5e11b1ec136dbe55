//! Calendar arithmetic for term weeks
//!
//! Everything here works on `NaiveDate`: week 1 begins on the term's start
//! date and no time zone is ever involved.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::error::{PlannerError, Result};

/// Sunday-first weekday index, Sunday=0 .. Saturday=6
pub fn weekday_index(day: Weekday) -> u32 {
    day.num_days_from_sunday()
}

/// Full English name, as stored on schedule entries
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Parse a weekday from its full name or a common abbreviation
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    match name.trim().to_ascii_lowercase().as_str() {
        "sunday" | "sun" => Some(Weekday::Sun),
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" | "tues" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" | "thur" | "thurs" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        _ => None,
    }
}

fn out_of_range() -> PlannerError {
    PlannerError::validation("Date is out of range")
}

/// First day of `week`
pub fn week_start(start_date: NaiveDate, week: u32) -> Result<NaiveDate> {
    if week == 0 {
        return Err(PlannerError::validation("Week numbers start at 1"));
    }
    start_date
        .checked_add_days(Days::new(u64::from(week - 1) * 7))
        .ok_or_else(out_of_range)
}

/// Date of `day` inside `week` of a term starting on `start_date`
///
/// The result lies in `[week_start, week_start + 6]`.
pub fn date_for_weekday(start_date: NaiveDate, week: u32, day: Weekday) -> Result<NaiveDate> {
    let start = week_start(start_date, week)?;
    let offset = (weekday_index(day) + 7 - weekday_index(start.weekday())) % 7;
    start
        .checked_add_days(Days::new(u64::from(offset)))
        .ok_or_else(out_of_range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(1, Weekday::Mon, date(2025, 1, 6))]
    #[case(1, Weekday::Wed, date(2025, 1, 8))]
    #[case(1, Weekday::Sun, date(2025, 1, 12))]
    #[case(2, Weekday::Mon, date(2025, 1, 13))]
    #[case(3, Weekday::Wed, date(2025, 1, 22))]
    fn test_monday_start(#[case] week: u32, #[case] day: Weekday, #[case] expected: NaiveDate) {
        assert_eq!(date_for_weekday(date(2025, 1, 6), week, day).unwrap(), expected);
    }

    #[test]
    fn test_mid_week_start_wraps_forward() {
        // Thursday start: Monday of week 1 is the following Monday
        let start = date(2025, 1, 9);
        assert_eq!(date_for_weekday(start, 1, Weekday::Thu).unwrap(), start);
        assert_eq!(
            date_for_weekday(start, 1, Weekday::Mon).unwrap(),
            date(2025, 1, 13)
        );
        assert_eq!(
            date_for_weekday(start, 1, Weekday::Wed).unwrap(),
            date(2025, 1, 15)
        );
    }

    #[test]
    fn test_result_stays_inside_week() {
        let days = [
            Weekday::Sun,
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ];
        let mut start = date(2024, 2, 25);
        for _ in 0..14 {
            for week in 1..=20 {
                let first = week_start(start, week).unwrap();
                for day in days {
                    let result = date_for_weekday(start, week, day).unwrap();
                    assert!(result >= first);
                    assert!((result - first).num_days() <= 6);
                    assert_eq!(result.weekday(), day);
                }
            }
            start = start.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_week_zero_rejected() {
        assert!(matches!(
            date_for_weekday(date(2025, 1, 6), 0, Weekday::Mon),
            Err(PlannerError::Validation(_))
        ));
    }

    #[test]
    fn test_overflow_is_an_error() {
        assert!(date_for_weekday(NaiveDate::MAX, 2, Weekday::Mon).is_err());
    }

    #[rstest]
    #[case("Monday", Some(Weekday::Mon))]
    #[case("wed", Some(Weekday::Wed))]
    #[case(" THURSDAY ", Some(Weekday::Thu))]
    #[case("Sun", Some(Weekday::Sun))]
    #[case("Funday", None)]
    #[case("", None)]
    fn test_parse_weekday(#[case] input: &str, #[case] expected: Option<Weekday>) {
        assert_eq!(parse_weekday(input), expected);
    }

    #[test]
    fn test_names_round_trip_through_parse() {
        for day in [Weekday::Sun, Weekday::Fri, Weekday::Sat] {
            assert_eq!(parse_weekday(weekday_name(day)), Some(day));
        }
    }
}
