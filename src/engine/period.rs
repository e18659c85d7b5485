//! Calendar math for goal periods. Weeks start on Monday; Sunday is day 7.

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::domain::{Cadence, TimeWindow};

/// Local 00:00 of the calendar day containing `now`.
pub fn midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    local_midnight(&now.timezone(), now.date_naive())
}

/// First instant of `date` in `zone`.
///
/// An ambiguous midnight resolves to the earlier instant; a midnight skipped by a
/// DST jump resolves to the first valid local time after it.
pub fn local_midnight<Tz: TimeZone>(zone: &Tz, date: NaiveDate) -> DateTime<Tz> {
    let naive = date.and_time(NaiveTime::MIN);
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(instant) => instant,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => first_valid_after(zone, naive),
    }
}

fn first_valid_after<Tz: TimeZone>(zone: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    for step in 1..=16 {
        let candidate = naive + Duration::minutes(15 * step);
        if let Some(instant) = zone.from_local_datetime(&candidate).earliest() {
            return instant;
        }
    }
    zone.from_utc_datetime(&naive)
}

/// Calendar date on which the period containing `today` begins.
pub fn period_start_date(today: NaiveDate, cadence: Cadence) -> NaiveDate {
    match cadence {
        Cadence::Weekly => {
            let delta = today.weekday().num_days_from_monday() as i64;
            today - Duration::days(delta)
        }
        Cadence::Monthly => today.with_day(1).unwrap_or(today),
    }
}

/// Local midnight of the first day of the current period.
pub fn start_of_period<Tz: TimeZone>(now: &DateTime<Tz>, cadence: Cadence) -> DateTime<Tz> {
    local_midnight(&now.timezone(), period_start_date(now.date_naive(), cadence))
}

/// Days left in the current period, today included. Never below 1.
pub fn days_remaining<Tz: TimeZone>(now: &DateTime<Tz>, cadence: Cadence) -> u32 {
    let today = now.date_naive();
    match cadence {
        Cadence::Weekly => 7 - today.weekday().number_from_monday() + 1,
        Cadence::Monthly => days_in_month(today.year(), today.month()) - today.day() + 1,
    }
}

/// `[start_of_period, now)`.
pub fn period_window<Tz: TimeZone>(now: &DateTime<Tz>, cadence: Cadence) -> TimeWindow {
    TimeWindow::new(&start_of_period(now, cadence), now)
}

/// `[midnight, now)`.
pub fn today_window<Tz: TimeZone>(now: &DateTime<Tz>) -> TimeWindow {
    TimeWindow::new(&midnight(now), now)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Offset, Timelike, Utc, Weekday};
    use chrono_tz::America::{Havana, Sao_Paulo};

    fn local(y: i32, m: u32, d: u32, h: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(y, m, d, h, 15, 0)
            .unwrap()
    }

    #[test]
    fn weekly_start_is_monday_midnight_for_every_weekday() {
        // 2025-06-02 is a Monday.
        for offset in 0..7 {
            let now = local(2025, 6, 2 + offset, 14);
            let start = start_of_period(&now, Cadence::Weekly);
            assert_eq!(start.weekday(), Weekday::Mon, "weekday offset {offset}");
            assert_eq!(start.date_naive(), NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
            assert_eq!((start.hour(), start.minute(), start.second()), (0, 0, 0));
        }
    }

    #[test]
    fn sunday_belongs_to_the_week_started_six_days_earlier() {
        let sunday = local(2025, 6, 8, 23);
        let start = start_of_period(&sunday, Cadence::Weekly);
        assert_eq!(start.date_naive(), NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
    }

    #[test]
    fn weekly_start_crosses_month_boundary() {
        // Sunday 2025-06-01 -> Monday 2025-05-26.
        let now = local(2025, 6, 1, 10);
        let start = start_of_period(&now, Cadence::Weekly);
        assert_eq!(start.date_naive(), NaiveDate::from_ymd_opt(2025, 5, 26).unwrap());
    }

    #[test]
    fn monthly_start_is_first_day_at_midnight() {
        let now = local(2025, 6, 17, 18);
        let start = start_of_period(&now, Cadence::Monthly);
        assert_eq!(start.date_naive(), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(start.hour(), 0);
    }

    #[test]
    fn weekly_days_remaining_counts_today() {
        assert_eq!(days_remaining(&local(2025, 6, 2, 9), Cadence::Weekly), 7);
        assert_eq!(days_remaining(&local(2025, 6, 5, 9), Cadence::Weekly), 4);
        assert_eq!(days_remaining(&local(2025, 6, 8, 9), Cadence::Weekly), 1);
    }

    #[test]
    fn monthly_days_remaining_handles_month_lengths() {
        assert_eq!(days_remaining(&local(2025, 6, 1, 9), Cadence::Monthly), 30);
        assert_eq!(days_remaining(&local(2025, 6, 30, 9), Cadence::Monthly), 1);
        assert_eq!(days_remaining(&local(2024, 2, 28, 9), Cadence::Monthly), 2);
        assert_eq!(days_remaining(&local(2025, 2, 28, 9), Cadence::Monthly), 1);
        assert_eq!(days_remaining(&local(2025, 12, 31, 9), Cadence::Monthly), 1);
    }

    #[test]
    fn midnight_uses_local_calendar_date() {
        // 01:30 at +05:30 is still the previous day in UTC.
        let zone = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let now = zone.with_ymd_and_hms(2025, 6, 3, 1, 30, 0).unwrap();
        let start = midnight(&now);
        assert_eq!(start.date_naive(), NaiveDate::from_ymd_opt(2025, 6, 3).unwrap());
        assert_eq!(
            start.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2025, 6, 2, 18, 30, 0).unwrap()
        );
    }

    #[test]
    fn today_window_ends_at_now() {
        let now = local(2025, 6, 3, 11);
        let window = today_window(&now);
        assert_eq!(window.start, midnight(&now).with_timezone(&Utc));
        assert_eq!(window.end, now.with_timezone(&Utc));
    }

    #[test]
    fn midnight_skipped_by_dst_resolves_to_first_valid_time() {
        // Sao Paulo jumped from 00:00 to 01:00 on 2018-11-04.
        let now = Sao_Paulo.with_ymd_and_hms(2018, 11, 4, 15, 0, 0).unwrap();
        let start = midnight(&now);
        assert_eq!(start.date_naive(), NaiveDate::from_ymd_opt(2018, 11, 4).unwrap());
        assert_eq!((start.hour(), start.minute()), (1, 0));
        assert_eq!(start.offset().fix().local_minus_utc(), -2 * 3600);
        assert_eq!(
            start.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2018, 11, 4, 3, 0, 0).unwrap()
        );
    }

    #[test]
    fn weekly_start_after_dst_gap_is_plain_monday_midnight() {
        let now = Sao_Paulo.with_ymd_and_hms(2018, 11, 7, 10, 0, 0).unwrap();
        let start = start_of_period(&now, Cadence::Weekly);
        assert_eq!(start.date_naive(), NaiveDate::from_ymd_opt(2018, 11, 5).unwrap());
        assert_eq!((start.hour(), start.minute()), (0, 0));
        assert_eq!(
            start.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2018, 11, 5, 2, 0, 0).unwrap()
        );
    }

    #[test]
    fn ambiguous_midnight_resolves_to_earlier_instant() {
        // Havana fell back from 01:00 CDT to 00:00 CST on 2019-11-03, so
        // midnight happened twice: 04:00 and 05:00 UTC.
        let now = Havana.with_ymd_and_hms(2019, 11, 3, 12, 0, 0).unwrap();
        let start = midnight(&now);
        assert_eq!((start.hour(), start.minute()), (0, 0));
        assert_eq!(
            start.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2019, 11, 3, 4, 0, 0).unwrap()
        );
        assert_eq!(today_window(&now).start, start.with_timezone(&Utc));
    }
}
