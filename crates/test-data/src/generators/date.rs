//! Randomized future timestamps in the Sao Paulo time zone.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use chrono_tz::{America::Sao_Paulo, Tz};
use rand::Rng;

/// Zone every generated timestamp is expressed in.
pub const TIMEZONE: Tz = Sao_Paulo;

/// Width of the window after "now" that timestamps fall into.
pub const WINDOW_DAYS: i64 = 7;

/// Picks a minute-aligned instant in `[now, now + 7 days]`.
///
/// The day, hour and minute offsets are drawn independently, on top of
/// `now` rounded up to the next whole minute.
pub fn random_future_datetime(now: DateTime<Utc>, rng: &mut impl Rng) -> DateTime<Tz> {
    let base = next_whole_minute(now);
    let offset = Duration::days(rng.gen_range(0..WINDOW_DAYS))
        + Duration::hours(rng.gen_range(0..24))
        + Duration::minutes(rng.gen_range(0..60));

    (base + offset).with_timezone(&TIMEZONE)
}

/// Same as [`random_future_datetime`] from the current time, formatted
/// as RFC 3339 (e.g. `2026-10-18T14:05:00-03:00`).
pub fn random_future_date(rng: &mut impl Rng) -> String {
    format_timestamp(&random_future_datetime(Utc::now(), rng))
}

/// Formats with whole seconds and a numeric offset.
pub fn format_timestamp(ts: &DateTime<Tz>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, false)
}

fn next_whole_minute(now: DateTime<Utc>) -> DateTime<Utc> {
    let secs = now.timestamp();
    let floor = secs.div_euclid(60) * 60;
    let aligned = floor == secs && now.timestamp_subsec_nanos() == 0;
    let target = if aligned { floor } else { floor + 60 };

    DateTime::<Utc>::from_timestamp(target, 0).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 15, 42, 17).unwrap()
    }

    #[test]
    fn test_dates_stay_inside_window() {
        let now = fixed_now();
        let mut rng = rand::thread_rng();

        for _ in 0..500 {
            let ts = random_future_datetime(now, &mut rng);
            assert!(ts >= now, "{ts} is before {now}");
            assert!(ts <= now + Duration::days(WINDOW_DAYS), "{ts} is past the window");
        }
    }

    #[test]
    fn test_seconds_are_zero() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let ts = random_future_datetime(fixed_now(), &mut rng);
            assert_eq!(ts.second(), 0);
            assert_eq!(ts.nanosecond(), 0);
        }
    }

    #[test]
    fn test_formatted_with_sao_paulo_offset() {
        let mut rng = rand::thread_rng();
        let formatted = format_timestamp(&random_future_datetime(fixed_now(), &mut rng));

        assert!(formatted.ends_with("-03:00"), "{formatted}");
        assert!(formatted.contains(":00-03:00"));
        assert!(DateTime::parse_from_rfc3339(&formatted).is_ok());
    }

    #[test]
    fn test_current_time_date_parses() {
        let mut rng = rand::thread_rng();
        let formatted = random_future_date(&mut rng);
        let parsed = DateTime::parse_from_rfc3339(&formatted).unwrap();

        assert_eq!(parsed.offset().local_minus_utc(), -3 * 3600);
        assert!(parsed.with_timezone(&Utc) >= Utc::now() - Duration::minutes(1));
    }

    #[test]
    fn test_next_whole_minute() {
        let now = fixed_now();
        let rounded = next_whole_minute(now);
        assert_eq!(rounded, Utc.with_ymd_and_hms(2026, 10, 16, 15, 43, 0).unwrap());

        let aligned = Utc.with_ymd_and_hms(2026, 10, 16, 15, 43, 0).unwrap();
        assert_eq!(next_whole_minute(aligned), aligned);
    }
}
