use chrono::Utc;

pub const SECS_PER_DAY: i64 = 86_400;
pub const DAYS_PER_YEAR: f64 = 365.0;

pub fn unix_now() -> i64 {
    Utc::now().timestamp()
}

pub fn resolve_now(now_timestamp: Option<i64>) -> i64 {
    now_timestamp.unwrap_or_else(unix_now)
}

/// Whole days from `now` until `maturity`, floored and never negative.
///
/// A maturity of 0 means the asset has no fixed maturity and yields 0 days.
pub fn days_until_maturity(maturity_timestamp: i64, now_timestamp: i64) -> i64 {
    if maturity_timestamp == 0 {
        return 0;
    }
    maturity_timestamp
        .saturating_sub(now_timestamp)
        .div_euclid(SECS_PER_DAY)
        .max(0)
}

pub fn days_to_years(days: i64) -> f64 {
    days as f64 / DAYS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn zero_maturity_means_no_duration() {
        assert_eq!(days_until_maturity(0, 1_700_000_000), 0);
    }

    #[test]
    fn floors_partial_days() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap().timestamp();
        let maturity = Utc.with_ymd_and_hms(2026, 1, 31, 23, 59, 59).unwrap().timestamp();
        assert_eq!(days_until_maturity(maturity, now), 30);
    }

    #[test]
    fn past_maturity_clamps_to_zero() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap().timestamp();
        let maturity = Utc.with_ymd_and_hms(2026, 5, 31, 12, 0, 0).unwrap().timestamp();
        assert_eq!(days_until_maturity(maturity, now), 0);
    }

    #[test]
    fn explicit_now_wins_over_clock() {
        assert_eq!(resolve_now(Some(42)), 42);
        assert!(resolve_now(None) > 1_600_000_000);
    }

    #[test]
    fn converts_days_to_years() {
        assert_eq!(days_to_years(730), 2.0);
        assert_eq!(days_to_years(0), 0.0);
    }
}
