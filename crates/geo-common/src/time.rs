//! Candidate acquisition-date generation per layer cadence.

use chrono::{Datelike, Duration, NaiveDate};

use crate::layer::Cadence;

/// Generate candidate acquisition dates for a layer cadence, most recent
/// first.
///
/// - Monthly composites: the last 6 months in 30-day steps.
/// - Annual composites: mid-year (June 1) of the last 3 years.
/// - Daily layers: the last 17 days (Landsat revisit period).
pub fn candidate_dates(cadence: Cadence, today: NaiveDate) -> Vec<NaiveDate> {
    match cadence {
        Cadence::Monthly => (0..6)
            .map(|i| today - Duration::days(i * 30))
            .collect(),
        Cadence::Annual => (0..3)
            .filter_map(|i| NaiveDate::from_ymd_opt(today.year() - i, 6, 1))
            .collect(),
        Cadence::Daily => (0..17)
            .map(|i| today - Duration::days(i))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monthly_six_candidates_30_days_apart() {
        let dates = candidate_dates(Cadence::Monthly, day(2025, 8, 1));
        assert_eq!(dates.len(), 6);
        assert_eq!(dates[0], day(2025, 8, 1));
        for pair in dates.windows(2) {
            assert_eq!(pair[0] - pair[1], Duration::days(30));
        }
    }

    #[test]
    fn test_annual_mid_year_of_last_three_years() {
        let dates = candidate_dates(Cadence::Annual, day(2025, 3, 10));
        assert_eq!(
            dates,
            vec![day(2025, 6, 1), day(2024, 6, 1), day(2023, 6, 1)]
        );
    }

    #[test]
    fn test_daily_seventeen_candidates_most_recent_first() {
        let dates = candidate_dates(Cadence::Daily, day(2025, 8, 20));
        assert_eq!(dates.len(), 17);
        assert_eq!(dates[0], day(2025, 8, 20));
        assert_eq!(dates[16], day(2025, 8, 3));
    }
}
