//! age.rs
//!
//! Elapsed calendar age between a birth date and a reference date, reported
//! as whole years plus remainder months (and the leftover days).
//!
//! Chrono has no year/month diff, so the borrowing is done by hand:
//!   • a negative day count borrows one month, adding the length of the
//!     month just before the reference month
//!   • a negative month count borrows one year, adding 12
//!
//! Nothing here rejects a birth date that lies after the reference date. The
//! result simply goes negative and the caller decides what to do with it.

use chrono::{DateTime, Datelike, NaiveDate};

use crate::error::AgeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeResult {
    pub years: i32,
    /// Always in `0..=11`.
    pub months: i32,
    pub days: i32,
}

impl AgeResult {
    /// Fractional age in years. Not rounded; the converter interpolates on it.
    pub fn total_years(&self) -> f64 {
        self.years as f64 + self.months as f64 / 12.0
    }

    pub fn is_before_birth(&self) -> bool {
        self.total_years() < 0.0
    }
}

/// Accepts `YYYY-MM-DD`, or an RFC 3339 timestamp whose date part is used.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, AgeError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
        .map_err(|_| AgeError::InvalidDate(input.to_string()))
}

pub fn compute_age(birth: NaiveDate, reference: NaiveDate) -> AgeResult {
    let mut years = reference.year() - birth.year();
    let mut months = reference.month0() as i32 - birth.month0() as i32;
    let mut days = reference.day() as i32 - birth.day() as i32;

    if days < 0 {
        months -= 1;
        let (prev_year, prev_month) = if reference.month() == 1 {
            (reference.year() - 1, 12)
        } else {
            (reference.year(), reference.month() - 1)
        };
        days += days_in_month(prev_year, prev_month) as i32;
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    AgeResult {
        years,
        months,
        days,
    }
}

pub fn compute_age_str(birth: &str, reference: NaiveDate) -> Result<AgeResult, AgeError> {
    Ok(compute_age(parse_birth_date(birth)?, reference))
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Gregorian: every 4th year, except centuries not divisible by 400.
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn exact_anniversary() {
        let age = compute_age(date(2023, 10, 19), date(2026, 10, 19));
        assert_eq!(age, AgeResult { years: 3, months: 0, days: 0 });
        assert_eq!(age.total_years(), 3.0);
    }

    #[test]
    fn day_underflow_borrows_previous_month() {
        // March 2024 reference, February 2024 had 29 days.
        let age = compute_age(date(2023, 1, 15), date(2024, 3, 1));
        assert_eq!(age, AgeResult { years: 1, months: 1, days: 15 });
    }

    #[test]
    fn month_underflow_borrows_year() {
        let age = compute_age(date(2020, 11, 5), date(2026, 2, 10));
        assert_eq!(age, AgeResult { years: 5, months: 3, days: 5 });
    }

    #[test]
    fn january_reference_uses_december_length() {
        let age = compute_age(date(2025, 6, 20), date(2026, 1, 10));
        assert_eq!(age.months, 6);
        assert_eq!(age.days, 21);
    }

    #[test]
    fn future_birth_goes_negative() {
        let age = compute_age(date(2026, 10, 20), date(2026, 10, 19));
        assert_eq!(age, AgeResult { years: -1, months: 11, days: 29 });
        assert!(age.is_before_birth());
    }

    #[test]
    fn same_day_is_zero() {
        let age = compute_age(date(2026, 10, 19), date(2026, 10, 19));
        assert_eq!(age.total_years(), 0.0);
        assert!(!age.is_before_birth());
    }

    #[test]
    fn parses_plain_and_rfc3339_dates() {
        assert_eq!(parse_birth_date("2021-06-14").unwrap(), date(2021, 6, 14));
        assert_eq!(parse_birth_date(" 2021-06-14 ").unwrap(), date(2021, 6, 14));
        assert_eq!(
            parse_birth_date("2021-06-14T08:30:00+02:00").unwrap(),
            date(2021, 6, 14)
        );
    }

    #[test]
    fn rejects_impossible_dates() {
        for input in ["2021-02-30", "2023-02-29", "yesterday", "", "2021-13-01"] {
            assert_eq!(
                parse_birth_date(input),
                Err(AgeError::InvalidDate(input.to_string()))
            );
        }
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2026));
    }
}
