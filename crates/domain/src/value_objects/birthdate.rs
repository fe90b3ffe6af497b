//! Birthdate with a minimum-age floor.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{MIN_AGE, ValidationError};

/// A birthdate truncated to day granularity (UTC).
///
/// Age is computed as `now.year - birth.year` with no month/day
/// adjustment, so the result is off by one near birthdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthdate(NaiveDate);

impl Birthdate {
    /// Truncates the instant to a date and enforces the minimum age
    /// against the supplied current time.
    pub fn new(birth: DateTime<Utc>, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        let date = Self(birth.date_naive());

        if date.age_at(now) < MIN_AGE {
            return Err(ValidationError::AgeTooLow);
        }

        Ok(date)
    }

    /// Wraps a date without the age check.
    pub fn from_date_unchecked(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Whole-year age at the given instant.
    pub fn age_at(&self, now: DateTime<Utc>) -> i32 {
        now.year() - self.0.year()
    }
}

impl std::fmt::Display for Birthdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 15, 30, 45).unwrap()
    }

    #[test]
    fn truncates_to_day_granularity() {
        let birthdate = Birthdate::new(at(1990, 6, 15), at(2024, 1, 1)).unwrap();
        assert_eq!(
            birthdate.date(),
            NaiveDate::from_ymd_opt(1990, 6, 15).unwrap()
        );
    }

    #[test]
    fn rejects_age_below_minimum() {
        let err = Birthdate::new(at(2010, 1, 1), at(2024, 1, 1)).unwrap_err();
        assert_eq!(err, ValidationError::AgeTooLow);
    }

    #[test]
    fn accepts_exactly_minimum_age() {
        assert!(Birthdate::new(at(2006, 12, 31), at(2024, 1, 1)).is_ok());
    }

    #[test]
    fn age_ignores_month_and_day() {
        // Born December 2000, "18" already in January 2018.
        let birthdate = Birthdate::from_date_unchecked(NaiveDate::from_ymd_opt(2000, 12, 31).unwrap());
        assert_eq!(birthdate.age_at(at(2018, 1, 1)), 18);
    }
}
