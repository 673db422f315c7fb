use crate::options::{DEFAULT_TIME, SENTINEL_DAY, SENTINEL_MONTH, SENTINEL_YEAR};
use std::fmt;
use std::fmt::Formatter;

/// One leg of the trip. Setters take any string, placeholders included;
/// the values are only judged by [`TravelDate::is_valid`].
#[derive(Clone, Debug, PartialEq)]
pub struct TravelDate {
    month: String,
    day: String,
    year: String,
    time_preference: String,
}

impl TravelDate {
    pub fn new() -> TravelDate {
        TravelDate {
            month: SENTINEL_MONTH.to_string(),
            day: SENTINEL_DAY.to_string(),
            year: SENTINEL_YEAR.to_string(),
            time_preference: DEFAULT_TIME.to_string(),
        }
    }

    pub fn set_month(&mut self, month: impl Into<String>) {
        self.month = month.into();
    }

    pub fn set_day(&mut self, day: impl Into<String>) {
        self.day = day.into();
    }

    pub fn set_year(&mut self, year: impl Into<String>) {
        self.year = year.into();
    }

    pub fn set_time_preference(&mut self, time_preference: impl Into<String>) {
        self.time_preference = time_preference.into();
    }

    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn day(&self) -> &str {
        &self.day
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn time_preference(&self) -> &str {
        &self.time_preference
    }

    /// True once month, day and year are all off their placeholders. The
    /// day is not checked against the month.
    pub fn is_valid(&self) -> bool {
        self.month != SENTINEL_MONTH && self.day != SENTINEL_DAY && self.year != SENTINEL_YEAR
    }
}

impl Default for TravelDate {
    fn default() -> Self {
        TravelDate::new()
    }
}

impl fmt::Display for TravelDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {} at {}",
            self.month, self.day, self.year, self.time_preference
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(month: &str, day: &str, year: &str, time: &str) -> TravelDate {
        let mut d = TravelDate::new();
        d.set_month(month);
        d.set_day(day);
        d.set_year(year);
        d.set_time_preference(time);
        d
    }

    #[test]
    fn test_new_date_is_invalid() {
        let d = TravelDate::new();
        assert!(!d.is_valid());
        assert_eq!(SENTINEL_MONTH, d.month());
        assert_eq!(DEFAULT_TIME, d.time_preference());
    }

    #[test]
    fn test_each_placeholder_invalidates() {
        assert!(!date(SENTINEL_MONTH, "5", "2008", "noon").is_valid());
        assert!(!date("March", SENTINEL_DAY, "2008", "noon").is_valid());
        assert!(!date("March", "5", SENTINEL_YEAR, "noon").is_valid());
        assert!(date("March", "5", "2008", "noon").is_valid());
    }

    #[test]
    fn test_time_preference_ignored() {
        assert!(date("March", "5", "2008", DEFAULT_TIME).is_valid());
        assert!(date("March", "5", "2008", "").is_valid());
        assert!(!date(SENTINEL_MONTH, SENTINEL_DAY, SENTINEL_YEAR, "red eye").is_valid());
    }

    #[test]
    fn test_no_calendar_check() {
        assert!(date("February", "31", "2007", "noon").is_valid());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            "March 5, 2008 at morning",
            date("March", "5", "2008", "morning").to_string()
        );
        assert_eq!(
            "Select Month Select Day, Select Year at anytime",
            TravelDate::new().to_string()
        );
    }
}
