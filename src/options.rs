use crate::error::FormError;
use serde::Deserialize;
use std::path::Path;

pub const SENTINEL_MONTH: &str = "Select Month";
pub const SENTINEL_DAY: &str = "Select Day";
pub const SENTINEL_YEAR: &str = "Select Year";
pub const DEFAULT_TIME: &str = "anytime";
pub const DEFAULT_PASSENGERS: u8 = 1;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const TIMES: [&str; 7] = [
    DEFAULT_TIME,
    "early morning",
    "morning",
    "noon",
    "afternoon",
    "early evening",
    "red eye",
];

/// The option lists offered by the selection controls. Month, day and year
/// lists start with their sentinel; the time list starts with its default.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OptionSet {
    pub months: Vec<String>,
    pub days: Vec<String>,
    pub years: Vec<String>,
    pub times: Vec<String>,
    pub passengers: Vec<u8>,
}

impl OptionSet {
    const MAX_DAY: u8 = 31;
    const MIN_YEAR: u16 = 2007;
    const MAX_YEAR: u16 = 2008;
    const MAX_PASSENGERS: u8 = 10;

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, FormError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, FormError> {
        let mut options: OptionSet = serde_json::from_str(data)?;
        options.ensure_defaults();
        Ok(options)
    }

    // lists read from disk may omit the placeholders
    fn ensure_defaults(&mut self) {
        for (list, head) in [
            (&mut self.months, SENTINEL_MONTH),
            (&mut self.days, SENTINEL_DAY),
            (&mut self.years, SENTINEL_YEAR),
            (&mut self.times, DEFAULT_TIME),
        ] {
            if list.first().map(|x| x.as_str()) != Some(head) {
                list.retain(|x| x != head);
                list.insert(0, head.to_string());
            }
        }
        if !self.passengers.contains(&DEFAULT_PASSENGERS) {
            self.passengers.insert(0, DEFAULT_PASSENGERS);
        }
    }
}

impl Default for OptionSet {
    fn default() -> Self {
        let months = std::iter::once(SENTINEL_MONTH)
            .chain(MONTHS)
            .map(String::from)
            .collect();
        let days = std::iter::once(SENTINEL_DAY.to_string())
            .chain((1..=Self::MAX_DAY).map(|d| d.to_string()))
            .collect();
        let years = std::iter::once(SENTINEL_YEAR.to_string())
            .chain((Self::MIN_YEAR..=Self::MAX_YEAR).map(|y| y.to_string()))
            .collect();
        OptionSet {
            months,
            days,
            years,
            times: TIMES.iter().map(|t| t.to_string()).collect(),
            passengers: (1..=Self::MAX_PASSENGERS).collect(),
        }
    }
}
