mod consts;
mod grid;
mod prelude;
mod types;

pub use consts::*;
pub use grid::{CalendarGrid, Cell, MonthView, write_header};
pub use types::{Month, Weekday, is_leap_year};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single month of the proleptic Gregorian calendar.
/// The month is validated on construction; any `i32` year is accepted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{} {}", "month.name()", "year")]
pub struct MonthYear {
    year: i32,
    month: Month,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Month number outside 1..=12.
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(i32),

    /// Text that is not a number or not a month-year.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl MonthYear {
    /// Creates a month-year from raw numbers
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if `month` is outside 1..=12.
    pub fn new(month: i32, year: i32) -> Result<Self, CalendarError> {
        Ok(Self::from_parts(Month::new(month)?, year))
    }

    /// Creates a month-year from an already validated month
    pub const fn from_parts(month: Month, year: i32) -> Self {
        Self { year, month }
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn is_leap_year(&self) -> bool {
        types::is_leap_year(self.year)
    }

    /// Weekday of the first day of this month
    pub const fn first_weekday(&self) -> Weekday {
        types::first_weekday(self.month, self.year)
    }

    /// Number of days in this month (28..=31)
    pub const fn days_in_month(&self) -> u8 {
        types::days_in_month(self.month, self.year)
    }

    pub fn grid(&self) -> CalendarGrid {
        CalendarGrid::new(*self)
    }

    pub fn view(&self) -> MonthView {
        MonthView::new(*self)
    }

    /// Header and day grid as text, one line per row
    pub fn render(&self) -> String {
        self.view().to_string()
    }
}

/// Parses a whole number, trimming surrounding whitespace
///
/// # Errors
/// Returns `CalendarError::InvalidInput` if the text is not an `i32`.
pub fn parse_int(s: &str) -> Result<i32, CalendarError> {
    let trimmed = s.trim();
    trimmed
        .parse::<i32>()
        .map_err(|_| CalendarError::InvalidInput(trimmed.to_owned()))
}

/// Accepts `MM/YYYY` or `YYYY-MM`.
impl FromStr for MonthYear {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::InvalidInput("empty month-year".to_owned()));
        }

        if let Some((month, year)) = trimmed.split_once(MONTH_FIRST_SEPARATOR) {
            return Self::new(parse_int(month)?, parse_int(year)?);
        }

        // rsplit so that a negative year keeps its sign
        match trimmed.rsplit_once(DATE_SEPARATOR) {
            Some((year, month)) if !year.trim().is_empty() => {
                Self::new(parse_int(month)?, parse_int(year)?)
            }
            _ => Err(CalendarError::InvalidInput(format!(
                "{trimmed} (expected MM{MONTH_FIRST_SEPARATOR}YYYY or YYYY{DATE_SEPARATOR}MM)"
            ))),
        }
    }
}

/// Weekday of the first day of `month` in `year`.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if `month` is outside 1..=12.
pub fn first_weekday(month: i32, year: i32) -> Result<Weekday, CalendarError> {
    Ok(MonthYear::new(month, year)?.first_weekday())
}

/// Number of days in `month` of `year`.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if `month` is outside 1..=12.
pub fn days_in_month(month: i32, year: i32) -> Result<u8, CalendarError> {
    Ok(MonthYear::new(month, year)?.days_in_month())
}

/// Renders `month` of `year` as a header followed by a Sunday-first day grid.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if `month` is outside 1..=12.
pub fn render_month(month: i32, year: i32) -> Result<String, CalendarError> {
    let month_year = MonthYear::new(month, year)?;
    debug!(%month_year, "rendering month");
    Ok(month_year.render())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_year_display() {
        let my = MonthYear::new(2, 2018).unwrap();
        assert_eq!(my.to_string(), "February 2018");
        assert_eq!(MonthYear::new(12, -44).unwrap().to_string(), "December -44");
    }

    #[test]
    fn test_month_year_accessors() {
        let my = MonthYear::new(2, 2020).unwrap();
        assert_eq!(my.month().get(), 2);
        assert_eq!(my.year(), 2020);
        assert!(my.is_leap_year());
        assert_eq!(my.days_in_month(), 29);
        assert_eq!(my.first_weekday(), Weekday::Saturday);
    }

    #[test]
    fn test_month_year_ordering() {
        let dec = MonthYear::new(12, 2017).unwrap();
        let jan = MonthYear::new(1, 2018).unwrap();
        let feb = MonthYear::new(2, 2018).unwrap();
        assert!(dec < jan);
        assert!(jan < feb);
    }

    #[test]
    fn test_invalid_month() {
        assert_eq!(MonthYear::new(0, 2018), Err(CalendarError::InvalidMonth(0)));
        assert_eq!(MonthYear::new(13, 2018), Err(CalendarError::InvalidMonth(13)));
        assert_eq!(first_weekday(13, 2018), Err(CalendarError::InvalidMonth(13)));
        assert_eq!(days_in_month(-1, 2018), Err(CalendarError::InvalidMonth(-1)));
        assert_eq!(render_month(0, 2018), Err(CalendarError::InvalidMonth(0)));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            CalendarError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            CalendarError::InvalidInput("abc".to_owned()).to_string(),
            "Invalid input: abc"
        );
    }

    #[test]
    fn test_leap_year_operation() {
        for year in [2000, 1996, 2400] {
            assert!(is_leap_year(year), "{year}");
        }
        for year in [1900, 2100, 2001] {
            assert!(!is_leap_year(year), "{year}");
        }
    }

    #[test]
    fn test_first_weekday_operation() {
        assert_eq!(first_weekday(3, 2018).unwrap().number(), 4);
        assert_eq!(first_weekday(1, 2000).unwrap().number(), 6);
    }

    #[test]
    fn test_days_in_month_operation() {
        assert_eq!(days_in_month(2, 2020), Ok(29));
        assert_eq!(days_in_month(2, 1900), Ok(28));
        assert_eq!(days_in_month(2, 2000), Ok(29));
        assert_eq!(days_in_month(4, 2021), Ok(30));
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int(" 42 "), Ok(42));
        assert_eq!(parse_int("-7"), Ok(-7));
        assert_eq!(
            parse_int("twelve"),
            Err(CalendarError::InvalidInput("twelve".to_owned()))
        );
        assert!(parse_int("").is_err());
        assert!(parse_int("3.5").is_err());
    }

    #[test]
    fn test_parse_month_first() {
        let my = "02/2018".parse::<MonthYear>().unwrap();
        assert_eq!(my, MonthYear::new(2, 2018).unwrap());

        let my = " 9 / 2024 ".parse::<MonthYear>().unwrap();
        assert_eq!(my, MonthYear::new(9, 2024).unwrap());
    }

    #[test]
    fn test_parse_iso() {
        let my = "2018-02".parse::<MonthYear>().unwrap();
        assert_eq!(my, MonthYear::new(2, 2018).unwrap());

        let my = "-44-03".parse::<MonthYear>().unwrap();
        assert_eq!(my, MonthYear::new(3, -44).unwrap());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "".parse::<MonthYear>(),
            Err(CalendarError::InvalidInput(_))
        ));
        assert!(matches!(
            "2018".parse::<MonthYear>(),
            Err(CalendarError::InvalidInput(_))
        ));
        assert!(matches!(
            "-2018".parse::<MonthYear>(),
            Err(CalendarError::InvalidInput(_))
        ));
        assert!(matches!(
            "feb/2018".parse::<MonthYear>(),
            Err(CalendarError::InvalidInput(_))
        ));
        assert_eq!(
            "13/2018".parse::<MonthYear>(),
            Err(CalendarError::InvalidMonth(13))
        );
    }

    #[test]
    fn test_month_year_serde() {
        let my = MonthYear::new(2, 2018).unwrap();
        let json = serde_json::to_string(&my).unwrap();
        assert_eq!(json, r#"{"year":2018,"month":2}"#);

        let parsed: MonthYear = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, my);

        assert!(serde_json::from_str::<MonthYear>(r#"{"year":2018,"month":0}"#).is_err());
    }

    #[test]
    fn test_render_is_idempotent() {
        let first = render_month(7, 1969).unwrap();
        let second = render_month(7, 1969).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_february_2018() {
        let text = render_month(2, 2018).unwrap();
        let expected = concat!(
            "\tFebruary 2018\n",
            "-----------------------------\n",
            " Sun Mon Tue Wed Thu Fri Sat\n",
            "                   1   2   3\n",
            "   4   5   6   7   8   9  10\n",
            "  11  12  13  14  15  16  17\n",
            "  18  19  20  21  22  23  24\n",
            "  25  26  27  28\n",
        );
        assert_eq!(text, expected);
    }
}
