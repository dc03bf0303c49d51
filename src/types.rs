use crate::CalendarError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MARCH, MAX_MONTH, MONTH_NAMES,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's within `1..=MAX_MONTH`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the value is outside 1..=12.
    pub fn new(value: i32) -> Result<Self, CalendarError> {
        u8::try_from(value)
            .ok()
            .filter(|m| *m <= MAX_MONTH)
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(CalendarError::InvalidMonth(value))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// English name of the month
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.0.get() as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i32::from(value))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week, numbered the ISO 8601 way (Monday = 1 .. Sunday = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    /// Column order of a rendered week, Sunday first.
    pub const SUNDAY_FIRST: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Looks up a weekday by its ISO number (1..=7)
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            7 => Some(Self::Sunday),
            _ => None,
        }
    }

    /// ISO number, 1 = Monday .. 7 = Sunday
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Three-letter English abbreviation
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
            Self::Sunday => "Sun",
        }
    }

    /// Zero-based column in a Sunday-first week.
    /// Sunday (7) wraps to 0, Monday..Saturday keep their ISO number.
    pub const fn sunday_column(self) -> usize {
        match self {
            Self::Sunday => 0,
            other => other.number() as usize,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl TryFrom<u8> for Weekday {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value)
            .ok_or_else(|| CalendarError::InvalidInput(format!("weekday number {value}")))
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.number()
    }
}

// Helper functions

/// Gregorian leap year rule, extended to every integer year.
pub const fn is_leap_year(year: i32) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

pub const fn days_in_month(month: Month, year: i32) -> u8 {
    if month.get() == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.get() as usize]
    }
}

/// Weekday of the first day of `month` in `year`.
///
/// Zeller's congruence with the day fixed at 1. January and February count
/// as months 13 and 14 of the previous year. The congruence yields
/// 0 = Saturday .. 6 = Friday, which is shifted onto the ISO numbering.
/// Floor division keeps negative years on the proleptic calendar.
pub const fn first_weekday(month: Month, year: i32) -> Weekday {
    let (m, y) = if month.get() < MARCH {
        (month.get() as i64 + 12, year as i64 - 1)
    } else {
        (month.get() as i64, year as i64)
    };

    let century_year = y.rem_euclid(100);
    let century_term = y.div_euclid(100);

    let zeller = (1
        + (13 * (m + 1)) / 5
        + century_year
        + century_year / 4
        + century_term.div_euclid(4)
        + 5 * century_term)
        .rem_euclid(7);

    // zeller is in 0..7, so the ISO number is in 1..=7
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let iso = ((zeller + 5) % 7 + 1) as u8;
    match Weekday::from_number(iso) {
        Some(weekday) => weekday,
        None => Weekday::Sunday,
    }
}
