/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March, the first month of the congruential year
pub const MARCH: u8 = 3;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// English month names (index 0 is unused, months are 1-indexed)
pub const MONTH_NAMES: [&str; 13] = [
    "",
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

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Number of columns in a rendered week row
pub const DAYS_PER_WEEK: usize = 7;
/// Width of a single rendered cell, blank or day
pub const CELL_WIDTH: usize = 4;
/// Length of the dash line under the month title
pub const SEPARATOR_WIDTH: usize = 29;
/// Character used for the separator line
pub const SEPARATOR_CHAR: char = '-';

/// Separator for `MM/YYYY` month-year text
pub const MONTH_FIRST_SEPARATOR: char = '/';
/// Separator for `YYYY-MM` month-year text (ISO 8601)
pub const DATE_SEPARATOR: char = '-';
