use std::fmt;

use serde::Serialize;

use crate::{
    CELL_WIDTH, DAYS_PER_WEEK, MonthYear, SEPARATOR_CHAR, SEPARATOR_WIDTH, prelude::*,
    types::Weekday,
};

/// A single grid position: `None` is a blank cell before the first day.
pub type Cell = Option<u8>;

/// Days of one month laid out in Sunday-first week rows.
///
/// Every row but the last holds exactly `DAYS_PER_WEEK` cells. The last row
/// stops right after the final day of the month and is never padded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarGrid {
    rows: Vec<Vec<Cell>>,
}

impl CalendarGrid {
    /// Lays out the days of `month_year`.
    pub fn new(month_year: MonthYear) -> Self {
        let offset = month_year.first_weekday().sunday_column();
        let day_count = month_year.days_in_month();

        let mut rows = Vec::new();
        let mut row = Vec::with_capacity(DAYS_PER_WEEK);
        let mut day = 1;
        let mut index = 0;

        while day <= day_count {
            if index >= offset {
                row.push(Some(day));
                day += 1;
            } else {
                row.push(None);
            }
            index += 1;

            if row.len() == DAYS_PER_WEEK {
                trace!(week = rows.len(), "week row complete");
                rows.push(std::mem::replace(&mut row, Vec::with_capacity(DAYS_PER_WEEK)));
            }
        }

        if !row.is_empty() {
            rows.push(row);
        }

        debug!(
            %month_year,
            offset,
            day_count,
            rows = rows.len(),
            "built calendar grid"
        );

        Self { rows }
    }

    /// Week rows, Sunday first
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Day numbers in layout order
    pub fn days(&self) -> impl Iterator<Item = u8> + '_ {
        self.rows.iter().flatten().filter_map(|cell| *cell)
    }

    /// Column of day 1 in the first row
    pub fn first_day_column(&self) -> Option<usize> {
        self.rows
            .first()
            .and_then(|row| row.iter().position(Option::is_some))
    }
}

/// Body text: one line per week, each cell `CELL_WIDTH` characters wide.
impl fmt::Display for CalendarGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for cell in row {
                match cell {
                    Some(day) => write!(f, "{day:>CELL_WIDTH$}")?,
                    None => write!(f, "{:CELL_WIDTH$}", "")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Writes the three header lines: title, dash separator, weekday names.
pub fn write_header(f: &mut impl fmt::Write, month_year: MonthYear) -> fmt::Result {
    writeln!(f, "\t{month_year}")?;
    for _ in 0..SEPARATOR_WIDTH {
        f.write_char(SEPARATOR_CHAR)?;
    }
    writeln!(f)?;
    for weekday in Weekday::SUNDAY_FIRST {
        write!(f, "{:>CELL_WIDTH$}", weekday.short_name())?;
    }
    writeln!(f)
}

/// A month ready for display: header plus day grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MonthView {
    #[serde(flatten)]
    month_year: MonthYear,
    first_weekday: Weekday,
    days_in_month: u8,
    grid: CalendarGrid,
}

impl MonthView {
    pub fn new(month_year: MonthYear) -> Self {
        Self {
            month_year,
            first_weekday: month_year.first_weekday(),
            days_in_month: month_year.days_in_month(),
            grid: CalendarGrid::new(month_year),
        }
    }

    pub const fn month_year(&self) -> MonthYear {
        self.month_year
    }

    pub const fn grid(&self) -> &CalendarGrid {
        &self.grid
    }
}

impl fmt::Display for MonthView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, self.month_year)?;
        write!(f, "{}", self.grid)
    }
}
