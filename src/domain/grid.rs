//! Pure month-grid generation.
//!
//! A month is always laid out on a fixed 6x7 grid: leading blanks up to the
//! weekday of day 1, one cell per day of the month, trailing blanks to fill
//! the remaining positions. The constant height keeps the widget from
//! jumping when navigating between months.

use crate::domain::month::ViewMonth;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Grid columns (one week)
pub const GRID_COLUMNS: usize = 7;
/// Grid rows
pub const GRID_ROWS: usize = 6;
/// Total cells in a month grid
pub const GRID_CELLS: usize = GRID_COLUMNS * GRID_ROWS;

/// Which weekday occupies the first grid column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Column index of a weekday under this convention (0..=6)
    pub fn column_of(&self, weekday: Weekday) -> u32 {
        match self {
            WeekStart::Sunday => weekday.num_days_from_sunday(),
            WeekStart::Monday => weekday.num_days_from_monday(),
        }
    }
}

/// One position of the 42-cell grid: a concrete in-month day, or a blank
/// placeholder before/after the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    Blank,
    Day { day: u32, date: NaiveDate },
}

impl GridCell {
    pub fn is_day(&self) -> bool {
        matches!(self, GridCell::Day { .. })
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            GridCell::Blank => None,
            GridCell::Day { date, .. } => Some(*date),
        }
    }
}

/// The 42-cell grid for one month under one week-start convention.
pub struct MonthGrid {
    view: ViewMonth,
    week_start: WeekStart,
    cells: [GridCell; GRID_CELLS],
}

impl MonthGrid {
    pub fn new(view: ViewMonth, week_start: WeekStart) -> Self {
        let offset = week_start.column_of(view.first_day().weekday()) as usize;
        let days = view.days_in_month() as usize;

        // Max offset (6) + longest month (31) fits in 42 cells
        let mut cells = [GridCell::Blank; GRID_CELLS];
        for (i, date) in view.first_day().iter_days().take(days).enumerate() {
            cells[offset + i] = GridCell::Day {
                day: i as u32 + 1,
                date,
            };
        }

        Self {
            view,
            week_start,
            cells,
        }
    }

    pub fn view(&self) -> ViewMonth {
        self.view
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// The grid as 6 week rows of 7 cells
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(GRID_COLUMNS)
    }

    /// Number of blank cells before day 1
    pub fn leading_blanks(&self) -> usize {
        self.cells.iter().take_while(|c| !c.is_day()).count()
    }

    /// Number of in-month cells
    pub fn in_month_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_day()).count()
    }

    /// Cell index of an in-month date, if the date belongs to this month
    pub fn position_of(&self, date: NaiveDate) -> Option<usize> {
        if !self.view.contains(date) {
            return None;
        }
        Some(self.leading_blanks() + date.day() as usize - 1)
    }
}
