//! Domain entities for moncal.
//!
//! This module contains the core calendar model:
//! - ViewMonth: The (year, month) pair being displayed
//! - MonthGrid: The fixed 42-cell grid for one month
//! - WeekStart: Which weekday occupies the first grid column

mod grid;
mod month;

pub use grid::{GridCell, MonthGrid, WeekStart, GRID_CELLS, GRID_COLUMNS, GRID_ROWS};
pub use month::ViewMonth;
