//! Reusable UI widgets for moncal.

pub mod calendar;
pub mod help;
