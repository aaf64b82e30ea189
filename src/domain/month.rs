//! The (year, month) pair a calendar view is showing.

use chrono::{Datelike, NaiveDate};

/// A displayed calendar month. The month component is always in 1..=12;
/// navigation carries over year boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewMonth {
    year: i32,
    month: u32,
}

impl ViewMonth {
    /// Create a view month. Callers never produce out-of-range months;
    /// the value is normalized just in case.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    /// The month containing the given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The next calendar month
    pub fn succ(&self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    /// The previous calendar month
    pub fn pred(&self) -> Self {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    /// Number of days in this month (28-31)
    pub fn days_in_month(&self) -> u32 {
        match self.month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ => {
                if is_leap_year(self.year) {
                    29
                } else {
                    28
                }
            }
        }
    }

    /// The first day of this month
    pub fn first_day(&self) -> NaiveDate {
        // Day 1 of a 1..=12 month is always representable
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or(NaiveDate::MIN)
    }

    /// The last day of this month
    pub fn last_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, self.days_in_month())
            .unwrap_or(NaiveDate::MIN)
    }

    /// Whether the date falls inside this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Clamp a date to the nearest day inside this month
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        if date < self.first_day() {
            self.first_day()
        } else if date > self.last_day() {
            self.last_day()
        } else {
            date
        }
    }
}

impl std::fmt::Display for ViewMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
