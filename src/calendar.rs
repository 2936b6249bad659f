use chrono::naive::NaiveDate;
use chrono::{Datelike, Month, Weekday};
use std::convert::TryFrom;

use crate::grid::{self, GridCell};

/// Maps any year onto the equivalent year in 2000..2400. The Gregorian
/// calendar repeats every 400 years (146097 days, a whole number of weeks),
/// so weekdays and month lengths are unchanged.
fn fold_year(year: i32) -> i32 {
    2000 + year.rem_euclid(400)
}

/// Position and length of one month in the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthShape {
    pub year: i32,
    pub month: Month,
    pub first_weekday: Weekday,
    pub days: u32,
}

impl MonthShape {
    /// Shape of `month` (1 = January) in `year`.
    ///
    /// Panics if `month` is not within 1..=12.
    pub fn from_number(year: i32, month: u32) -> Self {
        let month = u8::try_from(month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .unwrap_or_else(|| panic!("month number {} is not within 1..=12", month));

        month_shape(year, month)
    }

    /// Leading empty cells before the 1st, counting from Sunday.
    pub fn start_weekday(&self) -> u32 {
        self.first_weekday.num_days_from_sunday()
    }

    pub fn title(&self) -> String {
        format!("{} {}", self.month.name(), self.year)
    }

    pub fn grid(&self) -> Vec<GridCell> {
        grid::build_month_grid(self.start_weekday(), self.days)
    }
}

// Only called with folded years (and their successor) and months 1..=12.
fn first_of_month(folded_year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(folded_year, month, 1)
        .unwrap_or_else(|| unreachable!("{}-{:02}-01 is out of range", folded_year, month))
}

fn days_of_month(folded_year: i32, month: &Month) -> u32 {
    let number = month.number_from_month();
    let next = if number == 12 {
        first_of_month(folded_year + 1, 1)
    } else {
        first_of_month(folded_year, number + 1)
    };

    next.signed_duration_since(first_of_month(folded_year, number))
        .num_days() as u32
}

/// Computes the starting weekday and length of a month of the proleptic
/// Gregorian calendar. Total over every `i32` year.
pub fn month_shape(year: i32, month: Month) -> MonthShape {
    let folded = fold_year(year);

    MonthShape {
        year,
        month,
        first_weekday: first_of_month(folded, month.number_from_month()).weekday(),
        days: days_of_month(folded, &month),
    }
}

pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(fold_year(year), 2, 29).is_some()
}

/// All twelve months of `year`, January first.
pub fn months(year: i32) -> impl Iterator<Item = MonthShape> {
    (1..=12).map(move |month| MonthShape::from_number(year, month))
}
