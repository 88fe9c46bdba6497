//! Closing-period resolution.
//!
//! The household payroll month does not follow the calendar month: a period
//! runs from the 26th of one month through the 25th of the next, and is
//! labeled with the month/year of its closing day. A record dated 2025-01-10
//! therefore belongs to the January 2025 period, which started on 2024-12-26.

use chrono::{Datelike, NaiveDate};

/// A resolved closing period. Never persisted; recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Month of the closing label (1-12).
    pub month: u32,
    /// Year of the closing label.
    pub year: i32,
}

impl ClosingPeriod {
    /// Resolve the period a reference date falls in.
    ///
    /// Day 1-25: the period started on the 26th of the previous month and
    /// closes on the 25th of the reference month. Day 26 onwards: the period
    /// started on the 26th of the reference month and closes on the 25th of
    /// the next one. Both boundary days exist in every month, so the
    /// `from_ymd_opt` calls cannot fail here.
    pub fn for_date(reference: NaiveDate) -> Self {
        let (year, month, day) = (reference.year(), reference.month(), reference.day());

        if day <= 25 {
            let start = if month == 1 {
                date(year - 1, 12, 26)
            } else {
                date(year, month - 1, 26)
            };
            Self {
                start,
                end: date(year, month, 25),
                month,
                year,
            }
        } else {
            let start = date(year, month, 26);
            if month == 12 {
                Self {
                    start,
                    end: date(year + 1, 1, 25),
                    month: 1,
                    year: year + 1,
                }
            } else {
                Self {
                    start,
                    end: date(year, month + 1, 25),
                    month: month + 1,
                    year,
                }
            }
        }
    }

    /// Resolve the period whose closing label is (month, year).
    /// Equivalent to resolving for the 25th of that month.
    pub fn for_label(month: u32, year: i32) -> Self {
        Self::for_date(date(year, month, 25))
    }

    /// Closed-interval membership test.
    pub fn contains(&self, d: NaiveDate) -> bool {
        d >= self.start && d <= self.end
    }
}

/// Closing label (month, year) for a date, used to bucket historical
/// records into periods without keeping the full range around.
pub fn closing_label(d: NaiveDate) -> (u32, i32) {
    let p = ClosingPeriod::for_date(d);
    (p.month, p.year)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // boundary days 25/26 are valid in every month
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}
