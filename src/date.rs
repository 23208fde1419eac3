//! Proleptic Gregorian date arithmetic using Zeller's congruence.

use chrono::Weekday;

/// Check if a year is a leap year under Gregorian rules.
pub fn is_leap_year(year: i32) -> bool {
    // Divisible by 4, except centuries unless divisible by 400
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Number of days in `month` (1-12) of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

/// Calculate the weekday of day 1 of `month` using Zeller's congruence.
///
/// Euclidean division keeps the formula valid for years before 1 CE.
pub fn first_day_of_month(year: i32, month: u32) -> Weekday {
    let m = i64::from(if month < 3 { month + 12 } else { month });
    let q: i64 = 1;
    let year_i = if month < 3 {
        i64::from(year) - 1
    } else {
        i64::from(year)
    };
    let k = year_i.rem_euclid(100);
    let j = year_i.div_euclid(100);

    let h = (q + (13 * (m + 1)) / 5 + k + k / 4 + j.div_euclid(4) - 2 * j).rem_euclid(7);
    // h: 0=Sat, 1=Sun, 2=Mon, 3=Tue, 4=Wed, 5=Thu, 6=Fri
    match h {
        0 => Weekday::Sat,
        1 => Weekday::Sun,
        2 => Weekday::Mon,
        3 => Weekday::Tue,
        4 => Weekday::Wed,
        5 => Weekday::Thu,
        6 => Weekday::Fri,
        _ => unreachable!(),
    }
}

/// A year/month pair with a 1-based month that is always in 1..=12.
///
/// Neighbouring months are only adjacent for years strictly inside the `i32`
/// range. At `i32::MIN` / `i32::MAX` the year saturates, so `prev` of
/// January or `next` of December keeps the same year; grids for those two
/// boundary years are outside the supported input range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthRef {
    year: i32,
    month: u32,
}

impl MonthRef {
    /// Build a `MonthRef`, rolling months outside 1..=12 into adjacent years.
    ///
    /// Month 0 is December of the previous year and month 13 is January of
    /// the next one. Years saturate at the `i32` bounds.
    pub fn normalized(year: i32, month: u32) -> Self {
        if (1..=12).contains(&month) {
            return MonthRef { year, month };
        }
        let total = i64::from(year) * 12 + i64::from(month) - 1;
        let year = total
            .div_euclid(12)
            .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        let month = total.rem_euclid(12) as u32 + 1;
        MonthRef { year, month }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    /// The 1-based month number.
    pub fn month(self) -> u32 {
        self.month
    }

    /// The month before this one; January rolls back to December of `year - 1`
    /// (saturating at `i32::MIN`).
    pub fn prev(self) -> Self {
        if self.month == 1 {
            MonthRef {
                year: self.year.saturating_sub(1),
                month: 12,
            }
        } else {
            MonthRef {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The month after this one; December rolls over to January of `year + 1`
    /// (saturating at `i32::MAX`).
    pub fn next(self) -> Self {
        if self.month == 12 {
            MonthRef {
                year: self.year.saturating_add(1),
                month: 1,
            }
        } else {
            MonthRef {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Last day-of-month, i.e. the number of days in the month.
    pub fn last_date(self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn first_weekday(self) -> Weekday {
        first_day_of_month(self.year, self.month)
    }
}
