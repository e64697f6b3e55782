use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use num_integer::Integer;

use crate::date::{Date, Weekday, MAX_YEAR, MIN_YEAR};
use crate::date_range::{DateIter, DateSpan};
use crate::duration::Days;
use crate::error::Error;
use crate::iso8601::util::{days_in_month, is_leap};
use crate::iso8601::week_date::year_week_number;
use crate::month_delta::MonthDelta;
use crate::strtime::{self, Fields};

const EPOCH_YEAR: i32 = 1970;
const EPOCH_MONTH: i32 = 1;

/// A calendar month of a particular year.
///
/// Spans the dates from the first of the month up to the first of the next
/// month. December 9999 ends on 9999-12-31 instead, the last supported date,
/// but still covers all 31 days when iterated or counted.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u8,
}

impl Month {
    pub const DEFAULT_FORMAT: &'static str = "%Y-%m";

    /// # Errors
    ///
    /// Returns an error unless `1 <= month <= 12` and `1 <= year <= 9999`.
    pub fn new(year: i32, month: i32) -> Result<Self, Error> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth { month });
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::YearOutOfRange { year });
        }
        Ok(Month {
            year,
            month: month as u8,
        })
    }

    /// The month `date` falls in.
    pub fn for_date(date: Date) -> Self {
        let (year, month, _) = date.ymd();
        Month { year, month }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u8 {
        self.month
    }

    /// Months since January 1970. Negative for earlier months.
    pub fn ord(self) -> i32 {
        (self.year - EPOCH_YEAR) * 12 + (self.month as i32 - EPOCH_MONTH)
    }

    pub fn from_ord(ord: i32) -> Result<Self, Error> {
        let (years, months) = ord.div_mod_floor(&12);
        Month::new(years + EPOCH_YEAR, months + EPOCH_MONTH)
    }

    pub(crate) fn from_ord_unchecked(ord: i32) -> Self {
        let (years, months) = ord.div_mod_floor(&12);
        Month {
            year: years + EPOCH_YEAR,
            month: (months + EPOCH_MONTH) as u8,
        }
    }

    /// Number of days in the month.
    pub fn days(self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// True for February of a leap year.
    pub fn is_leap(self) -> bool {
        self.month == 2 && is_leap(self.year)
    }

    pub fn last_date(self) -> Date {
        Date::from_valid_ymd(self.year, self.month, self.days())
    }

    pub fn checked_add(self, delta: MonthDelta) -> Result<Month, Error> {
        let ord = self
            .ord()
            .checked_add(delta.total_months())
            .ok_or(Error::DateOutOfRange)?;
        Month::from_ord(ord)
    }

    pub fn checked_sub(self, delta: MonthDelta) -> Result<Month, Error> {
        self.checked_add(-delta)
    }

    pub fn format(self, pattern: &str) -> Result<String, Error> {
        strtime::format(pattern, &self.fields())
    }

    /// Parses the month of a date written according to `pattern`.
    ///
    /// Fields missing from the pattern default to the first month and day.
    pub fn parse(text: &str, pattern: &str) -> Result<Month, Error> {
        let parsed = strtime::parse("Month", pattern, text)?;
        let date = parsed.date().ok_or_else(|| Error::parse("Month", text))?;
        Ok(Month::for_date(date))
    }

    fn fields(self) -> Fields {
        let date = self.start_date();
        let (iso_year, iso_week) = year_week_number(date, Weekday::Monday);
        Fields {
            date,
            iso_year,
            iso_week,
        }
    }
}

impl DateSpan for Month {
    fn start_date(&self) -> Date {
        Date::from_valid_ymd(self.year, self.month, 1)
    }

    fn end_date(&self) -> Date {
        if self.month < 12 {
            Date::from_valid_ymd(self.year, self.month + 1, 1)
        } else if self.year < MAX_YEAR {
            Date::from_valid_ymd(self.year + 1, 1, 1)
        } else {
            Date::MAX
        }
    }

    fn contains_date(&self, date: Date) -> bool {
        Month::for_date(date) == *self
    }

    fn total_days(&self) -> Days {
        Days::new(self.days() as i32)
    }

    fn is_empty(&self) -> bool {
        false
    }

    fn dates(&self) -> DateIter {
        let start = self.start_date().day_number();
        DateIter::new(start, start + self.days() as i32)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl fmt::Debug for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Month({}, {})", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::parse(s, Month::DEFAULT_FORMAT)
    }
}

impl TryFrom<(i32, i32)> for Month {
    type Error = Error;

    fn try_from((year, month): (i32, i32)) -> Result<Self, Self::Error> {
        Month::new(year, month)
    }
}

impl TryFrom<&str> for Month {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl IntoIterator for Month {
    type Item = Date;
    type IntoIter = DateIter;

    fn into_iter(self) -> Self::IntoIter {
        self.dates()
    }
}

impl Add<MonthDelta> for Month {
    type Output = Month;

    fn add(self, rhs: MonthDelta) -> Self::Output {
        self.checked_add(rhs).expect("month addition overflow")
    }
}

impl Sub<MonthDelta> for Month {
    type Output = Month;

    fn sub(self, rhs: MonthDelta) -> Self::Output {
        self.checked_sub(rhs).expect("month subtraction overflow")
    }
}

impl Sub for Month {
    type Output = MonthDelta;

    fn sub(self, rhs: Self) -> Self::Output {
        MonthDelta::new(self.ord() - rhs.ord())
    }
}
