use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::date::{Date, Weekday, MAX_YEAR, MIN_YEAR};
use crate::date_range::DateSpan;
use crate::duration::Days;
use crate::error::Error;
use crate::iso8601::first_weekday;
use crate::iso8601::week_date::{week_start_day_number, weeks_count, year_week_number};
use crate::strtime::{self, Fields};

const WEEK: Days = Days::weeks(1);

/// A numbered week of a week-numbering year.
///
/// Week 1 is the week containing January 4. Weeks start on the first weekday
/// given at construction, which defaults to [`first_weekday()`](crate::first_weekday).
///
/// Weeks compare, order and hash by their first day. Two weeks with the same
/// number but different first weekdays cover different dates and are not
/// equal.
#[derive(Clone, Copy)]
pub struct Week {
    iso_year: i32,
    week_num: u8,
    start: Date,
}

impl Week {
    pub const DEFAULT_FORMAT: &'static str = "%G-W%V";

    /// Week `week_num` of `iso_year`, starting on the default first weekday.
    pub fn new(iso_year: i32, week_num: i32) -> Result<Self, Error> {
        Self::with_first_weekday(iso_year, week_num, first_weekday())
    }

    /// # Errors
    ///
    /// Returns an error if `iso_year` is outside 1..=9999, if `week_num` is
    /// outside 1..=53 or is 53 in a year with 52 weeks, or if the week would
    /// extend past the supported dates.
    pub fn with_first_weekday(
        iso_year: i32,
        week_num: i32,
        first_weekday: Weekday,
    ) -> Result<Self, Error> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&iso_year) {
            return Err(Error::YearOutOfRange { year: iso_year });
        }
        if !(1..=53).contains(&week_num) {
            return Err(Error::InvalidWeekNum { week_num });
        }
        let weeks = weeks_count(iso_year, first_weekday);
        if week_num > weeks as i32 {
            return Err(Error::TooFewWeeks { iso_year, weeks });
        }
        let week_num = week_num as u8;
        let start = week_start_day_number(iso_year, week_num, first_weekday);
        // The day after the week has to be representable too.
        Date::from_day_number(start + 7)?;
        Ok(Week {
            iso_year,
            week_num,
            start: Date::from_day_number(start)?,
        })
    }

    /// The week containing `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if that week starts before 0001-01-01 or the day after
    /// it is past 9999-12-31. Near 0001-01-01 this depends on the first
    /// weekday: only Monday weeks include that date. The last week that fits
    /// ends on or before 9999-12-30, so 9999-12-31 has no week at all.
    pub fn for_date(date: Date, first_weekday: Weekday) -> Result<Self, Error> {
        let (iso_year, week_num) = year_week_number(date, first_weekday);
        Self::with_first_weekday(iso_year, week_num as i32, first_weekday)
    }

    /// The week whose first day is `date`.
    pub fn starting_at(date: Date) -> Result<Self, Error> {
        Self::for_date(date, date.weekday())
    }

    /// Like [`Week::starting_at`], for a `start` already known to begin a
    /// representable week.
    pub(crate) fn starting_at_unchecked(start: Date) -> Self {
        let (iso_year, week_num) = year_week_number(start, start.weekday());
        Week {
            iso_year,
            week_num,
            start,
        }
    }

    pub fn iso_year(self) -> i32 {
        self.iso_year
    }

    pub fn week_num(self) -> u8 {
        self.week_num
    }

    pub fn first_weekday(self) -> Weekday {
        self.start.weekday()
    }

    pub fn last_date(self) -> Date {
        self.start + Days::new(6)
    }

    /// The date in this week that falls on `weekday`.
    pub fn get(self, weekday: Weekday) -> Date {
        self.start + Days::new(weekday.days_since(self.first_weekday()) as i32)
    }

    /// Day number of the first day. See [`Date::day_number`].
    pub fn to_ordinal(self) -> i32 {
        self.start.day_number()
    }

    /// The week starting on the date with day number `ordinal`.
    pub fn from_ordinal(ordinal: i32) -> Result<Self, Error> {
        Self::starting_at(Date::from_day_number(ordinal)?)
    }

    /// The week containing the date `days` after this week's first day,
    /// keeping the first weekday.
    pub fn checked_add(self, days: Days) -> Result<Self, Error> {
        Self::for_date(self.start.checked_add(days)?, self.first_weekday())
    }

    pub fn checked_sub(self, days: Days) -> Result<Self, Error> {
        self.checked_add(-days)
    }

    pub fn format(self, pattern: &str) -> Result<String, Error> {
        strtime::format(pattern, &self.fields())
    }

    /// Parses a week written according to `pattern`.
    ///
    /// The pattern either names the week directly (`%G` and `%V`) or gives a
    /// date (`%Y`, `%m`, `%d`), in which case the week containing it is used.
    pub fn parse(text: &str, pattern: &str, first_weekday: Weekday) -> Result<Self, Error> {
        let parsed = strtime::parse("Week", pattern, text)?;
        if let Some((iso_year, week_num)) = parsed.iso_week() {
            return Self::with_first_weekday(iso_year, week_num as i32, first_weekday);
        }
        match parsed.date() {
            Some(date) => Self::for_date(date, first_weekday),
            None => Err(Error::parse("Week", text)),
        }
    }

    /// Parses the canonical `YYYY-Www` form.
    pub fn from_str_with_first_weekday(s: &str, first_weekday: Weekday) -> Result<Self, Error> {
        let fail = || Error::parse("Week", s);
        let (year, week) = s.split_once("-W").ok_or_else(fail)?;
        let number = |text: &str| -> Result<i32, Error> {
            if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
                return Err(fail());
            }
            text.parse().map_err(|_| fail())
        };
        Self::with_first_weekday(number(year)?, number(week)?, first_weekday)
    }

    fn fields(self) -> Fields {
        Fields {
            date: self.start,
            iso_year: self.iso_year,
            iso_week: self.week_num,
        }
    }
}

impl DateSpan for Week {
    fn start_date(&self) -> Date {
        self.start
    }

    fn end_date(&self) -> Date {
        Date::from_day_number_unchecked(self.start.day_number() + 7)
    }

    fn total_days(&self) -> Days {
        WEEK
    }

    fn is_empty(&self) -> bool {
        false
    }
}

impl PartialEq for Week {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
    }
}

impl Eq for Week {}

impl Hash for Week {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
    }
}

impl PartialOrd for Week {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Week {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start.cmp(&other.start)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-W{:02}", self.iso_year, self.week_num)
    }
}

/// Shows the first weekday only when it differs from the current default.
impl fmt::Debug for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Week({}, {}", self.iso_year, self.week_num)?;
        let weekday = self.first_weekday();
        if weekday != first_weekday() {
            write!(f, ", {}", weekday.name())?;
        }
        f.write_str(")")
    }
}

impl FromStr for Week {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_with_first_weekday(s, first_weekday())
    }
}

impl TryFrom<(i32, i32)> for Week {
    type Error = Error;

    fn try_from((iso_year, week_num): (i32, i32)) -> Result<Self, Self::Error> {
        Week::new(iso_year, week_num)
    }
}

impl TryFrom<(i32, i32, Weekday)> for Week {
    type Error = Error;

    fn try_from(
        (iso_year, week_num, first_weekday): (i32, i32, Weekday),
    ) -> Result<Self, Self::Error> {
        Week::with_first_weekday(iso_year, week_num, first_weekday)
    }
}

impl TryFrom<&str> for Week {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl IntoIterator for Week {
    type Item = Date;
    type IntoIter = crate::date_range::DateIter;

    fn into_iter(self) -> Self::IntoIter {
        self.dates()
    }
}

impl Add<Days> for Week {
    type Output = Week;

    fn add(self, rhs: Days) -> Self::Output {
        self.checked_add(rhs).expect("week addition overflow")
    }
}

impl Sub<Days> for Week {
    type Output = Week;

    fn sub(self, rhs: Days) -> Self::Output {
        self.checked_sub(rhs).expect("week subtraction overflow")
    }
}

/// Days between the first days of the two weeks.
impl Sub for Week {
    type Output = Days;

    fn sub(self, rhs: Self) -> Self::Output {
        self.start - rhs.start
    }
}
