use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::date::{Date, Weekday};
use crate::date_range::DateSpan;
use crate::duration::Days;
use crate::error::Error;
use crate::iso8601::{first_date_with_weekday, first_weekday};
use crate::strtime;
use crate::week::Week;
use crate::week_range_builder::WeekRangeBuilder;

/// The weeks from `start` (inclusive) to `end` (exclusive).
///
/// Like [`DateRange`](crate::DateRange), an inverted range keeps its bounds but
/// is empty, and all empty ranges are equal. Non-empty ranges are equal when
/// their weeks start on the same dates.
#[derive(Clone, Copy)]
pub struct WeekRange {
    start: Week,
    end: Week,
}

impl WeekRange {
    pub const DEFAULT_FORMAT: &'static str = "%G-W%V/";

    pub fn builder() -> WeekRangeBuilder {
        WeekRangeBuilder::new()
    }

    pub fn from_bounds(start: Week, end: Week) -> Self {
        WeekRange { start, end }
    }

    /// The range from `start` to the week containing the day `duration`
    /// after its first day.
    pub fn from_start_and_duration(start: Week, duration: Days) -> Result<Self, Error> {
        Ok(Self::from_bounds(start, start.checked_add(duration)?))
    }

    pub fn from_end_and_duration(end: Week, duration: Days) -> Result<Self, Error> {
        Ok(Self::from_bounds(end.checked_sub(duration)?, end))
    }

    /// All weeks numbered within `iso_year`.
    pub fn for_iso_year(iso_year: i32, first_weekday: Weekday) -> Result<Self, Error> {
        Ok(Self::from_bounds(
            Week::with_first_weekday(iso_year, 1, first_weekday)?,
            Week::with_first_weekday(iso_year + 1, 1, first_weekday)?,
        ))
    }

    /// The weeks starting within calendar year `year`.
    pub fn for_year(year: i32, first_weekday: Weekday) -> Result<Self, Error> {
        Ok(Self::from_bounds(
            Week::starting_at(first_date_with_weekday(year, first_weekday)?)?,
            Week::starting_at(first_date_with_weekday(year + 1, first_weekday)?)?,
        ))
    }

    pub fn start_week(&self) -> Week {
        self.start
    }

    pub fn end_week(&self) -> Week {
        self.end
    }

    pub fn first_weekday(&self) -> Weekday {
        self.start.first_weekday()
    }

    /// The last week in the range, or `None` if it is empty.
    pub fn last_week(&self) -> Option<Week> {
        if self.is_empty() {
            None
        } else {
            Some(Week::starting_at_unchecked(self.end.start_date() - Days::weeks(1)))
        }
    }

    pub fn last_date(&self) -> Option<Date> {
        self.last_week().map(Week::last_date)
    }

    /// Length of the range; zero when inverted.
    pub fn duration(&self) -> Days {
        self.span().max(Days::ZERO)
    }

    /// `end - start`, negative when the range is inverted.
    pub fn span(&self) -> Days {
        self.end - self.start
    }

    /// Number of weeks in the range.
    pub fn len(&self) -> usize {
        self.iter().len()
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn iter(&self) -> WeekIter {
        let start = self.start.to_ordinal();
        WeekIter {
            next: start,
            end: self.end.to_ordinal().max(start),
        }
    }

    /// Whether `week` converts to a week within the range.
    ///
    /// Values that do not convert to a [`Week`] are not contained.
    pub fn contains<W: TryInto<Week>>(&self, week: W) -> bool {
        match week.try_into() {
            Ok(week) => self.start <= week && week < self.end,
            Err(_) => false,
        }
    }

    /// The range of the same span that starts where this one ends.
    ///
    /// Uses the raw span, so an inverted range is followed by another
    /// inverted range of the same size.
    pub fn following(&self) -> Result<Self, Error> {
        Self::from_start_and_duration(self.end, self.span())
    }

    /// The range of the same span that ends where this one starts.
    pub fn preceding(&self) -> Result<Self, Error> {
        Self::from_end_and_duration(self.start, self.span())
    }

    pub fn checked_add(&self, days: Days) -> Result<Self, Error> {
        Ok(Self::from_bounds(
            self.start.checked_add(days)?,
            self.end.checked_add(days)?,
        ))
    }

    pub fn checked_sub(&self, days: Days) -> Result<Self, Error> {
        self.checked_add(-days)
    }

    /// Formats both bounds with a range pattern: a week pattern followed by
    /// either a single separator character or `:` and a separator string.
    pub fn format(&self, pattern: &str) -> Result<String, Error> {
        let (week_pattern, separator) = strtime::split_range_pattern(pattern)?;
        Ok(format!(
            "{}{}{}",
            self.start.format(week_pattern)?,
            separator,
            self.end.format(week_pattern)?
        ))
    }

    pub fn parse(text: &str, pattern: &str, first_weekday: Weekday) -> Result<Self, Error> {
        let (week_pattern, separator) = strtime::split_range_pattern(pattern)?;
        let (start, end) = strtime::split_range_text("WeekRange", text, separator)?;
        Ok(Self::from_bounds(
            Week::parse(start, week_pattern, first_weekday)?,
            Week::parse(end, week_pattern, first_weekday)?,
        ))
    }
}

impl DateSpan for WeekRange {
    fn start_date(&self) -> Date {
        self.start.start_date()
    }

    fn end_date(&self) -> Date {
        self.end.start_date()
    }
}

impl PartialEq for WeekRange {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return self.is_empty() && other.is_empty();
        }
        self.start == other.start && self.end == other.end
    }
}

impl Eq for WeekRange {}

impl Hash for WeekRange {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_empty() {
            state.write_u8(0);
        } else {
            state.write_u8(1);
            self.start.hash(state);
            self.end.hash(state);
        }
    }
}

impl fmt::Display for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start, self.end)
    }
}

impl fmt::Debug for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WeekRange({:?}, {:?})", self.start, self.end)
    }
}

impl FromStr for WeekRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, Self::DEFAULT_FORMAT, first_weekday())
    }
}

impl IntoIterator for WeekRange {
    type Item = Week;
    type IntoIter = WeekIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &WeekRange {
    type Item = Week;
    type IntoIter = WeekIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Add<Days> for WeekRange {
    type Output = WeekRange;

    fn add(self, rhs: Days) -> Self::Output {
        self.checked_add(rhs).expect("week range addition overflow")
    }
}

impl Sub<Days> for WeekRange {
    type Output = WeekRange;

    fn sub(self, rhs: Days) -> Self::Output {
        self.checked_sub(rhs)
            .expect("week range subtraction overflow")
    }
}

/// Iterator over the weeks of a [`WeekRange`].
#[derive(Debug, Clone)]
pub struct WeekIter {
    // Day numbers of the next week's first day and of the end week's first day.
    next: i32,
    end: i32,
}

impl WeekIter {
    fn remaining(&self) -> usize {
        ((self.end - self.next + 6) / 7) as usize
    }
}

impl Iterator for WeekIter {
    type Item = Week;

    fn next(&mut self) -> Option<Week> {
        if self.next >= self.end {
            return None;
        }
        let week = Week::starting_at_unchecked(Date::from_day_number_unchecked(self.next));
        self.next += 7;
        Some(week)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining();
        (len, Some(len))
    }
}

impl DoubleEndedIterator for WeekIter {
    fn next_back(&mut self) -> Option<Week> {
        if self.next >= self.end {
            return None;
        }
        let last = self.next + 7 * (self.remaining() as i32 - 1);
        self.end = last;
        Some(Week::starting_at_unchecked(Date::from_day_number_unchecked(last)))
    }
}

impl ExactSizeIterator for WeekIter {}

impl FusedIterator for WeekIter {}
