//! Half-open date intervals.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use crate::date::Date;
use crate::duration::Days;

/// The dates from `start` (inclusive) to `end` (exclusive).
///
/// The bounds are kept as given, even when `start` comes after `end`. Such an
/// inverted range is empty, and every empty range is equal to every other.
#[derive(Clone, Copy)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    pub fn new(start: Date, end: Date) -> Self {
        DateRange { start, end }
    }

    pub fn start(&self) -> Date {
        self.start
    }

    pub fn end(&self) -> Date {
        self.end
    }

    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date < self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Number of dates in the range; zero when inverted.
    pub fn length_days(&self) -> Days {
        self.span().max(Days::ZERO)
    }

    /// `end - start`, negative when the range is inverted.
    pub fn span(&self) -> Days {
        self.end - self.start
    }

    /// The day before `end`, or `None` for an empty range.
    pub fn last_date(&self) -> Option<Date> {
        if self.is_empty() {
            None
        } else {
            self.end.pred().ok()
        }
    }

    pub fn iter(&self) -> DateIter {
        DateIter::new(self.start.day_number(), self.end.day_number())
    }
}

impl PartialEq for DateRange {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return self.is_empty() && other.is_empty();
        }
        self.start == other.start && self.end == other.end
    }
}

impl Eq for DateRange {}

impl Hash for DateRange {
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

impl fmt::Debug for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DateRange({}, {})", self.start, self.end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start, self.end)
    }
}

impl IntoIterator for DateRange {
    type Item = Date;
    type IntoIter = DateIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = Date;
    type IntoIter = DateIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over consecutive dates.
///
/// Walks day numbers rather than dates, so a bound just past the supported
/// calendar never has to be represented as a [`Date`].
#[derive(Debug, Clone)]
pub struct DateIter {
    next: i32,
    end: i32,
}

impl DateIter {
    pub(crate) fn new(start: i32, end: i32) -> Self {
        DateIter {
            next: start,
            end: end.max(start),
        }
    }
}

impl Iterator for DateIter {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        if self.next >= self.end {
            return None;
        }
        let date = Date::from_day_number_unchecked(self.next);
        self.next += 1;
        Some(date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.end - self.next) as usize;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for DateIter {
    fn next_back(&mut self) -> Option<Date> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        Some(Date::from_day_number_unchecked(self.end))
    }
}

impl ExactSizeIterator for DateIter {}

impl FusedIterator for DateIter {}

/// Anything that covers a contiguous, half-open span of dates.
///
/// Months, weeks and their ranges all implement this, so code that only cares
/// about the covered dates can treat them uniformly.
pub trait DateSpan {
    /// The first date of the span.
    fn start_date(&self) -> Date;

    /// The date right after the span.
    fn end_date(&self) -> Date;

    fn date_range(&self) -> DateRange {
        DateRange::new(self.start_date(), self.end_date())
    }

    fn contains_date(&self, date: Date) -> bool {
        self.date_range().contains(date)
    }

    fn total_days(&self) -> Days {
        self.date_range().length_days()
    }

    fn is_empty(&self) -> bool {
        self.date_range().is_empty()
    }

    fn dates(&self) -> DateIter {
        self.date_range().iter()
    }
}

impl DateSpan for DateRange {
    fn start_date(&self) -> Date {
        self.start
    }

    fn end_date(&self) -> Date {
        self.end
    }
}
