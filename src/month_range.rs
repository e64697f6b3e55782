use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::date::Date;
use crate::date_range::DateSpan;
use crate::error::Error;
use crate::month::Month;
use crate::month_delta::MonthDelta;
use crate::month_range_builder::MonthRangeBuilder;
use crate::strtime;

/// The months from `start` (inclusive) to `end` (exclusive).
///
/// Like [`DateRange`](crate::DateRange), an inverted range keeps its bounds but
/// is empty, and all empty ranges are equal.
#[derive(Clone, Copy)]
pub struct MonthRange {
    start: Month,
    end: Month,
}

impl MonthRange {
    pub const DEFAULT_FORMAT: &'static str = "%Y-%m/";

    pub fn builder() -> MonthRangeBuilder {
        MonthRangeBuilder::new()
    }

    pub fn from_bounds(start: Month, end: Month) -> Self {
        MonthRange { start, end }
    }

    pub fn from_start_and_duration(start: Month, duration: MonthDelta) -> Result<Self, Error> {
        Ok(Self::from_bounds(start, start.checked_add(duration)?))
    }

    pub fn from_end_and_duration(end: Month, duration: MonthDelta) -> Result<Self, Error> {
        Ok(Self::from_bounds(end.checked_sub(duration)?, end))
    }

    /// January through December of `year`.
    pub fn year(year: i32) -> Result<Self, Error> {
        Self::from_start_and_duration(Month::new(year, 1)?, MonthDelta::from_years(1))
    }

    /// Quarter `quarter` (1 to 4) of `year`.
    pub fn quarter(year: i32, quarter: i32) -> Result<Self, Error> {
        if !(1..=4).contains(&quarter) {
            return Err(Error::InvalidQuarter { quarter });
        }
        Self::from_start_and_duration(Month::new(year, quarter * 3 - 2)?, MonthDelta::new(3))
    }

    /// Half `half` (1 or 2) of `year`.
    pub fn halfyear(year: i32, half: i32) -> Result<Self, Error> {
        if !(1..=2).contains(&half) {
            return Err(Error::InvalidHalfYear { half });
        }
        Self::from_start_and_duration(Month::new(year, half * 6 - 5)?, MonthDelta::new(6))
    }

    pub fn start_month(&self) -> Month {
        self.start
    }

    pub fn end_month(&self) -> Month {
        self.end
    }

    /// The last month in the range, or `None` if it is empty.
    pub fn last_month(&self) -> Option<Month> {
        if self.is_empty() {
            None
        } else {
            Some(Month::from_ord_unchecked(self.end.ord() - 1))
        }
    }

    pub fn last_date(&self) -> Option<Date> {
        self.last_month().map(Month::last_date)
    }

    /// Length of the range; zero when inverted.
    pub fn duration(&self) -> MonthDelta {
        self.span().max(MonthDelta::ZERO)
    }

    /// `end - start`, negative when the range is inverted.
    pub fn span(&self) -> MonthDelta {
        self.end - self.start
    }

    /// Number of months in the range.
    pub fn len(&self) -> usize {
        self.duration().total_months() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn iter(&self) -> MonthIter {
        MonthIter {
            next: self.start.ord(),
            end: self.end.ord().max(self.start.ord()),
        }
    }

    /// Whether `month` converts to a month within the range.
    ///
    /// Values that do not convert to a [`Month`] are not contained.
    pub fn contains<M: TryInto<Month>>(&self, month: M) -> bool {
        match month.try_into() {
            Ok(month) => self.start <= month && month < self.end,
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

    pub fn checked_add(&self, delta: MonthDelta) -> Result<Self, Error> {
        Ok(Self::from_bounds(
            self.start.checked_add(delta)?,
            self.end.checked_add(delta)?,
        ))
    }

    pub fn checked_sub(&self, delta: MonthDelta) -> Result<Self, Error> {
        self.checked_add(-delta)
    }

    /// Formats both bounds with a range pattern: a month pattern followed by
    /// either a single separator character or `:` and a separator string.
    pub fn format(&self, pattern: &str) -> Result<String, Error> {
        let (month_pattern, separator) = strtime::split_range_pattern(pattern)?;
        Ok(format!(
            "{}{}{}",
            self.start.format(month_pattern)?,
            separator,
            self.end.format(month_pattern)?
        ))
    }

    pub fn parse(text: &str, pattern: &str) -> Result<Self, Error> {
        let (month_pattern, separator) = strtime::split_range_pattern(pattern)?;
        let (start, end) = strtime::split_range_text("MonthRange", text, separator)?;
        Ok(Self::from_bounds(
            Month::parse(start, month_pattern)?,
            Month::parse(end, month_pattern)?,
        ))
    }
}

impl DateSpan for MonthRange {
    fn start_date(&self) -> Date {
        self.start.start_date()
    }

    fn end_date(&self) -> Date {
        self.end.start_date()
    }
}

impl PartialEq for MonthRange {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return self.is_empty() && other.is_empty();
        }
        self.start == other.start && self.end == other.end
    }
}

impl Eq for MonthRange {}

impl Hash for MonthRange {
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

impl fmt::Display for MonthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start, self.end)
    }
}

impl fmt::Debug for MonthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MonthRange({:?}, {:?})", self.start, self.end)
    }
}

impl FromStr for MonthRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, Self::DEFAULT_FORMAT)
    }
}

impl IntoIterator for MonthRange {
    type Item = Month;
    type IntoIter = MonthIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &MonthRange {
    type Item = Month;
    type IntoIter = MonthIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Add<MonthDelta> for MonthRange {
    type Output = MonthRange;

    fn add(self, rhs: MonthDelta) -> Self::Output {
        self.checked_add(rhs).expect("month range addition overflow")
    }
}

impl Sub<MonthDelta> for MonthRange {
    type Output = MonthRange;

    fn sub(self, rhs: MonthDelta) -> Self::Output {
        self.checked_sub(rhs)
            .expect("month range subtraction overflow")
    }
}

/// Iterator over the months of a [`MonthRange`].
#[derive(Debug, Clone)]
pub struct MonthIter {
    next: i32,
    end: i32,
}

impl Iterator for MonthIter {
    type Item = Month;

    fn next(&mut self) -> Option<Month> {
        if self.next >= self.end {
            return None;
        }
        let month = Month::from_ord_unchecked(self.next);
        self.next += 1;
        Some(month)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.end - self.next) as usize;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for MonthIter {
    fn next_back(&mut self) -> Option<Month> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        Some(Month::from_ord_unchecked(self.end))
    }
}

impl ExactSizeIterator for MonthIter {}

impl FusedIterator for MonthIter {}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::duration::Days;

    fn month(y: i32, m: i32) -> Month {
        Month::new(y, m).unwrap()
    }

    fn range(start: (i32, i32), end: (i32, i32)) -> MonthRange {
        MonthRange::from_bounds(month(start.0, start.1), month(end.0, end.1))
    }

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::new(y, m, d).unwrap()
    }

    #[test]
    fn bounds_and_lengths() {
        let r = range((2013, 4), (2014, 10));
        assert_eq!(r.start_date(), date(2013, 4, 1));
        assert_eq!(r.end_date(), date(2014, 10, 1));
        assert_eq!(r.duration(), MonthDelta::new(18));
        assert_eq!(r.len(), 18);
        assert_eq!(r.last_month(), Some(month(2014, 9)));
        assert_eq!(r.last_date(), Some(date(2014, 9, 30)));
        assert_eq!(r.total_days(), Days::new(548));
        assert_eq!(r.dates().count(), 548);
    }

    #[test]
    fn named_constructors() {
        let r = range((2022, 11), (2023, 2));
        assert_eq!(
            MonthRange::from_start_and_duration(month(2022, 11), MonthDelta::new(3)),
            Ok(r)
        );
        assert_eq!(
            MonthRange::from_end_and_duration(month(2023, 2), MonthDelta::new(3)),
            Ok(r)
        );
        let inverted =
            MonthRange::from_start_and_duration(month(2022, 11), MonthDelta::new(-3)).unwrap();
        assert!(inverted.is_empty());
        assert_eq!(inverted.start_month(), month(2022, 11));
        assert_eq!(inverted.end_month(), month(2022, 8));
        assert_eq!(
            MonthRange::from_start_and_duration(month(9999, 11), MonthDelta::new(3)),
            Err(Error::YearOutOfRange { year: 10_000 })
        );
    }

    #[test]
    fn calendar_factories() {
        assert_eq!(MonthRange::year(2022), Ok(range((2022, 1), (2023, 1))));
        assert_eq!(MonthRange::quarter(2022, 1), Ok(range((2022, 1), (2022, 4))));
        assert_eq!(MonthRange::quarter(2022, 4), Ok(range((2022, 10), (2023, 1))));
        assert_eq!(MonthRange::halfyear(2022, 2), Ok(range((2022, 7), (2023, 1))));
        assert_eq!(
            MonthRange::quarter(2022, 5),
            Err(Error::InvalidQuarter { quarter: 5 })
        );
        assert_eq!(
            MonthRange::quarter(2022, 0).unwrap_err().to_string(),
            "quarter must be in 1..4"
        );
        assert_eq!(
            MonthRange::halfyear(2022, 3).unwrap_err().to_string(),
            "half must be 1 or 2"
        );
        assert_eq!(MonthRange::year(2022).unwrap().total_days(), Days::new(365));
        assert!(MonthRange::year(9999).is_err());
    }

    #[test]
    fn iteration() {
        let months: Vec<Month> = range((2021, 11), (2022, 3)).iter().collect();
        assert_eq!(
            months,
            [month(2021, 11), month(2021, 12), month(2022, 1), month(2022, 2)]
        );
        assert_eq!(range((2021, 11), (2022, 3)).into_iter().rev().next(), Some(month(2022, 2)));
        assert_eq!(range((2022, 3), (2021, 11)).iter().count(), 0);
        assert_eq!(range((2022, 3), (2021, 11)).len(), 0);
    }

    #[test]
    fn containment() {
        let r = range((2022, 1), (2022, 4));
        assert!(r.contains(month(2022, 1)));
        assert!(r.contains((2022, 3)));
        assert!(!r.contains((2022, 4)));
        assert!(r.contains("2022-02"));
        assert!(!r.contains("2022-13"));
        assert!(!r.contains("apples"));
        assert!(!r.contains((2022, 30)));
        assert!(r.contains_date(date(2022, 3, 31)));
        assert!(!r.contains_date(date(2022, 4, 1)));
    }

    #[test]
    fn following_and_preceding() {
        let r = range((2022, 1), (2022, 4));
        assert_eq!(r.following(), Ok(range((2022, 4), (2022, 7))));
        assert_eq!(r.preceding(), Ok(range((2021, 10), (2022, 1))));

        let inverted = range((2004, 3), (2004, 1));
        let following = inverted.following().unwrap();
        assert_eq!(following.start_month(), month(2004, 1));
        assert_eq!(following.end_month(), month(2003, 11));
        let preceding = inverted.preceding().unwrap();
        assert_eq!(preceding.start_month(), month(2004, 5));
        assert_eq!(preceding.end_month(), month(2004, 3));
    }

    #[test]
    fn shifting() {
        let r = range((2022, 1), (2022, 4));
        assert_eq!(r + MonthDelta::new(12), range((2023, 1), (2023, 4)));
        assert_eq!(r - MonthDelta::new(1), range((2021, 12), (2022, 3)));
    }

    #[test]
    fn empty_ranges_are_equal() {
        let a = range((2000, 1), (2000, 1));
        let b = range((2004, 10), (2004, 2));
        assert_eq!(a, b);
        assert_ne!(a, range((2000, 1), (2000, 2)));
        let set: HashSet<MonthRange> = [a, b, range((2000, 1), (2000, 2))].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn formatting() {
        let r = range((2013, 4), (2014, 10));
        assert_eq!(r.to_string(), "2013-04/2014-10");
        assert_eq!(format!("{r:?}"), "MonthRange(Month(2013, 4), Month(2014, 10))");
        assert_eq!(r.format("%b %Y:--").unwrap(), "Apr 2013--Oct 2014");
        assert_eq!(r.format("%m/%y|").unwrap(), "04/13|10/14");
        assert!(r.format("%Y-%m:").is_err());
    }

    #[test]
    fn parsing() {
        let r = range((2013, 4), (2014, 10));
        assert_eq!("2013-04/2014-10".parse::<MonthRange>(), Ok(r));
        assert_eq!(MonthRange::parse("Apr 2013--Oct 2014", "%b %Y:--"), Ok(r));
        assert_eq!(MonthRange::parse("04/13|10/14", "%m/%y|"), Ok(r));
        assert_eq!(
            "2013-04".parse::<MonthRange>(),
            Err(Error::parse("MonthRange", "2013-04"))
        );
        assert_eq!(
            "2013-04/2014-13".parse::<MonthRange>(),
            Err(Error::parse("Month", "2014-13"))
        );
    }
}
