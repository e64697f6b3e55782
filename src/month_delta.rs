use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use num_integer::Integer;

use crate::date::Date;
use crate::error::Error;
use crate::month::Month;

/// A signed number of calendar months.
///
/// The count is kept as years and months that share the same sign, so
/// `-P1Y8M` is `-20` months and never `-2` years plus `4` months. Months have
/// different lengths, so adding a delta to a [`Date`] clamps the day of month,
/// which makes date arithmetic with deltas non-associative:
///
/// ```
/// use calends::{Date, MonthDelta};
///
/// let jan31 = Date::new(2010, 1, 31).unwrap();
/// let one = MonthDelta::new(1);
/// assert_eq!(jan31 + (one + one), Date::new(2010, 3, 31).unwrap());
/// assert_eq!((jan31 + one) + one, Date::new(2010, 3, 28).unwrap());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MonthDelta {
    years: i32,
    months: i32,
}

impl MonthDelta {
    pub const ZERO: MonthDelta = MonthDelta {
        years: 0,
        months: 0,
    };

    /// A delta of `months` months.
    ///
    /// Totals are kept within `-i32::MAX..=i32::MAX` so that every delta can
    /// be negated. `i32::MIN` becomes `-i32::MAX`.
    pub fn new(months: i32) -> Self {
        let months = months.max(-i32::MAX);
        // Split the magnitude so both parts carry the sign of the total.
        let (years, rest) = months.unsigned_abs().div_rem(&12);
        let (years, rest) = (years as i32, rest as i32);
        if months < 0 {
            MonthDelta {
                years: -years,
                months: -rest,
            }
        } else {
            MonthDelta {
                years,
                months: rest,
            }
        }
    }

    /// Total of `years` years and `months` months.
    ///
    /// # Panics
    ///
    /// Panics if the total number of months overflows an `i32`.
    pub fn from_years_months(years: i32, months: i32) -> Self {
        let total = years
            .checked_mul(12)
            .and_then(|m| m.checked_add(months))
            .expect("month delta overflow");
        Self::new(total)
    }

    pub fn from_years(years: i32) -> Self {
        Self::from_years_months(years, 0)
    }

    /// The delta from `start` to `end`.
    pub fn between(start: Month, end: Month) -> Self {
        end - start
    }

    pub fn years(self) -> i32 {
        self.years
    }

    pub fn months(self) -> i32 {
        self.months
    }

    pub fn total_months(self) -> i32 {
        self.years * 12 + self.months
    }

    pub fn is_zero(self) -> bool {
        self.years == 0 && self.months == 0
    }

    pub fn is_negative(self) -> bool {
        self.years < 0 || self.months < 0
    }

    pub fn abs(self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self
        }
    }
}

impl PartialOrd for MonthDelta {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MonthDelta {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_months().cmp(&other.total_months())
    }
}

impl Neg for MonthDelta {
    type Output = Self;

    fn neg(self) -> Self::Output {
        MonthDelta {
            years: -self.years,
            months: -self.months,
        }
    }
}

impl Add for MonthDelta {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let total = self
            .total_months()
            .checked_add(rhs.total_months())
            .expect("month delta overflow");
        Self::new(total)
    }
}

impl Sub for MonthDelta {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl Mul<i32> for MonthDelta {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        let total = self
            .total_months()
            .checked_mul(rhs)
            .expect("month delta overflow");
        Self::new(total)
    }
}

/// Floor division of the total number of months.
impl Div<i32> for MonthDelta {
    type Output = Self;

    fn div(self, rhs: i32) -> Self::Output {
        Self::new(Integer::div_floor(&self.total_months(), &rhs))
    }
}

impl fmt::Display for MonthDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        f.write_str("P")?;
        if self.is_zero() {
            return f.write_str("0M");
        }
        if self.years != 0 {
            write!(f, "{}Y", self.years.unsigned_abs())?;
        }
        if self.months != 0 {
            write!(f, "{}M", self.months.unsigned_abs())?;
        }
        Ok(())
    }
}

impl fmt::Debug for MonthDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.years, self.months) {
            (0, 0) => write!(f, "MonthDelta(0)"),
            (years, 0) => write!(f, "MonthDelta(years={years})"),
            (0, months) => write!(f, "MonthDelta(months={months})"),
            (years, months) => write!(f, "MonthDelta(years={years}, months={months})"),
        }
    }
}

/// Parses `[+-]P[[+-]nY][[+-]nM]`. The outer sign applies to both components,
/// and at least one component must be present.
impl FromStr for MonthDelta {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = || Error::Syntax {
            type_name: "MonthDelta",
            input: s.to_string(),
        };

        let (sign, rest) = parse_optional_sign(s.as_bytes());
        let rest = rest.strip_prefix(b"P").ok_or_else(fail)?;
        let (years, rest) = parse_component(rest, b'Y').ok_or_else(fail)?;
        let (months, rest) = parse_component(rest, b'M').ok_or_else(fail)?;
        if !rest.is_empty() || (years.is_none() && months.is_none()) {
            return Err(fail());
        }

        let total = years
            .unwrap_or(0)
            .checked_mul(12)
            .and_then(|y| y.checked_add(months.unwrap_or(0)))
            .and_then(|t| t.checked_mul(sign))
            .ok_or_else(fail)?;
        Ok(MonthDelta::new(total))
    }
}

fn parse_optional_sign(inp: &[u8]) -> (i32, &[u8]) {
    match inp.split_first() {
        Some((b'-', rest)) => (-1, rest),
        Some((b'+', rest)) => (1, rest),
        _ => (1, inp),
    }
}

/// Parses an optional `[+-]digits` followed by `designator`.
///
/// Returns `Some((None, inp))` without consuming anything when the component
/// is absent, and `None` when the digits do not fit in an `i32`.
fn parse_component(inp: &[u8], designator: u8) -> Option<(Option<i32>, &[u8])> {
    let (sign, rest) = parse_optional_sign(inp);
    let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 || rest.get(digits) != Some(&designator) {
        return Some((None, inp));
    }
    let mut value: i32 = 0;
    for &d in &rest[..digits] {
        value = value.checked_mul(10)?.checked_add(i32::from(d - b'0'))?;
    }
    Some((Some(sign * value), &rest[digits + 1..]))
}

impl Date {
    /// Adds whole months, clamping the day to the length of the target month.
    pub fn checked_add_months(self, delta: MonthDelta) -> Result<Date, Error> {
        let month = Month::for_date(self).checked_add(delta)?;
        let day = self.day().min(month.days());
        Date::new(month.year(), month.month(), day)
    }

    pub fn checked_sub_months(self, delta: MonthDelta) -> Result<Date, Error> {
        self.checked_add_months(-delta)
    }
}

impl Add<MonthDelta> for Date {
    type Output = Date;

    fn add(self, rhs: MonthDelta) -> Self::Output {
        self.checked_add_months(rhs).expect("date addition overflow")
    }
}

impl Sub<MonthDelta> for Date {
    type Output = Date;

    fn sub(self, rhs: MonthDelta) -> Self::Output {
        self.checked_sub_months(rhs)
            .expect("date subtraction overflow")
    }
}
