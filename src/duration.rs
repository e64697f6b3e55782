use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_integer::Integer;

/// A signed number of calendar days.
///
/// Unlike [`MonthDelta`](crate::MonthDelta), every unit has the same length, so
/// day counts add associatively.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub struct Days {
    days: i32,
}

impl Days {
    pub const ZERO: Days = Days { days: 0 };

    pub const fn new(days: i32) -> Self {
        Self { days }
    }

    pub const fn weeks(weeks: i32) -> Self {
        Self { days: weeks * 7 }
    }

    pub const fn get(self) -> i32 {
        self.days
    }

    /// Whole weeks, rounded towards negative infinity.
    pub fn whole_weeks(self) -> i32 {
        Integer::div_floor(&self.days, &7)
    }

    pub const fn is_negative(self) -> bool {
        self.days < 0
    }

    pub const fn is_zero(self) -> bool {
        self.days == 0
    }
}

impl fmt::Display for Days {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days.abs() == 1 {
            write!(f, "{} day", self.days)
        } else {
            write!(f, "{} days", self.days)
        }
    }
}

impl Add for Days {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.days + rhs.days)
    }
}

impl Sub for Days {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.days - rhs.days)
    }
}

impl Neg for Days {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.days)
    }
}

impl Mul<i32> for Days {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        Self::new(self.days * rhs)
    }
}
