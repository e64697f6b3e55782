//! Proleptic Gregorian civil dates and weekdays.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::div_rem::RemFloor;
use crate::duration::Days;
use crate::error::Error;
use crate::day_number::{day_to_ymd, ymd_to_day};
use crate::iso8601::util::days_in_month;

pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

// Day numbers of 0001-01-01 and 9999-12-31, counted from 1970-01-01.
const MIN_DAY: i32 = -719_162;
const MAX_DAY: i32 = 2_932_896;

// 1970-01-01 was a Thursday.
const EPOCH_WEEKDAY: i32 = 3;

/// A day of the week. Numbered from Monday (0) to Sunday (6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

const WEEKDAY_NAMES: [&str; 7] = [
    "MONDAY",
    "TUESDAY",
    "WEDNESDAY",
    "THURSDAY",
    "FRIDAY",
    "SATURDAY",
    "SUNDAY",
];

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn from_index(index: i32) -> Result<Weekday, Error> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Weekday::ALL.get(i).copied())
            .ok_or(Error::InvalidWeekday { weekday: index })
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Upper-case English label, as used in debug representations.
    pub fn name(self) -> &'static str {
        WEEKDAY_NAMES[self as usize]
    }

    /// The weekday `days` days after this one.
    pub fn shifted(self, days: i32) -> Weekday {
        let index = (self as i32 + days).rem_floor(7);
        Weekday::ALL[index as usize]
    }

    /// Days from `other` forward to `self`, in 0..7.
    pub fn days_since(self, other: Weekday) -> u8 {
        (self as i32 - other as i32).rem_floor(7) as u8
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) fn weekday_for_day_number(day: i32) -> Weekday {
    let index = (day + EPOCH_WEEKDAY).rem_floor(7);
    Weekday::ALL[index as usize]
}

/// A date in the proleptic Gregorian calendar, between 0001-01-01 and 9999-12-31.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    // Days since 1970-01-01.
    day: i32,
}

impl Date {
    pub const MIN: Date = Date { day: MIN_DAY };
    pub const MAX: Date = Date { day: MAX_DAY };

    /// Creates a date from its year, month and day.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the year is outside 1..=9999, or the month or day is invalid.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, Error> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::YearOutOfRange { year });
        }
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth {
                month: month as i32,
            });
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::InvalidDay {
                year,
                month,
                day: day as i32,
            });
        }
        Ok(Self::from_valid_ymd(year, month, day))
    }

    pub(crate) fn from_valid_ymd(year: i32, month: u8, day: u8) -> Self {
        Date {
            day: ymd_to_day(year, month, day),
        }
    }

    /// Creates a date from a day number counted from 1970-01-01.
    pub fn from_day_number(day: i32) -> Result<Self, Error> {
        if (MIN_DAY..=MAX_DAY).contains(&day) {
            Ok(Date { day })
        } else {
            Err(Error::DateOutOfRange)
        }
    }

    pub(crate) fn from_day_number_unchecked(day: i32) -> Self {
        debug_assert!((MIN_DAY..=MAX_DAY).contains(&day));
        Date { day }
    }

    /// Days since 1970-01-01.
    pub fn day_number(self) -> i32 {
        self.day
    }

    pub fn ymd(self) -> (i32, u8, u8) {
        day_to_ymd(self.day)
    }

    pub fn year(self) -> i32 {
        self.ymd().0
    }

    pub fn month(self) -> u8 {
        self.ymd().1
    }

    pub fn day(self) -> u8 {
        self.ymd().2
    }

    pub fn weekday(self) -> Weekday {
        weekday_for_day_number(self.day)
    }

    /// Zero-based day of the year (January 1 is 0).
    pub fn day_of_year0(self) -> u16 {
        let jan1 = Date::from_valid_ymd(self.year(), 1, 1);
        (self.day - jan1.day) as u16
    }

    pub fn checked_add(self, days: Days) -> Result<Date, Error> {
        let day = self
            .day
            .checked_add(days.get())
            .ok_or(Error::DateOutOfRange)?;
        Date::from_day_number(day)
    }

    pub fn checked_sub(self, days: Days) -> Result<Date, Error> {
        self.checked_add(-days)
    }

    pub fn succ(self) -> Result<Date, Error> {
        self.checked_add(Days::new(1))
    }

    pub fn pred(self) -> Result<Date, Error> {
        self.checked_sub(Days::new(1))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.ymd();
        write!(f, "{year:04}-{month:02}-{day:02}")
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = || Error::parse("Date", s);
        let mut parts = s.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(fail());
        };
        if y.len() != 4 || m.len() != 2 || d.len() != 2 {
            return Err(fail());
        }
        let digits = |text: &str| -> Result<u32, Error> {
            if text.bytes().all(|b| b.is_ascii_digit()) {
                text.parse().map_err(|_| fail())
            } else {
                Err(fail())
            }
        };
        let (y, m, d) = (digits(y)?, digits(m)?, digits(d)?);
        Date::new(y as i32, m as u8, d as u8)
    }
}

impl Add<Days> for Date {
    type Output = Date;

    fn add(self, rhs: Days) -> Self::Output {
        self.checked_add(rhs).expect("date addition overflow")
    }
}

impl Sub<Days> for Date {
    type Output = Date;

    fn sub(self, rhs: Days) -> Self::Output {
        self.checked_sub(rhs).expect("date subtraction overflow")
    }
}

impl Sub for Date {
    type Output = Days;

    fn sub(self, rhs: Self) -> Self::Output {
        Days::new(self.day - rhs.day)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Date {
    fn arbitrary(g: &mut quickcheck::Gen) -> Date {
        let span = MAX_DAY - MIN_DAY + 1;
        Date {
            day: MIN_DAY + i32::arbitrary(g).rem_euclid(span),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Date>> {
        Box::new(
            self.day
                .shrink()
                .filter_map(|day| Date::from_day_number(day).ok()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::new(y, m, d).unwrap()
    }

    #[test]
    fn new_validates() {
        assert_eq!(date(2000, 2, 29).ymd(), (2000, 2, 29));
        assert_eq!(
            Date::new(2001, 2, 29).unwrap_err(),
            Error::InvalidDay {
                year: 2001,
                month: 2,
                day: 29
            }
        );
        assert_eq!(
            Date::new(2001, 13, 1).unwrap_err(),
            Error::InvalidMonth { month: 13 }
        );
        assert_eq!(
            Date::new(0, 1, 1).unwrap_err(),
            Error::YearOutOfRange { year: 0 }
        );
        assert_eq!(
            Date::new(10_000, 1, 1).unwrap_err(),
            Error::YearOutOfRange { year: 10_000 }
        );
    }

    #[test]
    fn bounds() {
        assert_eq!(Date::MIN, date(1, 1, 1));
        assert_eq!(Date::MAX, date(9999, 12, 31));
        assert_eq!(Date::MAX.succ(), Err(Error::DateOutOfRange));
        assert_eq!(Date::MIN.pred(), Err(Error::DateOutOfRange));
    }

    #[test]
    fn weekdays() {
        assert_eq!(date(1970, 1, 1).weekday(), Weekday::Thursday);
        assert_eq!(date(2001, 1, 1).weekday(), Weekday::Monday);
        assert_eq!(date(2010, 1, 1).weekday(), Weekday::Friday);
        assert_eq!(date(2013, 1, 1).weekday(), Weekday::Tuesday);
        assert_eq!(date(1969, 12, 31).weekday(), Weekday::Wednesday);
        assert_eq!(date(1, 1, 1).weekday(), Weekday::Monday);
        assert_eq!(date(1990, 12, 30).weekday(), Weekday::Sunday);
    }

    #[test]
    fn weekday_helpers() {
        assert_eq!(Weekday::from_index(6), Ok(Weekday::Sunday));
        assert_eq!(
            Weekday::from_index(7),
            Err(Error::InvalidWeekday { weekday: 7 })
        );
        assert_eq!(
            Weekday::from_index(-1),
            Err(Error::InvalidWeekday { weekday: -1 })
        );
        assert_eq!(Weekday::Saturday.shifted(2), Weekday::Monday);
        assert_eq!(Weekday::Monday.shifted(-1), Weekday::Sunday);
        assert_eq!(Weekday::Monday.days_since(Weekday::Sunday), 1);
        assert_eq!(Weekday::Sunday.days_since(Weekday::Monday), 6);
        assert_eq!(Weekday::Sunday.to_string(), "SUNDAY");
    }

    #[test]
    fn arithmetic() {
        assert_eq!(date(2000, 2, 28) + Days::new(1), date(2000, 2, 29));
        assert_eq!(date(2001, 2, 28) + Days::new(1), date(2001, 3, 1));
        assert_eq!(date(2000, 1, 1) - Days::new(1), date(1999, 12, 31));
        assert_eq!(date(2000, 3, 1) - date(2000, 2, 1), Days::new(29));
        assert_eq!(date(1999, 1, 1) - date(2000, 1, 1), Days::new(-365));
    }

    #[test]
    fn day_of_year() {
        assert_eq!(date(2001, 1, 1).day_of_year0(), 0);
        assert_eq!(date(2001, 12, 31).day_of_year0(), 364);
        assert_eq!(date(2004, 12, 31).day_of_year0(), 365);
    }

    #[test]
    fn display_and_parse() {
        assert_eq!(date(476, 3, 9).to_string(), "0476-03-09");
        assert_eq!(format!("{:?}", date(2022, 9, 18)), "2022-09-18");
        assert_eq!("2022-09-18".parse::<Date>(), Ok(date(2022, 9, 18)));
        assert!("2022-9-18".parse::<Date>().is_err());
        assert!("2022-02-30".parse::<Date>().is_err());
        assert!("+022-02-03".parse::<Date>().is_err());
    }

    quickcheck::quickcheck! {
        fn prop_ymd_round_trip(d: Date) -> bool {
            let (year, month, day) = d.ymd();
            Date::new(year, month, day) == Ok(d)
        }

        fn prop_display_then_parse(d: Date) -> bool {
            d.to_string().parse::<Date>() == Ok(d)
        }

        fn prop_succ_advances_weekday(d: Date) -> quickcheck::TestResult {
            let Ok(next) = d.succ() else {
                return quickcheck::TestResult::discard();
            };
            quickcheck::TestResult::from_bool(next.weekday() == d.weekday().shifted(1))
        }
    }
}
