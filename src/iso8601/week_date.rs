//! Week numbering for an arbitrary first weekday.
//!
//! Week 1 of a year is the week containing January 4, which is the same as the
//! week containing the year's first Thursday when weeks start on Monday. With
//! another first weekday the same rule applies to the shifted week.

use num_integer::Integer;

use crate::date::{weekday_for_day_number, Date, Weekday};
use crate::div_rem::RemFloor;
use crate::error::Error;
use crate::day_number::ymd_to_day;
use crate::iso8601::util::is_leap;

/// Day number of January 1 of `year`. Works outside the range of [`Date`].
pub(crate) fn jan1_day_number(year: i32) -> i32 {
    ymd_to_day(year, 1, 1)
}

/// Offset in days, between -3 and 3, from January 1 to the first day of week 1.
pub fn first_week_offset(year: i32, first_weekday: Weekday) -> i32 {
    let jan1 = weekday_for_day_number(jan1_day_number(year));
    3 - (3 + jan1 as i32 - first_weekday as i32).rem_floor(7)
}

/// Number of weeks in the week-numbering year `iso_year`, either 52 or 53.
pub fn weeks_count(iso_year: i32, first_weekday: Weekday) -> u8 {
    let offset = first_week_offset(iso_year, first_weekday);
    let has_leap_week = offset - is_leap(iso_year) as i32 <= -3;
    52 + has_leap_week as u8
}

/// The week-numbering year and week number that `date` belongs to.
///
/// Dates close to January 1 may belong to the last week of the previous year,
/// and dates close to December 31 to the first week of the next.
pub fn year_week_number(date: Date, first_weekday: Weekday) -> (i32, u8) {
    let year = date.year();
    let day_in_year = date.day_of_year0() as i32;
    let week_num =
        1 + Integer::div_floor(&(day_in_year - first_week_offset(year, first_weekday)), &7);

    if week_num < 1 {
        let previous = year - 1;
        return (
            previous,
            (week_num + weeks_count(previous, first_weekday) as i32) as u8,
        );
    }
    let weeks = weeks_count(year, first_weekday) as i32;
    if week_num > weeks {
        return (year + 1, (week_num - weeks) as u8);
    }
    (year, week_num as u8)
}

/// The first date in `year` that falls on `weekday`.
pub fn first_date_with_weekday(year: i32, weekday: Weekday) -> Result<Date, Error> {
    let day = 1 + first_week_offset(year, weekday).rem_floor(7);
    Date::new(year, 1, day as u8)
}

/// Day number of the first day of week `week_num` of `iso_year`. Not validated.
pub(crate) fn week_start_day_number(iso_year: i32, week_num: u8, first_weekday: Weekday) -> i32 {
    jan1_day_number(iso_year)
        + first_week_offset(iso_year, first_weekday)
        + 7 * (week_num as i32 - 1)
}
