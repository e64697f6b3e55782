//! Conversion between day numbers (days since 1970-01-01) and proleptic
//! Gregorian dates.
//!
//! Dates are placed in years that start on March 1, so a leap day is always
//! the last day of its year. Those years are grouped into 400-year eras
//! anchored at 2000-03-01. Each era holds four centuries of 36524 days, except
//! that the last one ends with an extra leap day. The same goes for the
//! quadrennia of a century and the years of a quadrennium. `clamped_div_rem`
//! keeps that extra day in the remainder instead of starting a new period.

use num_integer::Integer;

use crate::div_rem::ClampedDivRem;

const ERA_DAYS: i32 = 146_097;
const CENTURY_DAYS: u32 = 36_524;
const QUADRENNIUM_DAYS: u16 = 1_461;
const YEAR_DAYS: u16 = 365;

// 2000-03-01, the start of an era.
const ERA_ANCHOR_YEAR: i32 = 2000;
const ERA_ANCHOR_DAY: i32 = 11_017;

// Day of the March-based year on which each month starts, March first.
const MONTH_STARTS: [u16; 12] = [0, 31, 61, 92, 122, 153, 184, 214, 245, 275, 306, 337];

/// Day number of `year-month-day`. `month` and `day` must already be valid.
pub(crate) fn ymd_to_day(year: i32, month: u8, day: u8) -> i32 {
    debug_assert!((1..=12).contains(&month));
    debug_assert!((1..=31).contains(&day));

    // January and February close the previous March-based year.
    let (year, month_index) = if month < 3 {
        (year - 1, month + 9)
    } else {
        (year, month - 3)
    };
    let (era, year_of_era) = (year - ERA_ANCHOR_YEAR).div_mod_floor(&400);
    // Leap days of the years before `year_of_era`. No century year except the
    // era's last is a leap year.
    let leap_days = year_of_era / 4 - year_of_era / 100;
    let day_of_year = i32::from(MONTH_STARTS[usize::from(month_index)]) + i32::from(day) - 1;

    ERA_ANCHOR_DAY + era * ERA_DAYS + 365 * year_of_era + leap_days + day_of_year
}

/// Year, month and day of day number `day`.
pub(crate) fn day_to_ymd(day: i32) -> (i32, u8, u8) {
    let (era, day_of_era) = (day - ERA_ANCHOR_DAY).div_mod_floor(&ERA_DAYS);
    let (century, day_of_century) = (day_of_era as u32).clamped_div_rem(CENTURY_DAYS, 3_u8);
    // A century's last quadrennium may be a day short but never long.
    let (quadrennium, day_of_quadrennium) = (day_of_century as u16).div_rem(&QUADRENNIUM_DAYS);
    let (year_of_quadrennium, day_of_year) =
        day_of_quadrennium.clamped_div_rem(YEAR_DAYS, 3_u8);

    let year = ERA_ANCHOR_YEAR
        + 400 * era
        + 100 * i32::from(century)
        + 4 * i32::from(quadrennium)
        + i32::from(year_of_quadrennium);
    let month_index = MONTH_STARTS.partition_point(|&start| start <= day_of_year) - 1;
    let day = (day_of_year - MONTH_STARTS[month_index]) as u8 + 1;
    let month_index = month_index as u8;
    if month_index < 10 {
        (year, month_index + 3, day)
    } else {
        (year + 1, month_index - 9, day)
    }
}
