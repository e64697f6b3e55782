//! End-to-end checks of the public API with explicit first weekdays.

use calends::iso8601::{weeks_count, year_week_number};
use calends::{
    Date, DateSpan, Days, Error, ErrorKind, Month, MonthDelta, MonthRange, Week, WeekRange,
    Weekday,
};

const MON: Weekday = Weekday::Monday;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::new(y, m, d).unwrap()
}

fn month(y: i32, m: i32) -> Month {
    Month::new(y, m).unwrap()
}

fn week(iso_year: i32, week_num: i32) -> Week {
    Week::with_first_weekday(iso_year, week_num, MON).unwrap()
}

#[test]
fn month_crosses_year() {
    assert_eq!(month(2022, 12) + MonthDelta::new(1), month(2023, 1));
    assert_eq!(month(2023, 1) - month(2022, 12), MonthDelta::new(1));
}

#[test]
fn iso_week_start_dates() {
    assert_eq!(week(2015, 1).start_date(), date(2014, 12, 29));
    assert_eq!(week(2015, 53).start_date(), date(2015, 12, 28));
    assert_eq!(week(2016, 1).start_date(), date(2016, 1, 4));
    assert_eq!(
        Week::with_first_weekday(2016, 53, MON),
        Err(Error::TooFewWeeks {
            iso_year: 2016,
            weeks: 52
        })
    );
}

#[test]
fn month_delta_text() {
    assert_eq!("P1Y8M".parse::<MonthDelta>(), Ok(MonthDelta::new(20)));
    assert_eq!(MonthDelta::new(-20).to_string(), "-P1Y8M");
    assert_eq!("-P-1Y".parse::<MonthDelta>(), Ok(MonthDelta::new(12)));
    assert_eq!(
        "P".parse::<MonthDelta>().unwrap_err().kind(),
        ErrorKind::Format
    );
}

#[test]
fn month_addition_clamps_and_does_not_associate() {
    let one = MonthDelta::new(1);
    assert_eq!(date(1999, 1, 31) + one, date(1999, 2, 28));
    assert_eq!(date(2010, 1, 31) + (one + one), date(2010, 3, 31));
    assert_eq!((date(2010, 1, 31) + one) + one, date(2010, 3, 28));
}

#[test]
fn empty_ranges_compare_equal() {
    assert_eq!(
        WeekRange::from_bounds(week(2000, 1), week(2000, 1)),
        WeekRange::from_bounds(week(2004, 30), week(2004, 30))
    );
    assert_eq!(
        MonthRange::from_bounds(month(2000, 1), month(2000, 1)),
        MonthRange::from_bounds(month(2004, 6), month(2003, 1))
    );
}

#[test]
fn iso_year_lengths() {
    assert_eq!(
        WeekRange::for_iso_year(1998, MON).unwrap().total_days(),
        Days::new(371)
    );
    assert_eq!(
        WeekRange::for_iso_year(1997, MON).unwrap().total_days(),
        Days::new(364)
    );
}

#[test]
fn weeks_partition_each_iso_year() {
    for first_weekday in Weekday::ALL {
        for year in [1900, 1999, 2000, 2004, 2021, 2100] {
            let weeks = weeks_count(year, first_weekday);
            let range = WeekRange::for_iso_year(year, first_weekday).unwrap();
            assert_eq!(range.total_days(), Days::weeks(i32::from(weeks)));
            let mut expected = (year, 1);
            for d in range.dates() {
                let (iso_year, week_num) = year_week_number(d, first_weekday);
                assert_eq!(iso_year, year);
                assert!(week_num == expected.1 || week_num == expected.1 + 1);
                expected = (iso_year, week_num);
            }
            assert_eq!(expected.1, weeks);
        }
    }
}

#[test]
fn range_round_trips() {
    let months = MonthRange::quarter(2023, 4).unwrap();
    assert_eq!(months.to_string().parse::<MonthRange>(), Ok(months));
    let text = months.format("%b %Y:–").unwrap();
    assert_eq!(text, "Oct 2023–Jan 2024");
    assert_eq!(MonthRange::parse(&text, "%b %Y:–"), Ok(months));

    let weeks = WeekRange::for_iso_year(2020, MON).unwrap();
    assert_eq!(
        WeekRange::parse(&weeks.to_string(), WeekRange::DEFAULT_FORMAT, MON),
        Ok(weeks)
    );
}

#[test]
fn containment_fails_soft() {
    let year = MonthRange::year(2022).unwrap();
    assert!(year.contains((2022, 5)));
    assert!(!year.contains((2022, 13)));
    assert!(!year.contains("not a month"));
    assert!(year.contains("2022-12"));
    assert!(year.contains_date(date(2022, 12, 31)));
    assert!(!year.contains_date(date(2023, 1, 1)));
}
