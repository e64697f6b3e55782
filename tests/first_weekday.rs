//! The default first weekday is process-wide, so everything that changes it
//! runs sequentially inside a single test.

use std::panic;

use calends::{
    first_weekday, override_first_weekday, set_first_weekday, with_first_weekday, Date, DateSpan,
    Week, WeekRange, Weekday,
};

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::new(y, m, d).unwrap()
}

#[test]
fn default_first_weekday() {
    assert_eq!(first_weekday(), Weekday::Monday);
    let monday_week = Week::new(2022, 1).unwrap();
    assert_eq!(monday_week.start_date(), date(2022, 1, 3));
    assert_eq!(format!("{monday_week:?}"), "Week(2022, 1)");
    assert_eq!("2022-W01".parse::<Week>(), Ok(monday_week));

    {
        let _guard = override_first_weekday(Weekday::Sunday);
        assert_eq!(first_weekday(), Weekday::Sunday);
        let sunday_week = Week::new(2022, 1).unwrap();
        assert_eq!(sunday_week.start_date(), date(2022, 1, 2));
        assert_eq!(format!("{sunday_week:?}"), "Week(2022, 1)");
        assert_eq!(format!("{monday_week:?}"), "Week(2022, 1, MONDAY)");
        let range: WeekRange = "2022-W01/2022-W02".parse().unwrap();
        assert_eq!(range.first_weekday(), Weekday::Sunday);
    }
    assert_eq!(first_weekday(), Weekday::Monday);

    let start = with_first_weekday(Weekday::Wednesday, || {
        Week::new(2022, 1).unwrap().start_date()
    });
    // 2022-01-01 is a Saturday, so the Wednesday week holding it is week 1.
    assert_eq!(start, date(2021, 12, 29));
    assert_eq!(first_weekday(), Weekday::Monday);

    let result = panic::catch_unwind(|| {
        with_first_weekday(Weekday::Friday, || {
            assert_eq!(first_weekday(), Weekday::Friday);
            panic!("restored anyway");
        })
    });
    assert!(result.is_err());
    assert_eq!(first_weekday(), Weekday::Monday);

    assert_eq!(set_first_weekday(Weekday::Saturday), Weekday::Monday);
    assert_eq!(Week::new(2022, 1).unwrap().first_weekday(), Weekday::Saturday);
    assert_eq!(set_first_weekday(Weekday::Monday), Weekday::Saturday);
}
