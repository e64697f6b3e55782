//! Calendar units and ranges of them: dates, weeks, months, and the spans
//! between them.
//!
//! Weeks are numbered the ISO 8601 way, generalized to any first weekday. The
//! process-wide default first weekday is Monday and can be changed with
//! [`set_first_weekday`] or temporarily with [`override_first_weekday`].
//!
//! ```
//! use calends::{Month, MonthDelta, MonthRange};
//!
//! let q1 = MonthRange::quarter(2023, 1).unwrap();
//! assert_eq!(q1.to_string(), "2023-01/2023-04");
//! assert_eq!(q1.duration(), MonthDelta::new(3));
//! assert!(q1.contains(Month::new(2023, 2).unwrap()));
//! ```

#[macro_use]
mod logging;

mod date;
mod date_range;
mod day_number;
mod div_rem;
mod duration;
mod error;
pub mod iso8601;
mod month;
mod month_delta;
mod month_range;
mod month_range_builder;
mod strtime;
mod week;
mod week_range;
mod week_range_builder;

pub use date::{Date, Weekday, MAX_YEAR, MIN_YEAR};
pub use date_range::{DateIter, DateRange, DateSpan};
pub use duration::Days;
pub use error::{Error, ErrorKind};
pub use iso8601::{
    first_weekday, override_first_weekday, set_first_weekday, with_first_weekday, FirstWeekdayGuard,
};
pub use month::Month;
pub use month_delta::MonthDelta;
pub use month_range::{MonthIter, MonthRange};
pub use month_range_builder::MonthRangeBuilder;
pub use week::Week;
pub use week_range::{WeekIter, WeekRange};
pub use week_range_builder::WeekRangeBuilder;
