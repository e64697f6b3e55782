//! Calendar arithmetic: leap years, month lengths and week numbering.

pub use first_weekday::{
    first_weekday, override_first_weekday, set_first_weekday, with_first_weekday,
    FirstWeekdayGuard,
};
pub use util::{days_in_month, is_leap};
pub use week_date::{first_date_with_weekday, first_week_offset, weeks_count, year_week_number};

mod first_weekday;
pub(crate) mod util;
pub(crate) mod week_date;
