use crate::error::Error;
use crate::month::Month;
use crate::month_delta::MonthDelta;
use crate::month_range::MonthRange;

/// Builds a [`MonthRange`] from any two of start, end and duration.
///
/// When all three are given they have to agree. `months` is shorthand for a
/// duration of that many months.
///
/// ```
/// use calends::{Month, MonthRange};
///
/// let range = MonthRange::builder()
///     .start(Month::new(2022, 11).unwrap())
///     .months(3)
///     .checked_build()
///     .unwrap();
/// assert_eq!(range.to_string(), "2022-11/2023-02");
/// ```
#[derive(Debug, Default, Clone)]
pub struct MonthRangeBuilder {
    start: Option<Month>,
    end: Option<Month>,
    duration: Option<MonthDelta>,
    months: Option<i32>,
}

impl MonthRangeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, start: Month) -> &mut Self {
        self.start = Some(start);
        self
    }

    pub fn end(&mut self, end: Month) -> &mut Self {
        self.end = Some(end);
        self
    }

    pub fn duration(&mut self, duration: MonthDelta) -> &mut Self {
        self.duration = Some(duration);
        self
    }

    pub fn months(&mut self, months: i32) -> &mut Self {
        self.months = Some(months);
        self
    }

    /// # Panics
    ///
    /// Panics where [`checked_build`](Self::checked_build) would return an error.
    pub fn build(&self) -> MonthRange {
        match self.checked_build() {
            Ok(range) => range,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn checked_build(&self) -> Result<MonthRange, Error> {
        let duration = match (self.duration, self.months) {
            (Some(_), Some(_)) => {
                return Err(Error::ConflictingDuration {
                    type_name: "MonthRange",
                    unit: "months",
                })
            }
            (Some(duration), None) => Some(duration),
            (None, Some(months)) => Some(MonthDelta::new(months)),
            (None, None) => None,
        };

        match (self.start, self.end, duration) {
            (Some(start), Some(end), duration) => {
                let range = MonthRange::from_bounds(start, end);
                match duration {
                    Some(duration) if duration != range.duration() => {
                        Err(Error::DurationMismatch {
                            expected: range.duration().to_string(),
                            got: duration.to_string(),
                        })
                    }
                    _ => Ok(range),
                }
            }
            (Some(start), None, Some(duration)) => {
                MonthRange::from_start_and_duration(start, duration)
            }
            (None, Some(end), Some(duration)) => MonthRange::from_end_and_duration(end, duration),
            _ => Err(Error::TooFewArguments {
                type_name: "MonthRange",
            }),
        }
    }
}
