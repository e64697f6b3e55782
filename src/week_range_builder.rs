use crate::date::Weekday;
use crate::duration::Days;
use crate::error::Error;
use crate::week::Week;
use crate::week_range::WeekRange;

/// Builds a [`WeekRange`] from any two of start, end and duration.
///
/// When all three are given they have to agree. `weeks` is shorthand for a
/// duration of that many weeks. Setting `first_weekday` renumbers the start
/// and end weeks to begin on that weekday.
#[derive(Debug, Default, Clone)]
pub struct WeekRangeBuilder {
    start: Option<Week>,
    end: Option<Week>,
    duration: Option<Days>,
    weeks: Option<i32>,
    first_weekday: Option<Weekday>,
}

impl WeekRangeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, start: Week) -> &mut Self {
        self.start = Some(start);
        self
    }

    pub fn end(&mut self, end: Week) -> &mut Self {
        self.end = Some(end);
        self
    }

    pub fn duration(&mut self, duration: Days) -> &mut Self {
        self.duration = Some(duration);
        self
    }

    pub fn weeks(&mut self, weeks: i32) -> &mut Self {
        self.weeks = Some(weeks);
        self
    }

    pub fn first_weekday(&mut self, first_weekday: Weekday) -> &mut Self {
        self.first_weekday = Some(first_weekday);
        self
    }

    /// # Panics
    ///
    /// Panics where [`checked_build`](Self::checked_build) would return an error.
    pub fn build(&self) -> WeekRange {
        match self.checked_build() {
            Ok(range) => range,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn checked_build(&self) -> Result<WeekRange, Error> {
        let duration = match (self.duration, self.weeks) {
            (Some(_), Some(_)) => {
                return Err(Error::ConflictingDuration {
                    type_name: "WeekRange",
                    unit: "weeks",
                })
            }
            (Some(duration), None) => Some(duration),
            (None, Some(weeks)) => Some(Days::weeks(weeks)),
            (None, None) => None,
        };
        let start = self.start.map(|w| self.renumber(w)).transpose()?;
        let end = self.end.map(|w| self.renumber(w)).transpose()?;

        match (start, end, duration) {
            (Some(start), Some(end), duration) => {
                let range = WeekRange::from_bounds(start, end);
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
                WeekRange::from_start_and_duration(start, duration)
            }
            (None, Some(end), Some(duration)) => WeekRange::from_end_and_duration(end, duration),
            _ => Err(Error::TooFewArguments {
                type_name: "WeekRange",
            }),
        }
    }

    fn renumber(&self, week: Week) -> Result<Week, Error> {
        match self.first_weekday {
            Some(first_weekday) if first_weekday != week.first_weekday() => {
                Week::with_first_weekday(week.iso_year(), week.week_num() as i32, first_weekday)
            }
            _ => Ok(week),
        }
    }
}
