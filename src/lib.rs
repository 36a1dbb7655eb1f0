//! Calendar date arithmetic over several calendar systems.
//!
//! A [`Date`] is a (year, month, day) triple tagged with the [`Chronology`]
//! it belongs to. Queries, field edits and unit arithmetic behave the same
//! way for every chronology; only the calendar-specific facts differ.
//!
//! ```
//! use multical::{Chronology, Field, Unit};
//!
//! let date = Chronology::Uniform30.date_from_fields(2020, 2, 30)?;
//! let next = date.plus(1, Unit::Days)?;
//! assert_eq!((next.month(), next.day_of_month()), (3, 1));
//! assert_eq!(next.get(Field::DayOfYear), 61);
//! # Ok::<(), multical::CalendarError>(())
//! ```

mod arithmetic;
mod chronology;
mod consts;
mod error;
mod period;
mod prelude;
mod types;

pub use chronology::Chronology;
pub use consts::*;
pub use error::CalendarError;
pub use period::Period;
pub use types::{Era, Field, Unit, ValueRange};

use consts::PACKED_MONTH_SHIFT;
use num_integer::Integer;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A date in one of the supported chronologies.
///
/// Dates are immutable values; every edit or arithmetic operation returns a
/// new `Date`. Each instance is a valid date of its chronology.
///
/// Equality and ordering consider the chronology. Two dates of different
/// chronologies are never equal and have no ordering, even when they fall
/// on the same epoch day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DateFields", into = "DateFields")]
pub struct Date {
    chronology: Chronology,
    year: i64,
    month: u8,
    day: u8,
}

/// Serialized shape of a [`Date`]
#[derive(Serialize, Deserialize)]
struct DateFields {
    chronology: Chronology,
    year: i64,
    month: i64,
    day: i64,
}

impl Date {
    /// Callers guarantee the triple is a valid date of `chronology`.
    pub(crate) const fn new_unchecked(chronology: Chronology, year: i64, month: u8, day: u8) -> Self {
        Self {
            chronology,
            year,
            month,
            day,
        }
    }

    pub const fn chronology(&self) -> Chronology {
        self.chronology
    }

    /// Proleptic year; year 0 precedes year 1
    pub const fn year(&self) -> i64 {
        self.year
    }

    /// Month of year, 1-based
    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day_of_month(&self) -> u8 {
        self.day
    }

    pub fn day_of_year(&self) -> u16 {
        self.chronology.days_before_month(self.year, self.month) + u16::from(self.day)
    }

    /// ISO day of week, Monday = 1 through Sunday = 7.
    ///
    /// Every chronology shares the same continuous seven-day cycle over epoch days.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn day_of_week(&self) -> u8 {
        ((self.to_epoch_day() + 3).mod_floor(&DAYS_PER_WEEK) + 1) as u8
    }

    pub const fn aligned_day_of_week_in_month(&self) -> u8 {
        (self.day - 1) % 7 + 1
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn aligned_day_of_week_in_year(&self) -> u8 {
        ((self.day_of_year() - 1) % 7 + 1) as u8
    }

    pub const fn aligned_week_of_month(&self) -> u8 {
        (self.day - 1) / 7 + 1
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn aligned_week_of_year(&self) -> u8 {
        ((self.day_of_year() - 1) / 7 + 1) as u8
    }

    /// Months since year 0, `year * months_per_year + (month - 1)`
    pub const fn proleptic_month(&self) -> i64 {
        self.year * self.chronology.months_per_year() as i64 + self.month as i64 - 1
    }

    /// Year counted within the era; year 0 is 1 BCE
    pub const fn year_of_era(&self) -> i64 {
        if self.year >= 1 {
            self.year
        } else {
            1 - self.year
        }
    }

    pub const fn era(&self) -> Era {
        Era::of_year(self.year)
    }

    /// Signed day count from 1970-01-01
    pub fn to_epoch_day(&self) -> i64 {
        self.chronology.to_epoch_day(self.year, self.month, self.day)
    }

    pub fn is_leap_year(&self) -> bool {
        self.chronology.is_leap_year(self.year)
    }

    pub fn length_of_month(&self) -> u8 {
        self.chronology.days_in_month(self.year, self.month)
    }

    pub fn length_of_year(&self) -> u16 {
        self.chronology.length_of_year(self.year)
    }

    pub const fn months_per_year(&self) -> u8 {
        self.chronology.months_per_year()
    }

    /// Returns the value of `field` for this date
    pub fn get(&self, field: Field) -> i64 {
        match field {
            Field::DayOfWeek => i64::from(self.day_of_week()),
            Field::AlignedDayOfWeekInMonth => i64::from(self.aligned_day_of_week_in_month()),
            Field::AlignedDayOfWeekInYear => i64::from(self.aligned_day_of_week_in_year()),
            Field::DayOfMonth => i64::from(self.day),
            Field::DayOfYear => i64::from(self.day_of_year()),
            Field::EpochDay => self.to_epoch_day(),
            Field::AlignedWeekOfMonth => i64::from(self.aligned_week_of_month()),
            Field::AlignedWeekOfYear => i64::from(self.aligned_week_of_year()),
            Field::MonthOfYear => i64::from(self.month),
            Field::ProlepticMonth => self.proleptic_month(),
            Field::YearOfEra => self.year_of_era(),
            Field::Year => self.year,
            Field::Era => self.era().value(),
        }
    }

    /// Returns the range `field` can take on for this date.
    ///
    /// Day of month, day of year and aligned week of month are narrowed to
    /// this date's month and year; every other field spans the chronology.
    pub fn range(&self, field: Field) -> ValueRange {
        match field {
            Field::DayOfMonth => ValueRange::new(1, i64::from(self.length_of_month())),
            Field::DayOfYear => ValueRange::new(1, i64::from(self.length_of_year())),
            Field::AlignedWeekOfMonth => ValueRange::new(
                1,
                Integer::div_ceil(&i64::from(self.length_of_month()), &DAYS_PER_WEEK),
            ),
            _ => self.chronology.valid_range(field),
        }
    }

    /// Packs (proleptic month, day of month) so that differences order like dates.
    pub(crate) const fn packed_month_day(&self) -> i64 {
        self.proleptic_month() * PACKED_MONTH_SHIFT + self.day as i64
    }
}

impl Hash for Date {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chronology.hash(state);
        ((self.year << 11) + (i64::from(self.month) << 6) + i64::from(self.day)).hash(state);
    }
}

impl PartialOrd for Date {
    /// Orders dates of the same chronology by year, month, then day.
    /// Returns `None` across chronologies.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.chronology != other.chronology {
            return None;
        }
        Some(
            (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day)),
        )
    }
}

impl fmt::Display for Date {
    /// Formats as `<chronology> <era> <year-of-era>-<MM>-<DD>`, e.g. `iso8601 CE 2020-01-31`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}-{:02}-{:02}",
            self.chronology,
            self.era(),
            self.year_of_era(),
            self.month,
            self.day
        )
    }
}

impl TryFrom<DateFields> for Date {
    type Error = CalendarError;

    /// Rejects fields that would need clamping, so a deserialized date is
    /// exactly the date that was written.
    fn try_from(fields: DateFields) -> Result<Self, Self::Error> {
        let date = fields
            .chronology
            .date_from_fields(fields.year, fields.month, fields.day)?;
        if i64::from(date.day) != fields.day {
            return Err(CalendarError::InvalidFieldValue {
                field: Field::DayOfMonth,
                value: fields.day,
                min: 1,
                max: i64::from(date.length_of_month()),
            });
        }
        Ok(date)
    }
}

impl From<Date> for DateFields {
    fn from(date: Date) -> Self {
        Self {
            chronology: date.chronology,
            year: date.year,
            month: i64::from(date.month),
            day: i64::from(date.day),
        }
    }
}
