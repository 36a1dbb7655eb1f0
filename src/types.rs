use crate::CalendarError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A calendar quantity that can be queried with [`Date::get`](crate::Date::get)
/// or edited with [`Date::with`](crate::Date::with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    /// Day of the seven-day week, Monday = 1 through Sunday = 7
    #[display(fmt = "day-of-week")]
    DayOfWeek,
    /// Position within a fixed seven-day group counted from the first of the month
    #[display(fmt = "aligned-day-of-week-in-month")]
    AlignedDayOfWeekInMonth,
    /// Position within a fixed seven-day group counted from the first of the year
    #[display(fmt = "aligned-day-of-week-in-year")]
    AlignedDayOfWeekInYear,
    #[display(fmt = "day-of-month")]
    DayOfMonth,
    #[display(fmt = "day-of-year")]
    DayOfYear,
    /// Signed day count from 1970-01-01
    #[display(fmt = "epoch-day")]
    EpochDay,
    /// Seven-day group of the month, starting at 1 on the first of the month
    #[display(fmt = "aligned-week-of-month")]
    AlignedWeekOfMonth,
    /// Seven-day group of the year, starting at 1 on the first of the year
    #[display(fmt = "aligned-week-of-year")]
    AlignedWeekOfYear,
    #[display(fmt = "month-of-year")]
    MonthOfYear,
    /// `year * months_per_year + (month - 1)`
    #[display(fmt = "proleptic-month")]
    ProlepticMonth,
    #[display(fmt = "year-of-era")]
    YearOfEra,
    /// Proleptic year, with year 0 preceding year 1
    #[display(fmt = "year")]
    Year,
    /// 0 before year 1, 1 from year 1 on
    #[display(fmt = "era")]
    Era,
}

impl Field {
    /// Every supported field, in declaration order
    pub const ALL: [Self; 13] = [
        Self::DayOfWeek,
        Self::AlignedDayOfWeekInMonth,
        Self::AlignedDayOfWeekInYear,
        Self::DayOfMonth,
        Self::DayOfYear,
        Self::EpochDay,
        Self::AlignedWeekOfMonth,
        Self::AlignedWeekOfYear,
        Self::MonthOfYear,
        Self::ProlepticMonth,
        Self::YearOfEra,
        Self::Year,
        Self::Era,
    ];
}

impl FromStr for Field {
    type Err = CalendarError;

    /// Parses the kebab-case field name; snake_case and any letter case are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = normalize_name(s);
        Self::ALL
            .into_iter()
            .find(|field| field.to_string() == name)
            .ok_or_else(|| CalendarError::UnsupportedField(s.trim().to_owned()))
    }
}

/// Granularity of [`Date::plus`](crate::Date::plus) and
/// [`Date::until`](crate::Date::until).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[display(fmt = "days")]
    Days,
    #[display(fmt = "weeks")]
    Weeks,
    #[display(fmt = "months")]
    Months,
    #[display(fmt = "years")]
    Years,
    #[display(fmt = "decades")]
    Decades,
    #[display(fmt = "centuries")]
    Centuries,
    #[display(fmt = "millennia")]
    Millennia,
    #[display(fmt = "eras")]
    Eras,
}

impl Unit {
    /// Every supported unit, shortest first
    pub const ALL: [Self; 8] = [
        Self::Days,
        Self::Weeks,
        Self::Months,
        Self::Years,
        Self::Decades,
        Self::Centuries,
        Self::Millennia,
        Self::Eras,
    ];
}

impl FromStr for Unit {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = normalize_name(s);
        Self::ALL
            .into_iter()
            .find(|unit| unit.to_string() == name)
            .ok_or_else(|| CalendarError::UnsupportedUnit(s.trim().to_owned()))
    }
}

fn normalize_name(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace('_', "-")
}

/// The two-era proleptic split at year 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Era {
    /// Proleptic years 0 and below (era value 0)
    #[display(fmt = "BCE")]
    #[serde(rename = "BCE")]
    BeforeCommonEra,
    /// Proleptic years 1 and above (era value 1)
    #[display(fmt = "CE")]
    #[serde(rename = "CE")]
    CommonEra,
}

impl Era {
    /// Returns the era a proleptic year belongs to
    pub const fn of_year(year: i64) -> Self {
        if year >= 1 {
            Self::CommonEra
        } else {
            Self::BeforeCommonEra
        }
    }

    /// Returns the numeric era value, 0 or 1
    pub const fn value(self) -> i64 {
        match self {
            Self::BeforeCommonEra => 0,
            Self::CommonEra => 1,
        }
    }

    /// Converts a numeric era value back into an `Era`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidFieldValue` for anything but 0 or 1.
    pub fn from_value(value: i64) -> Result<Self, CalendarError> {
        match value {
            0 => Ok(Self::BeforeCommonEra),
            1 => Ok(Self::CommonEra),
            _ => Err(CalendarError::InvalidFieldValue {
                field: Field::Era,
                value,
                min: 0,
                max: 1,
            }),
        }
    }
}

/// Inclusive numeric domain of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display(fmt = "{min}..={max}")]
pub struct ValueRange {
    min: i64,
    max: i64,
}

impl ValueRange {
    pub(crate) const fn new(min: i64, max: i64) -> Self {
        debug_assert!(min <= max);
        Self { min, max }
    }

    /// Smallest valid value
    #[inline]
    pub const fn min(self) -> i64 {
        self.min
    }

    /// Largest valid value
    #[inline]
    pub const fn max(self) -> i64 {
        self.max
    }

    pub const fn contains(self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns `value` unchanged if it is in range
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidFieldValue` naming `field` otherwise.
    pub fn check(self, field: Field, value: i64) -> Result<i64, CalendarError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(CalendarError::InvalidFieldValue {
                field,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

impl From<ValueRange> for (i64, i64) {
    fn from(range: ValueRange) -> Self {
        (range.min, range.max)
    }
}
