//! Calendar systems and the date <-> epoch-day bijection of each.
//!
//! [`Chronology`] is a closed tag. The calendar-specific facts behind each
//! tag (leap test, month lengths, epoch-day conversion) live in a read-only
//! table of per-calendar rule sets built at compile time.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_IN_MONTH_ALL_LEAP, DAYS_IN_MONTH_UNIFORM_30, DAYS_PER_WEEK,
    DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, FIXED_YEAR_EPOCH, GREGORIAN_CYCLE,
    GREGORIAN_CYCLE_DAYS, ISO_MARCH_0000_TO_1970, JANUARY, JULIAN_CYCLE_DAYS,
    JULIAN_MARCH_0000_TO_1970, LEAP_YEAR_CYCLE, MAX_YEAR, MIN_DAY, MIN_YEAR, MONTHS_PER_YEAR,
};
use crate::prelude::*;
use crate::types::ValueRange;
use crate::{CalendarError, Date, Field};
use num_integer::Integer;
use std::str::FromStr;
use tracing::{debug, trace};

/// A calendar system.
///
/// Every variant has twelve months and the same two-era split at year 1;
/// they differ in leap rule, month lengths and how dates map to epoch days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Chronology {
    /// Proleptic Gregorian calendar
    #[default]
    #[display(fmt = "iso8601")]
    Iso,
    /// Proleptic Julian calendar, a leap year every fourth year
    #[display(fmt = "julian")]
    Julian,
    /// 365-day calendar without leap years
    #[display(fmt = "noleap")]
    NoLeap,
    /// 366-day calendar where every year is a leap year
    #[display(fmt = "allleap")]
    AllLeap,
    /// 360-day calendar of twelve 30-day months
    #[display(fmt = "360_day")]
    Uniform30,
}

/// Calendar-specific facts, one implementation per [`Chronology`] variant.
///
/// `month` is always in `1..=12` and `year` in the supported year range;
/// the public API validates before calling in.
trait CalendarRules: Sync {
    fn is_leap_year(&self, year: i64) -> bool;

    fn length_of_month(&self, year: i64, month: u8) -> u8;

    /// Longest length `month` has in any year
    fn max_length_of_month(&self, month: u8) -> u8;

    /// Days in the months preceding `month` of `year`
    fn days_before_month(&self, year: i64, month: u8) -> u16 {
        (JANUARY..month)
            .map(|m| u16::from(self.length_of_month(year, m)))
            .sum()
    }

    fn length_of_year(&self, year: i64) -> u16 {
        self.days_before_month(year, DECEMBER) + u16::from(self.length_of_month(year, DECEMBER))
    }

    /// Longest length any year has
    fn max_length_of_year(&self) -> u16;

    fn to_epoch_day(&self, year: i64, month: u8, day: u8) -> i64;

    fn from_epoch_day(&self, epoch_day: i64) -> (i64, u8, u8);
}

/// Proleptic Gregorian rules
struct IsoRules;

/// Proleptic Julian rules
struct JulianRules;

/// Rules of calendars whose years all have the same length
struct FixedYearRules {
    leap: bool,
    month_lengths: &'static [u8; 13],
}

const YEAR_RANGE: ValueRange = ValueRange::new(MIN_YEAR, MAX_YEAR);

static RULES: [&dyn CalendarRules; 5] = [
    &IsoRules,
    &JulianRules,
    &FixedYearRules {
        leap: false,
        month_lengths: &DAYS_IN_MONTH,
    },
    &FixedYearRules {
        leap: true,
        month_lengths: &DAYS_IN_MONTH_ALL_LEAP,
    },
    &FixedYearRules {
        leap: false,
        month_lengths: &DAYS_IN_MONTH_UNIFORM_30,
    },
];

const fn solar_month_length(month: u8, leap: bool) -> u8 {
    if month == FEBRUARY && leap {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

// The March-based helpers below count years from March 1st so the leap day
// falls at the very end of the (shifted) year and needs no special casing.
// `march_month` is 0 for March through 11 for February.

const fn march_day_of_year(month: u8, day: u8) -> i64 {
    let march_month = (month as i64 + 9) % 12;
    (153 * march_month + 2) / 5 + day as i64 - 1
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn month_day_from_march_day(march_day: i64) -> (u8, u8) {
    let march_month = (5 * march_day + 2) / 153;
    let day = march_day - (153 * march_month + 2) / 5 + 1;
    let month = if march_month < 10 {
        march_month + 3
    } else {
        march_month - 9
    };
    (month as u8, day as u8)
}

impl CalendarRules for IsoRules {
    fn is_leap_year(&self, year: i64) -> bool {
        (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || year % GREGORIAN_CYCLE == 0
    }

    fn length_of_month(&self, year: i64, month: u8) -> u8 {
        solar_month_length(month, self.is_leap_year(year))
    }

    fn max_length_of_month(&self, month: u8) -> u8 {
        solar_month_length(month, true)
    }

    fn max_length_of_year(&self) -> u16 {
        366
    }

    fn to_epoch_day(&self, year: i64, month: u8, day: u8) -> i64 {
        let year = if month <= FEBRUARY { year - 1 } else { year };
        let (cycle, year_of_cycle) = year.div_mod_floor(&GREGORIAN_CYCLE);
        let day_of_cycle = year_of_cycle * 365 + year_of_cycle / 4 - year_of_cycle / 100
            + march_day_of_year(month, day);
        cycle * GREGORIAN_CYCLE_DAYS + day_of_cycle - ISO_MARCH_0000_TO_1970
    }

    fn from_epoch_day(&self, epoch_day: i64) -> (i64, u8, u8) {
        let (cycle, day_of_cycle) =
            (epoch_day + ISO_MARCH_0000_TO_1970).div_mod_floor(&GREGORIAN_CYCLE_DAYS);
        // The last day of each cycle, century and quadrennium is a leap day
        // that would otherwise carry into the next period.
        let year_of_cycle = (day_of_cycle - day_of_cycle / 1460 + day_of_cycle / 36_524
            - day_of_cycle / (GREGORIAN_CYCLE_DAYS - 1))
            / 365;
        let march_day = day_of_cycle - (365 * year_of_cycle + year_of_cycle / 4 - year_of_cycle / 100);
        let (month, day) = month_day_from_march_day(march_day);
        let year = cycle * GREGORIAN_CYCLE + year_of_cycle;
        let year = if month <= FEBRUARY { year + 1 } else { year };
        (year, month, day)
    }
}

impl CalendarRules for JulianRules {
    fn is_leap_year(&self, year: i64) -> bool {
        year % LEAP_YEAR_CYCLE == 0
    }

    fn length_of_month(&self, year: i64, month: u8) -> u8 {
        solar_month_length(month, self.is_leap_year(year))
    }

    fn max_length_of_month(&self, month: u8) -> u8 {
        solar_month_length(month, true)
    }

    fn max_length_of_year(&self) -> u16 {
        366
    }

    fn to_epoch_day(&self, year: i64, month: u8, day: u8) -> i64 {
        let year = if month <= FEBRUARY { year - 1 } else { year };
        let (cycle, year_of_cycle) = year.div_mod_floor(&LEAP_YEAR_CYCLE);
        let day_of_cycle = year_of_cycle * 365 + march_day_of_year(month, day);
        cycle * JULIAN_CYCLE_DAYS + day_of_cycle - JULIAN_MARCH_0000_TO_1970
    }

    fn from_epoch_day(&self, epoch_day: i64) -> (i64, u8, u8) {
        let (cycle, day_of_cycle) =
            (epoch_day + JULIAN_MARCH_0000_TO_1970).div_mod_floor(&JULIAN_CYCLE_DAYS);
        let year_of_cycle = (day_of_cycle - day_of_cycle / (JULIAN_CYCLE_DAYS - 1)) / 365;
        let march_day = day_of_cycle - 365 * year_of_cycle;
        let (month, day) = month_day_from_march_day(march_day);
        let year = cycle * LEAP_YEAR_CYCLE + year_of_cycle;
        let year = if month <= FEBRUARY { year + 1 } else { year };
        (year, month, day)
    }
}

impl FixedYearRules {
    fn days_per_year(&self) -> i64 {
        self.month_lengths.iter().map(|&len| i64::from(len)).sum()
    }
}

impl CalendarRules for FixedYearRules {
    fn is_leap_year(&self, _year: i64) -> bool {
        self.leap
    }

    fn length_of_month(&self, _year: i64, month: u8) -> u8 {
        self.month_lengths[usize::from(month)]
    }

    fn max_length_of_month(&self, month: u8) -> u8 {
        self.month_lengths[usize::from(month)]
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn max_length_of_year(&self) -> u16 {
        self.days_per_year() as u16
    }

    fn to_epoch_day(&self, year: i64, month: u8, day: u8) -> i64 {
        (year - FIXED_YEAR_EPOCH) * self.days_per_year()
            + i64::from(self.days_before_month(year, month))
            + i64::from(day)
            - 1
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from_epoch_day(&self, epoch_day: i64) -> (i64, u8, u8) {
        let (years, mut day_of_year) = epoch_day.div_mod_floor(&self.days_per_year());
        let mut month = JANUARY;
        while day_of_year >= i64::from(self.month_lengths[usize::from(month)]) {
            day_of_year -= i64::from(self.month_lengths[usize::from(month)]);
            month += 1;
        }
        (years + FIXED_YEAR_EPOCH, month, day_of_year as u8 + MIN_DAY)
    }
}

impl Chronology {
    /// Every supported chronology
    pub const ALL: [Self; 5] = [
        Self::Iso,
        Self::Julian,
        Self::NoLeap,
        Self::AllLeap,
        Self::Uniform30,
    ];

    fn rules(self) -> &'static dyn CalendarRules {
        RULES[self as usize]
    }

    /// Canonical identifier, as written in a dataset's `calendar` attribute
    pub const fn id(self) -> &'static str {
        match self {
            Self::Iso => "iso8601",
            Self::Julian => "julian",
            Self::NoLeap => "noleap",
            Self::AllLeap => "allleap",
            Self::Uniform30 => "360_day",
        }
    }

    /// Resolves an optional calendar attribute, defaulting to [`Chronology::Iso`]
    /// when the attribute is absent.
    ///
    /// # Errors
    /// Returns `CalendarError::UnknownChronology` if the attribute is present
    /// but not a recognized identifier.
    pub fn from_calendar_attribute(attribute: Option<&str>) -> Result<Self, CalendarError> {
        match attribute {
            Some(identifier) => identifier.parse(),
            None => {
                let chronology = Self::default();
                debug!(%chronology, "no calendar attribute, using default chronology");
                Ok(chronology)
            }
        }
    }

    pub fn is_leap_year(self, year: i64) -> bool {
        self.rules().is_leap_year(year)
    }

    /// Number of days in `month` of `year`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidFieldValue` if `month` is not a month of this chronology.
    pub fn length_of_month(self, year: i64, month: i64) -> Result<u8, CalendarError> {
        let month = self.checked_month(month)?;
        Ok(self.rules().length_of_month(year, month))
    }

    pub fn length_of_year(self, year: i64) -> u16 {
        self.rules().length_of_year(year)
    }

    /// Twelve for every supported chronology; arithmetic reads it from here
    /// rather than assuming it.
    pub const fn months_per_year(self) -> u8 {
        MONTHS_PER_YEAR
    }

    /// Legal numeric domain of `field` across every date of this chronology
    pub fn valid_range(self, field: Field) -> ValueRange {
        let months = i64::from(self.months_per_year());
        match field {
            Field::DayOfWeek | Field::AlignedDayOfWeekInMonth | Field::AlignedDayOfWeekInYear => {
                ValueRange::new(1, DAYS_PER_WEEK)
            }
            Field::DayOfMonth => ValueRange::new(1, self.max_day_of_month()),
            Field::DayOfYear => ValueRange::new(1, self.max_day_of_year()),
            Field::AlignedWeekOfMonth => {
                ValueRange::new(1, Integer::div_ceil(&self.max_day_of_month(), &DAYS_PER_WEEK))
            }
            Field::AlignedWeekOfYear => {
                ValueRange::new(1, Integer::div_ceil(&self.max_day_of_year(), &DAYS_PER_WEEK))
            }
            Field::MonthOfYear => self.month_range(),
            Field::ProlepticMonth => {
                ValueRange::new(MIN_YEAR * months, MAX_YEAR * months + months - 1)
            }
            Field::YearOfEra => ValueRange::new(1, 1 - MIN_YEAR),
            Field::Year => YEAR_RANGE,
            Field::Era => ValueRange::new(0, 1),
            Field::EpochDay => self.epoch_day_range(),
        }
    }

    fn max_day_of_month(self) -> i64 {
        let rules = self.rules();
        (JANUARY..=DECEMBER)
            .map(|month| i64::from(rules.max_length_of_month(month)))
            .max()
            .unwrap_or(0)
    }

    fn max_day_of_year(self) -> i64 {
        i64::from(self.rules().max_length_of_year())
    }

    const fn month_range(self) -> ValueRange {
        ValueRange::new(1, self.months_per_year() as i64)
    }

    fn epoch_day_range(self) -> ValueRange {
        let rules = self.rules();
        let last_day = rules.length_of_month(MAX_YEAR, DECEMBER);
        ValueRange::new(
            rules.to_epoch_day(MIN_YEAR, JANUARY, MIN_DAY),
            rules.to_epoch_day(MAX_YEAR, DECEMBER, last_day),
        )
    }

    /// Returns the date on `epoch_day`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidFieldValue` if the day lies outside the supported years.
    pub fn date_from_epoch_day(self, epoch_day: i64) -> Result<Date, CalendarError> {
        let epoch_day = self.epoch_day_range().check(Field::EpochDay, epoch_day)?;
        let (year, month, day) = self.rules().from_epoch_day(epoch_day);
        Ok(Date::new_unchecked(self, year, month, day))
    }

    /// Builds a date from calendar fields.
    ///
    /// A day the month has in some years but not in `year` (February 29th
    /// of a common ISO year) resolves to the month's last day. A day the
    /// month never has in this chronology is rejected.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidFieldValue` if the year is outside the
    /// supported range, the month is not `1..=months_per_year`, or the day
    /// is below 1 or beyond the month's longest length.
    pub fn date_from_fields(self, year: i64, month: i64, day: i64) -> Result<Date, CalendarError> {
        let month = self.checked_month(month)?;
        let longest = i64::from(self.rules().max_length_of_month(month));
        ValueRange::new(1, longest).check(Field::DayOfMonth, day)?;
        self.resolve_previous(year, i64::from(month), day)
    }

    /// Converts `date` into this chronology, keeping the epoch day.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidFieldValue` if the day has no date in
    /// this chronology's supported years.
    pub fn date_from(self, date: &Date) -> Result<Date, CalendarError> {
        self.date_from_epoch_day(date.to_epoch_day())
    }

    /// Synthesizes a date from computed fields, clamping the day to the
    /// month's actual length.
    pub(crate) fn resolve_previous(
        self,
        year: i64,
        month: i64,
        day: i64,
    ) -> Result<Date, CalendarError> {
        let year = YEAR_RANGE.check(Field::Year, year)?;
        let month = self.checked_month(month)?;
        let length = self.rules().length_of_month(year, month);
        if day < 1 {
            return Err(CalendarError::InvalidFieldValue {
                field: Field::DayOfMonth,
                value: day,
                min: 1,
                max: i64::from(length),
            });
        }
        let resolved = u8::try_from(day)
            .ok()
            .filter(|&d| d <= length)
            .unwrap_or(length);
        if i64::from(resolved) != day {
            trace!(
                chronology = %self,
                year,
                month,
                requested = day,
                resolved,
                "clamped day to end of month"
            );
        }
        Ok(Date::new_unchecked(self, year, month, resolved))
    }

    fn checked_month(self, month: i64) -> Result<u8, CalendarError> {
        let range = self.month_range();
        let month = range.check(Field::MonthOfYear, month)?;
        u8::try_from(month).map_err(|_| CalendarError::InvalidFieldValue {
            field: Field::MonthOfYear,
            value: month,
            min: range.min(),
            max: range.max(),
        })
    }

    pub(crate) fn days_in_month(self, year: i64, month: u8) -> u8 {
        self.rules().length_of_month(year, month)
    }

    pub(crate) fn days_before_month(self, year: i64, month: u8) -> u16 {
        self.rules().days_before_month(year, month)
    }

    pub(crate) fn to_epoch_day(self, year: i64, month: u8, day: u8) -> i64 {
        self.rules().to_epoch_day(year, month, day)
    }
}

impl FromStr for Chronology {
    type Err = CalendarError;

    /// Parses a calendar identifier. Matching ignores case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let identifier = s.trim().to_ascii_lowercase();
        let chronology = match identifier.as_str() {
            "iso8601" | "proleptic_gregorian" => Self::Iso,
            "julian" => Self::Julian,
            "noleap" | "no_leap" | "365_day" => Self::NoLeap,
            "allleap" | "all_leap" | "366_day" => Self::AllLeap,
            "360_day" | "uniform30day" => Self::Uniform30,
            _ => {
                debug!(identifier = s, "unknown chronology identifier");
                return Err(CalendarError::UnknownChronology(s.trim().to_owned()));
            }
        };
        debug!(identifier = s, %chronology, "resolved chronology identifier");
        Ok(chronology)
    }
}

impl TryFrom<&str> for Chronology {
    type Error = CalendarError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl serde::Serialize for Chronology {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.id())
    }
}

impl<'de> serde::Deserialize<'de> for Chronology {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
