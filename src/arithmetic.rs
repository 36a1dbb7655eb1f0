//! Field edits, unit arithmetic and interval computation on [`Date`].
//!
//! Dates synthesized from adjusted year/month values resolve their day to
//! the last valid day of the month; see [`Chronology::date_from_fields`].

use crate::consts::{DAYS_PER_WEEK, MAX_YEAR, MIN_YEAR, PACKED_MONTH_SHIFT};
use crate::{CalendarError, Chronology, Date, Field, Period, Unit};
use num_integer::Integer;

impl Date {
    /// Returns a copy of this date with `field` set to `value`.
    ///
    /// Week-based and day-of-year fields move the date by whole days.
    /// Month and year fields keep the day of month, clamping it to the
    /// target month's length.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidFieldValue` if `value` is outside the
    /// chronology's range for `field` or the result falls outside the
    /// supported years.
    pub fn with(&self, field: Field, value: i64) -> Result<Self, CalendarError> {
        let value = self.chronology.valid_range(field).check(field, value)?;
        let chronology = self.chronology;
        let (year, month, day) = (self.year, i64::from(self.month), i64::from(self.day));
        match field {
            Field::DayOfWeek => self.plus_days(value - i64::from(self.day_of_week())),
            Field::AlignedDayOfWeekInMonth => {
                self.plus_days(value - i64::from(self.aligned_day_of_week_in_month()))
            }
            Field::AlignedDayOfWeekInYear => {
                self.plus_days(value - i64::from(self.aligned_day_of_week_in_year()))
            }
            Field::DayOfMonth => chronology.resolve_previous(year, month, value),
            Field::DayOfYear => self.plus_days(value - i64::from(self.day_of_year())),
            Field::EpochDay => chronology.date_from_epoch_day(value),
            Field::AlignedWeekOfMonth => {
                self.plus_weeks(value - i64::from(self.aligned_week_of_month()))
            }
            Field::AlignedWeekOfYear => {
                self.plus_weeks(value - i64::from(self.aligned_week_of_year()))
            }
            Field::MonthOfYear => chronology.resolve_previous(year, value, day),
            Field::ProlepticMonth => self.plus_months(value - self.proleptic_month()),
            Field::YearOfEra => {
                let year = if year >= 1 { value } else { 1 - value };
                chronology.resolve_previous(year, month, day)
            }
            Field::Year => chronology.resolve_previous(value, month, day),
            Field::Era => {
                if value == self.era().value() {
                    Ok(*self)
                } else {
                    chronology.resolve_previous(1 - year, month, day)
                }
            }
        }
    }

    /// Returns this date moved by `amount` of `unit`.
    ///
    /// # Errors
    /// Returns `CalendarError::ArithmeticOverflow` if the result leaves the
    /// supported years or an intermediate product overflows `i64`.
    /// Adding eras returns `CalendarError::InvalidFieldValue` unless the
    /// resulting era value is 0 or 1.
    pub fn plus(&self, amount: i64, unit: Unit) -> Result<Self, CalendarError> {
        match unit {
            Unit::Days => self.plus_days(amount),
            Unit::Weeks => self.plus_weeks(amount),
            Unit::Months => self.plus_months(amount),
            Unit::Years => self.plus_years(amount),
            Unit::Decades => self.plus_years(scale(amount, 10)?),
            Unit::Centuries => self.plus_years(scale(amount, 100)?),
            Unit::Millennia => self.plus_years(scale(amount, 1000)?),
            Unit::Eras => {
                let era = self
                    .era()
                    .value()
                    .checked_add(amount)
                    .ok_or(CalendarError::ArithmeticOverflow)?;
                self.with(Field::Era, era)
            }
        }
    }

    /// Returns this date moved back by `amount` of `unit`
    ///
    /// # Errors
    /// See [`Date::plus`]. `i64::MIN` cannot be negated and is an overflow.
    pub fn minus(&self, amount: i64, unit: Unit) -> Result<Self, CalendarError> {
        let amount = amount
            .checked_neg()
            .ok_or(CalendarError::ArithmeticOverflow)?;
        self.plus(amount, unit)
    }

    /// Adds the period's years and months as one month count, then its days.
    ///
    /// # Errors
    /// Returns `CalendarError::ChronologyMismatch` if the period belongs to
    /// another chronology, `CalendarError::ArithmeticOverflow` if the
    /// result leaves the supported years.
    pub fn plus_period(&self, period: &Period) -> Result<Self, CalendarError> {
        self.check_same_chronology(period.chronology())?;
        self.plus_months(period.total_months())?
            .plus_days(i64::from(period.days()))
    }

    /// Whole `unit`s from this date to `end`, negative if `end` is earlier.
    ///
    /// # Errors
    /// Returns `CalendarError::ChronologyMismatch` if `end` belongs to another chronology.
    pub fn until(&self, end: &Self, unit: Unit) -> Result<i64, CalendarError> {
        self.check_same_chronology(end.chronology)?;
        let months_per_year = i64::from(self.months_per_year());
        Ok(match unit {
            Unit::Days => self.days_until(end),
            Unit::Weeks => self.days_until(end) / DAYS_PER_WEEK,
            Unit::Months => self.months_until(end),
            Unit::Years => self.months_until(end) / months_per_year,
            Unit::Decades => self.months_until(end) / (months_per_year * 10),
            Unit::Centuries => self.months_until(end) / (months_per_year * 100),
            Unit::Millennia => self.months_until(end) / (months_per_year * 1000),
            Unit::Eras => end.era().value() - self.era().value(),
        })
    }

    /// Splits the gap from this date to `end` into years, months and days.
    ///
    /// When the day of `end` precedes this date's day, a month is borrowed
    /// and the days are counted exactly from the shifted start.
    ///
    /// # Errors
    /// Returns `CalendarError::ChronologyMismatch` if `end` belongs to another chronology.
    pub fn period(&self, end: &Self) -> Result<Period, CalendarError> {
        self.check_same_chronology(end.chronology)?;
        let mut total_months = end.proleptic_month() - self.proleptic_month();
        let mut days = i64::from(end.day) - i64::from(self.day);
        if total_months > 0 && days < 0 {
            total_months -= 1;
            let shifted = self.plus_months(total_months)?;
            days = end.to_epoch_day() - shifted.to_epoch_day();
        } else if total_months < 0 && days > 0 {
            total_months += 1;
            days -= i64::from(end.length_of_month());
        }
        let (years, months) = total_months.div_rem(&i64::from(self.months_per_year()));
        Ok(Period::new(
            self.chronology,
            years,
            narrow(months)?,
            narrow(days)?,
        ))
    }

    fn plus_days(&self, days: i64) -> Result<Self, CalendarError> {
        if days == 0 {
            return Ok(*self);
        }
        let epoch_day = self
            .to_epoch_day()
            .checked_add(days)
            .ok_or(CalendarError::ArithmeticOverflow)?;
        self.chronology
            .date_from_epoch_day(epoch_day)
            .map_err(|_| CalendarError::ArithmeticOverflow)
    }

    fn plus_weeks(&self, weeks: i64) -> Result<Self, CalendarError> {
        self.plus_days(scale(weeks, DAYS_PER_WEEK)?)
    }

    fn plus_months(&self, months: i64) -> Result<Self, CalendarError> {
        if months == 0 {
            return Ok(*self);
        }
        let proleptic_month = self
            .proleptic_month()
            .checked_add(months)
            .ok_or(CalendarError::ArithmeticOverflow)?;
        let (year, month) = proleptic_month.div_mod_floor(&i64::from(self.months_per_year()));
        self.resolve_in_year(year, month + 1)
    }

    fn plus_years(&self, years: i64) -> Result<Self, CalendarError> {
        if years == 0 {
            return Ok(*self);
        }
        let year = self
            .year
            .checked_add(years)
            .ok_or(CalendarError::ArithmeticOverflow)?;
        self.resolve_in_year(year, i64::from(self.month))
    }

    /// Keeps this date's day in `month` of a computed `year`.
    fn resolve_in_year(&self, year: i64, month: i64) -> Result<Self, CalendarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::ArithmeticOverflow);
        }
        self.chronology
            .resolve_previous(year, month, i64::from(self.day))
    }

    fn days_until(&self, end: &Self) -> i64 {
        end.to_epoch_day() - self.to_epoch_day()
    }

    fn months_until(&self, end: &Self) -> i64 {
        (end.packed_month_day() - self.packed_month_day()) / PACKED_MONTH_SHIFT
    }

    fn check_same_chronology(&self, other: Chronology) -> Result<(), CalendarError> {
        if self.chronology == other {
            Ok(())
        } else {
            Err(CalendarError::ChronologyMismatch {
                expected: self.chronology,
                found: other,
            })
        }
    }
}

fn scale(amount: i64, factor: i64) -> Result<i64, CalendarError> {
    amount
        .checked_mul(factor)
        .ok_or(CalendarError::ArithmeticOverflow)
}

fn narrow(value: i64) -> Result<i32, CalendarError> {
    i32::try_from(value).map_err(|_| CalendarError::ArithmeticOverflow)
}
