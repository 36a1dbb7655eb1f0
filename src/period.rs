use crate::{CalendarError, Chronology, Unit};
use serde::Serialize;
use std::fmt;

/// A calendar amount of years, months and days, bound to a chronology.
///
/// Produced by [`Date::period`](crate::Date::period). The months component
/// is normalized into `-(months_per_year - 1)..=(months_per_year - 1)` and
/// shares its sign with the years component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Period {
    chronology: Chronology,
    years: i64,
    months: i32,
    days: i32,
}

impl Period {
    pub(crate) const fn new(chronology: Chronology, years: i64, months: i32, days: i32) -> Self {
        Self {
            chronology,
            years,
            months,
            days,
        }
    }

    pub const fn chronology(&self) -> Chronology {
        self.chronology
    }

    pub const fn years(&self) -> i64 {
        self.years
    }

    pub const fn months(&self) -> i32 {
        self.months
    }

    pub const fn days(&self) -> i32 {
        self.days
    }

    /// Returns the component for `unit`
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedUnit` for any unit but years, months and days.
    pub fn get(&self, unit: Unit) -> Result<i64, CalendarError> {
        match unit {
            Unit::Years => Ok(self.years),
            Unit::Months => Ok(i64::from(self.months)),
            Unit::Days => Ok(i64::from(self.days)),
            Unit::Weeks | Unit::Decades | Unit::Centuries | Unit::Millennia | Unit::Eras => {
                Err(CalendarError::UnsupportedUnit(unit.to_string()))
            }
        }
    }

    /// Years and months folded into a single month count
    pub const fn total_months(&self) -> i64 {
        self.years * self.chronology.months_per_year() as i64 + self.months as i64
    }

    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// True if any component is negative
    pub const fn is_negative(&self) -> bool {
        self.years < 0 || self.months < 0 || self.days < 0
    }

    pub const fn negated(&self) -> Self {
        Self::new(self.chronology, -self.years, -self.months, -self.days)
    }
}

impl fmt::Display for Period {
    /// Formats the chronology followed by an ISO 8601 duration, e.g. `iso8601 P1Y2M3D`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} P", self.chronology)?;
        if self.is_zero() {
            return f.write_str("0D");
        }
        if self.years != 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months != 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days != 0 {
            write!(f, "{}D", self.days)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components() {
        let period = Period::new(Chronology::Iso, 1, 2, 3);
        assert_eq!(period.years(), 1);
        assert_eq!(period.months(), 2);
        assert_eq!(period.days(), 3);
        assert_eq!(period.total_months(), 14);
        assert_eq!(period.get(Unit::Years).unwrap(), 1);
        assert_eq!(period.get(Unit::Months).unwrap(), 2);
        assert_eq!(period.get(Unit::Days).unwrap(), 3);
        assert!(!period.is_zero());
        assert!(!period.is_negative());
    }

    #[test]
    fn test_get_unsupported_unit() {
        let period = Period::new(Chronology::Julian, 0, 0, 1);
        assert_eq!(
            period.get(Unit::Weeks),
            Err(CalendarError::UnsupportedUnit("weeks".to_owned()))
        );
        assert!(period.get(Unit::Eras).is_err());
    }

    #[test]
    fn test_negated() {
        let period = Period::new(Chronology::NoLeap, 2, 11, 27).negated();
        assert_eq!((period.years(), period.months(), period.days()), (-2, -11, -27));
        assert!(period.is_negative());
        assert_eq!(period.total_months(), -35);
    }

    #[test]
    fn test_display() {
        assert_eq!(Period::new(Chronology::Iso, 1, 2, 3).to_string(), "iso8601 P1Y2M3D");
        assert_eq!(Period::new(Chronology::Uniform30, 0, 0, 0).to_string(), "360_day P0D");
        assert_eq!(Period::new(Chronology::Iso, 0, -1, -5).to_string(), "iso8601 P-1M-5D");
        assert_eq!(Period::new(Chronology::AllLeap, 10, 0, 0).to_string(), "allleap P10Y");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&Period::new(Chronology::Iso, 1, 0, -2)).unwrap();
        assert_eq!(
            json,
            r#"{"chronology":"iso8601","years":1,"months":0,"days":-2}"#
        );
    }
}
