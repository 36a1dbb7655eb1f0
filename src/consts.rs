/// Smallest supported proleptic year (inclusive)
pub const MIN_YEAR: i64 = -999_999_999;

/// Largest supported proleptic year (inclusive)
pub const MAX_YEAR: i64 = 999_999_999;

/// Months in a year, shared by every supported chronology
pub const MONTHS_PER_YEAR: u8 = 12;

/// Days in the fixed seven-day week
pub const DAYS_PER_WEEK: i64 = 7;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each month of a common ISO/Julian year (index 0 is unused, months are 1-indexed)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Month lengths of the `all-leap` (366-day) calendar
pub(crate) const DAYS_IN_MONTH_ALL_LEAP: [u8; 13] =
    [0, 31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Month lengths of the `360_day` calendar
pub(crate) const DAYS_IN_MONTH_UNIFORM_30: [u8; 13] =
    [0, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Days in a 400-year Gregorian cycle
pub(crate) const GREGORIAN_CYCLE_DAYS: i64 = 146_097;
/// Days in a 4-year Julian cycle
pub(crate) const JULIAN_CYCLE_DAYS: i64 = 1_461;

/// Days from 0000-03-01 (proleptic Gregorian) to 1970-01-01
pub(crate) const ISO_MARCH_0000_TO_1970: i64 = 719_468;
/// Days from 0000-03-01 (proleptic Julian) to ISO 1970-01-01; Julian 1970-01-01 is epoch day 13
pub(crate) const JULIAN_MARCH_0000_TO_1970: i64 = 719_470;

/// Year whose January 1st is epoch day 0 in the fixed-length calendars
pub(crate) const FIXED_YEAR_EPOCH: i64 = 1970;

/// Multiplier packing (proleptic month, day of month) into one comparable integer.
/// Must exceed the longest month of every chronology.
pub(crate) const PACKED_MONTH_SHIFT: i64 = 256;
