use multical::{CalendarError, Chronology, Date, Field, Unit};

fn date(chronology: Chronology, year: i64, month: i64, day: i64) -> Date {
    chronology.date_from_fields(year, month, day).unwrap()
}

fn ymd(date: Date) -> (i64, u8, u8) {
    (date.year(), date.month(), date.day_of_month())
}

#[test]
fn month_end_clamps_in_leap_year() {
    let start = date(Chronology::Iso, 2020, 1, 31);
    let result = start.plus(1, Unit::Months).unwrap();
    assert_eq!(ymd(result), (2020, 2, 29));
}

#[test]
fn month_end_clamps_in_common_year() {
    let start = date(Chronology::Iso, 2021, 1, 31);
    let result = start.plus(1, Unit::Months).unwrap();
    assert_eq!(ymd(result), (2021, 2, 28));
}

#[test]
fn uniform30_day_after_month_end() {
    let start = date(Chronology::Uniform30, 2020, 1, 30);
    let result = start.plus(1, Unit::Days).unwrap();
    assert_eq!(ymd(result), (2020, 2, 1));
}

#[test]
fn noleap_has_no_february_29() {
    let result = Chronology::NoLeap.date_from_fields(2000, 2, 29);
    assert!(
        matches!(
            result,
            Err(CalendarError::InvalidFieldValue {
                field: Field::DayOfMonth,
                value: 29,
                ..
            })
        ),
        "got {result:?}"
    );
}

#[test]
fn period_borrows_a_month() {
    let start = date(Chronology::Iso, 2020, 1, 31);
    let end = date(Chronology::Iso, 2020, 3, 1);
    let period = start.period(&end).unwrap();
    assert_eq!(
        (period.years(), period.months(), period.days()),
        (0, 1, 1),
        "period {period}"
    );
    assert_eq!(start.plus_period(&period).unwrap(), end);
}

#[test]
fn until_one_year() {
    let start = date(Chronology::Iso, 2020, 1, 1);
    let end = date(Chronology::Iso, 2021, 1, 1);
    assert_eq!(start.until(&end, Unit::Years).unwrap(), 1);

    let start = date(Chronology::Uniform30, 2020, 1, 1);
    let end = date(Chronology::Uniform30, 2021, 1, 1);
    assert_eq!(start.until(&end, Unit::Days).unwrap(), 360);
}

#[test]
fn year_lengths_per_chronology() {
    let cases: &[(Chronology, i64, i64)] = &[
        (Chronology::Iso, 2020, 366),
        (Chronology::Iso, 2021, 365),
        (Chronology::Julian, 2100, 366),
        (Chronology::NoLeap, 2020, 365),
        (Chronology::AllLeap, 2021, 366),
        (Chronology::Uniform30, 2020, 360),
    ];
    for &(chronology, year, days) in cases {
        let start = date(chronology, year, 1, 1);
        let end = date(chronology, year + 1, 1, 1);
        assert_eq!(
            start.until(&end, Unit::Days).unwrap(),
            days,
            "{chronology} {year}"
        );
    }
}

#[test]
fn calendar_attribute_selects_chronology() {
    let chronology = Chronology::from_calendar_attribute(Some("365_day")).unwrap();
    let start = date(chronology, 1999, 2, 28);
    assert_eq!(ymd(start.plus(1, Unit::Days).unwrap()), (1999, 3, 1));
    assert_eq!(start.to_string(), "noleap CE 1999-02-28");

    let default = Chronology::from_calendar_attribute(None).unwrap();
    assert_eq!(default, Chronology::Iso);
}

#[test]
fn converting_between_chronologies_keeps_the_day() {
    let iso = date(Chronology::Iso, 2024, 3, 1);
    let julian = Chronology::Julian.date_from(&iso).unwrap();
    assert_eq!(ymd(julian), (2024, 2, 17));
    assert_eq!(julian.day_of_week(), iso.day_of_week());
    assert_eq!(iso.until(&julian, Unit::Days), Err(CalendarError::ChronologyMismatch {
        expected: Chronology::Iso,
        found: Chronology::Julian,
    }));
}

#[test]
fn field_names_drive_edits() {
    let start = date(Chronology::AllLeap, 2023, 1, 31);
    let field: Field = "month_of_year".parse().unwrap();
    let unit: Unit = "years".parse().unwrap();
    let result = start.with(field, 2).unwrap().plus(1, unit).unwrap();
    assert_eq!(ymd(result), (2024, 2, 29));
    assert!("hour-of-day".parse::<Field>().is_err());
}
