use hd_time::{BirthInput, BirthZone, TimeError, UtcTime, jd_to_calendar};

fn utc(date: &str, time: &str, zone: &str) -> UtcTime {
    BirthInput::parse(date, time, zone)
        .and_then(|b| b.to_utc())
        .unwrap()
}

#[test]
fn berlin_winter_is_one_hour_ahead() {
    let t = utc("1985-01-20", "08:15", "Europe/Berlin");
    assert_eq!((t.year, t.month, t.day, t.hour, t.minute), (1985, 1, 20, 7, 15));
}

#[test]
fn fall_back_fold_takes_daylight_reading() {
    // 01:30 occurs twice in New York on 2021-11-07; EDT (-4) comes first.
    let t = utc("2021-11-07", "01:30", "America/New_York");
    assert_eq!((t.day, t.hour, t.minute), (7, 5, 30));
}

#[test]
fn half_hour_zone() {
    let t = utc("1995-06-10", "00:10", "Asia/Kolkata");
    assert_eq!((t.month, t.day, t.hour, t.minute), (6, 9, 18, 40));
}

#[test]
fn julian_day_matches_calendar() {
    let birth = BirthInput::parse("1990-08-15", "14:30", "+02:00").unwrap();
    let jd = birth.jd_ut().unwrap();
    let (year, month, day) = jd_to_calendar(jd);
    assert_eq!((year, month), (1990, 8));
    assert!((day - 15.520_833).abs() < 1e-5, "day = {day}");
}

#[test]
fn zone_display_round_trips() {
    let zone: BirthZone = "Europe/Berlin".parse().unwrap();
    assert_eq!(zone.to_string(), "Europe/Berlin");
    let reparsed: BirthZone = zone.to_string().parse().unwrap();
    assert_eq!(reparsed, zone);
}

#[test]
fn rejected_inputs() {
    assert!(matches!(
        BirthInput::parse("1990-02-30", "12:00", "UTC"),
        Err(TimeError::Malformed { field: "date", .. })
    ));
    assert!(matches!(
        BirthInput::parse("1990-02-10", "25:00", "UTC"),
        Err(TimeError::Malformed { field: "time", .. })
    ));
    assert!(matches!(
        BirthInput::parse("1990-02-10", "12:00", "Mars/Olympus"),
        Err(TimeError::UnknownZone(_))
    ));
    assert!(matches!(
        BirthInput::parse("1990-02-10", "12:00", "+05:75"),
        Err(TimeError::OutOfRange(_))
    ));
}
