//! Closing-period resolver tests (library level).

use chrono::NaiveDate;
use hometime::core::period::{ClosingPeriod, closing_label};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn mid_month_belongs_to_current_label() {
    let p = ClosingPeriod::for_date(date(2025, 3, 10));
    assert_eq!(p.start, date(2025, 2, 26));
    assert_eq!(p.end, date(2025, 3, 25));
    assert_eq!((p.month, p.year), (3, 2025));
}

#[test]
fn day_25_closes_the_period() {
    let p = ClosingPeriod::for_date(date(2025, 3, 25));
    assert_eq!(p.end, date(2025, 3, 25));
    assert_eq!((p.month, p.year), (3, 2025));
}

#[test]
fn day_26_opens_the_next_period() {
    let p = ClosingPeriod::for_date(date(2025, 3, 26));
    assert_eq!(p.start, date(2025, 3, 26));
    assert_eq!(p.end, date(2025, 4, 25));
    assert_eq!((p.month, p.year), (4, 2025));
}

#[test]
fn january_reaches_back_into_previous_year() {
    let p = ClosingPeriod::for_date(date(2025, 1, 10));
    assert_eq!(p.start, date(2024, 12, 26));
    assert_eq!(p.end, date(2025, 1, 25));
    assert_eq!((p.month, p.year), (1, 2025));
}

#[test]
fn late_december_rolls_into_next_year() {
    let p = ClosingPeriod::for_date(date(2025, 12, 26));
    assert_eq!(p.start, date(2025, 12, 26));
    assert_eq!(p.end, date(2026, 1, 25));
    assert_eq!((p.month, p.year), (1, 2026));
}

#[test]
fn end_date_is_always_the_25th_for_early_days() {
    // any day <= 25 closes on the 25th of its own month
    for day in 1..=25 {
        let p = ClosingPeriod::for_date(date(2025, 7, day));
        assert_eq!(p.end, date(2025, 7, 25));
    }
}

#[test]
fn for_label_matches_for_date_on_the_25th() {
    for month in 1..=12 {
        let by_label = ClosingPeriod::for_label(month, 2025);
        let by_date = ClosingPeriod::for_date(date(2025, month, 25));
        assert_eq!(by_label, by_date);
    }
}

#[test]
fn contains_is_closed_on_both_ends() {
    let p = ClosingPeriod::for_label(1, 2025);
    assert!(p.contains(date(2024, 12, 26)));
    assert!(p.contains(date(2025, 1, 25)));
    assert!(!p.contains(date(2024, 12, 25)));
    assert!(!p.contains(date(2025, 1, 26)));
}

#[test]
fn closing_label_buckets_without_ranges() {
    assert_eq!(closing_label(date(2025, 1, 10)), (1, 2025));
    assert_eq!(closing_label(date(2025, 12, 26)), (1, 2026));
    assert_eq!(closing_label(date(2025, 6, 30)), (7, 2025));
}

#[test]
fn every_date_lands_in_its_own_period() {
    let mut d = date(2024, 11, 1);
    let end = date(2026, 2, 1);
    while d < end {
        let p = ClosingPeriod::for_date(d);
        assert!(p.contains(d), "{} not inside its period {:?}", d, p);
        d = d.succ_opt().unwrap();
    }
}
