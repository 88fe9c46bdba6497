//! Hours/overtime calculator and formatter tests (library level).

use chrono::NaiveTime;
use hometime::core::aggregate::{aggregate, monetary_value};
use hometime::core::format::format_hm;
use hometime::core::hours::{DayHours, compute_day, round_hours};
use hometime::errors::AppError;

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

const EPS: f64 = 1e-9;

#[test]
fn ordinary_day_has_no_overtime() {
    let h = compute_day(t("08:00"), t("12:00"), t("13:00"), t("17:00")).unwrap();
    assert!((h.worked_hours - 8.0).abs() < EPS);
    assert!((h.lunch_hours - 1.0).abs() < EPS);
    assert!(h.overtime_hours.abs() < EPS);
}

#[test]
fn long_day_pays_the_excess_as_overtime() {
    let h = compute_day(t("08:00"), t("12:00"), t("13:00"), t("18:30")).unwrap();
    assert!((h.worked_hours - 9.5).abs() < EPS);
    assert!((h.overtime_hours - 1.5).abs() < EPS);
}

#[test]
fn short_day_is_not_negative_overtime() {
    let h = compute_day(t("09:00"), t("12:00"), t("13:00"), t("15:00")).unwrap();
    assert!((h.worked_hours - 5.0).abs() < EPS);
    assert_eq!(h.overtime_hours, 0.0);
}

#[test]
fn lunch_is_excluded_from_worked_hours() {
    // 08:00-17:00 with a 2h lunch is 7h worked
    let h = compute_day(t("08:00"), t("12:00"), t("14:00"), t("17:00")).unwrap();
    assert!((h.worked_hours - 7.0).abs() < EPS);
    assert!((h.lunch_hours - 2.0).abs() < EPS);
}

#[test]
fn minute_granularity_survives_the_division() {
    // 08:00-12:00 + 12:59-17:00 = 4h + 4h01 = 8.0166..h
    let h = compute_day(t("08:00"), t("12:00"), t("12:59"), t("17:00")).unwrap();
    assert!((h.worked_hours - (8.0 + 1.0 / 60.0)).abs() < EPS);
}

#[test]
fn out_of_order_quadruple_is_rejected() {
    let err = compute_day(t("17:00"), t("12:00"), t("13:00"), t("08:00")).unwrap_err();
    assert!(matches!(err, AppError::InvalidRange(_)));

    // lunch-in before lunch-out
    let err = compute_day(t("08:00"), t("13:00"), t("12:00"), t("17:00")).unwrap_err();
    assert!(matches!(err, AppError::InvalidRange(_)));

    // equal times are invalid too
    let err = compute_day(t("08:00"), t("08:00"), t("13:00"), t("17:00")).unwrap_err();
    assert!(matches!(err, AppError::InvalidRange(_)));
}

#[test]
fn rounding_helper_matches_persistence_precision() {
    assert_eq!(round_hours(8.016666666, 4), 8.0167);
    assert_eq!(round_hours(8.016666666, 2), 8.02);
    assert_eq!(round_hours(1.5, 2), 1.5);
}

// ---------------------------------------------------------------------------
// format_hm
// ---------------------------------------------------------------------------

#[test]
fn format_hm_rounds_minutes_instead_of_truncating() {
    // 2.9833h is 2h 59.0min; truncation used to show 58min
    assert_eq!(format_hm(2.9833333), "2h 59min");
    assert_eq!(format_hm(1.9833333), "1h 59min");
}

#[test]
fn format_hm_carries_rounded_minutes_into_the_hour() {
    // 59.8 minutes rounds to 60 and must bump the hour
    assert_eq!(format_hm(2.9966666), "3h");
}

#[test]
fn format_hm_output_shapes() {
    assert_eq!(format_hm(0.0), "0h 0min");
    assert_eq!(format_hm(2.0), "2h");
    assert_eq!(format_hm(0.5), "30min");
    assert_eq!(format_hm(2.5), "2h 30min");
}

#[test]
fn format_hm_is_within_one_minute_of_the_input() {
    for i in 0..600 {
        let hours = i as f64 / 60.0;
        let s = format_hm(hours);
        let reparsed = parse_hm(&s);
        assert!(
            (reparsed - hours).abs() < 1.0 / 60.0 + EPS,
            "{}h formatted as {:?}",
            hours,
            s
        );
    }
}

fn parse_hm(s: &str) -> f64 {
    let mut hours = 0.0;
    let mut minutes = 0.0;
    for part in s.split_whitespace() {
        if let Some(h) = part.strip_suffix('h') {
            hours = h.parse::<f64>().unwrap();
        } else if let Some(m) = part.strip_suffix("min") {
            minutes = m.parse::<f64>().unwrap();
        }
    }
    hours + minutes / 60.0
}

// ---------------------------------------------------------------------------
// Aggregation and pay
// ---------------------------------------------------------------------------

#[test]
fn empty_aggregate_is_all_zero() {
    let totals = aggregate(&[]);
    assert_eq!(totals.total_hours, 0.0);
    assert_eq!(totals.total_overtime_hours, 0.0);
    assert_eq!(totals.days_worked, 0);
}

#[test]
fn aggregate_sums_days() {
    let days = [
        DayHours {
            lunch_hours: 1.0,
            worked_hours: 8.0,
            overtime_hours: 0.0,
        },
        DayHours {
            lunch_hours: 1.0,
            worked_hours: 9.5,
            overtime_hours: 1.5,
        },
    ];
    let totals = aggregate(&days);
    assert!((totals.total_hours - 17.5).abs() < EPS);
    assert!((totals.total_overtime_hours - 1.5).abs() < EPS);
    assert_eq!(totals.days_worked, 2);
}

#[test]
fn monetary_value_caps_normal_pay_at_eight_hours() {
    let day = [DayHours {
        lunch_hours: 1.0,
        worked_hours: 9.5,
        overtime_hours: 1.5,
    }];
    let pay = monetary_value(&day, 6.90);

    assert!((pay.normal_pay - 55.20).abs() < EPS);
    assert!((pay.overtime_pay - 15.525).abs() < EPS);
    assert!((pay.total() - 70.725).abs() < EPS);
}

#[test]
fn monetary_value_of_nothing_is_nothing() {
    let pay = monetary_value(&[], 6.90);
    assert_eq!(pay.normal_pay, 0.0);
    assert_eq!(pay.overtime_pay, 0.0);
}
