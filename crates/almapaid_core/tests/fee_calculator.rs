use almapaid_core::{daily_percent_due, flat_cutoff_due, FeeError};
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn on_due_date_has_no_surcharge() {
    let invoice = daily_percent_due(dec!(5000), 10, dec!(1.0), date(2025, 6, 10)).unwrap();
    assert_eq!(invoice.subtotal, dec!(5000));
    assert_eq!(invoice.surcharge, dec!(0));
    assert_eq!(invoice.total, dec!(5000));
}

#[test]
fn before_due_date_has_no_surcharge() {
    let invoice = daily_percent_due(dec!(5000), 10, dec!(1.0), date(2025, 6, 3)).unwrap();
    assert_eq!(invoice.surcharge, dec!(0));
    assert_eq!(invoice.total, dec!(5000));
}

#[test]
fn five_days_late_adds_one_percent_per_day() {
    let invoice = daily_percent_due(dec!(5000), 10, dec!(1.0), date(2025, 6, 15)).unwrap();
    assert_eq!(invoice.surcharge, dec!(250));
    assert_eq!(invoice.total, dec!(5250));
}

#[test]
fn fractional_rate_keeps_full_precision() {
    // 5000 * 1.5% * 3 days = 225
    let invoice = daily_percent_due(dec!(5000), 10, dec!(1.5), date(2025, 6, 13)).unwrap();
    assert_eq!(invoice.surcharge, dec!(225));
    assert_eq!(invoice.total, dec!(5225));
}

#[test]
fn due_day_31_clamps_to_last_day_of_short_month() {
    // April has 30 days: paying on the 30th is on time, not one day late.
    let invoice = daily_percent_due(dec!(5000), 31, dec!(1.0), date(2025, 4, 30)).unwrap();
    assert_eq!(invoice.surcharge, dec!(0));
}

#[test]
fn due_day_31_clamps_in_leap_february() {
    let invoice = daily_percent_due(dec!(5000), 31, dec!(1.0), date(2024, 2, 29)).unwrap();
    assert_eq!(invoice.surcharge, dec!(0));
}

#[test]
fn zero_rate_never_adds_a_surcharge() {
    let invoice = daily_percent_due(dec!(5000), 1, dec!(0), date(2025, 6, 30)).unwrap();
    assert_eq!(invoice.surcharge, dec!(0));
    assert_eq!(invoice.total, dec!(5000));
}

#[test]
fn negative_base_is_a_validation_error() {
    let err = daily_percent_due(dec!(-100), 10, dec!(1.0), date(2025, 6, 10)).unwrap_err();
    assert_eq!(err, FeeError::NegativeAmount(dec!(-100)));
}

#[test]
fn due_day_out_of_range_is_a_validation_error() {
    let reference = date(2025, 6, 10);
    assert_eq!(
        daily_percent_due(dec!(5000), 0, dec!(1.0), reference).unwrap_err(),
        FeeError::DueDayOutOfRange(0)
    );
    assert_eq!(
        daily_percent_due(dec!(5000), 32, dec!(1.0), reference).unwrap_err(),
        FeeError::DueDayOutOfRange(32)
    );
}

#[test]
fn negative_rate_is_a_validation_error() {
    let err = daily_percent_due(dec!(5000), 10, dec!(-1), date(2025, 6, 10)).unwrap_err();
    assert_eq!(err, FeeError::NegativeRate(dec!(-1)));
}

#[test]
fn flat_surcharge_starts_exactly_on_the_cutoff_date() {
    let cutoff = date(2025, 6, 10);

    let before = flat_cutoff_due(dec!(7000), date(2025, 6, 9), cutoff, dec!(2000)).unwrap();
    assert_eq!(before.surcharge, dec!(0));
    assert_eq!(before.total, dec!(7000));

    let on_cutoff = flat_cutoff_due(dec!(7000), date(2025, 6, 10), cutoff, dec!(2000)).unwrap();
    assert_eq!(on_cutoff.surcharge, dec!(2000));
    assert_eq!(on_cutoff.total, dec!(9000));

    let after = flat_cutoff_due(dec!(7000), date(2025, 6, 20), cutoff, dec!(2000)).unwrap();
    assert_eq!(after.total, dec!(9000));
}

#[test]
fn flat_surcharge_is_applied_once_regardless_of_subtotal_size() {
    // Multi-course subtotal still gets exactly one flat surcharge.
    let invoice =
        flat_cutoff_due(dec!(12500), date(2025, 6, 15), date(2025, 6, 10), dec!(2000)).unwrap();
    assert_eq!(invoice.surcharge, dec!(2000));
    assert_eq!(invoice.total, dec!(14500));
}

#[test]
fn negative_subtotal_is_a_validation_error() {
    let err =
        flat_cutoff_due(dec!(-1), date(2025, 6, 10), date(2025, 6, 10), dec!(2000)).unwrap_err();
    assert_eq!(err, FeeError::NegativeAmount(dec!(-1)));
}

#[test]
fn negative_flat_surcharge_is_a_validation_error() {
    let err =
        flat_cutoff_due(dec!(7000), date(2025, 6, 10), date(2025, 6, 10), dec!(-2)).unwrap_err();
    assert_eq!(err, FeeError::NegativeSurcharge(dec!(-2)));
}

#[test]
fn calculators_are_idempotent() {
    let reference = date(2025, 6, 15);
    let first = daily_percent_due(dec!(5000), 10, dec!(1.0), reference).unwrap();
    let second = daily_percent_due(dec!(5000), 10, dec!(1.0), reference).unwrap();
    assert_eq!(first, second);

    let cutoff = date(2025, 6, 10);
    let first = flat_cutoff_due(dec!(7000), reference, cutoff, dec!(2000)).unwrap();
    let second = flat_cutoff_due(dec!(7000), reference, cutoff, dec!(2000)).unwrap();
    assert_eq!(first, second);
}
