use chrono::NaiveDate;
use fintrack_core::billing::{effective_closing_date, CycleConfig, InvoiceMonth};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn label(year: i32, month: u32) -> InvoiceMonth {
    InvoiceMonth::new(year, month).unwrap()
}

#[test]
fn closing_day_clamps_to_short_months() {
    assert_eq!(effective_closing_date(2025, 2, 31), date(2025, 2, 28));
    assert_eq!(effective_closing_date(2024, 2, 31), date(2024, 2, 29));
    assert_eq!(effective_closing_date(2025, 4, 31), date(2025, 4, 30));
}

#[test]
fn saturday_and_sunday_closings_resolve_to_the_same_monday() {
    // 2025-03-01 is a Saturday and 2025-03-02 a Sunday.
    assert_eq!(effective_closing_date(2025, 3, 1), date(2025, 3, 3));
    assert_eq!(effective_closing_date(2025, 3, 2), date(2025, 3, 3));
}

#[test]
fn purchase_before_closing_lands_on_the_same_month_invoice() {
    // Closing on the 10th, due on the 17th: due day after closing day, so
    // the due month equals the closing month.
    let cycle = CycleConfig::new(10, 17).unwrap();
    assert_eq!(
        cycle.suggest_invoice_month(date(2025, 10, 5)),
        label(2025, 10)
    );
}

#[test]
fn earlier_due_day_pushes_the_due_month_forward() {
    // Closing on the 31st, due on the 7th: October's close covers the
    // purchase, payment is due in November.
    let cycle = CycleConfig::new(31, 7).unwrap();
    assert_eq!(
        cycle.suggest_invoice_month(date(2025, 10, 15)),
        label(2025, 11)
    );
}

#[test]
fn current_bill_just_after_a_month_end_close() {
    // The day after October's 31st close opens November's period.
    let cycle = CycleConfig::new(31, 7).unwrap();
    let bill = cycle.current_bill(date(2025, 11, 1));
    assert_eq!(bill.period.first_day(), date(2025, 11, 1));
    assert_eq!(bill.period.last_day(), date(2025, 11, 30));
    assert_eq!(bill.due_month, label(2025, 12));
}

#[test]
fn current_bill_flips_the_day_after_the_nominal_close() {
    let cycle = CycleConfig::new(10, 17).unwrap();

    let on_closing = cycle.current_bill(date(2025, 10, 10));
    assert_eq!(on_closing.period.first_day(), date(2025, 9, 11));
    assert_eq!(on_closing.period.last_day(), date(2025, 10, 10));
    assert_eq!(on_closing.due_month, label(2025, 10));

    let after_closing = cycle.current_bill(date(2025, 10, 11));
    assert_eq!(after_closing.period.first_day(), date(2025, 10, 11));
    assert_eq!(after_closing.period.last_day(), date(2025, 11, 10));
    assert_eq!(after_closing.due_month, label(2025, 11));
}

#[test]
fn period_for_a_due_month_inverts_the_derivation() {
    // Due day below the closing day: November's invoice closed in October.
    let trailing = CycleConfig::new(31, 7).unwrap();
    let period = trailing.period_for(label(2025, 11));
    assert_eq!(period.first_day(), date(2025, 10, 1));
    assert_eq!(period.last_day(), date(2025, 10, 31));

    // Due day above the closing day: the invoice closes in its due month.
    let same = CycleConfig::new(5, 15).unwrap();
    let period = same.period_for(label(2025, 11));
    assert_eq!(period.first_day(), date(2025, 10, 6));
    assert_eq!(period.last_day(), date(2025, 11, 5));
}

#[test]
fn period_for_january_reaches_back_into_the_previous_year() {
    let cycle = CycleConfig::new(20, 5).unwrap();
    let period = cycle.period_for(label(2026, 1));
    assert_eq!(period.first_day(), date(2025, 11, 21));
    assert_eq!(period.last_day(), date(2025, 12, 20));
}

#[test]
fn february_period_absorbs_the_clamped_boundary() {
    // A closing day of 30 clamps to Feb 28, so February's window starts on
    // Jan 31 and the next one on Mar 1.
    let cycle = CycleConfig::new(30, 30).unwrap();
    let february = cycle.period_for(label(2025, 2));
    assert_eq!(february.first_day(), date(2025, 1, 31));
    assert_eq!(february.last_day(), date(2025, 2, 28));

    let march = cycle.period_for(label(2025, 3));
    assert_eq!(march.first_day(), date(2025, 3, 1));
    assert_eq!(march.last_day(), date(2025, 3, 30));
}

#[test]
fn current_bill_period_contains_its_reference_date() {
    let cycle = CycleConfig::new(25, 4).unwrap();
    for day in [1, 5, 24, 25, 26, 28] {
        let reference = date(2025, 9, day);
        let bill = cycle.current_bill(reference);
        assert!(
            bill.period.contains(reference),
            "reference {reference} outside period {:?}",
            bill.period
        );
    }
}
