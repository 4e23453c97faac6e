use chrono::{Duration, FixedOffset, NaiveDate, TimeZone, Utc};

use mealpoints_domain::{BudgetLimit, LedgerEntry, Period, SliceLabel, SpendType};

use crate::{
    AggregationService, AxisService, BudgetService, ChartService, CoreError, NoteClassifier,
    PrefixClassifier, Window,
};

fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

fn entry_on(date: NaiveDate, spend_type: SpendType, amount: f64) -> LedgerEntry {
    let occurred = Utc.from_utc_datetime(&date.and_hms_opt(12, 0, 0).unwrap());
    LedgerEntry::new(occurred, spend_type, amount)
}

#[test]
fn trailing_axis_counts_back_from_the_reference_day() {
    let end = sample_date(2025, 3, 10);
    let axis = AxisService::build(&Window::TrailingDays { days: 3, end }).expect("valid window");

    assert_eq!(axis.len(), 3);
    assert_eq!(axis[0], sample_date(2025, 3, 8));
    assert_eq!(axis[2], end);
    for pair in axis.windows(2) {
        assert_eq!(pair[1] - pair[0], Duration::days(1));
    }
}

#[test]
fn trailing_axis_spans_month_boundaries() {
    let end = sample_date(2025, 3, 2);
    let axis = AxisService::build(&Window::TrailingDays { days: 5, end }).expect("valid window");

    assert_eq!(axis[0], sample_date(2025, 2, 26));
    assert_eq!(axis[4], end);
}

#[test]
fn trailing_axis_rejects_an_empty_window() {
    let end = sample_date(2025, 3, 10);
    let result = AxisService::build(&Window::TrailingDays { days: 0, end });

    assert!(matches!(result, Err(CoreError::InvalidWindow(_))));
}

#[test]
fn trailing_axis_rejects_windows_beyond_the_calendar() {
    let end = sample_date(2025, 3, 10);
    let result = AxisService::build(&Window::TrailingDays {
        days: u32::MAX,
        end,
    });

    assert!(matches!(result, Err(CoreError::InvalidWindow(_))));
}

#[test]
fn week_axis_is_monday_through_sunday_for_every_weekday() {
    let monday = sample_date(2025, 3, 10);
    let sunday = sample_date(2025, 3, 16);

    for offset in 0..7 {
        let reference = monday + Duration::days(offset);
        let axis = AxisService::build(&Window::WeekContaining(reference)).expect("valid window");
        assert_eq!(axis.len(), 7);
        assert_eq!(axis[0], monday, "week containing {reference}");
        assert_eq!(axis[6], sunday, "week containing {reference}");
    }
}

#[test]
fn week_bounds_map_sunday_six_days_back() {
    let sunday = sample_date(2025, 3, 16);
    let (start, end) = AxisService::week_bounds(sunday);

    assert_eq!(start, sample_date(2025, 3, 10));
    assert_eq!(end, sunday);
}

#[test]
fn classifier_takes_the_colon_prefix() {
    let classifier = PrefixClassifier;
    assert_eq!(classifier.classify(Some("Laundry: dorm")), "Laundry");
    assert_eq!(classifier.classify(Some("Grocery: milk and eggs")), "Grocery");
    assert_eq!(classifier.classify(Some("A: ")), "A");
}

#[test]
fn classifier_falls_back_to_the_first_token() {
    let classifier = PrefixClassifier;
    assert_eq!(classifier.classify(Some("Snack run")), "Snack");
    assert_eq!(classifier.classify(Some("Coffee")), "Coffee");
}

#[test]
fn classifier_defaults_to_other() {
    let classifier = PrefixClassifier;
    assert_eq!(classifier.classify(None), "Other");
    assert_eq!(classifier.classify(Some("")), "Other");
    assert_eq!(classifier.classify(Some("   ")), "Other");
}

#[test]
fn classifier_keeps_leading_colon_fallthrough() {
    // A colon at index 0 skips the prefix branch; the first token wins.
    let classifier = PrefixClassifier;
    assert_eq!(classifier.classify(Some(": abc")), ":");
}

#[test]
fn classifier_is_total_and_never_empty() {
    let classifier = PrefixClassifier;
    let inputs = [
        None,
        Some(""),
        Some(" "),
        Some(":"),
        Some("::"),
        Some(" : abc"),
        Some("Caf\u{e9}: espresso"),
        Some("one two three"),
        Some("\t\n"),
    ];
    for input in inputs {
        let label = classifier.classify(input);
        assert!(!label.is_empty(), "input {input:?} produced an empty label");
    }
}

#[test]
fn spend_magnitude_absorbs_malformed_amounts() {
    assert_eq!(AggregationService::spend_magnitude(-12.5), 12.5);
    assert_eq!(AggregationService::spend_magnitude(3.0), 3.0);
    assert_eq!(AggregationService::spend_magnitude(f64::NAN), 0.0);
    assert_eq!(AggregationService::spend_magnitude(f64::INFINITY), 0.0);
    assert_eq!(AggregationService::spend_magnitude(f64::NEG_INFINITY), 0.0);
}

#[test]
fn spend_by_day_skips_swipes_and_out_of_axis_entries() {
    let axis = AxisService::build(&Window::TrailingDays {
        days: 2,
        end: sample_date(2025, 3, 10),
    })
    .expect("valid window");

    let entries = vec![
        entry_on(sample_date(2025, 3, 10), SpendType::Dining, -4.0),
        entry_on(sample_date(2025, 3, 10), SpendType::Swipe, -1.0),
        entry_on(sample_date(2025, 3, 1), SpendType::Dining, -99.0),
    ];

    let points = AggregationService::spend_by_day(&axis, &entries, utc());
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].dining, 0.0);
    assert_eq!(points[1].dining, 4.0);
    assert_eq!(points[1].convenience, 0.0);
}

#[test]
fn spend_by_day_buckets_by_local_calendar_day() {
    // 23:30 UTC is already the next day two hours east.
    let axis = AxisService::build(&Window::TrailingDays {
        days: 2,
        end: sample_date(2025, 3, 11),
    })
    .expect("valid window");

    let occurred = Utc.with_ymd_and_hms(2025, 3, 10, 23, 30, 0).unwrap();
    let entries = vec![LedgerEntry::new(occurred, SpendType::Dining, -5.0)];

    let east = FixedOffset::east_opt(2 * 3600).unwrap();
    let points = AggregationService::spend_by_day(&axis, &entries, east);
    assert_eq!(points[0].date, sample_date(2025, 3, 10));
    assert_eq!(points[0].dining, 0.0);
    assert_eq!(points[1].date, sample_date(2025, 3, 11));
    assert_eq!(points[1].dining, 5.0);
}

#[test]
fn category_totals_sort_largest_first_with_name_tiebreak() {
    let day = sample_date(2025, 3, 11);
    let entries = vec![
        entry_on(day, SpendType::Convenience, -2.0).with_note("Laundry: dorm"),
        entry_on(day, SpendType::Convenience, -6.0).with_note("Grocery: milk"),
        entry_on(day, SpendType::Convenience, -2.0).with_note("Shopping spree"),
        entry_on(day, SpendType::Dining, -50.0).with_note("ignored"),
    ];

    let totals = AggregationService::totals_by_category(&entries, &PrefixClassifier);
    let names: Vec<&str> = totals.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["Grocery", "Laundry", "Shopping"]);
    assert_eq!(totals[0].spent, 6.0);
}

#[test]
fn budget_resolution_returns_the_first_match_in_input_order() {
    let week_start = sample_date(2025, 3, 10);
    let week_end = sample_date(2025, 3, 16);
    let limits = vec![
        BudgetLimit::new(SpendType::Dining, Period::Weekly, week_start, week_end, 120.0),
        BudgetLimit::new(SpendType::Convenience, Period::Weekly, week_start, week_end, 40.0),
    ];

    let matched = BudgetService::resolve(&limits, SpendType::Dining, Period::Weekly)
        .expect("dining weekly limit");
    assert_eq!(matched.id, limits[0].id);

    assert!(BudgetService::resolve(&limits, SpendType::Dining, Period::Monthly).is_none());
}

#[test]
fn proportion_with_no_activity_is_a_single_placeholder() {
    let slices = ChartService::proportion(0.0, 0.0);
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].label, SliceLabel::Placeholder);
    assert_eq!(slices[0].value, 1.0);
}

#[test]
fn proportion_orders_remaining_before_spent() {
    let slices = ChartService::proportion(80.5, 19.5);
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].label, SliceLabel::Remaining);
    assert_eq!(slices[1].label, SliceLabel::Spent);
    assert_eq!(slices[0].value + slices[1].value, 100.0);
}

#[test]
fn proportion_clamps_negative_inputs_to_zero() {
    let slices = ChartService::proportion(-5.0, 10.0);
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].value, 0.0);
    assert_eq!(slices[1].value, 10.0);
}
