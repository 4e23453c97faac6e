//! Folds ledger entries onto a date axis.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use chrono::{FixedOffset, NaiveDate};

use mealpoints_domain::{CategoryTotal, DatePoint, DaySpend, LedgerEntry, SpendType};

use crate::classify::NoteClassifier;

pub struct AggregationService;

impl AggregationService {
    /// Positive spend magnitude for a signed ledger amount.
    ///
    /// A non-finite amount counts as zero instead of dropping the entry, so
    /// a bad row neither removes a day from the axis nor poisons a sum.
    pub fn spend_magnitude(amount: f64) -> f64 {
        if amount.is_finite() {
            amount.abs()
        } else {
            0.0
        }
    }

    /// Calendar day of an entry in the supplied local offset.
    pub fn local_day(entry: &LedgerEntry, tz: FixedOffset) -> NaiveDate {
        entry.occurred_at.with_timezone(&tz).date_naive()
    }

    /// One [`DatePoint`] per axis day with dining/convenience spend sums.
    ///
    /// Swipe entries use a different unit and are skipped. Entries whose
    /// calendar day falls outside the axis are dropped without complaint;
    /// callers are expected to pre-filter, but a stray row must not create
    /// out-of-axis points. Per-day sums are a plain commutative reduction,
    /// so input order never changes the result.
    pub fn spend_by_day(
        axis: &[NaiveDate],
        entries: &[LedgerEntry],
        tz: FixedOffset,
    ) -> Vec<DatePoint> {
        let mut by_day: BTreeMap<NaiveDate, DatePoint> =
            axis.iter().map(|&date| (date, DatePoint::new(date))).collect();
        for entry in entries {
            if entry.spend_type == SpendType::Swipe {
                continue;
            }
            if let Some(point) = by_day.get_mut(&Self::local_day(entry, tz)) {
                point.record(entry.spend_type, Self::spend_magnitude(entry.amount));
            }
        }
        by_day.into_values().collect()
    }

    /// Per-day spend for a single category over the axis.
    pub fn daily_spend(
        axis: &[NaiveDate],
        entries: &[LedgerEntry],
        tz: FixedOffset,
        spend_type: SpendType,
    ) -> Vec<DaySpend> {
        let mut by_day: BTreeMap<NaiveDate, f64> =
            axis.iter().map(|&date| (date, 0.0)).collect();
        for entry in entries {
            if entry.spend_type != spend_type {
                continue;
            }
            if let Some(total) = by_day.get_mut(&Self::local_day(entry, tz)) {
                *total += Self::spend_magnitude(entry.amount);
            }
        }
        by_day
            .into_iter()
            .map(|(date, spent)| DaySpend { date, spent })
            .collect()
    }

    /// Convenience spend grouped by classified note category, largest first.
    ///
    /// Callers pre-filter `entries` to the reporting window; this fold only
    /// selects by category. Ties on the total order by name so identical
    /// inputs always yield identical output.
    pub fn totals_by_category(
        entries: &[LedgerEntry],
        classifier: &dyn NoteClassifier,
    ) -> Vec<CategoryTotal> {
        let mut totals: HashMap<String, f64> = HashMap::new();
        for entry in entries {
            if entry.spend_type != SpendType::Convenience {
                continue;
            }
            let label = classifier.classify(entry.note.as_deref());
            *totals.entry(label).or_insert(0.0) += Self::spend_magnitude(entry.amount);
        }
        let mut rows: Vec<CategoryTotal> = totals
            .into_iter()
            .map(|(name, spent)| CategoryTotal { name, spent })
            .collect();
        rows.sort_by(|a, b| {
            b.spent
                .partial_cmp(&a.spent)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });
        rows
    }
}
