//! Derived report structures: time-bucketed totals and chart-ready series.
//!
//! Everything here is recomputed from the raw inputs on every call; nothing
//! persists or mutates between report invocations.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{budget::BudgetLimit, transaction::SpendType};

/// One calendar day on a report axis with its per-category spend totals.
///
/// The set of `DatePoint` dates in a report is exactly the requested axis:
/// contiguous, no gaps, no duplicates, whether or not a day saw activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatePoint {
    pub date: NaiveDate,
    pub dining: f64,
    pub convenience: f64,
}

impl DatePoint {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            dining: 0.0,
            convenience: 0.0,
        }
    }

    /// Adds a spend magnitude to the matching category bucket. Swipe
    /// entries carry a different unit and land nowhere.
    pub fn record(&mut self, spend_type: SpendType, magnitude: f64) {
        match spend_type {
            SpendType::Dining => self.dining += magnitude,
            SpendType::Convenience => self.convenience += magnitude,
            SpendType::Swipe => {}
        }
    }

    pub fn spend_for(&self, spend_type: SpendType) -> f64 {
        match spend_type {
            SpendType::Dining => self.dining,
            SpendType::Convenience => self.convenience,
            SpendType::Swipe => 0.0,
        }
    }
}

/// Single-category spend for one day (weekly breakdown rows).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DaySpend {
    pub date: NaiveDate,
    pub spent: f64,
}

/// Window totals per tracked points category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct SpendTotals {
    pub dining: f64,
    pub convenience: f64,
}

/// Aggregated spend magnitude for one classified category label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub name: String,
    pub spent: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Role of a slice in a remaining-vs-spent ring.
#[serde(rename_all = "lowercase")]
pub enum SliceLabel {
    Remaining,
    Spent,
    /// Stand-in slice emitted when both values are zero so an empty ring
    /// still renders. A proportion series is never empty.
    Placeholder,
}

impl fmt::Display for SliceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SliceLabel::Remaining => "remaining",
            SliceLabel::Spent => "spent",
            SliceLabel::Placeholder => "placeholder",
        };
        f.write_str(label)
    }
}

/// One slice of a proportion series. Order within the series is part of the
/// contract: remaining always precedes spent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSlice {
    #[serde(rename = "name")]
    pub label: SliceLabel,
    pub value: f64,
}

/// Daily spend trend over a trailing window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendReport {
    /// One point per axis day, oldest first.
    pub points: Vec<DatePoint>,
    /// Window totals per category.
    pub totals: SpendTotals,
    /// Remaining balances passed through from the snapshot.
    pub remaining: SpendTotals,
    /// Presentation marker for the current day, fixed once per render in
    /// the caller's local time zone. Does not affect any total.
    pub today: NaiveDate,
}

/// Monday..Sunday budget view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetReport {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    /// Dining spend per weekday, Monday first.
    pub daily_breakdown: Vec<DaySpend>,
    pub weekly_total: f64,
    pub swipes_remaining: u32,
    /// Convenience spend grouped by classified note category, largest first.
    pub category_totals: Vec<CategoryTotal>,
    pub convenience_remaining: f64,
    pub convenience_spent: f64,
    /// Remaining-vs-spent ring for convenience points.
    pub proportion: Vec<ChartSlice>,
    /// Weekly limits, when the candidate set held one. Absence is a normal
    /// state: limit-dependent lines are simply omitted downstream.
    pub dining_budget: Option<BudgetLimit>,
    pub convenience_budget: Option<BudgetLimit>,
}
