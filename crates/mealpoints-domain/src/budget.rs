//! Budget-limit records.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::transaction::SpendType;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Cadence a limit applies to.
#[serde(rename_all = "lowercase")]
pub enum Period {
    Weekly,
    Monthly,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Period::Weekly => "Weekly",
            Period::Monthly => "Monthly",
        };
        f.write_str(label)
    }
}

/// A spending guardrail for one category over one period.
///
/// Several limits may coexist; reports select deterministically from the
/// candidate set they are handed and never re-check the date bounds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetLimit {
    pub id: Uuid,
    pub spend_type: SpendType,
    pub period: Period,
    /// Calendar-day bounds, both inclusive.
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_limit: f64,
    pub created_at: DateTime<Utc>,
}

impl BudgetLimit {
    pub fn new(
        spend_type: SpendType,
        period: Period,
        start_date: NaiveDate,
        end_date: NaiveDate,
        total_limit: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            spend_type,
            period,
            start_date,
            end_date,
            total_limit,
            created_at: Utc::now(),
        }
    }

    /// Whether the limit's date range overlaps `[start, end]`.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && self.end_date >= start
    }
}
