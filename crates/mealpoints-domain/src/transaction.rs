//! Domain models for ledger entries.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Closed set of spend categories tracked by the ledger.
#[serde(rename_all = "lowercase")]
pub enum SpendType {
    Dining,
    Convenience,
    Swipe,
}

impl SpendType {
    /// Whether the category is measured in points rather than swipe counts.
    pub fn is_points(self) -> bool {
        matches!(self, SpendType::Dining | SpendType::Convenience)
    }
}

impl fmt::Display for SpendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SpendType::Dining => "Dining",
            SpendType::Convenience => "Convenience",
            SpendType::Swipe => "Swipe",
        };
        f.write_str(label)
    }
}

/// A single row of the append-only transaction ledger.
///
/// Amounts are signed: negative denotes spend, positive denotes a credit or
/// top-up. Reports only ever use the magnitude; the sign convention belongs
/// to the ledger and is never second-guessed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: Uuid,
    pub occurred_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub spend_type: SpendType,
    /// A row with no amount deserializes to zero rather than failing.
    #[serde(default)]
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Provenance tag. Carried through, unused by aggregation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl LedgerEntry {
    pub fn new(occurred_at: DateTime<Utc>, spend_type: SpendType, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            occurred_at,
            spend_type,
            amount,
            note: None,
            source: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}
