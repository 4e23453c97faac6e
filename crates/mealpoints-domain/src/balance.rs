//! Current-balance snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::transaction::SpendType;

/// Remaining capacity for a user at a point in time.
///
/// This is an independent input, not something derived from the ledger:
/// reports combine the two without reconciling one against the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    pub swipes_remaining: u32,
    pub dining_points: f64,
    pub convenience_points: f64,
    pub updated_at: DateTime<Utc>,
}

impl BalanceSnapshot {
    /// Remaining points for a category, `None` for swipe-denominated ones.
    pub fn points_remaining(&self, spend_type: SpendType) -> Option<f64> {
        match spend_type {
            SpendType::Dining => Some(self.dining_points),
            SpendType::Convenience => Some(self.convenience_points),
            SpendType::Swipe => None,
        }
    }
}
