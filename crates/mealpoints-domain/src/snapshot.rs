//! The input bundle a reporting call is made over.

use serde::{Deserialize, Serialize};

use crate::{balance::BalanceSnapshot, budget::BudgetLimit, transaction::LedgerEntry};

/// Everything the reporting engine consumes for one user: the balance
/// snapshot, the ledger slice, and any budget-limit records.
///
/// The three parts are fetched independently by the data-access collaborator
/// and must already be internally consistent (same user, overlapping window)
/// when a report is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub balances: BalanceSnapshot,
    #[serde(default)]
    pub entries: Vec<LedgerEntry>,
    #[serde(default)]
    pub budgets: Vec<BudgetLimit>,
}
