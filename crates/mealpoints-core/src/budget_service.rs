//! Budget-limit lookup.

use mealpoints_domain::{BudgetLimit, Period, SpendType};

pub struct BudgetService;

impl BudgetService {
    /// First limit matching the category/period pair, in candidate order.
    ///
    /// Date-range filtering belongs to the caller and is not re-checked
    /// here. Ambiguous candidate sets are a data-quality issue upstream;
    /// this lookup stays first-match and applies no tie-break heuristics.
    /// No match is a normal result, not an error.
    pub fn resolve(
        candidates: &[BudgetLimit],
        spend_type: SpendType,
        period: Period,
    ) -> Option<&BudgetLimit> {
        candidates
            .iter()
            .find(|limit| limit.spend_type == spend_type && limit.period == period)
    }
}
